//! Ladder — the full grid of rows and the traversal over it.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{LadderError, Result};
use crate::generator::{RowGenerator, ROW_WIDTH_MISMATCH};
use crate::height::Height;
use crate::row::Row;

/// Immutable height × width grid of rows.
///
/// Every row has the same width, and there is at least one row. Lines are
/// numbered `0..=width`, so a ladder serves `width + 1` players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ladder {
    rows: Vec<Row>,
}

impl Ladder {
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(LadderError::invalid("at least one row required"));
        };
        let width = first.width();
        if rows.iter().any(|row| row.width() != width) {
            return Err(LadderError::invalid("all rows must share the same width"));
        }
        Ok(Self { rows })
    }

    /// Build `height` rows for `count_of_players`, generating them top to bottom.
    ///
    /// Every generated row must be `count_of_players - 1` wide, whatever the
    /// generator.
    pub fn of<G>(height: Height, count_of_players: usize, generator: &mut G) -> Result<Self>
    where
        G: RowGenerator + ?Sized,
    {
        let rows = (0..height.value())
            .map(|_| {
                let row = generator.generate(count_of_players)?;
                if row.width() + 1 != count_of_players {
                    return Err(LadderError::invalid(ROW_WIDTH_MISMATCH));
                }
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            height = height.value(),
            count_of_players, "generated ladder"
        );
        Self::new(rows)
    }

    /// Final line reached from `player_position` after every row, top first.
    pub fn find_result_position(&self, player_position: i64) -> Result<i64> {
        self.rows
            .iter()
            .enumerate()
            .try_fold(player_position, |position, (depth, row)| {
                let next = row.find_next_position(position)?;
                trace!(depth, from = position, to = next, "crossed row");
                Ok(next)
            })
    }

    /// Whether a rung exists at row `height`, column `width`.
    pub fn is_exist(&self, height: i64, width: i64) -> Result<bool> {
        if height < 0 || height >= self.height() as i64 {
            return Err(LadderError::out_of_range(height, self.height()));
        }
        self.rows[height as usize].is_exist(width)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].width()
    }

    pub fn count_of_players(&self) -> usize {
        self.width() + 1
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}
