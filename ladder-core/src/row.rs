//! Row — one horizontal slice of the ladder.

use serde::Serialize;

use crate::error::{LadderError, Result};
use crate::rung::Rung;

/// Ordered rung layout for a single row.
///
/// Invariants (checked in [`Row::new`]):
/// - at least one rung, so width ≥ 1
/// - no two consecutive rungs are both [`Rung::Existing`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    rungs: Vec<Rung>,
}

impl Row {
    pub fn new(rungs: Vec<Rung>) -> Result<Self> {
        if rungs.is_empty() {
            return Err(LadderError::invalid("at least one horizontal line required"));
        }
        if rungs.windows(2).any(|pair| pair[0].is_exist() && pair[1].is_exist()) {
            return Err(LadderError::invalid("horizontal lines must not be contiguous"));
        }
        Ok(Self { rungs })
    }

    /// Whether the rung at `position` (in `[0, width)`) exists.
    pub fn is_exist(&self, position: i64) -> Result<bool> {
        let index = self.rung_index(position)?;
        Ok(self.rungs[index].is_exist())
    }

    pub fn width(&self) -> usize {
        self.rungs.len()
    }

    pub fn rungs(&self) -> &[Rung] {
        &self.rungs
    }

    /// Position of a player after crossing this row.
    ///
    /// `player_position` names a vertical line in `[0, width]`. A rung on the
    /// right moves the player one line right, a rung on the left moves them
    /// one line left, otherwise they stay put.
    pub fn find_next_position(&self, player_position: i64) -> Result<i64> {
        let width = self.width() as i64;
        if player_position < 0 || player_position > width {
            return Err(LadderError::invalid("player position is outside the ladder"));
        }
        let line = player_position as usize;

        if line < self.width() && self.rungs[line].is_exist() {
            return Ok(player_position + 1);
        }
        if line > 0 && self.rungs[line - 1].is_exist() {
            return Ok(player_position - 1);
        }
        Ok(player_position)
    }

    fn rung_index(&self, position: i64) -> Result<usize> {
        if position < 0 || position >= self.width() as i64 {
            return Err(LadderError::out_of_range(position, self.width()));
        }
        Ok(position as usize)
    }
}
