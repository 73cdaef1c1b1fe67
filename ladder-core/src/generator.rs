//! Row generation.
//!
//! A [`RowGenerator`] turns a player count into one [`Row`]. The production
//! implementation, [`RungPatternGenerator`], draws from a [`BooleanSource`]
//! left to right and never places a rung directly after another one.

use tracing::trace;

use crate::error::{LadderError, Result};
use crate::row::Row;
use crate::rung::Rung;

/// Smallest player count that still yields a row with one column.
pub const MIN_PLAYERS: usize = 2;

pub(crate) const ROW_WIDTH_MISMATCH: &str = "row width must be one less than the player count";

/// The only source of randomness the ladder consumes.
///
/// No contract on distribution or statefulness: callers may plug in a real
/// RNG or a fixed sequence.
pub trait BooleanSource {
    fn next_bool(&mut self) -> bool;
}

impl<F> BooleanSource for F
where
    F: FnMut() -> bool,
{
    fn next_bool(&mut self) -> bool {
        self()
    }
}

/// Produces one row for a given number of players.
pub trait RowGenerator {
    fn generate(&mut self, count_of_players: usize) -> Result<Row>;
}

/// Greedy left-to-right generator with one rung of lookback.
///
/// Each column whose left neighbour is empty costs exactly one draw; a
/// column right after a placed rung is forced empty without drawing. The
/// resulting rows are valid but not uniformly distributed over all valid
/// rows, and that shape is kept on purpose so seeded ladders stay stable.
#[derive(Debug, Clone)]
pub struct RungPatternGenerator<B> {
    source: B,
}

impl<B: BooleanSource> RungPatternGenerator<B> {
    pub fn new(source: B) -> Self {
        Self { source }
    }

    fn next_rung(&mut self, previous: Option<Rung>) -> Rung {
        match previous {
            Some(Rung::Existing) => Rung::NonExisting,
            _ => Rung::from_draw(self.source.next_bool()),
        }
    }
}

impl<B: BooleanSource> RowGenerator for RungPatternGenerator<B> {
    fn generate(&mut self, count_of_players: usize) -> Result<Row> {
        validate_player_count(count_of_players)?;
        let width = count_of_players - 1;

        let mut rungs: Vec<Rung> = Vec::with_capacity(width);
        while rungs.len() < width {
            let rung = self.next_rung(rungs.last().copied());
            rungs.push(rung);
        }
        trace!(width, ?rungs, "generated row");
        Row::new(rungs)
    }
}

/// Returns the same rung layout for every row.
///
/// Useful for fixtures where the ladder shape must be known up front. The
/// preset must be exactly `count_of_players - 1` rungs wide.
#[derive(Debug, Clone)]
pub struct FixedRowGenerator {
    rungs: Vec<Rung>,
}

impl FixedRowGenerator {
    pub fn new(rungs: Vec<Rung>) -> Self {
        Self { rungs }
    }
}

impl RowGenerator for FixedRowGenerator {
    fn generate(&mut self, count_of_players: usize) -> Result<Row> {
        validate_player_count(count_of_players)?;
        if self.rungs.len() != count_of_players - 1 {
            return Err(LadderError::invalid(ROW_WIDTH_MISMATCH));
        }
        Row::new(self.rungs.clone())
    }
}

fn validate_player_count(count_of_players: usize) -> Result<()> {
    if count_of_players < MIN_PLAYERS {
        return Err(LadderError::invalid("ladder size must be at least 2"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CyclicBooleanSource;
    use Rung::{Existing as E, NonExisting as N};

    #[test]
    fn generated_row_has_width_one_less_than_players() {
        let mut generator = RungPatternGenerator::new(CyclicBooleanSource::new(vec![false, true]));
        let row = generator.generate(4).unwrap();
        assert_eq!(row.width(), 3);
    }

    #[test]
    fn true_draw_places_rung_and_forces_gap_after_it() {
        let mut generator = RungPatternGenerator::new(|| true);
        let row = generator.generate(3).unwrap();
        assert_eq!(row.rungs(), &[E, N]);
    }

    #[test]
    fn false_draw_leaves_column_empty() {
        let mut generator = RungPatternGenerator::new(|| false);
        let row = generator.generate(2).unwrap();
        assert_eq!(row.rungs(), &[N]);
    }

    #[test]
    fn fewer_than_two_players_is_rejected() {
        let mut generator = RungPatternGenerator::new(|| false);
        for size in [0, 1] {
            assert_eq!(
                generator.generate(size).unwrap_err(),
                LadderError::invalid("ladder size must be at least 2")
            );
        }
    }

    #[test]
    fn forced_gap_does_not_consume_a_draw() {
        let mut draws = 0;
        let mut generator = RungPatternGenerator::new(|| {
            draws += 1;
            true
        });
        // E N E N E: three draws for five columns.
        let row = generator.generate(6).unwrap();
        assert_eq!(row.rungs(), &[E, N, E, N, E]);
        drop(generator);
        assert_eq!(draws, 3);
    }

    #[test]
    fn cyclic_draws_are_consumed_in_order() {
        let mut generator =
            RungPatternGenerator::new(CyclicBooleanSource::new(vec![false, true, false]));
        // false -> N, true -> E, forced N, false -> N
        let row = generator.generate(5).unwrap();
        assert_eq!(row.rungs(), &[N, E, N, N]);
    }

    #[test]
    fn fixed_generator_repeats_layout() {
        let mut generator = FixedRowGenerator::new(vec![E, N]);
        let first = generator.generate(3).unwrap();
        let second = generator.generate(3).unwrap();
        assert_eq!(first, second);
        assert!(generator.generate(1).is_err());
    }

    #[test]
    fn fixed_generator_rejects_layout_of_wrong_width() {
        let mut generator = FixedRowGenerator::new(vec![E, N]);
        for players in [2, 5] {
            assert_eq!(
                generator.generate(players).unwrap_err(),
                LadderError::invalid("row width must be one less than the player count")
            );
        }
    }
}
