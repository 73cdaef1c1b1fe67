//! Ladder Core — rung model, row generation, and ladder traversal.
//!
//! This crate contains the heart of the ladder game:
//! - Rung and row model with the no-adjacent-rung invariant
//! - Greedy row generator fed by a pluggable boolean source
//! - Ladder aggregate with in-order traversal from a top line to a bottom line
//! - Seeded and fixed boolean sources for reproducible ladders

pub mod error;
pub mod generator;
pub mod height;
pub mod ladder;
pub mod rng;
pub mod row;
pub mod rung;

pub use error::{LadderError, Result};
pub use generator::{BooleanSource, FixedRowGenerator, RowGenerator, RungPatternGenerator};
pub use height::Height;
pub use ladder::Ladder;
pub use rng::{CyclicBooleanSource, RandomBooleanSource};
pub use row::Row;
pub use rung::Rung;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the finished ladder can cross thread boundaries.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Rung>();
        require_sync::<Rung>();
        require_send::<Row>();
        require_sync::<Row>();
        require_send::<Ladder>();
        require_sync::<Ladder>();
        require_send::<Height>();
        require_sync::<Height>();
        require_send::<LadderError>();
        require_sync::<LadderError>();
        require_send::<RandomBooleanSource>();
    }

    /// Architecture contract: generators only see a player count.
    ///
    /// A row never depends on earlier rows, so the trait takes no ladder state.
    #[test]
    fn row_generator_trait_takes_only_player_count() {
        fn _check_trait_object_builds(generator: &mut dyn RowGenerator) -> Result<Row> {
            generator.generate(2)
        }
    }
}
