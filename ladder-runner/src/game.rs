//! Ladder game — wires a ladder to its players and products.
//!
//! Player `i` starts on line `i`; the product under the line they reach after
//! crossing every row is theirs.

use ladder_core::{Ladder, LadderError, Result};
use tracing::debug;

use crate::player::Players;
use crate::product::Products;
use crate::result::{LadderGameResult, ResultEntry};

/// A ladder with matching players on top and products at the bottom.
#[derive(Debug, Clone)]
pub struct LadderGame {
    ladder: Ladder,
    players: Players,
    products: Products,
}

impl LadderGame {
    pub fn new(ladder: Ladder, players: Players, products: Products) -> Result<Self> {
        if players.len() != ladder.count_of_players() {
            return Err(LadderError::invalid(
                "player count does not match ladder length",
            ));
        }
        if products.len() != ladder.count_of_players() {
            return Err(LadderError::invalid(
                "product count does not match ladder length",
            ));
        }
        Self::validate(&players, &products)?;
        Ok(Self {
            ladder,
            players,
            products,
        })
    }

    /// Players and products must pair up one to one.
    pub fn validate(players: &Players, products: &Products) -> Result<()> {
        if players.len() != products.len() {
            return Err(LadderError::invalid(
                "player count and product count must be equal",
            ));
        }
        Ok(())
    }

    /// Run every player down the ladder.
    pub fn progress(&self) -> Result<LadderGameResult> {
        let entries = self
            .players
            .iter()
            .enumerate()
            .map(|(start, player)| {
                let end = self.ladder.find_result_position(start as i64)?;
                let product = self.products.get(end)?;
                debug!(player = %player, start, end, product = %product, "player reached product");
                Ok(ResultEntry {
                    player: player.clone(),
                    product: product.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(LadderGameResult::new(entries))
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn products(&self) -> &Products {
        &self.products
    }
}
