//! Outcome of a played game: which product each player reached.

use ladder_core::{LadderError, Result};
use serde::Serialize;

use crate::player::Player;
use crate::product::Product;

/// One player paired with the product under their final line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub player: Player,
    pub product: Product,
}

/// Player → product mapping, kept in the players' starting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LadderGameResult {
    entries: Vec<ResultEntry>,
}

impl LadderGameResult {
    pub(crate) fn new(entries: Vec<ResultEntry>) -> Self {
        Self { entries }
    }

    /// Product reached by the named player.
    pub fn result_of(&self, name: &str) -> Result<&Product> {
        self.entries
            .iter()
            .find(|entry| entry.player.name() == name)
            .map(|entry| &entry.product)
            .ok_or_else(|| LadderError::invalid(format!("no such player: {name}")))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Player, &Product)> {
        self.entries.iter().map(|entry| (&entry.player, &entry.product))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
