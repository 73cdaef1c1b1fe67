//! Rung — the horizontal connector state at one column of one row.

use serde::Serialize;

/// Whether a horizontal connector is present between two adjacent lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rung {
    Existing,
    NonExisting,
}

impl Rung {
    pub fn is_exist(self) -> bool {
        matches!(self, Rung::Existing)
    }

    /// Map a boolean draw to a rung: `true` places a connector.
    pub fn from_draw(draw: bool) -> Self {
        if draw {
            Rung::Existing
        } else {
            Rung::NonExisting
        }
    }
}
