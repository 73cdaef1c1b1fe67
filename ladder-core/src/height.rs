//! Height — how many rows a ladder has.

use crate::error::{LadderError, Result};

/// Number of rows in a ladder; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Height(usize);

impl Height {
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(LadderError::invalid("ladder height must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> usize {
        self.0
    }
}
