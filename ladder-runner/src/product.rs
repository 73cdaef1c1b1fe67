//! Products — the outcomes waiting at the bottom of the ladder.

use std::fmt;

use ladder_core::{LadderError, Result};
use serde::Serialize;

/// Fewest products a game can hold.
pub const MIN_PRODUCTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Product(String);

impl Product {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LadderError::invalid("product name must not be blank"));
        }
        Ok(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered products; index `i` sits under ladder line `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Products {
    values: Vec<Product>,
}

impl Products {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let values = names
            .iter()
            .map(|name| Product::new(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(values)
    }

    pub fn new(values: Vec<Product>) -> Result<Self> {
        if values.len() < MIN_PRODUCTS {
            return Err(LadderError::invalid(format!(
                "at least {MIN_PRODUCTS} products required"
            )));
        }
        Ok(Self { values })
    }

    pub fn get(&self, index: i64) -> Result<&Product> {
        if index < 0 || index >= self.len() as i64 {
            return Err(LadderError::out_of_range(index, self.len()));
        }
        Ok(&self.values[index as usize])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
