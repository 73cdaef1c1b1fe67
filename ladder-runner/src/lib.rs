//! Ladder Runner — game assembly on top of `ladder-core`.
//!
//! This crate builds on `ladder-core` to provide:
//! - Player and product collections with name validation
//! - The ladder game, which checks counts and pairs players with products
//! - Ordered results with lookup by player name
//! - TOML game configuration with optional seeding

pub mod config;
pub mod game;
pub mod player;
pub mod product;
pub mod result;

pub use config::{ConfigError, GameConfig};
pub use game::LadderGame;
pub use player::{Player, Players, ALL_KEYWORD};
pub use product::{Product, Products};
pub use result::{LadderGameResult, ResultEntry};
