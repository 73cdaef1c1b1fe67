//! Players — the named participants standing at the top of the ladder.

use std::collections::HashSet;
use std::fmt;

use ladder_core::{LadderError, Result};
use serde::Serialize;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LENGTH: usize = 5;

/// Fewest players a game can hold.
pub const MIN_PLAYERS: usize = 2;

/// Query keyword that selects every player's result.
pub const ALL_KEYWORD: &str = "all";

/// A single participant, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Player(String);

impl Player {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LadderError::invalid("player name must not be blank"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(LadderError::invalid(format!(
                "player name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }
        if name == ALL_KEYWORD {
            return Err(LadderError::invalid(format!(
                "player name '{ALL_KEYWORD}' is reserved"
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered players; index `i` starts on ladder line `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    values: Vec<Player>,
}

impl Players {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let values = names
            .iter()
            .map(|name| Player::new(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(values)
    }

    pub fn new(values: Vec<Player>) -> Result<Self> {
        if values.len() < MIN_PLAYERS {
            return Err(LadderError::invalid(format!(
                "at least {MIN_PLAYERS} players required"
            )));
        }
        let unique: HashSet<&Player> = values.iter().collect();
        if unique.len() != values.len() {
            return Err(LadderError::invalid("player names must be unique"));
        }
        Ok(Self { values })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(Player::new("  pobi ").unwrap().name(), "pobi");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            Player::new("   ").unwrap_err(),
            LadderError::invalid("player name must not be blank")
        );
    }

    #[test]
    fn long_name_is_rejected() {
        assert_eq!(
            Player::new("abcdef").unwrap_err(),
            LadderError::invalid("player name must be at most 5 characters")
        );
        // Length is counted in characters, not bytes.
        assert!(Player::new("가나다라마").is_ok());
    }

    #[test]
    fn query_keyword_cannot_be_a_name() {
        assert_eq!(
            Player::new("all").unwrap_err(),
            LadderError::invalid("player name 'all' is reserved")
        );
    }

    #[test]
    fn single_player_is_rejected() {
        assert_eq!(
            Players::from_names(&["pobi"]).unwrap_err(),
            LadderError::invalid("at least 2 players required")
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        assert_eq!(
            Players::from_names(&["pobi", "crong", "pobi"]).unwrap_err(),
            LadderError::invalid("player names must be unique")
        );
    }

    #[test]
    fn players_keep_input_order() {
        let players = Players::from_names(&["pobi", "crong", "jk"]).unwrap();
        let names: Vec<&str> = players.iter().map(Player::name).collect();
        assert_eq!(names, vec!["pobi", "crong", "jk"]);
        assert_eq!(players.len(), 3);
    }
}
