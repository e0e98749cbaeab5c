#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use player::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod player;
mod types;

/// Names of the two players taking part in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player1: String,
    pub player2: String,
}

impl GameConfig {
    pub const DEFAULT_PLAYER1: &'static str = "Player 1";
    pub const DEFAULT_PLAYER2: &'static str = "Player 2";

    pub const fn new_unchecked(player1: String, player2: String) -> Self {
        Self { player1, player2 }
    }

    /// Blank names fall back to the default label for that seat.
    pub fn new(player1: &str, player2: &str) -> Self {
        Self::new_unchecked(
            name_or_default(player1, Self::DEFAULT_PLAYER1),
            name_or_default(player2, Self::DEFAULT_PLAYER2),
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn name_or_default(name: &str, default: &str) -> String {
    match name.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_fall_back_to_defaults() {
        let config = GameConfig::new("  ", "");

        assert_eq!(config.player1, "Player 1");
        assert_eq!(config.player2, "Player 2");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn names_are_trimmed() {
        let config = GameConfig::new(" Ada ", "Grace");

        assert_eq!(config.player1, "Ada");
        assert_eq!(config.player2, "Grace");
    }
}
