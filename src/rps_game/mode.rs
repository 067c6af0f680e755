use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of game requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum GameType {
    PlayerVsPlayer,
    PlayerVsAi,
    PlayerVsAdvancedAi,
}

impl GameType {
    pub fn mode(self) -> GameMode {
        match self {
            GameType::PlayerVsPlayer => GameMode::PvP,
            GameType::PlayerVsAi | GameType::PlayerVsAdvancedAi => GameMode::Ai,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameType::PlayerVsPlayer => "player_vs_player",
            GameType::PlayerVsAi => "player_vs_ai",
            GameType::PlayerVsAdvancedAi => "player_vs_advanced_ai",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout shown on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PvP,
    Ai,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PvP => f.write_str("player vs player"),
            GameMode::Ai => f.write_str("player vs AI"),
        }
    }
}
