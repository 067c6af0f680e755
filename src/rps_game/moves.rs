use super::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hand shape. Serialized with the single-letter wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "k")]
    Rock,
    #[serde(rename = "p")]
    Paper,
    #[serde(rename = "s")]
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn code(self) -> &'static str {
        match self {
            Move::Rock => "k",
            Move::Paper => "p",
            Move::Scissors => "s",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, ClientError> {
        match code {
            "k" => Ok(Move::Rock),
            "p" => Ok(Move::Paper),
            "s" => Ok(Move::Scissors),
            other => Err(ClientError::UnknownMove(other.to_string())),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Move::Rock => "✊",
            Move::Paper => "📄",
            Move::Scissors => "✂️",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts wire codes plus the English and Finnish move names.
impl FromStr for Move {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_lowercase();
        match word.as_str() {
            "r" | "rock" | "kivi" => Ok(Move::Rock),
            "paper" | "paperi" => Ok(Move::Paper),
            "scissors" | "sakset" => Ok(Move::Scissors),
            code => Move::from_code(code),
        }
    }
}

/// Result code of a single round, from player 1's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Draw,
    Player1,
    Player2,
}

/// One of the two move slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl FromStr for PlayerSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(PlayerSlot::Player1),
            "2" => Ok(PlayerSlot::Player2),
            other => Err(format!("unknown player `{}`", other)),
        }
    }
}
