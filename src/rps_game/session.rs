use super::error::ClientError;
use super::mode::{GameMode, GameType};
use super::moves::{Move, PlayerSlot};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoGame,
    AwaitingSelections,
    RoundInProgress,
    Ended,
}

/// Client-side state of the one live game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    game_id: Option<String>,
    game_type: Option<GameType>,
    player1_move: Option<Move>,
    player2_move: Option<Move>,
    game_over: bool,
    round_in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    pub fn game_type(&self) -> Option<GameType> {
        self.game_type
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.game_type.map(GameType::mode)
    }

    pub fn selection(&self, player: PlayerSlot) -> Option<Move> {
        match player {
            PlayerSlot::Player1 => self.player1_move,
            PlayerSlot::Player2 => self.player2_move,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_id.is_none() {
            Phase::NoGame
        } else if self.game_over {
            Phase::Ended
        } else if self.round_in_flight {
            Phase::RoundInProgress
        } else {
            Phase::AwaitingSelections
        }
    }

    /// Both slots are filled, so a PvP round can be played.
    pub fn ready_to_play(&self) -> bool {
        self.player1_move.is_some() && self.player2_move.is_some()
    }

    pub fn begin(&mut self, game_id: String, game_type: GameType) -> Result<(), ClientError> {
        if self.game_id.is_some() {
            return Err(ClientError::GameInProgress);
        }
        *self = Self {
            game_id: Some(game_id),
            game_type: Some(game_type),
            ..Self::default()
        };
        Ok(())
    }

    fn require_mode(&self, mode: GameMode, action: &'static str) -> Result<(), ClientError> {
        match self.mode() {
            None => Err(ClientError::NoActiveGame),
            Some(current) if current != mode => Err(ClientError::WrongMode {
                action,
                mode: current,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Sets or clears a slot; returns whether both slots are now filled.
    pub fn select(&mut self, player: PlayerSlot, mv: Option<Move>) -> Result<bool, ClientError> {
        self.require_mode(GameMode::PvP, "selecting a move")?;
        match player {
            PlayerSlot::Player1 => self.player1_move = mv,
            PlayerSlot::Player2 => self.player2_move = mv,
        }
        Ok(self.ready_to_play())
    }

    fn check_submittable(&self) -> Result<&str, ClientError> {
        let game_id = self.game_id.as_deref().ok_or(ClientError::NoActiveGame)?;
        if self.game_over {
            return Err(ClientError::GameOver);
        }
        if self.round_in_flight {
            return Err(ClientError::RoundInFlight);
        }
        Ok(game_id)
    }

    /// Marks a PvP round as submitted and hands back what to send.
    pub fn start_pvp_round(&mut self) -> Result<(String, Move, Move), ClientError> {
        self.require_mode(GameMode::PvP, "playing a two-player round")?;
        let game_id = self.check_submittable()?.to_string();
        let (player1_move, player2_move) = match (self.player1_move, self.player2_move) {
            (Some(p1), Some(p2)) => (p1, p2),
            _ => return Err(ClientError::MissingMoves),
        };
        self.round_in_flight = true;
        Ok((game_id, player1_move, player2_move))
    }

    pub fn start_ai_round(&mut self) -> Result<String, ClientError> {
        self.require_mode(GameMode::Ai, "playing against the AI")?;
        let game_id = self.check_submittable()?.to_string();
        self.round_in_flight = true;
        Ok(game_id)
    }

    /// The round request failed; the session goes back to where it was.
    pub fn abort_round(&mut self) {
        self.round_in_flight = false;
    }

    /// Applies a resolved round. Both slots are always cleared together.
    pub fn finish_round(&mut self, game_over: bool) {
        self.round_in_flight = false;
        self.player1_move = None;
        self.player2_move = None;
        if game_over {
            self.game_over = true;
        }
    }

    /// Back to the initial state; returns the id of the game that was live.
    pub fn reset(&mut self) -> Option<String> {
        std::mem::take(self).game_id
    }
}
