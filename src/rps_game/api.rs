use super::error::ClientError;
use super::mode::GameType;
use super::moves::{Move, RoundOutcome};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct StartGameRequest {
    #[serde(rename = "type")]
    pub game_type: GameType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartGameResponse {
    pub game_id: String,
    #[serde(default)]
    pub game_type: Option<GameType>,
}

#[derive(Debug, Serialize)]
pub struct PlayMoveRequest<'a> {
    pub game_id: &'a str,
    pub player1_move: Move,
}

#[derive(Debug, Serialize)]
pub struct PlayMovePvpRequest<'a> {
    pub game_id: &'a str,
    pub player1_move: Move,
    pub player2_move: Move,
}

#[derive(Debug, Serialize)]
pub struct EndGameRequest<'a> {
    pub game_id: &'a str,
}

/// A per-side counter pair as the server reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SideCounts {
    pub player1: u32,
    pub player2: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
    pub draws: u32,
}

/// Outcome of one resolved round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResponse {
    pub player1_move: Move,
    pub player2_move: Move,
    pub result: RoundOutcome,
    #[serde(default)]
    pub consecutive_wins: Option<SideCounts>,
    #[serde(default)]
    pub wins_remaining: Option<SideCounts>,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<String>,
}

impl RoundResponse {
    /// Any winner other than `player1` counts as the opponent.
    pub fn player1_won_game(&self) -> bool {
        self.winner.as_deref() == Some("player1")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateResponse {
    pub score: Score,
    #[serde(default)]
    pub wins_remaining: Option<SideCounts>,
}

/// The remote game service.
pub trait GameApi {
    fn start_game(&self, game_type: GameType) -> Result<StartGameResponse, ClientError>;

    fn play_move(&self, game_id: &str, player1_move: Move) -> Result<RoundResponse, ClientError>;

    fn play_move_pvp(
        &self,
        game_id: &str,
        player1_move: Move,
        player2_move: Move,
    ) -> Result<RoundResponse, ClientError>;

    fn game_state(&self, game_id: &str) -> Result<GameStateResponse, ClientError>;

    fn end_game(&self, game_id: &str) -> Result<(), ClientError>;
}

/// [`GameApi`] over HTTP/JSON.
pub struct HttpGameApi {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpGameApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ureq::Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        Ok(self.agent.post(&url).send_json(body)?)
    }
}

impl GameApi for HttpGameApi {
    fn start_game(&self, game_type: GameType) -> Result<StartGameResponse, ClientError> {
        info!("Starting {} game at {}", game_type, self.base_url);
        let response = self.post("/api/start_game", &StartGameRequest { game_type })?;
        Ok(response.into_json()?)
    }

    fn play_move(&self, game_id: &str, player1_move: Move) -> Result<RoundResponse, ClientError> {
        let request = PlayMoveRequest {
            game_id,
            player1_move,
        };
        let response = self.post("/api/play_move", &request)?;
        Ok(response.into_json()?)
    }

    fn play_move_pvp(
        &self,
        game_id: &str,
        player1_move: Move,
        player2_move: Move,
    ) -> Result<RoundResponse, ClientError> {
        let request = PlayMovePvpRequest {
            game_id,
            player1_move,
            player2_move,
        };
        let response = self.post("/api/play_move_pvp", &request)?;
        Ok(response.into_json()?)
    }

    fn game_state(&self, game_id: &str) -> Result<GameStateResponse, ClientError> {
        let url = format!(
            "{}/api/game_state/{}",
            self.base_url,
            urlencoding::encode(game_id)
        );
        debug!("GET {}", url);
        let response = self.agent.get(&url).call()?;
        Ok(response.into_json()?)
    }

    fn end_game(&self, game_id: &str) -> Result<(), ClientError> {
        info!("Ending game {}", game_id);
        self.post("/api/end_game", &EndGameRequest { game_id })?;
        Ok(())
    }
}
