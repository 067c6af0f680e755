use super::mode::GameMode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("both players must choose a move")]
    MissingMoves,
    #[error("the game is already over, return to the menu to start a new one")]
    GameOver,
    #[error("no game in progress")]
    NoActiveGame,
    #[error("a game is already in progress")]
    GameInProgress,
    #[error("{action} is not available in {mode} mode")]
    WrongMode { action: &'static str, mode: GameMode },
    #[error("a round is already being resolved")]
    RoundInFlight,
    #[error("unknown move `{0}`")]
    UnknownMove(String),
    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(#[from] std::io::Error),
}

impl ClientError {
    /// True for errors detected locally, before any request was sent.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            ClientError::Server { .. } | ClientError::Transport(_) | ClientError::Decode(_)
        )
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_json::<serde_json::Value>()
                    .ok()
                    .and_then(|body| body.get("error")?.as_str().map(str::to_string))
                    .unwrap_or_else(|| format!("HTTP {}", status));
                ClientError::Server { status, message }
            }
            ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
        }
    }
}
