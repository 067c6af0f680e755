use super::locale::Language;
use super::mode::GameType;
use clap::Parser;
use std::time::Duration;

/// Terminal client for the rock-paper-scissors game server.
#[derive(Debug, Clone, Parser)]
#[command(name = "rps-client", version, about)]
pub struct Config {
    /// Base URL of the game server
    #[arg(long, env = "RPS_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    pub server_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,

    /// Pause before the end-of-game notice, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub reveal_delay_ms: u64,

    #[arg(long, value_enum, default_value_t = Language::En)]
    pub lang: Language,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Start this game right away instead of showing the menu first
    #[arg(long, value_enum)]
    pub game: Option<GameType>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
