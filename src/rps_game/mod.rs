pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod locale;
pub mod mode;
pub mod moves;
pub mod session;
pub mod ui;
pub mod view;

pub use api::{GameApi, HttpGameApi};
pub use client::{ClientEvent, GameClient};
pub use config::Config;
pub use controller::GameController;
pub use error::ClientError;
pub use locale::{Language, Locale};
pub use mode::{GameMode, GameType};
pub use moves::{Move, PlayerSlot, RoundOutcome};
pub use session::{Phase, Session};
pub use ui::ConsoleUI;
