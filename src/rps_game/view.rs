use super::client::{ClientEvent, Screen, Scoreboard};
use super::mode::GameMode;
use super::moves::{Move, PlayerSlot};

/// Headless model of what the user currently sees.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub screen: Screen,
    pub mode: Option<GameMode>,
    pub player1_name: String,
    pub player2_name: String,
    pub player1_selected: Option<Move>,
    pub player2_selected: Option<Move>,
    pub play_button_visible: bool,
    pub last_round: Option<String>,
    pub scoreboard: Option<Scoreboard>,
    pub notices: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            mode: None,
            player1_name: String::new(),
            player2_name: String::new(),
            player1_selected: None,
            player2_selected: None,
            play_button_visible: false,
            last_round: None,
            scoreboard: None,
            notices: Vec::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &ClientEvent) {
        match event {
            ClientEvent::ScreenChanged(screen) => self.screen = *screen,
            ClientEvent::LayoutChanged {
                mode,
                player1_name,
                player2_name,
            } => {
                self.mode = Some(*mode);
                self.player1_name = player1_name.clone();
                self.player2_name = player2_name.clone();
                self.scoreboard = None;
            }
            ClientEvent::SelectionChanged { player, selection } => match player {
                PlayerSlot::Player1 => self.player1_selected = *selection,
                PlayerSlot::Player2 => self.player2_selected = *selection,
            },
            ClientEvent::PlayButtonToggled { visible } => self.play_button_visible = *visible,
            ClientEvent::RoundPlayed(summary) => self.last_round = Some(summary.text.clone()),
            ClientEvent::LastRoundHidden => self.last_round = None,
            ClientEvent::ScoreUpdated(scoreboard) => self.scoreboard = Some(scoreboard.clone()),
            ClientEvent::ScoreUnavailable { message } => self.notices.push(message.clone()),
            ClientEvent::GameDecided { message, .. } => self.notices.push(message.clone()),
        }
    }
}
