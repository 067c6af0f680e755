use super::api::{GameApi, GameStateResponse, RoundResponse};
use super::error::ClientError;
use super::locale::Locale;
use super::mode::{GameMode, GameType};
use super::moves::{Move, PlayerSlot, RoundOutcome};
use super::session::{Phase, Session};
use log::{info, warn};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub you: Move,
    pub opponent: Move,
    pub outcome: RoundOutcome,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub player1: u32,
    pub player2: u32,
    pub draws: u32,
    pub player1_countdown: Option<String>,
    pub player2_countdown: Option<String>,
}

/// A change the presentation layer has to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    ScreenChanged(Screen),
    LayoutChanged {
        mode: GameMode,
        player1_name: String,
        player2_name: String,
    },
    SelectionChanged {
        player: PlayerSlot,
        selection: Option<Move>,
    },
    PlayButtonToggled {
        visible: bool,
    },
    RoundPlayed(RoundSummary),
    LastRoundHidden,
    ScoreUpdated(Scoreboard),
    /// The score could not be fetched; the previous scoreboard stays up.
    ScoreUnavailable {
        message: String,
    },
    /// Shown after `delay`, after which the game is torn down with `end_game`.
    GameDecided {
        verdict: Verdict,
        message: String,
        delay: Duration,
    },
}

pub type Events = Vec<ClientEvent>;

/// Session controller. Operations update the [`Session`] first and then
/// describe the resulting view changes as [`ClientEvent`]s.
pub struct GameClient<A: GameApi> {
    api: A,
    session: Session,
    locale: Locale,
    reveal_delay: Duration,
}

impl<A: GameApi> GameClient<A> {
    pub fn new(api: A, locale: Locale, reveal_delay: Duration) -> Self {
        Self {
            api,
            session: Session::new(),
            locale,
            reveal_delay,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn start_game(&mut self, game_type: GameType) -> Result<Events, ClientError> {
        if self.session.phase() != Phase::NoGame {
            return Err(ClientError::GameInProgress);
        }

        let response = self.api.start_game(game_type)?;
        info!("Started {} game {}", game_type, response.game_id);
        self.session.begin(response.game_id, game_type)?;

        let (player1_name, player2_name) = self.locale.player_labels(game_type);
        let mut events = vec![
            ClientEvent::ScreenChanged(Screen::Game),
            ClientEvent::LayoutChanged {
                mode: game_type.mode(),
                player1_name,
                player2_name,
            },
        ];
        events.extend(Self::selections_cleared());
        events.push(ClientEvent::LastRoundHidden);
        events.extend(self.score_after_commit());
        Ok(events)
    }

    pub fn select_move(&mut self, player: PlayerSlot, mv: Move) -> Result<Events, ClientError> {
        self.set_selection(player, Some(mv))
    }

    pub fn clear_move(&mut self, player: PlayerSlot) -> Result<Events, ClientError> {
        self.set_selection(player, None)
    }

    fn set_selection(
        &mut self,
        player: PlayerSlot,
        selection: Option<Move>,
    ) -> Result<Events, ClientError> {
        let ready = self.session.select(player, selection)?;
        Ok(vec![
            ClientEvent::SelectionChanged { player, selection },
            ClientEvent::PlayButtonToggled { visible: ready },
        ])
    }

    fn selections_cleared() -> Events {
        vec![
            ClientEvent::SelectionChanged {
                player: PlayerSlot::Player1,
                selection: None,
            },
            ClientEvent::SelectionChanged {
                player: PlayerSlot::Player2,
                selection: None,
            },
            ClientEvent::PlayButtonToggled { visible: false },
        ]
    }

    pub fn play_round_pvp(&mut self) -> Result<Events, ClientError> {
        let (game_id, player1_move, player2_move) = self.session.start_pvp_round()?;
        info!(
            "Submitting round {} vs {} in game {}",
            player1_move, player2_move, game_id
        );

        let response = match self.api.play_move_pvp(&game_id, player1_move, player2_move) {
            Ok(response) => response,
            Err(e) => {
                self.session.abort_round();
                return Err(e);
            }
        };

        let mut events = self.render_round_result(&response);
        events.extend(Self::selections_cleared());
        events.extend(self.score_after_commit());
        Ok(events)
    }

    pub fn play_move_ai(&mut self, mv: Move) -> Result<Events, ClientError> {
        let game_id = self.session.start_ai_round()?;
        info!("Submitting move {} in game {}", mv, game_id);

        let response = match self.api.play_move(&game_id, mv) {
            Ok(response) => response,
            Err(e) => {
                self.session.abort_round();
                return Err(e);
            }
        };

        let mut events = self.render_round_result(&response);
        events.extend(self.score_after_commit());
        Ok(events)
    }

    /// Applies a resolved round to the session and describes it.
    pub fn render_round_result(&mut self, response: &RoundResponse) -> Events {
        self.session.finish_round(response.game_over);

        let mut text = format!(
            "{} | {}",
            self.locale
                .moves_line(response.player1_move, response.player2_move),
            self.locale.outcome_message(response.result)
        );
        if let Some(streaks) = response.consecutive_wins {
            text.push_str("\n\n");
            text.push_str(
                &self
                    .locale
                    .consecutive_wins_line(streaks.player1, streaks.player2),
            );
        }
        if let Some(remaining) = response.wins_remaining {
            text.push('\n');
            text.push_str(
                &self
                    .locale
                    .wins_needed_line(remaining.player1, remaining.player2),
            );
        }

        let mut events = vec![ClientEvent::RoundPlayed(RoundSummary {
            you: response.player1_move,
            opponent: response.player2_move,
            outcome: response.result,
            text,
        })];

        if response.game_over {
            let (verdict, message) = if response.player1_won_game() {
                (Verdict::Victory, self.locale.victory())
            } else {
                (Verdict::Defeat, self.locale.defeat())
            };
            info!("Game decided: {:?}", verdict);
            events.push(ClientEvent::GameDecided {
                verdict,
                message,
                delay: self.reveal_delay,
            });
        }
        events
    }

    pub fn refresh_score(&mut self) -> Result<Events, ClientError> {
        let game_id = self.session.game_id().ok_or(ClientError::NoActiveGame)?;
        let state = self.api.game_state(game_id)?;
        Ok(vec![ClientEvent::ScoreUpdated(self.scoreboard(&state))])
    }

    /// Score refresh after a start or round has already been applied. A
    /// failure is reported as an event so the committed events still reach
    /// the caller.
    fn score_after_commit(&mut self) -> Events {
        match self.refresh_score() {
            Ok(events) => events,
            Err(e) => {
                warn!("Failed to refresh score: {}", e);
                vec![ClientEvent::ScoreUnavailable {
                    message: self.locale.error_message(&e),
                }]
            }
        }
    }

    pub fn scoreboard(&self, state: &GameStateResponse) -> Scoreboard {
        let countdown = state.wins_remaining;
        Scoreboard {
            player1: state.score.player1,
            player2: state.score.player2,
            draws: state.score.draws,
            player1_countdown: countdown.map(|c| self.locale.wins_remaining(c.player1)),
            player2_countdown: countdown.map(|c| self.locale.wins_remaining(c.player2)),
        }
    }

    /// Tears the game down. The local reset happens even if the server
    /// cannot be told.
    pub fn end_game(&mut self) -> Result<Events, ClientError> {
        if let Some(game_id) = self.session.reset() {
            match self.api.end_game(&game_id) {
                Ok(()) => info!("Ended game {}", game_id),
                Err(e) => warn!("Failed to notify server about end of {}: {}", game_id, e),
            }
        }

        let mut events = vec![
            ClientEvent::ScreenChanged(Screen::Menu),
            ClientEvent::LastRoundHidden,
        ];
        events.extend(Self::selections_cleared());
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rps_game::api::{Score, SideCounts, StartGameResponse};
    use crate::rps_game::view::ViewState;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted [`GameApi`] recording every call made to it.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        rounds: RefCell<VecDeque<RoundResponse>>,
        state: RefCell<Option<GameStateResponse>>,
        fail_end_game: bool,
        fail_game_state: bool,
    }

    impl FakeApi {
        fn with_rounds(rounds: Vec<RoundResponse>) -> Self {
            Self {
                rounds: RefCell::new(rounds.into()),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn next_round(&self) -> Result<RoundResponse, ClientError> {
            self.rounds
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ClientError::Transport("no scripted round".into()))
        }
    }

    impl GameApi for FakeApi {
        fn start_game(&self, game_type: GameType) -> Result<StartGameResponse, ClientError> {
            self.calls.borrow_mut().push(format!("start {}", game_type));
            Ok(StartGameResponse {
                game_id: "g1".to_string(),
                game_type: Some(game_type),
            })
        }

        fn play_move(&self, game_id: &str, mv: Move) -> Result<RoundResponse, ClientError> {
            self.calls
                .borrow_mut()
                .push(format!("play {} {}", game_id, mv));
            self.next_round()
        }

        fn play_move_pvp(
            &self,
            game_id: &str,
            p1: Move,
            p2: Move,
        ) -> Result<RoundResponse, ClientError> {
            self.calls
                .borrow_mut()
                .push(format!("play_pvp {} {} {}", game_id, p1, p2));
            self.next_round()
        }

        fn game_state(&self, game_id: &str) -> Result<GameStateResponse, ClientError> {
            self.calls.borrow_mut().push(format!("state {}", game_id));
            if self.fail_game_state {
                return Err(ClientError::Transport("timed out".into()));
            }
            Ok(self.state.borrow().clone().unwrap_or(GameStateResponse {
                score: Score::default(),
                wins_remaining: Some(SideCounts {
                    player1: 3,
                    player2: 3,
                }),
            }))
        }

        fn end_game(&self, game_id: &str) -> Result<(), ClientError> {
            self.calls.borrow_mut().push(format!("end {}", game_id));
            if self.fail_end_game {
                return Err(ClientError::Transport("connection reset".into()));
            }
            Ok(())
        }
    }

    fn round(p1: Move, p2: Move, result: RoundOutcome) -> RoundResponse {
        RoundResponse {
            player1_move: p1,
            player2_move: p2,
            result,
            consecutive_wins: None,
            wins_remaining: None,
            game_over: false,
            winner: None,
        }
    }

    fn create_client(api: FakeApi) -> GameClient<FakeApi> {
        GameClient::new(api, Locale::default(), Duration::from_millis(500))
    }

    fn play_button(events: &[ClientEvent]) -> Option<bool> {
        events.iter().rev().find_map(|e| match e {
            ClientEvent::PlayButtonToggled { visible } => Some(*visible),
            _ => None,
        })
    }

    #[test]
    fn test_start_game_ai() {
        let mut client = create_client(FakeApi::default());
        let events = client.start_game(GameType::PlayerVsAi).unwrap();

        assert_eq!(client.session().game_id(), Some("g1"));
        assert_eq!(client.session().phase(), Phase::AwaitingSelections);
        assert_eq!(events[0], ClientEvent::ScreenChanged(Screen::Game));
        assert_eq!(
            events[1],
            ClientEvent::LayoutChanged {
                mode: GameMode::Ai,
                player1_name: "You".to_string(),
                player2_name: "AI".to_string(),
            }
        );
        assert!(matches!(events.last(), Some(ClientEvent::ScoreUpdated(_))));
        assert_eq!(
            client.api().calls(),
            vec!["start player_vs_ai", "state g1"]
        );
    }

    #[test]
    fn test_start_game_twice() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsPlayer).unwrap();
        let err = client.start_game(GameType::PlayerVsAi).unwrap_err();
        assert!(matches!(err, ClientError::GameInProgress));
        assert_eq!(client.api().calls().len(), 2);
    }

    #[test]
    fn test_select_move_toggles_play_button() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsPlayer).unwrap();

        let events = client.select_move(PlayerSlot::Player1, Move::Rock).unwrap();
        assert_eq!(
            events[0],
            ClientEvent::SelectionChanged {
                player: PlayerSlot::Player1,
                selection: Some(Move::Rock),
            }
        );
        assert_eq!(play_button(&events), Some(false));

        let events = client
            .select_move(PlayerSlot::Player2, Move::Paper)
            .unwrap();
        assert_eq!(play_button(&events), Some(true));

        let events = client.clear_move(PlayerSlot::Player2).unwrap();
        assert_eq!(play_button(&events), Some(false));

        client
            .select_move(PlayerSlot::Player2, Move::Scissors)
            .unwrap();
        let events = client.clear_move(PlayerSlot::Player1).unwrap();
        assert_eq!(play_button(&events), Some(false));
    }

    #[test]
    fn test_play_round_pvp_requires_both_moves() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsPlayer).unwrap();
        client.select_move(PlayerSlot::Player1, Move::Rock).unwrap();
        let calls_before = client.api().calls().len();

        let err = client.play_round_pvp().unwrap_err();
        assert!(matches!(err, ClientError::MissingMoves));
        assert!(err.is_rejection());
        assert_eq!(
            client.locale().error_message(&err),
            "Both players must choose a move!"
        );
        assert_eq!(client.api().calls().len(), calls_before);
    }

    #[test]
    fn test_play_round_pvp() {
        let api = FakeApi::with_rounds(vec![round(Move::Paper, Move::Rock, RoundOutcome::Player1)]);
        let mut client = create_client(api);
        client.start_game(GameType::PlayerVsPlayer).unwrap();
        client.select_move(PlayerSlot::Player1, Move::Paper).unwrap();
        client.select_move(PlayerSlot::Player2, Move::Rock).unwrap();

        let events = client.play_round_pvp().unwrap();

        assert!(matches!(events[0], ClientEvent::RoundPlayed(_)));
        assert!(events.contains(&ClientEvent::SelectionChanged {
            player: PlayerSlot::Player1,
            selection: None,
        }));
        assert!(events.contains(&ClientEvent::SelectionChanged {
            player: PlayerSlot::Player2,
            selection: None,
        }));
        assert_eq!(play_button(&events), Some(false));
        assert!(matches!(events.last(), Some(ClientEvent::ScoreUpdated(_))));
        assert!(!client.session().ready_to_play());
        assert_eq!(
            client.api().calls()[2..].to_vec(),
            vec!["play_pvp g1 p k", "state g1"]
        );
    }

    #[test]
    fn test_failed_round_keeps_state() {
        // No scripted round, so the fake fails the request.
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsPlayer).unwrap();
        client.select_move(PlayerSlot::Player1, Move::Paper).unwrap();
        client.select_move(PlayerSlot::Player2, Move::Rock).unwrap();

        let err = client.play_round_pvp().unwrap_err();
        assert!(!err.is_rejection());
        assert_eq!(client.session().phase(), Phase::AwaitingSelections);
        assert!(client.session().ready_to_play());
    }

    #[test]
    fn test_render_round_result() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsAi).unwrap();

        let mut response = round(Move::Rock, Move::Scissors, RoundOutcome::Player1);
        response.consecutive_wins = Some(SideCounts {
            player1: 1,
            player2: 0,
        });
        response.wins_remaining = Some(SideCounts {
            player1: 2,
            player2: 3,
        });
        let events = client.render_round_result(&response);

        assert_eq!(events.len(), 1);
        let ClientEvent::RoundPlayed(summary) = &events[0] else {
            panic!("expected a round summary, got {:?}", events[0]);
        };
        assert_eq!(summary.you, Move::Rock);
        assert_eq!(summary.opponent, Move::Scissors);
        assert_eq!(
            summary.text,
            "You: ✊ Rock | Opponent: ✂️ Scissors | 🎉 You won the round!\n\n\
             Consecutive wins: You 1 - Opponent 0\n\
             Wins needed: You 2 - Opponent 3"
        );
        assert!(!client.session().is_game_over());
    }

    #[test]
    fn test_render_draw_and_loss() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsAi).unwrap();

        let events = client.render_round_result(&round(Move::Paper, Move::Paper, RoundOutcome::Draw));
        let ClientEvent::RoundPlayed(summary) = &events[0] else {
            panic!("expected a round summary");
        };
        assert!(summary.text.ends_with("🤝 Draw!"));

        let events =
            client.render_round_result(&round(Move::Paper, Move::Scissors, RoundOutcome::Player2));
        let ClientEvent::RoundPlayed(summary) = &events[0] else {
            panic!("expected a round summary");
        };
        assert!(summary.text.contains("Opponent won the round"));
    }

    #[test]
    fn test_game_over_defeat() {
        let mut last = round(Move::Paper, Move::Scissors, RoundOutcome::Player2);
        last.game_over = true;
        last.winner = Some("player2".to_string());
        let mut client = create_client(FakeApi::with_rounds(vec![last]));
        client.start_game(GameType::PlayerVsAi).unwrap();

        let events = client.play_move_ai(Move::Paper).unwrap();

        assert!(client.session().is_game_over());
        assert_eq!(client.session().phase(), Phase::Ended);
        assert!(events.contains(&ClientEvent::GameDecided {
            verdict: Verdict::Defeat,
            message: "😢 Game over! Your opponent won with 3 consecutive wins.".to_string(),
            delay: Duration::from_millis(500),
        }));

        let calls_before = client.api().calls().len();
        let err = client.play_move_ai(Move::Rock).unwrap_err();
        assert!(matches!(err, ClientError::GameOver));
        assert_eq!(client.api().calls().len(), calls_before);
    }

    #[test]
    fn test_game_over_victory() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsAdvancedAi).unwrap();

        let mut last = round(Move::Rock, Move::Scissors, RoundOutcome::Player1);
        last.game_over = true;
        last.winner = Some("player1".to_string());
        let events = client.render_round_result(&last);

        assert!(matches!(
            events.last(),
            Some(ClientEvent::GameDecided {
                verdict: Verdict::Victory,
                ..
            })
        ));
    }

    #[test]
    fn test_play_move_ai_in_pvp_mode() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsPlayer).unwrap();
        let err = client.play_move_ai(Move::Rock).unwrap_err();
        assert!(matches!(err, ClientError::WrongMode { .. }));
    }

    #[test]
    fn test_refresh_score() {
        let api = FakeApi::default();
        *api.state.borrow_mut() = Some(GameStateResponse {
            score: Score {
                player1: 2,
                player2: 1,
                draws: 0,
            },
            wins_remaining: Some(SideCounts {
                player1: 1,
                player2: 2,
            }),
        });
        let mut client = create_client(api);
        client.start_game(GameType::PlayerVsAi).unwrap();

        let events = client.refresh_score().unwrap();
        assert_eq!(
            events,
            vec![ClientEvent::ScoreUpdated(Scoreboard {
                player1: 2,
                player2: 1,
                draws: 0,
                player1_countdown: Some("1 win remaining".to_string()),
                player2_countdown: Some("2 wins remaining".to_string()),
            })]
        );
    }

    #[test]
    fn test_score_refresh_failure_keeps_round_result() {
        let mut last = round(Move::Rock, Move::Scissors, RoundOutcome::Player1);
        last.game_over = true;
        last.winner = Some("player1".to_string());
        let api = FakeApi {
            fail_game_state: true,
            ..FakeApi::with_rounds(vec![last])
        };
        let mut client = create_client(api);
        let mut view = ViewState::new();
        for event in client.start_game(GameType::PlayerVsAi).unwrap() {
            view.apply(&event);
        }

        let events = client.play_move_ai(Move::Rock).unwrap();
        for event in &events {
            view.apply(event);
        }

        assert!(matches!(events[0], ClientEvent::RoundPlayed(_)));
        assert!(events.iter().any(|e| matches!(
            e,
            ClientEvent::GameDecided {
                verdict: Verdict::Victory,
                ..
            }
        )));
        assert!(matches!(
            events.last(),
            Some(ClientEvent::ScoreUnavailable { message }) if message.contains("timed out")
        ));
        assert_eq!(client.session().phase(), Phase::Ended);
        assert!(view.last_round.is_some());

        // The teardown that follows the notice still works.
        client.end_game().unwrap();
        assert_eq!(client.session().phase(), Phase::NoGame);
    }

    #[test]
    fn test_start_game_score_refresh_failure() {
        let api = FakeApi {
            fail_game_state: true,
            ..FakeApi::default()
        };
        let mut client = create_client(api);
        let mut view = ViewState::new();

        let events = client.start_game(GameType::PlayerVsPlayer).unwrap();
        for event in &events {
            view.apply(event);
        }

        assert_eq!(events[0], ClientEvent::ScreenChanged(Screen::Game));
        assert!(matches!(
            events.last(),
            Some(ClientEvent::ScoreUnavailable { .. })
        ));
        assert_eq!(client.session().game_id(), Some("g1"));
        assert_eq!(view.screen, Screen::Game);
        assert_eq!(view.mode, Some(GameMode::PvP));
        assert_eq!(view.scoreboard, None);
    }

    #[test]
    fn test_refresh_score_without_game() {
        let mut client = create_client(FakeApi::default());
        assert!(matches!(
            client.refresh_score(),
            Err(ClientError::NoActiveGame)
        ));
        assert!(client.api().calls().is_empty());
    }

    #[test]
    fn test_end_game_resets() {
        let mut client = create_client(FakeApi::default());
        client.start_game(GameType::PlayerVsPlayer).unwrap();
        client.select_move(PlayerSlot::Player1, Move::Rock).unwrap();
        client.select_move(PlayerSlot::Player2, Move::Rock).unwrap();

        let events = client.end_game().unwrap();

        assert_eq!(events[0], ClientEvent::ScreenChanged(Screen::Menu));
        assert_eq!(client.session().game_id(), None);
        assert_eq!(client.session().game_type(), None);
        assert_eq!(client.session().selection(PlayerSlot::Player1), None);
        assert_eq!(client.session().selection(PlayerSlot::Player2), None);
        assert_eq!(client.session().phase(), Phase::NoGame);
        assert_eq!(client.api().calls().last().unwrap(), "end g1");
    }

    #[test]
    fn test_end_game_without_game() {
        let mut client = create_client(FakeApi::default());
        let events = client.end_game().unwrap();
        assert_eq!(events[0], ClientEvent::ScreenChanged(Screen::Menu));
        assert!(client.api().calls().is_empty());
    }

    #[test]
    fn test_end_game_when_server_fails() {
        let api = FakeApi {
            fail_end_game: true,
            ..FakeApi::default()
        };
        let mut client = create_client(api);
        client.start_game(GameType::PlayerVsAi).unwrap();

        client.end_game().unwrap();
        assert_eq!(client.session().phase(), Phase::NoGame);
    }

    #[test]
    fn test_new_game_after_game_over() {
        let mut last = round(Move::Rock, Move::Paper, RoundOutcome::Player2);
        last.game_over = true;
        let ok = round(Move::Rock, Move::Rock, RoundOutcome::Draw);
        let mut client = create_client(FakeApi::with_rounds(vec![last, ok]));

        client.start_game(GameType::PlayerVsAi).unwrap();
        client.play_move_ai(Move::Rock).unwrap();
        client.end_game().unwrap();
        client.start_game(GameType::PlayerVsAi).unwrap();

        assert!(!client.session().is_game_over());
        assert!(client.play_move_ai(Move::Rock).is_ok());
    }
}
