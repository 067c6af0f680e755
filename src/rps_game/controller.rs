use super::api::GameApi;
use super::client::{ClientEvent, Events, GameClient};
use super::error::ClientError;
use super::mode::{GameMode, GameType};
use super::moves::{Move, PlayerSlot};
use super::ui::ConsoleUI;
use log::error;
use std::io;
use std::thread;

/// Interactive menu/game loop over a [`GameClient`].
pub struct GameController<A: GameApi> {
    client: GameClient<A>,
    ui: ConsoleUI,
}

/// What the loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

impl<A: GameApi> GameController<A> {
    pub fn new(client: GameClient<A>, ui: ConsoleUI) -> Self {
        Self { client, ui }
    }

    pub fn client(&self) -> &GameClient<A> {
        &self.client
    }

    pub fn ui(&self) -> &ConsoleUI {
        &self.ui
    }

    /// Runs until the user quits or input ends. `first_game` skips the
    /// initial menu.
    pub fn run(&mut self, first_game: Option<GameType>) -> io::Result<()> {
        // Jump straight into a game if one was requested
        if let Some(game_type) = first_game {
            let result = self.client.start_game(game_type);
            self.dispatch(result)?;
        }

        loop {
            // Menu when no game is live, otherwise the game commands
            let flow = match self.client.session().mode() {
                None => self.menu_turn()?,
                Some(mode) => self.game_turn(mode)?,
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        // Close the server session on the way out
        if self.client.session().game_id().is_some() {
            let result = self.client.end_game();
            self.dispatch(result)?;
        }
        Ok(())
    }

    fn menu_turn(&mut self) -> io::Result<Flow> {
        self.ui.show_menu()?;
        let Some(choice) = self.ui.read_command()? else {
            return Ok(Flow::Quit);
        };

        let game_type = match choice.as_str() {
            "1" => GameType::PlayerVsPlayer,
            "2" => GameType::PlayerVsAi,
            "3" => GameType::PlayerVsAdvancedAi,
            "q" | "quit" => return Ok(Flow::Quit),
            other => {
                let message = self.client.locale().unknown_command(other);
                self.ui.notice(&message)?;
                return Ok(Flow::Continue);
            }
        };

        let result = self.client.start_game(game_type);
        self.dispatch(result)?;
        Ok(Flow::Continue)
    }

    fn game_turn(&mut self, mode: GameMode) -> io::Result<Flow> {
        let Some(command) = self.ui.read_command()? else {
            return Ok(Flow::Quit);
        };
        let words: Vec<&str> = command.split_whitespace().collect();

        let result = match (mode, words.as_slice()) {
            (_, []) => return Ok(Flow::Continue),
            // Back to the menu
            (_, ["menu"]) => self.client.end_game(),
            (_, ["quit"]) | (_, ["q"]) => return Ok(Flow::Quit),
            (_, ["help"]) => {
                self.ui.show_help(mode)?;
                return Ok(Flow::Continue);
            }
            // Resolve the round
            (GameMode::PvP, ["play"]) => self.client.play_round_pvp(),
            // Clear a selection
            (GameMode::PvP, ["clear", player]) => match player.parse::<PlayerSlot>() {
                Ok(player) => self.client.clear_move(player),
                Err(e) => return self.unknown(&e),
            },
            // Pick a move for one player
            (GameMode::PvP, [player, mv]) => match player.parse::<PlayerSlot>() {
                Ok(player) => mv
                    .parse::<Move>()
                    .and_then(|mv| self.client.select_move(player, mv)),
                Err(_) => return self.unknown(&command),
            },
            // Play against the AI
            (GameMode::Ai, [mv]) => mv
                .parse::<Move>()
                .and_then(|mv| self.client.play_move_ai(mv)),
            _ => return self.unknown(&command),
        };

        self.dispatch(result)?;
        Ok(Flow::Continue)
    }

    fn unknown(&mut self, input: &str) -> io::Result<Flow> {
        let message = self.client.locale().unknown_command(input);
        self.ui.notice(&message)?;
        Ok(Flow::Continue)
    }

    /// Renders the outcome of a client operation. A decided game is
    /// announced after its delay and then torn down.
    fn dispatch(&mut self, result: Result<Events, ClientError>) -> io::Result<()> {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                if !e.is_rejection() {
                    error!("Request failed: {}", e);
                }
                let message = self.client.locale().error_message(&e);
                return self.ui.notice(&message);
            }
        };

        self.ui.handle_events(&events)?;

        let decided = events.iter().find_map(|event| match event {
            ClientEvent::GameDecided { message, delay, .. } => Some((message.clone(), *delay)),
            _ => None,
        });
        if let Some((message, delay)) = decided {
            // Let the last round sink in before the verdict
            thread::sleep(delay);
            self.ui.notice(&message)?;
            let teardown = self.client.end_game();
            self.dispatch(teardown)?;
        }
        Ok(())
    }
}
