use super::client::{ClientEvent, Scoreboard};
use super::locale::Locale;
use super::mode::GameMode;
use super::moves::PlayerSlot;
use super::view::ViewState;
use std::io::{self, BufRead, BufReader, Write};

/// Terminal front end: renders client events and reads commands.
pub struct ConsoleUI {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    locale: Locale,
    view: ViewState,
}

impl ConsoleUI {
    pub fn new(locale: Locale) -> Self {
        Self::with_streams(
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            locale,
        )
    }

    pub fn with_streams(input: Box<dyn BufRead>, output: Box<dyn Write>, locale: Locale) -> Self {
        Self {
            input,
            output,
            locale,
            view: ViewState::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Prompts and reads one trimmed line; `None` once input is exhausted.
    pub fn read_command(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.locale.prompt())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.locale.menu())
    }

    pub fn show_help(&mut self, mode: GameMode) -> io::Result<()> {
        let help = match mode {
            GameMode::PvP => self.locale.pvp_help(),
            GameMode::Ai => self.locale.ai_help(),
        };
        writeln!(self.output, "{}", help)
    }

    /// A blocking message, the console counterpart of an alert box.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n*** {} ***", message)?;
        self.output.flush()
    }

    pub fn handle_events(&mut self, events: &[ClientEvent]) -> io::Result<()> {
        for event in events {
            self.view.apply(event);
            self.render(event)?;
        }
        self.output.flush()
    }

    fn player_name(&self, player: PlayerSlot) -> &str {
        match player {
            PlayerSlot::Player1 => &self.view.player1_name,
            PlayerSlot::Player2 => &self.view.player2_name,
        }
    }

    fn render(&mut self, event: &ClientEvent) -> io::Result<()> {
        match event {
            ClientEvent::ScreenChanged(_) => Ok(()),
            ClientEvent::LayoutChanged {
                mode,
                player1_name,
                player2_name,
            } => {
                // Header and the commands for this layout
                writeln!(self.output, "\n=== {} vs {} ===", player1_name, player2_name)?;
                self.show_help(*mode)
            }
            // The move itself stays hidden so the other player cannot peek.
            ClientEvent::SelectionChanged {
                player,
                selection: Some(_),
            } => {
                let line = format!("{} ✔", self.player_name(*player));
                writeln!(self.output, "{}", line)
            }
            ClientEvent::SelectionChanged {
                selection: None, ..
            } => Ok(()),
            ClientEvent::PlayButtonToggled { visible: true } => {
                writeln!(self.output, "{}", self.locale.play_ready())
            }
            ClientEvent::PlayButtonToggled { visible: false } => Ok(()),
            // Round summary
            ClientEvent::RoundPlayed(summary) => writeln!(self.output, "\n{}", summary.text),
            ClientEvent::LastRoundHidden => Ok(()),
            // Score line
            ClientEvent::ScoreUpdated(scoreboard) => {
                let line = self.format_scoreboard(scoreboard);
                writeln!(self.output, "{}", line)
            }
            ClientEvent::ScoreUnavailable { message } => {
                writeln!(self.output, "{}: {}", self.locale.score_title(), message)
            }
            // Revealed by the controller once the delay has passed.
            ClientEvent::GameDecided { .. } => Ok(()),
        }
    }

    fn format_scoreboard(&self, scoreboard: &Scoreboard) -> String {
        let side = |name: &str, wins: u32, countdown: &Option<String>| match countdown {
            Some(countdown) => format!("{} {} ({})", name, wins, countdown),
            None => format!("{} {}", name, wins),
        };
        format!(
            "{}: {} | {} | {} {}",
            self.locale.score_title(),
            side(
                &self.view.player1_name,
                scoreboard.player1,
                &scoreboard.player1_countdown
            ),
            side(
                &self.view.player2_name,
                scoreboard.player2,
                &scoreboard.player2_countdown
            ),
            self.locale.draws(),
            scoreboard.draws
        )
    }
}
