use super::error::ClientError;
use super::mode::GameType;
use super::moves::{Move, RoundOutcome};

/// Consecutive round wins that end a game.
pub const WIN_STREAK: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    #[default]
    En,
    Fi,
}

/// Every user-visible string the client produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn player_labels(&self, game_type: GameType) -> (String, String) {
        let (player1, player2) = match (self.language, game_type) {
            (Language::En, GameType::PlayerVsPlayer) => ("Player 1", "Player 2"),
            (Language::En, GameType::PlayerVsAi) => ("You", "AI"),
            (Language::En, GameType::PlayerVsAdvancedAi) => ("You", "Advanced AI"),
            (Language::Fi, GameType::PlayerVsPlayer) => ("Pelaaja 1", "Pelaaja 2"),
            (Language::Fi, GameType::PlayerVsAi) => ("Sinä", "Tekoäly"),
            (Language::Fi, GameType::PlayerVsAdvancedAi) => ("Sinä", "Parannettu Tekoäly"),
        };
        (player1.to_string(), player2.to_string())
    }

    pub fn move_name(&self, mv: Move) -> &'static str {
        match (self.language, mv) {
            (Language::En, Move::Rock) => "Rock",
            (Language::En, Move::Paper) => "Paper",
            (Language::En, Move::Scissors) => "Scissors",
            (Language::Fi, Move::Rock) => "Kivi",
            (Language::Fi, Move::Paper) => "Paperi",
            (Language::Fi, Move::Scissors) => "Sakset",
        }
    }

    pub fn move_label(&self, mv: Move) -> String {
        format!("{} {}", mv.emoji(), self.move_name(mv))
    }

    fn you(&self) -> &'static str {
        match self.language {
            Language::En => "You",
            Language::Fi => "Sinä",
        }
    }

    fn opponent(&self) -> &'static str {
        match self.language {
            Language::En => "Opponent",
            Language::Fi => "Vastustaja",
        }
    }

    pub fn outcome_message(&self, outcome: RoundOutcome) -> &'static str {
        match (self.language, outcome) {
            (Language::En, RoundOutcome::Draw) => "🤝 Draw!",
            (Language::En, RoundOutcome::Player1) => "🎉 You won the round!",
            (Language::En, RoundOutcome::Player2) => "😢 Opponent won the round.",
            (Language::Fi, RoundOutcome::Draw) => "🤝 Tasapeli!",
            (Language::Fi, RoundOutcome::Player1) => "🎉 Voitit kierroksen!",
            (Language::Fi, RoundOutcome::Player2) => "😢 Vastustaja voitti kierroksen.",
        }
    }

    pub fn moves_line(&self, you: Move, opponent: Move) -> String {
        format!(
            "{}: {} | {}: {}",
            self.you(),
            self.move_label(you),
            self.opponent(),
            self.move_label(opponent)
        )
    }

    pub fn consecutive_wins_line(&self, player1: u32, player2: u32) -> String {
        let title = match self.language {
            Language::En => "Consecutive wins",
            Language::Fi => "Perättäiset voitot",
        };
        format!(
            "{}: {} {} - {} {}",
            title,
            self.you(),
            player1,
            self.opponent(),
            player2
        )
    }

    pub fn wins_needed_line(&self, player1: u32, player2: u32) -> String {
        let title = match self.language {
            Language::En => "Wins needed",
            Language::Fi => "Voittoon tarvitaan",
        };
        format!(
            "{}: {} {} - {} {}",
            title,
            self.you(),
            player1,
            self.opponent(),
            player2
        )
    }

    /// Countdown text, e.g. "1 win remaining" or "2 wins remaining".
    pub fn wins_remaining(&self, count: u32) -> String {
        match self.language {
            Language::En => {
                format!("{} win{} remaining", count, if count != 1 { "s" } else { "" })
            }
            Language::Fi => {
                format!("{} voitto{} jäljellä", count, if count != 1 { "a" } else { "" })
            }
        }
    }

    pub fn victory(&self) -> String {
        match self.language {
            Language::En => format!(
                "🎉 Congratulations! You won the game with {} consecutive wins!",
                WIN_STREAK
            ),
            Language::Fi => format!(
                "🎉 Onneksi olkoon! Voitit pelin {} peräkkäisellä voitolla!",
                WIN_STREAK
            ),
        }
    }

    pub fn defeat(&self) -> String {
        match self.language {
            Language::En => format!(
                "😢 Game over! Your opponent won with {} consecutive wins.",
                WIN_STREAK
            ),
            Language::Fi => format!(
                "😢 Peli päättyi! Vastustaja voitti {} peräkkäisellä voitolla.",
                WIN_STREAK
            ),
        }
    }

    /// Notice shown for a failed operation.
    pub fn error_message(&self, err: &ClientError) -> String {
        match (self.language, err) {
            (Language::En, ClientError::MissingMoves) => {
                "Both players must choose a move!".to_string()
            }
            (Language::En, ClientError::GameOver) => {
                "The game is already over. Return to the main menu to start a new game."
                    .to_string()
            }
            (Language::Fi, ClientError::MissingMoves) => {
                "Molempien pelaajien on valittava siirto!".to_string()
            }
            (Language::Fi, ClientError::GameOver) => {
                "Peli on jo päättynyt. Palaa päävalikkoon aloittaaksesi uuden pelin.".to_string()
            }
            (_, other) => other.to_string(),
        }
    }

    pub fn menu(&self) -> &'static str {
        match self.language {
            Language::En => {
                "\n=== Rock Paper Scissors ===\n\
                 1. Player vs player\n\
                 2. Player vs AI\n\
                 3. Player vs advanced AI\n\
                 q. Quit"
            }
            Language::Fi => {
                "\n=== Kivi Paperi Sakset ===\n\
                 1. Pelaaja vs pelaaja\n\
                 2. Pelaaja vs tekoäly\n\
                 3. Pelaaja vs parannettu tekoäly\n\
                 q. Lopeta"
            }
        }
    }

    pub fn pvp_help(&self) -> &'static str {
        match self.language {
            Language::En => {
                "Commands: `1 <move>`, `2 <move>`, `clear <1|2>`, `play`, `menu` (moves: k/p/s)"
            }
            Language::Fi => {
                "Komennot: `1 <siirto>`, `2 <siirto>`, `clear <1|2>`, `play`, `menu` (siirrot: k/p/s)"
            }
        }
    }

    pub fn ai_help(&self) -> &'static str {
        match self.language {
            Language::En => "Commands: `<move>`, `menu` (moves: k/p/s)",
            Language::Fi => "Komennot: `<siirto>`, `menu` (siirrot: k/p/s)",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.language {
            Language::En => "Enter your choice: ",
            Language::Fi => "Valintasi: ",
        }
    }

    pub fn unknown_command(&self, input: &str) -> String {
        match self.language {
            Language::En => format!("Unknown command `{}`.", input),
            Language::Fi => format!("Tuntematon komento `{}`.", input),
        }
    }

    pub fn score_title(&self) -> &'static str {
        match self.language {
            Language::En => "Score",
            Language::Fi => "Pisteet",
        }
    }

    pub fn draws(&self) -> &'static str {
        match self.language {
            Language::En => "Draws",
            Language::Fi => "Tasapelit",
        }
    }

    pub fn play_ready(&self) -> &'static str {
        match self.language {
            Language::En => "Both moves chosen, type `play` to resolve the round.",
            Language::Fi => "Molemmat siirrot valittu, kirjoita `play` pelataksesi kierroksen.",
        }
    }
}
