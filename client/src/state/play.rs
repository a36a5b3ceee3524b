//! Play screen state: which screen is showing and the chosen AI difficulty.

#[cfg(test)]
#[path = "play_test.rs"]
mod play_test;

use super::board::BoardMode;

/// Play page screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    #[default]
    Menu,
    Pvp,
    Ai,
}

impl GameMode {
    /// Board mode for an in-game screen, `None` on the menu.
    pub fn board_mode(self) -> Option<BoardMode> {
        match self {
            GameMode::Menu => None,
            GameMode::Pvp => Some(BoardMode::Pvp),
            GameMode::Ai => Some(BoardMode::Ai),
        }
    }
}

/// AI difficulty. Only affects labels; there is no opponent behind it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized form used on the selector buttons.
    pub fn title(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayState {
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl PlayState {
    pub fn start_pvp(&mut self) {
        self.mode = GameMode::Pvp;
    }

    pub fn start_ai(&mut self) {
        self.mode = GameMode::Ai;
    }

    pub fn return_to_menu(&mut self) {
        self.mode = GameMode::Menu;
    }

    /// Text on the AI start button, e.g. `Challenge AI (medium)`.
    pub fn challenge_label(&self) -> String {
        format!("Challenge AI ({})", self.difficulty.as_str())
    }

    /// Heading above the board while a game is showing.
    pub fn game_heading(&self) -> String {
        match self.mode {
            GameMode::Ai => format!("\u{1F916} AI Battle ({})", self.difficulty.as_str()),
            GameMode::Pvp | GameMode::Menu => "\u{1F465} Player vs Player".to_owned(),
        }
    }
}
