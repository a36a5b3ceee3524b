use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn play_state_starts_on_menu_with_medium_difficulty() {
    let state = PlayState::default();
    assert_eq!(state.mode, GameMode::Menu);
    assert_eq!(state.difficulty, Difficulty::Medium);
}

#[test]
fn game_mode_variants_are_distinct() {
    assert_ne!(GameMode::Menu, GameMode::Pvp);
    assert_ne!(GameMode::Menu, GameMode::Ai);
    assert_ne!(GameMode::Pvp, GameMode::Ai);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn start_and_return_switch_modes_unconditionally() {
    let mut state = PlayState::default();
    state.start_ai();
    assert_eq!(state.mode, GameMode::Ai);
    state.start_pvp();
    assert_eq!(state.mode, GameMode::Pvp);
    state.return_to_menu();
    assert_eq!(state.mode, GameMode::Menu);
}

#[test]
fn board_mode_maps_game_screens() {
    assert_eq!(GameMode::Menu.board_mode(), None);
    assert_eq!(GameMode::Pvp.board_mode(), Some(BoardMode::Pvp));
    assert_eq!(GameMode::Ai.board_mode(), Some(BoardMode::Ai));
}

// =============================================================
// Labels
// =============================================================

#[test]
fn difficulty_titles_are_capitalized() {
    let titles: Vec<_> = Difficulty::ALL.iter().map(|d| d.title()).collect();
    assert_eq!(titles, ["Easy", "Medium", "Hard"]);
}

#[test]
fn challenge_label_uses_lowercase_difficulty() {
    let mut state = PlayState::default();
    assert_eq!(state.challenge_label(), "Challenge AI (medium)");
    state.difficulty = Difficulty::Hard;
    assert_eq!(state.challenge_label(), "Challenge AI (hard)");
}

#[test]
fn game_heading_depends_on_mode() {
    let mut state = PlayState { mode: GameMode::Ai, difficulty: Difficulty::Easy };
    assert_eq!(state.game_heading(), "🤖 AI Battle (easy)");
    state.start_pvp();
    assert_eq!(state.game_heading(), "👥 Player vs Player");
}
