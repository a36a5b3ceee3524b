//! Play page: mode menu and the live board.
//!
//! ARCHITECTURE
//! ============
//! The page holds a `RwSignal<PlayState>`. The board is rendered inside a
//! closure keyed on the game mode only, so changing modes drops the
//! `ChessBoard` and the next game starts from the initial layout.
//!
//! The status sidebar is static display text. There is no turn tracking,
//! clock, or opponent behind it.

#[cfg(test)]
#[path = "play_test.rs"]
mod play_test;

use leptos::prelude::*;

use crate::chess::Square;
use crate::components::chess_board::ChessBoard;
use crate::components::feature_card::FeatureCard;
use crate::state::board::BoardMode;
use crate::state::play::{Difficulty, PlayState};

pub(crate) const SAMPLE_HISTORY: [&str; 3] = ["1. e4 e5", "2. Nf3 Nc6", "3. Bb5 a6"];

/// Log line emitted for each board relocation.
#[cfg(any(feature = "hydrate", test))]
pub(crate) fn move_log_line(from: Square, to: Square) -> String {
    format!("Move from {},{} to {},{}", from.row(), from.col(), to.row(), to.col())
}

fn difficulty_class(selected: bool) -> &'static str {
    if selected { "btn btn--premium btn--sm" } else { "btn btn--outline btn--sm" }
}

/// Play page.
#[component]
pub fn PlayPage() -> impl IntoView {
    let play = RwSignal::new(PlayState::default());
    let mode = Memo::new(move |_| play.with(|p| p.mode));

    move || match mode.get().board_mode() {
        None => view! { <PlayMenu play=play/> }.into_any(),
        Some(board_mode) => view! { <PlayGame play=play board_mode=board_mode/> }.into_any(),
    }
}

#[component]
fn PlayMenu(play: RwSignal<PlayState>) -> impl IntoView {
    let difficulty = move || play.with(|p| p.difficulty);

    view! {
        <div class="play-page">
            <header class="play-page__header">
                <h1 class="gradient-text">"Choose Your Battle"</h1>
                <p>"Test your strategic mind against friends or challenge our advanced AI"</p>
            </header>

            <div class="play-page__modes">
                <FeatureCard
                    icon="\u{1F465}"
                    title="Player vs Player"
                    description="Challenge a friend in classic chess. Take turns and test your skills head-to-head."
                >
                    <button class="btn btn--hero btn--lg btn--block" on:click=move |_| play.update(PlayState::start_pvp)>
                        "Start PvP Game"
                    </button>
                </FeatureCard>

                <FeatureCard
                    icon="\u{1F916}"
                    title="Player vs AI"
                    description="Battle against our intelligent AI. Choose your difficulty and improve your game."
                >
                    <div class="play-page__difficulty">
                        <p>"Difficulty Level"</p>
                        <div class="play-page__difficulty-options">
                            {Difficulty::ALL
                                .iter()
                                .map(|&level| {
                                    view! {
                                        <button
                                            class=move || difficulty_class(difficulty() == level)
                                            on:click=move |_| play.update(|p| p.difficulty = level)
                                        >
                                            {level.title()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <button class="btn btn--premium btn--lg btn--block" on:click=move |_| play.update(PlayState::start_ai)>
                        {move || play.with(PlayState::challenge_label)}
                    </button>
                </FeatureCard>
            </div>
        </div>
    }
}

#[component]
fn PlayGame(play: RwSignal<PlayState>, board_mode: BoardMode) -> impl IntoView {
    let on_move = Callback::new(move |(from, to): (Square, Square)| {
        #[cfg(feature = "hydrate")]
        {
            log::info!("{}", move_log_line(from, to));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (from, to);
        }
    });

    view! {
        <div class="play-page play-page--game">
            <div class="play-page__game-header">
                <div class="play-page__game-title">
                    <button class="btn btn--outline" on:click=move |_| play.update(PlayState::return_to_menu)>
                        "\u{21BA} Back to Menu"
                    </button>
                    <span>{move || play.with(PlayState::game_heading)}</span>
                </div>
                <button class="btn btn--ghost" title="Settings">"\u{2699}"</button>
            </div>

            <div class="play-page__game-body">
                <div class="play-page__board">
                    <ChessBoard game_mode=board_mode on_move=on_move/>
                </div>

                <aside class="card play-page__status">
                    <h3>"Game Status"</h3>
                    <dl>
                        <div class="play-page__status-row"><dt>"Current Turn:"</dt><dd>"White"</dd></div>
                        <div class="play-page__status-row"><dt>"Move Count:"</dt><dd>"1"</dd></div>
                        <div class="play-page__status-row"><dt>"Timer:"</dt><dd class="mono">"10:00"</dd></div>
                    </dl>
                    <h4>"Move History"</h4>
                    <ol class="play-page__history">
                        {SAMPLE_HISTORY.iter().map(|line| view! { <li>{*line}</li> }).collect::<Vec<_>>()}
                    </ol>
                </aside>
            </div>
        </div>
    }
}
