//! Leaderboard rank cell: crown, trophy, medal, or `#N`.

use leptos::prelude::*;

use crate::state::leaderboard::RankBadge as Badge;

#[component]
pub fn RankBadge(rank: u32) -> impl IntoView {
    let badge = Badge::for_rank(rank);
    view! { <span class=badge.class()>{badge.text()}</span> }
}
