//! Leaderboard page: podium for the top three, then the full rankings table.

use leptos::prelude::*;

use crate::components::rank_badge::RankBadge;
use crate::state::leaderboard::{ENTRIES, LeaderboardEntry, podium};

/// Leaderboard page. Pure render over the fixed dataset.
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    view! {
        <div class="leaderboard-page">
            <header class="leaderboard-page__header">
                <h1 class="gradient-text">"Hall of Champions"</h1>
                <p>"The greatest chess minds competing for ultimate supremacy"</p>
            </header>

            <div class="leaderboard-page__podium">
                {podium().iter().enumerate().map(|(i, entry)| view! { <PodiumCard entry={*entry} first={i == 0}/> }).collect::<Vec<_>>()}
            </div>

            <div class="card leaderboard-page__rankings">
                <h2>"\u{1F3C6} Complete Rankings"</h2>
                <table class="leaderboard-table">
                    <thead>
                        <tr>
                            <th>"Rank"</th>
                            <th>"Player"</th>
                            <th>"Rating"</th>
                            <th>"Record"</th>
                            <th>"Win Rate"</th>
                            <th>"Streak"</th>
                            <th>"Trend"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {ENTRIES.iter().map(|entry| view! { <RankingRow entry={*entry}/> }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn PodiumCard(entry: LeaderboardEntry, first: bool) -> impl IntoView {
    view! {
        <div class="card podium-card" class:podium-card--first=first>
            <RankBadge rank=entry.rank/>
            <div class="podium-card__avatar">{entry.avatar}</div>
            <h3 class="podium-card__name">{entry.name}</h3>
            <div class="podium-card__rating">{entry.rating}</div>
            <div class="podium-card__record">
                {format!("{}W \u{2022} {}L \u{2022} {}%", entry.wins, entry.losses, entry.win_rate())}
            </div>
            {entry.streak_label().map(|label| view! { <span class="badge">{label}</span> })}
        </div>
    }
}

#[component]
fn RankingRow(entry: LeaderboardEntry) -> impl IntoView {
    let streak = if entry.win_streak > 0 {
        view! { <span class="badge">{format!("\u{1F525} {}", entry.win_streak)}</span> }.into_any()
    } else {
        view! { <span class="muted">"-"</span> }.into_any()
    };

    view! {
        <tr>
            <td><RankBadge rank=entry.rank/></td>
            <td class="leaderboard-table__player">
                <span class="leaderboard-table__avatar">{entry.avatar}</span>
                <span class="leaderboard-table__name">{entry.name}</span>
            </td>
            <td class="leaderboard-table__rating">{entry.rating}</td>
            <td>
                <span class="record--wins">{format!("{}W", entry.wins)}</span>
                <span class="muted">" - "</span>
                <span class="record--losses">{format!("{}L", entry.losses)}</span>
            </td>
            <td>{format!("{}%", entry.win_rate())}</td>
            <td>{streak}</td>
            <td><span class=entry.trend.class()>{entry.trend.icon()}</span></td>
        </tr>
    }
}
