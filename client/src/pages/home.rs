//! Landing page: hero, quick stats, feature grid, and closing call to action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::feature_card::FeatureCard;

pub(crate) struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) const FEATURES: [Feature; 6] = [
    Feature {
        icon: "\u{1F465}",
        title: "Multiplayer Battles",
        description: "Challenge friends in real-time chess matches with smooth, responsive gameplay.",
    },
    Feature {
        icon: "\u{1F916}",
        title: "Advanced AI",
        description: "Train against intelligent AI opponents with adjustable difficulty levels.",
    },
    Feature {
        icon: "\u{1F3C6}",
        title: "Global Leaderboards",
        description: "Compete for rankings and track your progress against the best players.",
    },
    Feature {
        icon: "\u{26A1}",
        title: "Lightning Fast",
        description: "Instant moves, real-time updates, and seamless gaming experience.",
    },
    Feature {
        icon: "\u{1F6E1}",
        title: "Fair Play",
        description: "Advanced anti-cheat system ensures every game is honest and competitive.",
    },
    Feature {
        icon: "\u{2B50}",
        title: "Premium Experience",
        description: "Beautiful, modern interface designed for chess enthusiasts.",
    },
];

/// (value, label) pairs under the hero.
pub(crate) const QUICK_STATS: [(&str, &str); 3] = [
    ("10K+", "Active Players"),
    ("500K+", "Games Played"),
    ("24/7", "Online Matches"),
];

/// Home page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <div class="home-page__backdrop" aria-hidden="true">
                    <span class="home-page__glyph home-page__glyph--1">"\u{2654}"</span>
                    <span class="home-page__glyph home-page__glyph--2">"\u{265B}"</span>
                    <span class="home-page__glyph home-page__glyph--3">"\u{265E}"</span>
                    <span class="home-page__glyph home-page__glyph--4">"\u{265C}"</span>
                </div>

                <div class="home-page__hero-content">
                    <div class="home-page__brand">
                        <span class="home-page__crown">"\u{1F451}"</span>
                        <h1 class="gradient-text">"ChessMaster"</h1>
                    </div>
                    <p class="home-page__tagline">
                        "Experience the ultimate chess platform. Challenge players worldwide, battle advanced AI, "
                        "and climb the ranks in the most elegant chess environment ever created."
                    </p>

                    <div class="home-page__cta">
                        <a href="/play" class="btn btn--hero btn--lg">"\u{1F465} Play vs Player"</a>
                        <a href="/play" class="btn btn--premium btn--lg">"\u{1F916} Challenge AI"</a>
                    </div>

                    <div class="home-page__stats">
                        {QUICK_STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="home-page__stat">
                                        <div class="home-page__stat-value">{*value}</div>
                                        <div class="home-page__stat-label">{*label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="home-page__features">
                <div class="home-page__section-header">
                    <h2 class="gradient-text">"Why Choose ChessMaster?"</h2>
                    <p>
                        "Built for chess enthusiasts, by chess enthusiasts. Every feature designed "
                        "to enhance your strategic gaming experience."
                    </p>
                </div>
                <div class="home-page__feature-grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <FeatureCard icon=f.icon title=f.title description=f.description/>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home-page__closing">
                <h2>"Ready to Master the Game?"</h2>
                <p>
                    "Join thousands of players in the ultimate chess experience. "
                    "Start your journey to become a chess master today."
                </p>
                <div class="home-page__cta">
                    <a href="/play" class="btn btn--hero btn--lg">"Start Playing Now"</a>
                    <a href="/leaderboard" class="btn btn--outline btn--lg">"View Leaderboard"</a>
                </div>
            </section>
        </div>
    }
}
