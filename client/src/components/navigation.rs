//! Sticky top navigation with route links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the routed page. Reads the current path from
//! the router and the theme from the `RwSignal<UiState>` context.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

/// A top-level navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { href: "/", icon: "\u{2302}", label: "Home" },
    NavItem { href: "/play", icon: "\u{265F}", label: "Play" },
    NavItem { href: "/leaderboard", icon: "\u{1F3C6}", label: "Leaderboard" },
];

/// Exact-match active check; `/play/x` does not activate `/play`.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

fn link_class(active: bool) -> &'static str {
    if active { "btn btn--premium nav__link" } else { "btn btn--ghost nav__link" }
}

/// Top navigation bar.
#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">
                    <span class="nav__logo">"\u{1F451}"</span>
                    <span class="nav__title">"ChessMaster"</span>
                </a>

                <div class="nav__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            let class = move || link_class(is_active(&pathname.get(), href));
                            view! {
                                <a href=href class=class>
                                    <span class="nav__icon">{item.icon}</span>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    class="btn btn--ghost nav__theme-toggle"
                    title="Toggle theme"
                    on:click=on_toggle_theme
                >
                    {move || ui.get().theme.toggle_icon()}
                </button>
            </div>
        </nav>
    }
}
