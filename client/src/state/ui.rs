//! Session-wide UI chrome state.
//!
//! DESIGN
//! ======
//! Provided once at the app root as a `RwSignal<UiState>` context. Pages and
//! the navigation bar read it from context instead of touching browser
//! globals; `util::dark_mode` is the only code that talks to the DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color scheme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Value written to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph for the toggle button: a sun offers light mode, a moon dark mode.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}",
            Theme::Light => "\u{263E}",
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
