//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`board`, `play`, `ui`, ...) so individual
//! components can depend on small focused models. Everything here is plain
//! data; components wrap it in signals.

pub mod board;
pub mod leaderboard;
pub mod play;
pub mod ui;
