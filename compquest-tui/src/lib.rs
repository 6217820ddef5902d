//! CompQuest TUI: terminal front end for the quiz engine.
//!
//! Three screens driven by the core controller:
//! - Landing: title, bank stats, start and share
//! - Playing: progress bar, question card, options A-D
//! - Finished: tier badge, score, restart and share

pub mod app;
pub mod input;
pub mod logging;
pub mod platform;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use platform::TerminalPlatform;
