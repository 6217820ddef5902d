//! CompQuest Core: question bank, quiz state machine and the pure views
//! derived from it.
//!
//! - Question bank loading and validation (built-in TOML asset or file)
//! - `QuizState` and the pure `reduce` transition function
//! - `QuizController`, the single writer of state, with injected platform
//!   capabilities for scrolling and sharing
//! - Progress indicator, answer option renderer and result summary

pub mod bank;
pub mod config;
pub mod controller;
pub mod options;
pub mod platform;
pub mod progress;
pub mod state;
pub mod summary;

pub use bank::{BankError, Question, QuestionBank, OPTION_COUNT};
pub use config::{ConfigError, QuizConfig, ShareConfig};
pub use controller::{QuizController, ScoreLine};
pub use options::{option_index, option_letter, render_options, OptionState, OptionView};
pub use platform::{Headless, Platform, ScrollBehavior, ShareError, ShareOutcome, SharePayload};
pub use progress::Progress;
pub use state::{reduce, Action, QuizState, QuizStatus};
pub use summary::{ResultSummary, Tier};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the controller can move to another thread when
    /// its platform can.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<QuestionBank>();
        require_sync::<QuestionBank>();
        require_send::<QuizState>();
        require_sync::<QuizState>();
        require_send::<QuizController<Headless>>();
        require_sync::<QuizController<Headless>>();
    }
}
