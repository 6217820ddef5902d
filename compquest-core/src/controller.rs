//! Quiz controller: single owner of `QuizState`.
//!
//! Every operation routes through `dispatch`, which runs the pure reducer,
//! swaps in the new state wholesale and fires the scroll side effect. Calls
//! outside an operation's precondition leave the state untouched.

use tracing::{debug, info, warn};

use crate::bank::{Question, QuestionBank};
use crate::options::{render_options, OptionView};
use crate::platform::{Platform, ScrollBehavior, ShareError, ShareOutcome, SharePayload};
use crate::progress::Progress;
use crate::state::{reduce, Action, QuizState, QuizStatus};
use crate::summary::ResultSummary;

/// Footer tallies shown on every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub correct: String,
    pub position: String,
}

pub struct QuizController<P: Platform> {
    bank: QuestionBank,
    state: QuizState,
    platform: P,
    share_payload: SharePayload,
}

impl<P: Platform> QuizController<P> {
    pub fn new(bank: QuestionBank, platform: P, share_payload: SharePayload) -> Self {
        let state = QuizState::landing(bank.len());
        Self {
            bank,
            state,
            platform,
            share_payload,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn status(&self) -> QuizStatus {
        self.state.status
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn start(&mut self) -> bool {
        self.dispatch(Action::Start)
    }

    pub fn select(&mut self, option: usize) -> bool {
        self.dispatch(Action::Select(option))
    }

    pub fn advance(&mut self) -> bool {
        self.dispatch(Action::Advance)
    }

    pub fn restart(&mut self) -> bool {
        self.dispatch(Action::Restart)
    }

    /// Apply an action. Returns false when a guard turned it into a no-op.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(&self.state, action, &self.bank);
        if next == self.state {
            debug!(?action, status = ?self.state.status, "action ignored by guard");
            return false;
        }

        let previous = std::mem::replace(&mut self.state, next);
        match action {
            Action::Start | Action::Restart => {
                info!(questions = self.bank.len(), "session started");
                self.platform.scroll_to_top(ScrollBehavior::Instant);
            }
            Action::Select(option) => {
                debug!(
                    index = self.state.current_index,
                    option,
                    correct = self.state.score > previous.score,
                    score = self.state.score,
                    "answer locked in"
                );
            }
            Action::Advance if self.state.status == QuizStatus::Finished => {
                info!(
                    score = self.state.score,
                    total = self.bank.len(),
                    "session finished"
                );
            }
            Action::Advance => {
                debug!(index = self.state.current_index, "advanced");
                self.platform.scroll_to_top(ScrollBehavior::Smooth);
            }
        }
        true
    }

    /// Best-effort share. Never touches quiz state.
    pub fn share(&mut self) -> ShareOutcome {
        match self.platform.share(&self.share_payload) {
            Ok(()) => {
                info!(url = %self.share_payload.url, "shared");
                ShareOutcome::Shared
            }
            Err(ShareError::Unavailable) => {
                debug!("share capability unavailable, offering link");
                ShareOutcome::Fallback {
                    message: format!("Copy this link to your friend: {}", self.share_payload.url),
                }
            }
            Err(e) => {
                warn!(error = %e, "error sharing");
                ShareOutcome::Failed
            }
        }
    }

    /// The question on screen. `None` on the landing screen.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state.status {
            QuizStatus::Landing => None,
            QuizStatus::Playing | QuizStatus::Finished => self.bank.get(self.state.current_index),
        }
    }

    pub fn is_last(&self) -> bool {
        self.state.current_index == self.bank.last_index()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.state.current_index, self.bank.len())
    }

    /// Option views for the current question; empty on the landing screen.
    pub fn option_views(&self, focus: Option<usize>) -> Vec<OptionView<'_>> {
        match self.current_question() {
            Some(q) => render_options(
                q,
                self.state.selected_option,
                self.state.is_answered,
                focus,
            ),
            None => Vec::new(),
        }
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.state.score, self.bank.len())
    }

    pub fn score_line(&self) -> ScoreLine {
        ScoreLine {
            correct: format!("{} Correct", self.state.score),
            position: format!("{}/{}", self.state.current_index + 1, self.bank.len()),
        }
    }
}
