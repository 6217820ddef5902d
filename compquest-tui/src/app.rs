//! Application state: single-owner, main-thread only.
//!
//! Quiz progression lives in the core controller. This module only adds
//! what the terminal needs on top: option focus, overlays and the status line.

use compquest_core::{
    QuestionBank, QuizConfig, QuizController, QuizStatus, ShareOutcome, OPTION_COUNT,
};

use crate::platform::TerminalPlatform;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    /// Share link for manual copying, shown when no clipboard is reachable.
    ShareFallback(String),
}

/// Top-level application state.
pub struct AppState {
    pub quiz: QuizController<TerminalPlatform>,
    pub config: QuizConfig,
    pub running: bool,
    /// Keyboard cursor over the options while unanswered.
    pub focus: usize,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(bank: QuestionBank, config: QuizConfig, platform: TerminalPlatform) -> Self {
        let quiz = QuizController::new(bank, platform, config.share.payload());
        Self {
            quiz,
            config,
            running: true,
            focus: 0,
            overlay: Overlay::None,
            status_message: None,
        }
    }

    pub fn start(&mut self) {
        if self.quiz.start() {
            self.focus = 0;
            self.status_message = None;
        }
    }

    pub fn restart(&mut self) {
        if self.quiz.restart() {
            self.focus = 0;
            self.status_message = None;
        }
    }

    pub fn select(&mut self, option: usize) {
        if self.quiz.select(option) {
            self.focus = option;
        }
    }

    /// Select the focused option, or move on once answered.
    pub fn confirm(&mut self) {
        if self.quiz.state().is_answered {
            self.advance();
        } else {
            self.select(self.focus);
        }
    }

    pub fn advance(&mut self) {
        if self.quiz.advance() {
            self.focus = 0;
        }
    }

    pub fn focus_next(&mut self) {
        if self.can_move_focus() {
            self.focus = (self.focus + 1) % OPTION_COUNT;
        }
    }

    pub fn focus_prev(&mut self) {
        if self.can_move_focus() {
            self.focus = (self.focus + OPTION_COUNT - 1) % OPTION_COUNT;
        }
    }

    fn can_move_focus(&self) -> bool {
        self.quiz.status() == QuizStatus::Playing && !self.quiz.state().is_answered
    }

    /// Focus to hand to the option renderer; `None` once answered.
    pub fn render_focus(&self) -> Option<usize> {
        if self.can_move_focus() {
            Some(self.focus)
        } else {
            None
        }
    }

    pub fn share(&mut self) {
        match self.quiz.share() {
            ShareOutcome::Shared => self.set_status("Link copied to clipboard"),
            ShareOutcome::Fallback { message } => self.overlay = Overlay::ShareFallback(message),
            ShareOutcome::Failed => {}
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
