//! Quiz state and the pure transition function.
//!
//! `reduce` never mutates its input: every action yields a replacement
//! `QuizState`. Out-of-contract actions return an unchanged copy, which is
//! how guards are expressed.

use serde::Serialize;

use crate::bank::QuestionBank;

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizStatus {
    Landing,
    Playing,
    Finished,
}

/// User-triggered input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Select(usize),
    Advance,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizState {
    pub current_index: usize,
    pub score: usize,
    pub selected_option: Option<usize>,
    pub is_answered: bool,
    pub status: QuizStatus,
    /// One slot per question, indexed by bank position.
    pub user_answers: Vec<Option<usize>>,
}

impl QuizState {
    /// Fresh state on the landing screen for a bank of `question_count`.
    pub fn landing(question_count: usize) -> Self {
        Self {
            current_index: 0,
            score: 0,
            selected_option: None,
            is_answered: false,
            status: QuizStatus::Landing,
            user_answers: vec![None; question_count],
        }
    }

    /// Fresh state at the first question. Start and restart both land here.
    pub fn playing(question_count: usize) -> Self {
        Self {
            status: QuizStatus::Playing,
            ..Self::landing(question_count)
        }
    }

    pub fn answered_count(&self) -> usize {
        self.user_answers.iter().filter(|a| a.is_some()).count()
    }

    /// Score recomputed from the answer history. Matches `score` whenever
    /// the state was built by `reduce`.
    pub fn recount_score(&self, bank: &QuestionBank) -> usize {
        self.user_answers
            .iter()
            .zip(bank.iter())
            .filter(|(answer, q)| **answer == Some(q.correct_answer))
            .count()
    }
}

/// Apply `action` to `state` against `bank`.
pub fn reduce(state: &QuizState, action: Action, bank: &QuestionBank) -> QuizState {
    match action {
        Action::Start | Action::Restart => match state.status {
            QuizStatus::Landing | QuizStatus::Finished => QuizState::playing(bank.len()),
            QuizStatus::Playing => state.clone(),
        },
        Action::Select(option) => select(state, option, bank),
        Action::Advance => advance(state, bank),
    }
}

fn select(state: &QuizState, option: usize, bank: &QuestionBank) -> QuizState {
    if state.status != QuizStatus::Playing || state.is_answered {
        return state.clone();
    }
    let Some(question) = bank.get(state.current_index) else {
        return state.clone();
    };
    if option >= question.option_count() {
        return state.clone();
    }

    let mut user_answers = state.user_answers.clone();
    if let Some(slot) = user_answers.get_mut(state.current_index) {
        *slot = Some(option);
    }
    let score = if question.is_correct(option) {
        state.score + 1
    } else {
        state.score
    };

    QuizState {
        selected_option: Some(option),
        is_answered: true,
        score,
        user_answers,
        ..state.clone()
    }
}

fn advance(state: &QuizState, bank: &QuestionBank) -> QuizState {
    if state.status != QuizStatus::Playing || !state.is_answered {
        return state.clone();
    }
    if state.current_index >= bank.last_index() {
        QuizState {
            status: QuizStatus::Finished,
            ..state.clone()
        }
    } else {
        QuizState {
            current_index: state.current_index + 1,
            is_answered: false,
            selected_option: None,
            ..state.clone()
        }
    }
}
