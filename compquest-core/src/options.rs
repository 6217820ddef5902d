//! Answer option rendering: visual and interaction state per option.
//!
//! Pure function of the question and the current selection. Front ends map
//! `OptionState` onto their own styling; nothing here knows about colors.

use serde::Serialize;

use crate::bank::{Question, OPTION_LETTERS};

/// How an option should look and behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    /// Unanswered, selectable.
    Neutral,
    /// Unanswered and under the cursor. Interaction hint only.
    Focused,
    /// The correct option, once the question is answered.
    Correct,
    /// The player's pick, when it was wrong.
    WrongSelected,
    /// Neither picked nor correct, once answered.
    Muted,
}

impl OptionState {
    pub fn marker(self) -> Option<char> {
        match self {
            OptionState::Correct => Some('✓'),
            OptionState::WrongSelected => Some('✗'),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView<'a> {
    pub index: usize,
    pub letter: char,
    pub text: &'a str,
    pub state: OptionState,
    /// False once the question is answered.
    pub enabled: bool,
}

/// Render every option of `question`.
///
/// `focus` only matters while unanswered. Once answered, correctness wins
/// over selection: a correct pick renders as `Correct`.
pub fn render_options<'a>(
    question: &'a Question,
    selected: Option<usize>,
    is_answered: bool,
    focus: Option<usize>,
) -> Vec<OptionView<'a>> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let state = if !is_answered {
                if focus == Some(index) {
                    OptionState::Focused
                } else {
                    OptionState::Neutral
                }
            } else if question.is_correct(index) {
                OptionState::Correct
            } else if selected == Some(index) {
                OptionState::WrongSelected
            } else {
                OptionState::Muted
            };
            OptionView {
                index,
                letter: option_letter(index),
                text: text.as_str(),
                state,
                enabled: !is_answered,
            }
        })
        .collect()
}

/// Display letter for an option index; falls back to '?' past D.
pub fn option_letter(index: usize) -> char {
    OPTION_LETTERS.get(index).copied().unwrap_or('?')
}

/// Inverse of [`option_letter`], case-insensitive.
pub fn option_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    OPTION_LETTERS.iter().position(|&l| l == upper)
}
