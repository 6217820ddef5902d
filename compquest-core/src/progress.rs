//! Progress indicator: how far through the bank the player is.

use serde::Serialize;

/// Completion of the current session as shown above each question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Question number being shown, 1-based.
    pub position: usize,
    pub total: usize,
    pub percent: u8,
    pub label: String,
}

impl Progress {
    /// Progress for the question at `current_index` (0-based) out of `total`.
    pub fn new(current_index: usize, total: usize) -> Self {
        let position = current_index + 1;
        Self {
            position,
            total,
            percent: rounded_percent(position, total),
            label: format!("Question {position} of {total}"),
        }
    }

    /// Fraction in 0.0..=1.0, for gauges.
    pub fn ratio(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }
}

/// `round(part / whole * 100)` with halves rounding up, clamped to 100.
/// A zero `whole` yields 0.
pub fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    // floor((200 * part + whole) / (2 * whole)) == floor(100 * part / whole + 0.5)
    ((200 * part + whole) / (2 * whole)) as u8
}
