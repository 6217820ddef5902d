//! Indigo/emerald theme tokens for the CompQuest TUI
//!
//! # Color Palette
//! - **Accent**: Indigo (focus, progress, primary buttons)
//! - **Positive**: Emerald (correct answers)
//! - **Negative**: Rose (wrong picks, errors)
//! - **Warning**: Amber (status warnings, top-tier trophy)
//! - **Muted**: Slate (de-emphasized options, hints)

use ratatui::style::{Color, Modifier, Style};

use compquest_core::{OptionState, Tier};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Indigo accent (focus, highlights)
    pub accent: Color,
    /// Emerald (correct)
    pub positive: Color,
    /// Rose (wrong, errors)
    pub negative: Color,
    /// Amber (warnings)
    pub warning: Color,
    /// Sky blue (secondary info)
    pub neutral: Color,
    /// Slate (muted text, disabled)
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::indigo()
    }
}

impl Theme {
    pub fn indigo() -> Self {
        Self {
            accent: Color::Rgb(99, 102, 241),
            positive: Color::Rgb(16, 185, 129),
            negative: Color::Rgb(244, 63, 94),
            warning: Color::Rgb(234, 179, 8),
            neutral: Color::Rgb(59, 130, 246),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::White,
            text_secondary: Color::Rgb(148, 163, 184),
        }
    }

    /// Border/text color for an answer option.
    pub fn option_color(&self, state: OptionState) -> Color {
        match state {
            OptionState::Neutral => self.text_primary,
            OptionState::Focused => self.accent,
            OptionState::Correct => self.positive,
            OptionState::WrongSelected => self.negative,
            OptionState::Muted => self.muted,
        }
    }

    pub fn tier_color(&self, tier: Tier) -> Color {
        match tier {
            Tier::Top => self.warning,
            Tier::Second => self.accent,
            Tier::Third => self.neutral,
            Tier::Bottom => self.muted,
        }
    }
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(Theme::default().positive)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn title() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn card_border() -> Style {
    Style::default().fg(Theme::default().text_secondary)
}

/// Full style for an option row. Focus is reversed so it reads as a cursor;
/// muted options are dimmed.
pub fn option_style(state: OptionState) -> Style {
    let color = Theme::default().option_color(state);
    let base = Style::default().fg(color);
    match state {
        OptionState::Focused => base.add_modifier(Modifier::REVERSED | Modifier::BOLD),
        OptionState::Correct | OptionState::WrongSelected => base.add_modifier(Modifier::BOLD),
        OptionState::Muted => base.add_modifier(Modifier::DIM),
        OptionState::Neutral => base,
    }
}

pub fn tier_style(tier: Tier) -> Style {
    Style::default()
        .fg(Theme::default().tier_color(tier))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_colors_are_distinct_once_answered() {
        let theme = Theme::default();
        let correct = theme.option_color(OptionState::Correct);
        let wrong = theme.option_color(OptionState::WrongSelected);
        let muted = theme.option_color(OptionState::Muted);
        assert_ne!(correct, wrong);
        assert_ne!(correct, muted);
        assert_ne!(wrong, muted);
    }

    #[test]
    fn focus_is_reversed() {
        assert!(option_style(OptionState::Focused)
            .add_modifier
            .contains(Modifier::REVERSED));
        assert!(!option_style(OptionState::Neutral)
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn tier_colors() {
        let theme = Theme::default();
        assert_eq!(theme.tier_color(Tier::Top), theme.warning);
        assert_eq!(theme.tier_color(Tier::Bottom), theme.muted);
    }
}
