//! Top-level UI layout: active screen, footer tallies and status bar.

pub mod finished;
pub mod footer;
pub mod landing;
pub mod overlays;
pub mod playing;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use compquest_core::QuizStatus;

use crate::app::{AppState, Overlay};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + footer + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let main_area = chunks[0];

    match app.quiz.status() {
        QuizStatus::Landing => landing::render(f, main_area, app),
        QuizStatus::Playing => playing::render(f, main_area, app),
        QuizStatus::Finished => finished::render(f, main_area, app),
    }

    footer::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Draw overlays on top.
    match &app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::ShareFallback(message) => overlays::render_share_fallback(f, main_area, message),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Horizontally center a column of at most `max_width` cells.
pub fn centered_column(max_width: u16, area: Rect) -> Rect {
    let width = max_width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use compquest_core::{QuestionBank, QuizConfig};

    use crate::platform::TerminalPlatform;

    fn app() -> AppState {
        AppState::new(
            QuestionBank::builtin(),
            QuizConfig::default(),
            TerminalPlatform::new(true),
        )
    }

    fn render(app: &AppState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn landing_screen_shows_title_and_count() {
        let app = app();
        let text = render(&app);
        assert!(text.contains("CompQuest"));
        assert!(text.contains(&format!("{} Questions", app.quiz.bank().len())));
        assert!(text.contains("Start Quiz"));
    }

    #[test]
    fn playing_screen_shows_progress_and_hint() {
        let mut app = app();
        app.start();
        let text = render(&app);
        assert!(text.contains(&format!("Question 1 of {}", app.quiz.bank().len())));
        assert!(!text.contains("QUESTION 1 OF"));
        assert!(text.contains("Select an option to verify your answer"));
        assert!(!text.contains("Next Question"));
    }

    #[test]
    fn answered_question_offers_next() {
        let mut app = app();
        app.start();
        app.select(0);
        let text = render(&app);
        assert!(text.contains("Next Question"));
        assert!(text.contains("✓"));
    }

    #[test]
    fn finished_screen_shows_summary() {
        let mut app = app();
        app.start();
        let total = app.quiz.bank().len();
        for i in 0..total {
            let correct = app.quiz.bank().get(i).unwrap().correct_answer;
            app.select(correct);
            app.advance();
        }
        let text = render(&app);
        assert!(text.contains("Quiz Complete!"));
        assert!(text.contains("Outstanding! You're a Tech Guru!"));
        assert!(text.contains("100%"));
    }

    #[test]
    fn share_fallback_overlay_shows_link() {
        let mut app = app();
        app.share();
        let text = render(&app);
        assert!(text.contains(&app.config.share.url));
    }

    #[test]
    fn startup_warning_shows_in_status_bar() {
        let mut app = app();
        app.set_warning("Logging disabled: opening log file /nope/compquest.log");
        let text = render(&app);
        assert!(text.contains("Logging disabled"));
        assert!(text.contains("Start Quiz"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app();
        app.start();
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
