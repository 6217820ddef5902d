//! Bottom status bar: key hints for the current screen, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use compquest_core::QuizStatus;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(format!(" {}", hints(app)), theme::muted()));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(app: &AppState) -> &'static str {
    match app.quiz.status() {
        QuizStatus::Landing => "Enter:start S:share ?:help q:quit",
        QuizStatus::Playing if app.quiz.state().is_answered => "Enter/n:next ?:help q:quit",
        QuizStatus::Playing => "a-d:answer j/k:move Enter:pick PgUp/PgDn:scroll ?:help q:quit",
        QuizStatus::Finished => "Enter/r:restart S:share ?:help q:quit",
    }
}
