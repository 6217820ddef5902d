//! Footer: edition label with the running score and position tallies.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let tally = app.quiz.score_line();
    let line = Line::from(vec![
        Span::styled(
            format!("{} Terminal Edition • v{}", app.config.title, env!("CARGO_PKG_VERSION")),
            theme::muted(),
        ),
        Span::raw("   "),
        Span::styled(format!("✓ {}", tally.correct), theme::positive()),
        Span::raw("   "),
        Span::styled(format!("▤ {}", tally.position), theme::accent()),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
