//! Finished screen: tier badge, message, score and restart/share prompts.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_column;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let card = centered_column(60, area);
    let summary = app.quiz.summary();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::card_border());
    let inner = block.inner(card);
    f.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // badge, heading, message, score
            Constraint::Length(1), // gauge
            Constraint::Min(0),    // prompts
        ])
        .split(inner);

    let top = vec![
        Line::from(""),
        Line::from(Span::styled(summary.tier.badge(), theme::tier_style(summary.tier))),
        Line::from(""),
        Line::from(Span::styled("Quiz Complete!", theme::title())),
        Line::from(Span::styled(summary.message(), theme::muted())),
        Line::from(""),
        Line::from(Span::styled("YOUR SCORE", theme::muted())),
        Line::from(vec![
            Span::styled(summary.score.to_string(), theme::accent_bold()),
            Span::styled(format!(" / {}", summary.total), theme::muted()),
        ]),
        Line::from(""),
    ];
    f.render_widget(
        Paragraph::new(top)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let gauge_area = centered_column(40, chunks[1]);
    let gauge = Gauge::default()
        .gauge_style(theme::accent())
        .ratio(summary.ratio())
        .label(format!("{}%", summary.percent));
    f.render_widget(gauge, gauge_area);

    let prompts = vec![
        Line::from(""),
        Line::from(Span::styled("[Enter] ↺ Try Again", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled("[S] Share My Result", theme::muted())),
    ];
    f.render_widget(
        Paragraph::new(prompts).alignment(Alignment::Center),
        chunks[2],
    );
}
