//! Landing screen: title, bank stats, start and share prompts.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_column;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let card = centered_column(64, area);
    let bank = app.quiz.bank();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::card_border());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("⌨  ", theme::accent())),
        Line::from(Span::styled(app.config.title.as_str(), theme::title())),
        Line::from(""),
        Line::from(Span::styled(app.config.tagline.as_str(), theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} Questions", bank.len()), theme::accent_bold()),
            Span::styled("   •   ", theme::muted()),
            Span::styled(
                format!("{} Categories", bank.categories().len()),
                theme::accent_bold(),
            ),
        ]),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("[Enter] Start Quiz ▶", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled("[S] Share with Friends", theme::muted())),
    ];

    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, card);
}
