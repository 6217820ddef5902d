//! Overlay widgets: keyboard help and share-link fallback.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard [any key]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Landing");
    key(&mut lines, "Enter / s", "Start the quiz");
    key(&mut lines, "S", "Share with friends");
    lines.push(Line::from(""));

    section(&mut lines, "Question");
    key(&mut lines, "a-d / 1-4", "Answer directly");
    key(&mut lines, "j / k", "Move the cursor between options");
    key(&mut lines, "Enter / Space", "Pick the highlighted option, then continue");
    key(&mut lines, "n / →", "Next question once answered");
    key(&mut lines, "PgUp / PgDn", "Scroll a long question");
    lines.push(Line::from(""));

    section(&mut lines, "Results");
    key(&mut lines, "Enter / r", "Try again");
    key(&mut lines, "S", "Share my result");
    lines.push(Line::from(""));

    section(&mut lines, "Anywhere");
    key(&mut lines, "?", "This help");
    key(&mut lines, "q / Ctrl+C", "Quit");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

/// Shown when no clipboard is reachable so the link can be copied by hand.
pub fn render_share_fallback(f: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(60, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Share ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::text())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::muted())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>14}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
