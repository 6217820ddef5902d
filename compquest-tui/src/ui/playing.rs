//! Playing screen: progress bar, question card and answer options.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use compquest_core::{OptionView, Progress};

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_column;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let column = centered_column(80, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // label + percent
            Constraint::Length(1), // bar
            Constraint::Length(1),
            Constraint::Min(6), // card
            Constraint::Length(1), // hint
        ])
        .split(column);

    let progress = app.quiz.progress();
    render_progress(f, chunks[0], chunks[1], &progress);
    render_card(f, chunks[3], app);

    let hint = Paragraph::new(Line::from(Span::styled(
        "ⓘ Select an option to verify your answer",
        theme::muted(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hint, chunks[4]);
}

fn render_progress(f: &mut Frame, label_area: Rect, bar_area: Rect, progress: &Progress) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(label_area);
    f.render_widget(
        Paragraph::new(Span::styled(progress.label.as_str(), theme::accent_bold())),
        halves[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(format!("{}%", progress.percent), theme::accent_bold()))
            .alignment(Alignment::Right),
        halves[1],
    );

    let gauge = Gauge::default()
        .gauge_style(theme::accent())
        .ratio(progress.ratio())
        .label("");
    f.render_widget(gauge, bar_area);
}

fn render_card(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(question) = app.quiz.current_question() else {
        return;
    };
    let state = app.quiz.state();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::card_border());

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        question.category.to_uppercase(),
        theme::accent(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(question.text.as_str(), theme::title())));
    lines.push(Line::from(""));

    for view in app.quiz.option_views(app.render_focus()) {
        lines.push(option_line(&view));
        lines.push(Line::from(""));
    }

    if state.is_answered {
        let label = if app.quiz.is_last() {
            "[Enter] Finish Quiz →"
        } else {
            "[Enter] Next Question →"
        };
        lines.push(
            Line::from(Span::styled(label, theme::accent_bold())).alignment(Alignment::Right),
        );
    }

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.quiz.platform().scroll_offset, 0));
    f.render_widget(para, area);
}

fn option_line<'a>(view: &OptionView<'a>) -> Line<'a> {
    let style = theme::option_style(view.state);
    let mut spans = vec![
        Span::styled(format!(" ({}) ", view.letter), style),
        Span::styled(view.text, style),
    ];
    if let Some(marker) = view.state.marker() {
        spans.push(Span::styled(format!("  {marker}"), style));
    }
    Line::from(spans)
}
