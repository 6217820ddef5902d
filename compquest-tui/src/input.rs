//! Keyboard input dispatch: overlays → global keys → screen-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use compquest_core::{option_index, QuizStatus};

use crate::app::{AppState, Overlay};

/// Lines moved per PageUp/PageDown on the question card.
const PAGE_LINES: u16 = 5;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first; any key dismisses them.
    if app.overlay != Overlay::None {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        _ => {}
    }

    // 3. Screen-specific keys.
    match app.quiz.status() {
        QuizStatus::Landing => handle_landing_key(app, key),
        QuizStatus::Playing => handle_playing_key(app, key),
        QuizStatus::Finished => handle_finished_key(app, key),
    }
}

fn handle_landing_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => app.start(),
        KeyCode::Char('S') => app.share(),
        _ => {}
    }
}

fn handle_playing_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
            if let Some(index) = option_index(c) {
                app.select(index);
            }
        }
        KeyCode::Char(c @ '1'..='4') => {
            app.select(c as usize - '1' as usize);
        }
        KeyCode::Char('j') | KeyCode::Down => app.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        KeyCode::Char('n') | KeyCode::Right => app.advance(),
        KeyCode::PageDown => app.quiz.platform_mut().scroll_down(PAGE_LINES),
        KeyCode::PageUp => app.quiz.platform_mut().scroll_up(PAGE_LINES),
        _ => {}
    }
}

fn handle_finished_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => app.restart(),
        KeyCode::Char('S') | KeyCode::Char('s') => app.share(),
        _ => {}
    }
}
