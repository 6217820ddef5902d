//! Arbitrary key sequences against the full app: no panics, and quiz
//! invariants hold after every key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use compquest_core::{QuestionBank, QuizConfig, QuizStatus};
use compquest_tui::{handle_key, ui, AppState, TerminalPlatform};

fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        prop::sample::select(vec![
            'a', 'b', 'c', 'd', 'A', 'D', '1', '4', 'j', 'k', 'n', 'r', 's', 'S', '?', ' ', 'x',
        ])
        .prop_map(KeyCode::Char),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Right),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
    ]
}

proptest! {
    #[test]
    fn random_keys_keep_quiz_consistent(keys in prop::collection::vec(arb_key(), 0..200)) {
        let mut app = AppState::new(
            QuestionBank::builtin(),
            QuizConfig::default(),
            TerminalPlatform::new(true),
        );
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();

        for code in keys {
            handle_key(&mut app, KeyEvent::new(code, KeyModifiers::NONE));
            if !app.running {
                break;
            }
            terminal.draw(|f| ui::draw(f, &app)).unwrap();

            let state = app.quiz.state();
            let bank = app.quiz.bank();
            prop_assert_eq!(state.score, state.recount_score(bank));
            prop_assert_eq!(state.user_answers.len(), bank.len());
            prop_assert_eq!(state.is_answered, state.selected_option.is_some());
            if state.status == QuizStatus::Finished {
                prop_assert!(state.user_answers.iter().all(|a| a.is_some()));
            }
        }
    }
}
