//! Question bank: the fixed, ordered list of questions a session walks.
//!
//! Banks are TOML documents with a `[[questions]]` array of tables. The
//! built-in computer basics bank is embedded at compile time; external
//! banks can be loaded from disk. Every bank is validated on construction,
//! so the rest of the engine can index `options[correct_answer]` freely.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of answer options every question carries (A through D).
pub const OPTION_COUNT: usize = 4;

/// Letters shown next to each option, indexed by option position.
pub const OPTION_LETTERS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

const BUILTIN_BANK: &str = include_str!("../data/computer_basics.toml");

/// Errors from loading or validating a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid question bank TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("question bank is empty")]
    Empty,

    #[error("question {id} has {found} options, expected {}", OPTION_COUNT)]
    OptionCount { id: u32, found: usize },

    #[error("question {id} marks option {index} as correct but only has {count} options")]
    CorrectAnswerOutOfRange { id: u32, index: usize, count: usize },

    #[error("duplicate question id {0}")]
    DuplicateId(u32),

    #[error("question {id} has blank {field}")]
    Blank { id: u32, field: &'static str },
}

/// A single multiple-choice question. Immutable once the bank is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub category: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    fn validate(&self) -> Result<(), BankError> {
        if self.text.trim().is_empty() {
            return Err(BankError::Blank {
                id: self.id,
                field: "text",
            });
        }
        if self.category.trim().is_empty() {
            return Err(BankError::Blank {
                id: self.id,
                field: "category",
            });
        }
        if self.options.len() != OPTION_COUNT {
            return Err(BankError::OptionCount {
                id: self.id,
                found: self.options.len(),
            });
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(BankError::Blank {
                id: self.id,
                field: "option",
            });
        }
        if self.correct_answer >= self.options.len() {
            return Err(BankError::CorrectAnswerOutOfRange {
                id: self.id,
                index: self.correct_answer,
                count: self.options.len(),
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct BankFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Ordered, validated, non-empty list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already-constructed questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            q.validate()?;
            if !seen.insert(q.id) {
                return Err(BankError::DuplicateId(q.id));
            }
        }
        Ok(Self { questions })
    }

    /// The bank compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_BANK).expect("built-in question bank failed validation")
    }

    pub fn from_toml_str(content: &str) -> Result<Self, BankError> {
        let file: BankFile = toml::from_str(content)?;
        Self::new(file.questions)
    }

    pub fn load(path: &Path) -> Result<Self, BankError> {
        let content = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|q| q.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, correct: usize) -> Question {
        Question {
            id,
            text: format!("Question {id}?"),
            options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
            correct_answer: correct,
            category: "General".into(),
        }
    }

    #[test]
    fn builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert!(bank.len() >= 10);
        for q in &bank {
            assert_eq!(q.options.len(), OPTION_COUNT);
            assert!(q.correct_answer < OPTION_COUNT);
        }
    }

    #[test]
    fn empty_bank_rejected() {
        assert!(matches!(QuestionBank::new(vec![]), Err(BankError::Empty)));
        assert!(matches!(
            QuestionBank::from_toml_str(""),
            Err(BankError::Empty)
        ));
    }

    #[test]
    fn correct_answer_out_of_range_rejected() {
        let err = QuestionBank::new(vec![question(1, 4)]).unwrap_err();
        assert!(matches!(
            err,
            BankError::CorrectAnswerOutOfRange { id: 1, index: 4, count: 4 }
        ));
    }

    #[test]
    fn wrong_option_count_rejected() {
        let mut q = question(7, 0);
        q.options.pop();
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(err, BankError::OptionCount { id: 7, found: 3 }));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = QuestionBank::new(vec![question(1, 0), question(1, 2)]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateId(1)));
    }

    #[test]
    fn blank_option_rejected() {
        let mut q = question(3, 0);
        q.options[2] = "   ".into();
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(err, BankError::Blank { id: 3, field: "option" }));
    }

    #[test]
    fn parses_toml_bank() {
        let toml = r#"
            [[questions]]
            id = 1
            category = "Hardware"
            text = "Brain of the computer?"
            options = ["Disk", "CPU", "RAM", "Monitor"]
            correct_answer = 1
        "#;
        let bank = QuestionBank::from_toml_str(toml).unwrap();
        assert_eq!(bank.len(), 1);
        assert!(bank.get(0).unwrap().is_correct(1));
        assert!(bank.get(1).is_none());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = QuestionBank::from_toml_str("[[questions]\nid = ").unwrap_err();
        assert!(matches!(err, BankError::Parse(_)));
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let mut a = question(1, 0);
        a.category = "Software".into();
        let mut b = question(2, 0);
        b.category = "Hardware".into();
        let mut c = question(3, 0);
        c.category = "Software".into();
        let bank = QuestionBank::new(vec![a, b, c]).unwrap();
        assert_eq!(bank.categories(), vec!["Software", "Hardware"]);
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.toml");
        std::fs::write(&path, BUILTIN_BANK).unwrap();
        let bank = QuestionBank::load(&path).unwrap();
        assert_eq!(bank, QuestionBank::builtin());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = QuestionBank::load(Path::new("/nonexistent/bank.toml")).unwrap_err();
        assert!(matches!(err, BankError::Io { .. }));
    }
}
