//! CompQuest CLI: bank validation and line-oriented play.
//!
//! Commands:
//! - `validate`: parse and validate a question bank TOML file
//! - `play`: run a quiz on stdin/stdout, optionally emitting a JSON report

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use compquest_core::{
    option_index, option_letter, Headless, OptionState, QuestionBank, QuizController, QuizStatus,
    ShareConfig, Tier,
};

#[derive(Parser)]
#[command(name = "compquest", about = "CompQuest CLI: computer basics quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a question bank file.
    Validate {
        /// Bank TOML file.
        file: PathBuf,
    },
    /// Play a quiz on stdin/stdout.
    Play {
        /// Bank TOML file. Defaults to the built-in bank.
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Print the final report as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Final report for `play --json`.
#[derive(Debug, Serialize)]
struct Report {
    score: usize,
    total: usize,
    percent: u8,
    tier: Tier,
    message: &'static str,
    answers: Vec<AnswerRecord>,
}

#[derive(Debug, Serialize)]
struct AnswerRecord {
    id: u32,
    category: String,
    picked: Option<char>,
    correct: char,
    is_correct: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file } => run_validate(&file),
        Commands::Play { bank, json } => {
            let bank = match bank {
                Some(path) => load_bank(&path)?,
                None => QuestionBank::builtin(),
            };
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_play(bank, &mut stdin.lock(), &mut stdout.lock(), json)
        }
    }
}

fn load_bank(path: &Path) -> Result<QuestionBank> {
    QuestionBank::load(path).with_context(|| format!("loading question bank {}", path.display()))
}

fn run_validate(path: &Path) -> Result<()> {
    let bank = load_bank(path)?;
    println!("✓ {} is valid", path.display());
    println!("  {} questions", bank.len());
    println!("  categories: {}", bank.categories().join(", "));
    Ok(())
}

fn run_play<R: BufRead, W: Write>(
    bank: QuestionBank,
    input: &mut R,
    out: &mut W,
    json: bool,
) -> Result<()> {
    let mut quiz = QuizController::new(bank, Headless, ShareConfig::default().payload());
    quiz.start();

    while quiz.status() == QuizStatus::Playing {
        let progress = quiz.progress();
        let question = quiz
            .current_question()
            .context("no current question while playing")?;
        writeln!(out)?;
        writeln!(out, "{} ({}%)  [{}]", progress.label, progress.percent, question.category)?;
        writeln!(out, "{}", question.text)?;
        for view in quiz.option_views(None) {
            writeln!(out, "  {}) {}", view.letter, view.text)?;
        }

        let pick = read_pick(input, out)?;
        quiz.select(pick);

        for view in quiz.option_views(None) {
            match view.state {
                OptionState::Correct if quiz.state().selected_option == Some(view.index) => {
                    writeln!(out, "✓ Correct!")?;
                }
                OptionState::Correct => {
                    writeln!(out, "✗ Wrong. The answer is {}) {}", view.letter, view.text)?;
                }
                _ => {}
            }
        }
        quiz.advance();
    }

    let summary = quiz.summary();
    if json {
        let answers = quiz
            .bank()
            .iter()
            .zip(quiz.state().user_answers.iter())
            .map(|(q, answer)| AnswerRecord {
                id: q.id,
                category: q.category.clone(),
                picked: answer.map(option_letter),
                correct: option_letter(q.correct_answer),
                is_correct: *answer == Some(q.correct_answer),
            })
            .collect();
        let report = Report {
            score: summary.score,
            total: summary.total,
            percent: summary.percent,
            tier: summary.tier,
            message: summary.message(),
            answers,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out)?;
        writeln!(out, "Quiz Complete! {}", summary.tier.badge())?;
        writeln!(out, "{}", summary.message())?;
        writeln!(out, "Your score: {} / {} ({}%)", summary.score, summary.total, summary.percent)?;
    }
    Ok(())
}

/// Prompt until a valid letter arrives. End of input is an error.
fn read_pick<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<usize> {
    loop {
        write!(out, "Your answer (A-D): ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended before the quiz finished");
        }
        let mut chars = line.trim().chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(index) = option_index(c) {
                return Ok(index);
            }
        }
        writeln!(out, "Please type one of A, B, C or D.")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compquest_core::Question;

    fn bank() -> QuestionBank {
        let questions = [1usize, 0, 2]
            .iter()
            .enumerate()
            .map(|(i, &c)| Question {
                id: i as u32 + 1,
                text: format!("Question {i}"),
                options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
                correct_answer: c,
                category: "Cli".into(),
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    fn play(input: &str, json: bool) -> Result<String> {
        let mut out = Vec::new();
        run_play(bank(), &mut input.as_bytes(), &mut out, json)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn text_session_reports_score() {
        let out = play("b\na\nd\n", false).unwrap();
        assert!(out.contains("Question 1 of 3 (33%)"));
        assert!(out.contains("✓ Correct!"));
        assert!(out.contains("✗ Wrong. The answer is C) y"));
        assert!(out.contains("Your score: 2 / 3 (67%)"));
        assert!(out.contains(Tier::Third.message()));
    }

    #[test]
    fn invalid_input_reprompts() {
        let out = play("x\nab\n\nB\nA\nC\n", false).unwrap();
        assert_eq!(out.matches("Please type one of A, B, C or D.").count(), 3);
        assert!(out.contains("Your score: 3 / 3 (100%)"));
    }

    #[test]
    fn early_eof_is_error() {
        assert!(play("b\n", false).is_err());
    }

    #[test]
    fn json_report() {
        let out = play("b\nb\nc\n", true).unwrap();
        let start = out.find('{').unwrap();
        let report: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        assert_eq!(report["score"], 2);
        assert_eq!(report["total"], 3);
        assert_eq!(report["percent"], 67);
        assert_eq!(report["tier"], "third");
        assert_eq!(report["answers"][1]["picked"], "B");
        assert_eq!(report["answers"][1]["correct"], "A");
        assert_eq!(report["answers"][1]["is_correct"], false);
    }
}
