//! # discrete-quiz
//!
//! A terminal multiple-choice quiz over a JSON question bank. Questions that
//! share a dataset (a frequency table, a list of raw values, a passage) are
//! grouped and shown together; groups and the questions inside them are
//! shuffled on every attempt.
//!
//! The core is usable without a terminal:
//!
//! ```rust
//! use discrete_quiz::{group_questions, parse_units, Progress, QuizSession};
//! use rand::SeedableRng;
//!
//! let units = parse_units(r#"[{"title": "Logic", "questions": [
//!     {"question": "p ∧ q is true when?", "options": ["p or q", "p and q"], "answer": 1}
//! ]}]"#)?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let Progress::InProgress(mut session) = QuizSession::start(group_questions(&units, &mut rng)) else {
//!     unreachable!("the bank has a question");
//! };
//! assert!(session.submit_answer(1)?.is_correct);
//!
//! let Progress::Finished(results) = session.advance() else {
//!     unreachable!("there was only one question");
//! };
//! assert_eq!(results.grade.as_str(), "A");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Running it in the terminal:
//!
//! ```rust,no_run
//! use discrete_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json", QuizConfig::default())?;
//!     quiz.run()
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod grouping;
pub mod logging;
mod models;
pub mod results;
pub mod session;
pub mod shuffle;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, QuestionScreen, ResultsScreen, Screen};
pub use config::QuizConfig;
pub use data::{LoadError, load_units_from_json, parse_units};
pub use grouping::{flatten, group_questions};
pub use models::{AnswerSpec, DataBlock, Group, Question, QuizQuestion, SharedData, Unit};
pub use results::{AnswerRecord, Grade, QuizResults};
pub use session::{AnswerFeedback, Progress, QuestionStep, QuizSession, SubmitError};
pub use shuffle::{shuffle, shuffle_in_place};

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(units: Vec<Unit>, config: QuizConfig) -> Self {
        Self {
            app: App::new(units, config),
        }
    }

    /// Load a quiz from a JSON question bank.
    ///
    /// ```rust,no_run
    /// use discrete_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("questions.json", QuizConfig::default()).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let units = load_units_from_json(path)?;
        Ok(Self::new(units, config))
    }

    /// A quiz that only shows why loading failed.
    pub fn load_failed(error: &QuizError, config: QuizConfig) -> Self {
        Self {
            app: App::load_failed(error.to_string(), config),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    match app.screen() {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Question(_) => handle_quiz_input(app, key),
        Screen::Results(_) => handle_result_input(app, key),
        Screen::LoadFailed(_) => {}
    }
    false
}

fn handle_welcome_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.start_quiz();
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(index) = digit.to_digit(10) {
                app.select_option(index as usize - 1);
            }
        }
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}
