use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::QuizConfig;
use crate::grouping::group_questions;
use crate::models::Unit;
use crate::results::QuizResults;
use crate::session::{Progress, QuizSession, SubmitError};

/// What the terminal is showing.
#[derive(Debug)]
pub enum Screen {
    Welcome,
    Question(QuestionScreen),
    Results(ResultsScreen),
    /// The bank could not be loaded; nothing else is reachable.
    LoadFailed(String),
}

#[derive(Debug)]
pub struct QuestionScreen {
    pub session: QuizSession,
    pub selected: usize,
    /// Set when the current question cannot be scored and may only be skipped.
    pub notice: Option<String>,
}

impl QuestionScreen {
    fn new(session: QuizSession) -> Self {
        Self {
            session,
            selected: 0,
            notice: None,
        }
    }

    fn option_count(&self) -> usize {
        self.session.current_question().options.len()
    }

    fn is_locked(&self) -> bool {
        self.session.is_answered() || self.notice.is_some() || self.option_count() == 0
    }
}

#[derive(Debug)]
pub struct ResultsScreen {
    pub results: QuizResults,
    pub scroll: usize,
}

pub struct App {
    screen: Screen,
    units: Vec<Unit>,
    config: QuizConfig,
    rng: StdRng,
}

impl App {
    pub fn new(units: Vec<Unit>, config: QuizConfig) -> Self {
        let rng = config.rng();
        Self {
            screen: Screen::Welcome,
            units,
            config,
            rng,
        }
    }

    /// An app that only reports why the bank could not be loaded.
    pub fn load_failed(message: impl Into<String>, config: QuizConfig) -> Self {
        let mut app = Self::new(Vec::new(), config);
        app.screen = Screen::LoadFailed(message.into());
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn question_count(&self) -> usize {
        self.units.iter().map(|unit| unit.questions.len()).sum()
    }

    /// Groups and shuffles the bank into a fresh session.
    pub fn start_quiz(&mut self) {
        if matches!(self.screen, Screen::LoadFailed(_)) {
            return;
        }
        let groups = group_questions(&self.units, &mut self.rng);
        self.screen = screen_for(QuizSession::start(groups));
    }

    pub fn select_next_option(&mut self) {
        if let Screen::Question(question) = &mut self.screen {
            if !question.is_locked() {
                question.selected = (question.selected + 1) % question.option_count();
            }
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Screen::Question(question) = &mut self.screen {
            if !question.is_locked() {
                let count = question.option_count();
                question.selected = (question.selected + count - 1) % count;
            }
        }
    }

    /// Selects the option at `index` if it exists.
    pub fn select_option(&mut self, index: usize) {
        if let Screen::Question(question) = &mut self.screen {
            if !question.is_locked() && index < question.option_count() {
                question.selected = index;
            }
        }
    }

    /// Submits the selection, or moves on once the question is settled.
    pub fn confirm(&mut self) {
        let locked = match &self.screen {
            Screen::Question(question) => question.is_locked(),
            _ => return,
        };
        if locked {
            self.advance();
        } else {
            self.submit_answer();
        }
    }

    pub fn submit_answer(&mut self) {
        let Screen::Question(question) = &mut self.screen else {
            return;
        };
        match question.session.submit_answer(question.selected) {
            Ok(_) => {}
            Err(err @ SubmitError::InvalidAnswer { .. }) => {
                question.notice = Some(err.to_string());
            }
            Err(err) => debug!(%err, "submission ignored"),
        }
    }

    pub fn advance(&mut self) {
        let screen = std::mem::replace(&mut self.screen, Screen::Welcome);
        self.screen = match screen {
            Screen::Question(question) => {
                if question.notice.is_some() {
                    warn!(number = question.session.number(), "skipping unanswerable question");
                }
                screen_for(question.session.advance())
            }
            other => other,
        };
    }

    pub fn scroll_results_down(&mut self) {
        if let Screen::Results(results) = &mut self.screen {
            let max_scroll = results.results.answers.len().saturating_sub(1);
            results.scroll = (results.scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        if let Screen::Results(results) = &mut self.screen {
            results.scroll = results.scroll.saturating_sub(1);
        }
    }

    /// Drops the finished session; the next start reshuffles the bank.
    pub fn restart(&mut self) {
        if matches!(self.screen, Screen::Results(_)) {
            self.screen = Screen::Welcome;
        }
    }
}

fn screen_for(progress: Progress) -> Screen {
    match progress {
        Progress::InProgress(session) => Screen::Question(QuestionScreen::new(session)),
        Progress::Finished(results) => Screen::Results(ResultsScreen { results, scroll: 0 }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::results::Grade;

    fn bank() -> Vec<Unit> {
        serde_json::from_value(json!([
            {
                "title": "Statistics",
                "data": {"type": "raw", "values": [1, 2, 3]},
                "questions": [
                    {"question": "Mean?", "options": ["1", "2", "3"], "answer": 1},
                    {"question": "Median?", "options": ["1", "2", "3"], "answer": [1, 2]}
                ]
            },
            {
                "title": "Logic",
                "questions": [
                    {"question": "p ∧ ¬p?", "options": ["true", "false"], "answer": 1}
                ]
            }
        ]))
        .unwrap()
    }

    fn app() -> App {
        App::new(bank(), QuizConfig::default().with_seed(Some(42)))
    }

    fn question(app: &App) -> &QuestionScreen {
        match app.screen() {
            Screen::Question(question) => question,
            other => panic!("expected a question, got {other:?}"),
        }
    }

    fn answer_correctly(app: &mut App) {
        let correct = question(app)
            .session
            .current_question()
            .answer
            .correct_index()
            .unwrap();
        app.select_option(correct);
        app.confirm();
    }

    #[test]
    fn test_starts_on_welcome() {
        let app = app();
        assert!(matches!(app.screen(), Screen::Welcome));
        assert_eq!(app.unit_count(), 2);
        assert_eq!(app.question_count(), 3);
    }

    #[test]
    fn test_option_selection_wraps() {
        let mut app = app();
        app.start_quiz();
        let count = question(&app).session.current_question().options.len();

        app.select_previous_option();
        assert_eq!(question(&app).selected, count - 1);
        app.select_next_option();
        assert_eq!(question(&app).selected, 0);
        app.select_option(count);
        assert_eq!(question(&app).selected, 0);
    }

    #[test]
    fn test_confirm_submits_then_advances() {
        let mut app = app();
        app.start_quiz();

        app.confirm();
        assert!(question(&app).session.is_answered());
        assert_eq!(question(&app).session.number(), 1);

        app.select_next_option();
        assert_eq!(question(&app).selected, 0, "selection is frozen after answering");

        app.confirm();
        assert_eq!(question(&app).session.number(), 2);
        assert!(!question(&app).session.is_answered());
    }

    #[test]
    fn test_full_run_and_restart() {
        let mut app = app();
        app.start_quiz();
        for _ in 0..3 {
            answer_correctly(&mut app);
            app.confirm();
        }

        let Screen::Results(results) = app.screen() else {
            panic!("expected results");
        };
        assert_eq!(results.results.score, 3);
        assert_eq!(results.results.grade, Grade::A);

        app.restart();
        assert!(matches!(app.screen(), Screen::Welcome));
        app.start_quiz();
        assert_eq!(question(&app).session.score(), 0);
    }

    #[test]
    fn test_unanswerable_question_can_be_skipped() {
        let units: Vec<Unit> = serde_json::from_value(json!([{
            "questions": [
                {"question": "Broken", "options": ["a", "b"], "answer": {"index": 0}}
            ]
        }]))
        .unwrap();
        let mut app = App::new(units, QuizConfig::default());
        app.start_quiz();

        app.confirm();
        let screen = question(&app);
        assert!(screen.notice.is_some());
        assert!(!screen.session.is_answered());

        app.confirm();
        let Screen::Results(results) = app.screen() else {
            panic!("expected results");
        };
        assert_eq!((results.results.score, results.results.total), (0, 1));
    }

    #[test]
    fn test_load_failure_screen_is_terminal() {
        let mut app = App::load_failed("failed to parse question bank", QuizConfig::default());
        app.start_quiz();
        app.confirm();
        assert!(matches!(app.screen(), Screen::LoadFailed(message) if message.contains("parse")));
    }
}
