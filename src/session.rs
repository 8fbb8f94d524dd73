//! Quiz progression over shuffled question groups.
//!
//! A [`QuizSession`] only exists while there is a question to show. Advancing
//! past the last question consumes the session and produces the
//! [`QuizResults`], so the current question can never be requested once the
//! quiz is over.

use tracing::{debug, error, info};

use crate::models::{Group, QuizQuestion, SharedData};
use crate::results::{AnswerRecord, QuizResults};

/// Either the running session or the results once it has finished.
#[derive(Debug)]
pub enum Progress {
    InProgress(QuizSession),
    Finished(QuizResults),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The current question was already answered; the score is unchanged.
    #[error("question {number} has already been answered")]
    AlreadyAnswered { number: usize },

    /// The question's answer key is neither a number nor a list.
    #[error("question {number} cannot be answered: invalid answer format")]
    InvalidAnswer { number: usize },

    #[error("option {selected} does not exist; question has {available} options")]
    NoSuchOption { selected: usize, available: usize },
}

/// What to show for the current position.
#[derive(Debug, Clone)]
pub struct QuestionStep<'a> {
    /// Human-facing "Question N of Total" number.
    pub number: usize,
    pub total: usize,
    /// The group's dataset, shown alongside every question of the group.
    pub data: Option<&'a SharedData>,
    /// True for the first question of a group.
    pub opens_group: bool,
    pub unit: &'a str,
    pub prompt: &'a str,
    pub options: &'a [String],
    pub difficulty: Option<&'a str>,
}

/// Result of a submission, for the feedback view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    /// `None` when the answer key names no option; nothing is correct then.
    pub correct_index: Option<usize>,
    pub is_correct: bool,
    pub explanation: String,
    /// The last question overall; the next step shows the results.
    pub is_last: bool,
}

#[derive(Debug)]
pub struct QuizSession {
    groups: Vec<Group>,
    group_index: usize,
    question_index: usize,
    score: usize,
    number: usize,
    total: usize,
    feedback: Option<AnswerFeedback>,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Starts a quiz over `groups`. An empty list finishes immediately.
    pub fn start(groups: Vec<Group>) -> Progress {
        let total = groups.iter().map(Group::len).sum();
        let session = Self {
            groups,
            group_index: 0,
            question_index: 0,
            score: 0,
            number: 1,
            total,
            feedback: None,
            answers: Vec::new(),
        };
        info!(
            groups = session.groups.len(),
            questions = total,
            "quiz started"
        );
        session.into_progress()
    }

    pub fn current_group(&self) -> &Group {
        &self.groups[self.group_index]
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.current_group().questions()[self.question_index]
    }

    pub fn current_step(&self) -> QuestionStep<'_> {
        let group = self.current_group();
        let question = self.current_question();
        QuestionStep {
            number: self.number,
            total: self.total,
            data: group.data(),
            opens_group: self.question_index == 0,
            unit: &question.unit,
            prompt: &question.prompt,
            options: &question.options,
            difficulty: question.difficulty.as_deref(),
        }
    }

    /// `(group index, question index)` of the cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.group_index, self.question_index)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }

    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    pub fn is_last_question(&self) -> bool {
        self.group_index + 1 == self.groups.len()
            && self.question_index + 1 == self.current_group().len()
    }

    /// Scores `selected` against the current question without moving on.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerFeedback, SubmitError> {
        if self.feedback.is_some() {
            return Err(SubmitError::AlreadyAnswered {
                number: self.number,
            });
        }

        let question = self.current_question();
        if !question.answer.is_well_formed() {
            error!(
                question = question.index,
                unit = %question.unit,
                answer = ?question.answer,
                "invalid answer format for question"
            );
            return Err(SubmitError::InvalidAnswer {
                number: self.number,
            });
        }
        if selected >= question.options.len() {
            return Err(SubmitError::NoSuchOption {
                selected,
                available: question.options.len(),
            });
        }

        let correct_index = question
            .answer
            .correct_index()
            .filter(|index| *index < question.options.len());
        if correct_index.is_none() {
            debug!(
                question = question.index,
                answer = ?question.answer,
                "answer key names no option"
            );
        }
        let is_correct = correct_index == Some(selected);
        let record = AnswerRecord {
            question_index: question.index,
            number: self.number,
            prompt: question.prompt.clone(),
            selected,
            correct: correct_index,
            is_correct,
        };
        let feedback = AnswerFeedback {
            selected,
            correct_index,
            is_correct,
            explanation: question.explanation.clone().unwrap_or_default(),
            is_last: self.is_last_question(),
        };

        if is_correct {
            self.score += 1;
        }
        debug!(number = self.number, is_correct, score = self.score, "answer submitted");
        self.answers.push(record);
        self.feedback = Some(feedback.clone());
        Ok(feedback)
    }

    /// Moves to the next question, or finishes after the last one.
    ///
    /// The current question does not need to be answered first.
    pub fn advance(mut self) -> Progress {
        if self.question_index + 1 < self.current_group().len() {
            self.question_index += 1;
        } else {
            self.question_index = 0;
            self.group_index += 1;
        }
        self.number += 1;
        self.feedback = None;
        self.into_progress()
    }

    fn into_progress(self) -> Progress {
        if self.group_index < self.groups.len() {
            Progress::InProgress(self)
        } else {
            let results = QuizResults::new(self.score, self.total, self.answers);
            info!(
                score = results.score,
                total = results.total,
                grade = %results.grade,
                "quiz finished"
            );
            Progress::Finished(results)
        }
    }
}
