//! Final score, percentage and letter grade.

use std::fmt;

use serde::Serialize;

/// Letter grade derived from the unrounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::A
        } else if percentage >= 80.0 {
            Grade::B
        } else if percentage >= 70.0 {
            Grade::C
        } else if percentage >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one submitted question, kept for the results breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub number: usize,
    pub prompt: String,
    pub selected: usize,
    /// The option the key names, if it names one.
    pub correct: Option<usize>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub grade: Grade,
    pub answers: Vec<AnswerRecord>,
}

impl QuizResults {
    pub fn new(score: usize, total: usize, answers: Vec<AnswerRecord>) -> Self {
        let percentage = calculate_percentage(score, total);
        Self {
            score,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
            answers,
        }
    }

    pub fn from_score(score: usize, total: usize) -> Self {
        Self::new(score, total, Vec::new())
    }
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        score as f64 * 100.0 / total as f64
    } else {
        0.0
    }
}
