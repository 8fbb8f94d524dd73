use super::{QuizQuestion, SharedData};

/// Questions rendered together because they reference the same dataset.
///
/// A group is never empty.
#[derive(Debug, Clone)]
pub struct Group {
    data: Option<SharedData>,
    questions: Vec<QuizQuestion>,
}

impl Group {
    /// Returns `None` when `questions` is empty.
    pub fn new(data: Option<SharedData>, questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self { data, questions })
    }

    pub fn singleton(question: QuizQuestion) -> Self {
        Self {
            data: question.data.clone(),
            questions: vec![question],
        }
    }

    pub fn data(&self) -> Option<&SharedData> {
        self.data.as_ref()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
