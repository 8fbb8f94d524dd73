use serde::Deserialize;
use serde_json::{Number, Value};

use super::SharedData;
use super::shared_data::is_blank;

/// A named bundle of questions, optionally sharing one dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Unit {
    /// A string or a number.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub data: Option<SharedData>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Unit {
    /// Display label: the title, then the id, then nothing.
    pub fn label(&self) -> String {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            return title.to_string();
        }
        match &self.id {
            Some(Value::String(id)) => id.clone(),
            Some(id) if !is_blank(id) => id.to_string(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: AnswerSpec,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub data: Option<SharedData>,
}

/// How the bank encodes the correct option.
///
/// A list carries the correct index first; the remaining entries are inert.
/// Anything else is kept so the question can be reported when answered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnswerSpec {
    Number(Number),
    List(Vec<Value>),
    Malformed(Value),
}

impl AnswerSpec {
    /// False only for keys that are neither a number nor a list.
    pub fn is_well_formed(&self) -> bool {
        !matches!(self, AnswerSpec::Malformed(_))
    }

    /// The option index the key names, if any.
    ///
    /// Integral floats count, so `2.0` names option 2. Negative, fractional
    /// and non-numeric keys name no option: the question stays answerable but
    /// no selection is correct.
    pub fn correct_index(&self) -> Option<usize> {
        match self {
            AnswerSpec::Number(number) => option_index(number),
            AnswerSpec::List(items) => match items.first() {
                Some(Value::Number(number)) => option_index(number),
                _ => None,
            },
            AnswerSpec::Malformed(_) => None,
        }
    }
}

fn option_index(number: &Number) -> Option<usize> {
    if let Some(index) = number.as_u64() {
        return usize::try_from(index).ok();
    }
    let value = number.as_f64()?;
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}

/// A question flattened out of its unit, ready for grouping.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    /// Position in the flattened bank; stable for the whole session.
    pub index: usize,
    pub unit: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: AnswerSpec,
    pub difficulty: Option<String>,
    pub explanation: Option<String>,
    /// The question's own data, or its unit's.
    pub data: Option<SharedData>,
}

impl QuizQuestion {
    pub fn new(index: usize, unit: &Unit, question: &Question) -> Self {
        Self {
            index,
            unit: unit.label(),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            answer: question.answer.clone(),
            difficulty: question.difficulty.clone(),
            explanation: question.explanation.clone(),
            data: present(&question.data).or_else(|| present(&unit.data)),
        }
    }
}

/// `false`, `0` and `""` datasets count as absent.
fn present(data: &Option<SharedData>) -> Option<SharedData> {
    data.as_ref().filter(|data| !is_blank(data.as_value())).cloned()
}
