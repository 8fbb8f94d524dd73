//! Auxiliary data shared by one or more questions.
//!
//! A dataset is kept as the JSON value it was loaded from so that grouping can
//! compare every field, including ones the renderer does not know about.
//! [`SharedData::block`] gives the typed view used for display.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// Kind tags understood by the renderer.
const FREQUENCY_TABLE: &str = "FDT";
const RAW_VALUES: &str = "raw";

const DEFAULT_TABLE_TITLE: &str = "Frequency Distribution Table";
const DEFAULT_RAW_TITLE: &str = "Raw Data";

/// A dataset attached to a unit or a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedData(Value);

/// Displayable form of a [`SharedData`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataBlock<'a> {
    /// `{type: "FDT", headers, rows, title?, note?}`
    FrequencyTable {
        title: &'a str,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        note: Option<&'a str>,
    },
    /// `{type: "raw", values, title?}`
    RawValues { title: &'a str, values: Vec<String> },
    /// `{title?, content?}`
    Text { title: &'a str, content: &'a str },
}

impl SharedData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The `id` field, if present and not blank.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id").filter(|id| !is_blank(id))
    }

    /// The `type` field as a string.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Whether questions referencing `self` and `other` belong in the same group.
    ///
    /// Two datasets are equivalent when they carry the same id, or when they
    /// have the same `type` and are structurally identical.
    pub fn is_equivalent(&self, other: &SharedData) -> bool {
        if let (Some(a), Some(b)) = (self.id(), other.id()) {
            if structurally_equal(a, b) {
                return true;
            }
        }

        let same_kind = match (self.0.get("type"), other.0.get("type")) {
            (Some(a), Some(b)) => structurally_equal(a, b),
            (None, None) => true,
            _ => false,
        };
        same_kind && structurally_equal(&self.0, &other.0)
    }

    /// Typed view of the dataset, or `None` when it has nothing to display.
    pub fn block(&self) -> Option<DataBlock<'_>> {
        let title = self.str_field("title");

        match self.kind() {
            Some(FREQUENCY_TABLE) => {
                if let (Some(headers), Some(rows)) = (self.array_field("headers"), self.array_field("rows")) {
                    return Some(DataBlock::FrequencyTable {
                        title: title.unwrap_or(DEFAULT_TABLE_TITLE),
                        headers: headers.iter().map(display_value).collect(),
                        rows: rows.iter().map(table_row).collect(),
                        note: self.str_field("note"),
                    });
                }
            }
            Some(RAW_VALUES) => {
                if let Some(values) = self.array_field("values") {
                    return Some(DataBlock::RawValues {
                        title: title.unwrap_or(DEFAULT_RAW_TITLE),
                        values: values.iter().map(display_value).collect(),
                    });
                }
            }
            _ => {}
        }

        let content = self.str_field("content");
        if title.is_none() && content.is_none() {
            return None;
        }
        Some(DataBlock::Text {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
        })
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }
}

/// Recursive JSON equality that ignores object key order and compares numbers
/// by value, so `1` and `1.0` are the same cell.
pub fn structurally_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x == y
            } else {
                x.as_f64() == y.as_f64()
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| structurally_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| structurally_equal(x, y)))
        }
        _ => false,
    }
}

/// JSON falsiness: `null`, `false`, `0` and `""`.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn table_row(row: &Value) -> Vec<String> {
    match row {
        Value::Array(cells) => cells.iter().map(display_value).collect(),
        other => vec![display_value(other)],
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
