use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::models::Unit;

/// Why a question bank could not be turned into a quiz.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    /// `question` is 1-based within its unit.
    #[error("question {question} in unit '{unit}' has no options")]
    NoOptions { unit: String, question: usize },

    #[error("question bank contains no questions")]
    NoQuestions,
}

/// Reads and validates a question bank from a JSON file.
pub fn load_units_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Unit>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let units = parse_units(&json_content)?;

    info!(
        path = %path.display(),
        units = units.len(),
        questions = question_count(&units),
        "loaded question bank"
    );
    Ok(units)
}

/// Parses and validates a question bank held in memory.
pub fn parse_units(json: &str) -> Result<Vec<Unit>, LoadError> {
    let units: Vec<Unit> = serde_json::from_str(json)?;
    validate(&units)?;
    Ok(units)
}

fn validate(units: &[Unit]) -> Result<(), LoadError> {
    for unit in units {
        if let Some(position) = unit.questions.iter().position(|q| q.options.is_empty()) {
            return Err(LoadError::NoOptions {
                unit: unit.label(),
                question: position + 1,
            });
        }
    }

    if question_count(units) == 0 {
        return Err(LoadError::NoQuestions);
    }

    Ok(())
}

fn question_count(units: &[Unit]) -> usize {
    units.iter().map(|unit| unit.questions.len()).sum()
}
