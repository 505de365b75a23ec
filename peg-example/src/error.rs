use peg_framework::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a process-hitting model could not be loaded.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    #[error("line {line}: sort `{name}` is declared twice")]
    DuplicateSort { name: String, line: usize },

    #[error("line {line}: sort `{name}` is not declared")]
    UndeclaredSort { name: String, line: usize },

    #[error("line {line}: process {sort}_{index} does not exist (last is {sort}_{max})")]
    ProcessOutOfRange {
        sort: String,
        index: usize,
        max: usize,
        line: usize,
    },

    #[error("line {line}: {sort}_{target} bounces to itself")]
    NoBounce {
        sort: String,
        target: usize,
        line: usize,
    },

    #[error("line {line}: {sort}_{hitter} can only hit its own sort at itself")]
    SelfHit {
        sort: String,
        hitter: usize,
        line: usize,
    },

    #[error("line {line}: rate must be positive, got {value}")]
    InvalidRate { value: f64, line: usize },

    #[error("line {line}: value {value} is out of range")]
    NumberOutOfRange { value: String, line: usize },
}

impl ModelError {
    /// Source line of the error, when it points into the model text.
    pub fn line(&self) -> Option<usize> {
        match self {
            ModelError::Io { .. } => None,
            ModelError::Syntax(err) => Some(err.position().line),
            ModelError::DuplicateSort { line, .. }
            | ModelError::UndeclaredSort { line, .. }
            | ModelError::ProcessOutOfRange { line, .. }
            | ModelError::NoBounce { line, .. }
            | ModelError::SelfHit { line, .. }
            | ModelError::InvalidRate { line, .. }
            | ModelError::NumberOutOfRange { line, .. } => Some(*line),
        }
    }
}
