use cursor_framework::Position;
use thiserror::Error;

/// Misuse detected while assembling a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("recursive rule `{name}` is already defined")]
    AlreadyDefined { name: String },
}

/// Failure of a whole-input parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The rule failed. A failed rule restores its start, so `position` is
    /// always the beginning of the input; attach a failure hook
    /// ([`fail_hook`](crate::fail_hook) or `| on_fail(..)`) to the rule that
    /// should report where matching stopped.
    #[error("input does not match at {position}")]
    NoMatch { position: Position },
    /// The rule matched but stopped before the end; `position` is where the
    /// unconsumed input starts.
    #[error("unexpected input at {position}")]
    TrailingInput { position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::NoMatch { position } | ParseError::TrailingInput { position } => *position,
        }
    }
}
