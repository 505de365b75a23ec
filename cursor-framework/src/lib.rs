//! Cursor Framework
//!
//! Input positions shared by the rule engine and the grammars built on it:
//! the [`Cursor`] capability, cursors over element slices and UTF-8 text,
//! and the element classification used by identifier and predicate rules.

pub mod classify;
pub mod cursor;
pub mod position;
pub mod slice;
pub mod text;

pub use classify::Classify;
pub use cursor::Cursor;
pub use position::Position;
pub use slice::SliceCursor;
pub use text::TextCursor;
