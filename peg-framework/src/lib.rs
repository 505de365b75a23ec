//! PEG Framework
//!
//! Grammars written directly as Rust expressions. A grammar is a value built
//! from terminal rules and composition operators; applying it to a pair of
//! cursors `(i1, i2)` returns a [`Match`] telling whether it matched and
//! where the input continues.
//!
//! ```
//! use peg_framework::{ch, parse_text, pred, pred_run, Combinable};
//!
//! let digit = |c: &char| c.is_ascii_digit();
//! let number = pred(digit) & pred_run(digit);
//! let list = number.separated_by(ch(','));
//!
//! assert!(parse_text(&list, "1,22,333").is_ok());
//! assert!(parse_text(&list, "1,,2").is_err());
//! ```
//!
//! Rules run over any [`Cursor`]: characters of a string with
//! [`TextCursor`], or elements of a slice (bytes, tokens) with
//! [`SliceCursor`]. Binary formats are served by the `binary` feature.

pub mod composite;
pub mod error;
pub mod ops;
pub mod parse;
pub mod predicate;
pub mod recursive;
pub mod result;
pub mod terminal;
pub mod traits;

pub use composite::{
    ActionRule, AndRule, FailRule, FindRule, ManyRule, NotRule, OnFail, OptRule, OrRule, RefRule,
    SelectRule, TestRule, TracedRule, XorRule,
};
pub use cursor_framework::{Classify, Cursor, Position, SliceCursor, TextCursor};
pub use error::{GrammarError, ParseError};
pub use ops::{
    and, difference, fail_hook, many, many_sep, not, on_fail, opt, or, reference, rule, select,
    skip_until, test, traced, xor, DiffRule,
};
pub use parse::{parse_slice, parse_text};
pub use recursive::{Recursive, RecursiveRef};
pub use result::{make_result, Match};
pub use terminal::{
    advance, any, ch, empty, end, flag, ident, lit, pred, pred_run, pred_run_bounded, probe,
    slice_lit, token, AdvanceRule, AnyRule, CharRule, EmptyRule, EndRule, FlagRule, IdentRule,
    PredRule, PredRunRule, ProbeRule, SliceLitRule, StrRule, TokenRule,
};
#[cfg(feature = "binary")]
pub use terminal::binary::{
    array, bin, sequence, var, ArrayRule, BinRule, FixedBytes, SequenceRule, VarRule,
};
pub use traits::{BoxedRule, Combinable, FnRule, Rule};
