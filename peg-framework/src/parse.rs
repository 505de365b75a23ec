//! Whole-input entry points.

use crate::error::ParseError;
use crate::traits::Rule;
use cursor_framework::{Position, SliceCursor, TextCursor};

/// Runs `rule` over all of `text`.
///
/// Returns the end position when the rule matches and consumes everything.
/// A failed rule is reported as [`ParseError::NoMatch`] at the start of
/// `text`, since failures never consume input.
pub fn parse_text<'a, R>(rule: &R, text: &'a str) -> Result<Position, ParseError>
where
    R: Rule<TextCursor<'a>> + ?Sized,
{
    let (begin, end) = TextCursor::range(text);
    let m = rule.parse(begin, end);
    if !m.matched {
        return Err(ParseError::NoMatch {
            position: begin.location(),
        });
    }
    if m.position != end {
        return Err(ParseError::TrailingInput {
            position: m.position.location(),
        });
    }
    Ok(end.location())
}

/// Runs `rule` over all of `data`.
///
/// Returns the number of elements consumed when the rule matches and
/// consumes everything.
pub fn parse_slice<'a, T, R>(rule: &R, data: &'a [T]) -> Result<usize, ParseError>
where
    R: Rule<SliceCursor<'a, T>> + ?Sized,
{
    let (begin, end) = SliceCursor::range(data);
    let m = rule.parse(begin, end);
    if !m.matched {
        return Err(ParseError::NoMatch {
            position: begin.position(),
        });
    }
    if m.position != end {
        return Err(ParseError::TrailingInput {
            position: m.position.position(),
        });
    }
    Ok(data.len())
}
