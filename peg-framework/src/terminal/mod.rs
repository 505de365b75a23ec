//! Terminal rules: matchers that look at the input directly.
//!
//! A terminal that fails reports `matched == false` with the cursor left at
//! its start, so an enclosing choice can retry from the same place.

#[cfg(feature = "binary")]
pub mod binary;

use crate::result::Match;
use crate::traits::Rule;
use cursor_framework::{Classify, Cursor};
use std::fmt;

/// Always matches without consuming input.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRule;

impl<I: Cursor> Rule<I> for EmptyRule {
    #[inline]
    fn parse(&self, i1: I, _i2: I) -> Match<I> {
        Match::at(true, i1)
    }
}

/// Matches any single element.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyRule;

impl<I: Cursor> Rule<I> for AnyRule {
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        match i1.next_item(&i2) {
            Some((_, next)) => Match::success(i1, next),
            None => Match::failure(i1),
        }
    }
}

/// Matches one element equal to a fixed value of the element type.
#[derive(Debug, Clone, Copy)]
pub struct CharRule<C>(C);

impl<I, C> Rule<I> for CharRule<C>
where
    I: Cursor<Item = C>,
    C: PartialEq,
{
    #[inline]
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        match i1.next_item(&i2) {
            Some((item, next)) if item == self.0 => Match::success(i1, next),
            _ => Match::failure(i1),
        }
    }
}

/// Matches one element comparing equal to a token, possibly of another type.
#[derive(Debug, Clone, Copy)]
pub struct TokenRule<T>(T);

impl<I, T> Rule<I> for TokenRule<T>
where
    I: Cursor,
    I::Item: PartialEq<T>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        match i1.next_item(&i2) {
            Some((item, next)) if item == self.0 => Match::success(i1, next),
            _ => Match::failure(i1),
        }
    }
}

/// Matches a string literal element by element.
#[derive(Debug, Clone, Copy)]
pub struct StrRule<S>(S);

impl<I, S> Rule<I> for StrRule<S>
where
    I: Cursor,
    I::Item: PartialEq<char>,
    S: AsRef<str>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let mut position = i1;
        for expected in self.0.as_ref().chars() {
            match position.next_item(&i2) {
                Some((item, next)) if item == expected => position = next,
                _ => return Match::failure(i1),
            }
        }
        Match::success(i1, position)
    }
}

/// Matches a literal sequence of elements, e.g. a byte signature.
#[derive(Debug, Clone, Copy)]
pub struct SliceLitRule<S>(S);

impl<I, S> Rule<I> for SliceLitRule<S>
where
    I: Cursor,
    I::Item: PartialEq,
    S: AsRef<[I::Item]>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let mut position = i1;
        for expected in self.0.as_ref() {
            match position.next_item(&i2) {
                Some((item, next)) if item == *expected => position = next,
                _ => return Match::failure(i1),
            }
        }
        Match::success(i1, position)
    }
}

/// Matches one element satisfying a predicate.
#[derive(Clone, Copy)]
pub struct PredRule<F>(F);

impl<I, F> Rule<I> for PredRule<F>
where
    I: Cursor,
    F: Fn(&I::Item) -> bool,
{
    #[inline]
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        match i1.next_item(&i2) {
            Some((item, next)) if (self.0)(&item) => Match::success(i1, next),
            _ => Match::failure(i1),
        }
    }
}

impl<F> fmt::Debug for PredRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PredRule")
    }
}

/// Matches a run of elements satisfying a predicate.
///
/// The run stops at the first element failing the predicate or after `max`
/// elements; it matches when at least `min` elements were taken.
#[derive(Clone, Copy)]
pub struct PredRunRule<F> {
    pred: F,
    min: usize,
    max: usize,
}

impl<I, F> Rule<I> for PredRunRule<F>
where
    I: Cursor,
    F: Fn(&I::Item) -> bool,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let mut position = i1;
        let mut count = 0;
        while count < self.max {
            match position.next_item(&i2) {
                Some((item, next)) if (self.pred)(&item) => position = next,
                _ => break,
            }
            count += 1;
        }
        if count >= self.min {
            Match::success(i1, position)
        } else {
            Match::failure(i1)
        }
    }
}

impl<F> fmt::Debug for PredRunRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredRunRule")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

/// Zero-width rule whose outcome is decided by a callable at parse time.
#[derive(Clone, Copy)]
pub struct ProbeRule<F>(F);

impl<I, F> Rule<I> for ProbeRule<F>
where
    I: Cursor,
    F: Fn() -> bool,
{
    #[inline]
    fn parse(&self, i1: I, _i2: I) -> Match<I> {
        Match::at((self.0)(), i1)
    }
}

impl<F> fmt::Debug for ProbeRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProbeRule")
    }
}

/// Zero-width rule with an outcome fixed when the grammar is built.
#[derive(Debug, Clone, Copy)]
pub struct FlagRule(bool);

impl<I: Cursor> Rule<I> for FlagRule {
    #[inline]
    fn parse(&self, i1: I, _i2: I) -> Match<I> {
        Match::at(self.0, i1)
    }
}

/// Matches an identifier: one alphabetic element, then alphanumerics.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentRule;

impl<I> Rule<I> for IdentRule
where
    I: Cursor,
    I::Item: Classify,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let mut position = match i1.next_item(&i2) {
            Some((first, next)) if first.is_alphabetic() => next,
            _ => return Match::failure(i1),
        };
        while let Some((item, next)) = position.next_item(&i2) {
            if !item.is_alphanumeric() {
                break;
            }
            position = next;
        }
        Match::success(i1, position)
    }
}

/// Matches only at the end of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndRule;

impl<I: Cursor> Rule<I> for EndRule {
    #[inline]
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        Match::at(i1 == i2, i1)
    }
}

/// Skips a fixed number of elements, failing if fewer remain.
#[derive(Debug, Clone, Copy)]
pub struct AdvanceRule(usize);

impl<I: Cursor> Rule<I> for AdvanceRule {
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        if i1.has_at_least(self.0, &i2) {
            Match::success(i1, i1.advance_by(self.0))
        } else {
            Match::failure(i1)
        }
    }
}

/// Rule that always matches, consuming nothing.
pub fn empty() -> EmptyRule {
    EmptyRule
}

/// Rule matching any single element.
pub fn any() -> AnyRule {
    AnyRule
}

/// Rule matching one element equal to `c`.
pub fn ch<C>(c: C) -> CharRule<C> {
    CharRule(c)
}

/// Rule matching one element for which `element == token`.
pub fn token<T>(token: T) -> TokenRule<T> {
    TokenRule(token)
}

/// Rule matching the characters of `literal`. The empty literal always matches.
pub fn lit<S: AsRef<str>>(literal: S) -> StrRule<S> {
    StrRule(literal)
}

/// Rule matching the elements of `literal` in order.
pub fn slice_lit<S>(literal: S) -> SliceLitRule<S> {
    SliceLitRule(literal)
}

/// Rule matching one element satisfying `pred`.
pub fn pred<F>(pred: F) -> PredRule<F> {
    PredRule(pred)
}

/// Rule matching zero or more elements satisfying `pred`. Always succeeds.
pub fn pred_run<F>(pred: F) -> PredRunRule<F> {
    pred_run_bounded(pred, 0, usize::MAX)
}

/// Rule matching between `min` and `max` elements satisfying `pred`.
pub fn pred_run_bounded<F>(pred: F, min: usize, max: usize) -> PredRunRule<F> {
    PredRunRule { pred, min, max }
}

/// Zero-width rule matching when `f()` returns true.
pub fn probe<F: Fn() -> bool>(f: F) -> ProbeRule<F> {
    ProbeRule(f)
}

/// Zero-width rule that matches iff `value` is true.
pub fn flag(value: bool) -> FlagRule {
    FlagRule(value)
}

/// Rule matching an identifier.
pub fn ident() -> IdentRule {
    IdentRule
}

/// Rule matching the end of input.
pub fn end() -> EndRule {
    EndRule
}

/// Rule skipping exactly `offset` elements.
pub fn advance(offset: usize) -> AdvanceRule {
    AdvanceRule(offset)
}
