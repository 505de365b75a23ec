//! Composite rule shapes.
//!
//! Every composite hands the original start back on failure, so an enclosing
//! choice always retries from a clean cursor. [`NotRule`], [`OptRule`] and
//! [`TestRule`] never consume input on their own and are the documented
//! exceptions to "failure means no progress".

use crate::result::Match;
use crate::traits::Rule;
use cursor_framework::Cursor;
use std::fmt;

/// `r1 & r2`: `r1`, then `r2` from where `r1` stopped.
#[derive(Debug, Clone, Copy)]
pub struct AndRule<R1, R2> {
    first: R1,
    second: R2,
}

impl<R1, R2> AndRule<R1, R2> {
    pub fn new(first: R1, second: R2) -> Self {
        Self { first, second }
    }
}

impl<I, R1, R2> Rule<I> for AndRule<R1, R2>
where
    I: Cursor,
    R1: Rule<I>,
    R2: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let first = self.first.parse(i1, i2);
        if !first.matched {
            return Match::failure(i1);
        }
        self.second.parse(first.position, i2).from_start(i1)
    }
}

/// `r1 | r2`: ordered choice, `r2` is only tried when `r1` fails.
#[derive(Debug, Clone, Copy)]
pub struct OrRule<R1, R2> {
    first: R1,
    second: R2,
}

impl<R1, R2> OrRule<R1, R2> {
    pub fn new(first: R1, second: R2) -> Self {
        Self { first, second }
    }
}

impl<I, R1, R2> Rule<I> for OrRule<R1, R2>
where
    I: Cursor,
    R1: Rule<I>,
    R2: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let first = self.first.parse(i1, i2);
        if first.matched {
            return first.from_start(i1);
        }
        self.second.parse(i1, i2).from_start(i1)
    }
}

/// Wraps a failure handler so that `rule | on_fail(handler)` builds a
/// [`FailRule`] instead of a choice.
#[derive(Clone, Copy)]
pub struct OnFail<F>(F);

impl<F> OnFail<F> {
    pub fn new(handler: F) -> Self {
        Self(handler)
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

/// Behaves like the inner rule and calls `handler(i1, i2)` when it fails.
///
/// The handler only observes the failure; the outcome is never changed.
#[derive(Clone, Copy)]
pub struct FailRule<R, F> {
    rule: R,
    handler: F,
}

impl<R, F> FailRule<R, F> {
    pub fn new(rule: R, handler: F) -> Self {
        Self { rule, handler }
    }
}

impl<I, R, F> Rule<I> for FailRule<R, F>
where
    I: Cursor,
    R: Rule<I>,
    F: Fn(I, I),
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let m = self.rule.parse(i1, i2);
        if !m.matched {
            (self.handler)(i1, i2);
        }
        m.from_start(i1)
    }
}

impl<R: fmt::Debug, F> fmt::Debug for FailRule<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailRule").field("rule", &self.rule).finish()
    }
}

/// `r1 ^ r2`: exactly one of the two matches at the start.
#[derive(Debug, Clone, Copy)]
pub struct XorRule<R1, R2> {
    first: R1,
    second: R2,
}

impl<R1, R2> XorRule<R1, R2> {
    pub fn new(first: R1, second: R2) -> Self {
        Self { first, second }
    }
}

impl<I, R1, R2> Rule<I> for XorRule<R1, R2>
where
    I: Cursor,
    R1: Rule<I>,
    R2: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let first = self.first.parse(i1, i2);
        let second = self.second.parse(i1, i2);
        match (first.matched, second.matched) {
            (true, false) => first.from_start(i1),
            (false, true) => second.from_start(i1),
            _ => Match::failure(i1),
        }
    }
}

/// `!r`: succeeds exactly when `r` fails. Never consumes input.
#[derive(Debug, Clone, Copy)]
pub struct NotRule<R> {
    rule: R,
}

impl<R> NotRule<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }
}

impl<I, R> Rule<I> for NotRule<R>
where
    I: Cursor,
    R: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        Match::at(!self.rule.parse(i1, i2).matched, i1)
    }
}

/// Optional rule: always succeeds, consuming whatever `r` matched.
#[derive(Debug, Clone, Copy)]
pub struct OptRule<R> {
    rule: R,
}

impl<R> OptRule<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }
}

impl<I, R> Rule<I> for OptRule<R>
where
    I: Cursor,
    R: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let m = self.rule.parse(i1, i2);
        if m.matched {
            m.from_start(i1)
        } else {
            Match::at(true, i1)
        }
    }
}

/// Repetition of `rule` with `separator` between occurrences.
///
/// A separator is only consumed when the occurrence after it matches.
/// Repetition stops at the first failure or after `max` occurrences, and the
/// rule succeeds when the count lies in `[min, max]`.
///
/// Once a separator and occurrence match together without consuming
/// anything, every later pass would match the same empty range. The loop
/// stops there and counts those passes as matched: up to `max` when it is
/// finite, otherwise up to `min`. Rules are assumed pure, so actions inside
/// such a pass run once rather than once per counted occurrence.
#[derive(Debug, Clone, Copy)]
pub struct ManyRule<R, S> {
    rule: R,
    separator: S,
    min: usize,
    max: usize,
}

impl<R, S> ManyRule<R, S> {
    /// `min` is clamped to `max`, so `max == 0` always succeeds.
    pub fn new(rule: R, separator: S, min: usize, max: usize) -> Self {
        Self {
            rule,
            separator,
            min: min.min(max),
            max,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Like [`Rule::parse`], also returning the number of occurrences
    /// consumed (zero on failure).
    pub fn parse_counted<I>(&self, i1: I, i2: I) -> (Match<I>, usize)
    where
        I: Cursor,
        R: Rule<I>,
        S: Rule<I>,
    {
        let mut position = i1;
        let mut count = 0;

        while count < self.max {
            let next = if count == 0 {
                self.rule.parse(position, i2)
            } else {
                let sep = self.separator.parse(position, i2);
                if !sep.matched {
                    break;
                }
                self.rule.parse(sep.position, i2)
            };
            if !next.matched {
                break;
            }

            count += 1;
            let progressed = next.position != position;
            position = next.position;
            if !progressed && count > 1 {
                count = if self.max == usize::MAX {
                    count.max(self.min)
                } else {
                    self.max
                };
                break;
            }
        }

        if count >= self.min {
            (Match::success(i1, position), count)
        } else {
            (Match::failure(i1), 0)
        }
    }
}

impl<I, R, S> Rule<I> for ManyRule<R, S>
where
    I: Cursor,
    R: Rule<I>,
    S: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        self.parse_counted(i1, i2).0
    }
}

/// Non-owning reference to a rule defined elsewhere.
pub struct RefRule<'r, R: ?Sized> {
    rule: &'r R,
}

impl<'r, R: ?Sized> RefRule<'r, R> {
    pub fn new(rule: &'r R) -> Self {
        Self { rule }
    }
}

impl<R: ?Sized> Clone for RefRule<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ?Sized> Copy for RefRule<'_, R> {}

impl<R: ?Sized> fmt::Debug for RefRule<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefRule")
    }
}

impl<I, R> Rule<I> for RefRule<'_, R>
where
    I: Cursor,
    R: Rule<I> + ?Sized,
{
    #[inline]
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        self.rule.parse(i1, i2)
    }
}

/// Skips one element at a time until `rule` matches.
///
/// On success the consumed range covers the skipped input and the match of
/// `rule`. Meant for error recovery and scanning (comments, resync points).
#[derive(Debug, Clone, Copy)]
pub struct FindRule<R> {
    rule: R,
}

impl<R> FindRule<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }
}

impl<I, R> Rule<I> for FindRule<R>
where
    I: Cursor,
    R: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let mut position = i1;
        loop {
            let m = self.rule.parse(position, i2);
            if m.matched {
                return Match::success(i1, m.position);
            }
            if position == i2 {
                return Match::failure(i1);
            }
            position = position.advance();
        }
    }
}

/// `select(probe, then, otherwise)`: `probe & then` if `probe` matches,
/// otherwise `otherwise` from the original start. `probe` runs once.
#[derive(Debug, Clone, Copy)]
pub struct SelectRule<P, T, E> {
    probe: P,
    then: T,
    otherwise: E,
}

impl<P, T, E> SelectRule<P, T, E> {
    pub fn new(probe: P, then: T, otherwise: E) -> Self {
        Self {
            probe,
            then,
            otherwise,
        }
    }
}

impl<I, P, T, E> Rule<I> for SelectRule<P, T, E>
where
    I: Cursor,
    P: Rule<I>,
    T: Rule<I>,
    E: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let probe = self.probe.parse(i1, i2);
        if probe.matched {
            self.then.parse(probe.position, i2).from_start(i1)
        } else {
            self.otherwise.parse(i1, i2).from_start(i1)
        }
    }
}

/// Evaluates `rule` and reports its match flag, but always continues from
/// the original start.
#[derive(Debug, Clone, Copy)]
pub struct TestRule<R> {
    rule: R,
}

impl<R> TestRule<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }
}

impl<I, R> Rule<I> for TestRule<R>
where
    I: Cursor,
    R: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        Match::at(self.rule.parse(i1, i2).matched, i1)
    }
}

/// `r >> action`: runs `action(start, position)` after a successful match.
#[derive(Clone, Copy)]
pub struct ActionRule<R, F> {
    rule: R,
    action: F,
}

impl<R, F> ActionRule<R, F> {
    pub fn new(rule: R, action: F) -> Self {
        Self { rule, action }
    }
}

impl<I, R, F> Rule<I> for ActionRule<R, F>
where
    I: Cursor,
    R: Rule<I>,
    F: Fn(I, I),
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        let m = self.rule.parse(i1, i2).from_start(i1);
        if m.matched {
            (self.action)(i1, m.position);
        }
        m
    }
}

impl<R: fmt::Debug, F> fmt::Debug for ActionRule<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRule").field("rule", &self.rule).finish()
    }
}

/// Logs entry and outcome of `rule` at trace level.
#[derive(Debug, Clone, Copy)]
pub struct TracedRule<R> {
    rule: R,
    name: &'static str,
}

impl<R> TracedRule<R> {
    pub fn new(rule: R, name: &'static str) -> Self {
        Self { rule, name }
    }
}

impl<I, R> Rule<I> for TracedRule<R>
where
    I: Cursor + fmt::Debug,
    R: Rule<I>,
{
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        log::trace!("{}: enter at {:?}", self.name, i1);
        let m = self.rule.parse(i1, i2);
        if m.matched {
            log::trace!("{}: matched {:?}..{:?}", self.name, m.start, m.position);
        } else {
            log::trace!("{}: failed at {:?}", self.name, i1);
        }
        m
    }
}
