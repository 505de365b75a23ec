use crate::composite::{
    ActionRule, FailRule, FindRule, ManyRule, OptRule, RefRule, TestRule, TracedRule,
};
use crate::result::Match;
use crate::terminal::EmptyRule;
use std::fmt;

/// A parsing rule: a function from the unconsumed range `[i1, i2)` to a
/// [`Match`].
///
/// Rules take `&self` and keep no state between calls, so one grammar value
/// can parse any number of inputs. The exceptions are rules that write into
/// caller-owned cells (binary reads, probes, actions); those writes are part
/// of their documented contract.
///
/// Any closure `Fn(I, I) -> Match<I>` is a rule.
pub trait Rule<I> {
    /// Applies the rule to `[i1, i2)`.
    fn parse(&self, i1: I, i2: I) -> Match<I>;

    /// Returns true if the rule matches and consumes the whole range.
    fn parse_all(&self, i1: I, i2: I) -> bool
    where
        I: Copy + PartialEq,
    {
        let m = self.parse(i1, i2);
        m.matched && m.position == i2
    }
}

impl<I, F> Rule<I> for F
where
    F: Fn(I, I) -> Match<I>,
{
    #[inline]
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        self(i1, i2)
    }
}

/// Marker for the rule shapes of this crate.
///
/// The composition operators (`&`, `|`, `^`, `!`, `-`, `%`, `>>`) are only
/// implemented between `Combinable` values, so an operand that is not a rule
/// is rejected when the grammar is written. Closures become combinable
/// through [`rule`](crate::rule).
///
/// The provided methods are the builder forms of the unary operators that
/// Rust cannot overload (`*r`, `+r`, `~r`) and of the decorator functions.
pub trait Combinable: Sized {
    /// Matches `self` zero or one time.
    fn opt(self) -> OptRule<Self> {
        OptRule::new(self)
    }

    /// Matches `self` zero or more times.
    fn many(self) -> ManyRule<Self, EmptyRule> {
        ManyRule::new(self, EmptyRule, 0, usize::MAX)
    }

    /// Matches `self` one or more times.
    fn one_or_more(self) -> ManyRule<Self, EmptyRule> {
        ManyRule::new(self, EmptyRule, 1, usize::MAX)
    }

    /// Matches `self` between `min` and `max` times.
    fn repeat(self, min: usize, max: usize) -> ManyRule<Self, EmptyRule> {
        ManyRule::new(self, EmptyRule, min, max)
    }

    /// Matches `self` one or more times with `separator` in between.
    fn separated_by<S: Combinable>(self, separator: S) -> ManyRule<Self, S> {
        ManyRule::new(self, separator, 1, usize::MAX)
    }

    /// Calls `handler(i1, i2)` whenever `self` fails.
    fn or_fail<F>(self, handler: F) -> FailRule<Self, F> {
        FailRule::new(self, handler)
    }

    /// Runs `self` for its effects without consuming input.
    fn test(self) -> TestRule<Self> {
        TestRule::new(self)
    }

    /// Skips input until `self` matches.
    fn skip_until(self) -> FindRule<Self> {
        FindRule::new(self)
    }

    /// Borrows `self` as a rule, leaving ownership with the caller.
    fn by_ref(&self) -> RefRule<'_, Self> {
        RefRule::new(self)
    }

    /// Calls `action(start, position)` with the consumed range on success.
    fn action<F>(self, action: F) -> ActionRule<Self, F> {
        ActionRule::new(self, action)
    }

    /// Logs every invocation of `self` at trace level under `name`.
    fn traced(self, name: &'static str) -> TracedRule<Self> {
        TracedRule::new(self, name)
    }

    /// Erases the concrete rule type.
    fn boxed<'g, I>(self) -> BoxedRule<'g, I>
    where
        Self: Rule<I> + 'g,
    {
        BoxedRule::new(self)
    }
}

/// Adapts a closure into a [`Combinable`] rule.
#[derive(Clone, Copy)]
pub struct FnRule<F>(F);

impl<F> FnRule<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<I, F> Rule<I> for FnRule<F>
where
    F: Fn(I, I) -> Match<I>,
{
    #[inline]
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        (self.0)(i1, i2)
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnRule")
    }
}

/// An owned, type-erased rule.
///
/// Grammar structs use this to name their rules, and
/// [`Recursive`](crate::Recursive) stores its definition as one.
pub struct BoxedRule<'g, I> {
    inner: Box<dyn Rule<I> + 'g>,
}

impl<'g, I> BoxedRule<'g, I> {
    pub fn new<R: Rule<I> + 'g>(rule: R) -> Self {
        Self {
            inner: Box::new(rule),
        }
    }
}

impl<I> Rule<I> for BoxedRule<'_, I> {
    #[inline]
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        self.inner.parse(i1, i2)
    }
}

impl<I> fmt::Debug for BoxedRule<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedRule")
    }
}
