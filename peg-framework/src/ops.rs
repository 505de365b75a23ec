//! Operator algebra.
//!
//! | expression | rule |
//! |---|---|
//! | `a & b` | sequence |
//! | `a \| b` | ordered choice |
//! | `a \| on_fail(f)` | `a`, calling `f` on failure |
//! | `a ^ b` | exactly one of `a`, `b` |
//! | `!a` | negative lookahead |
//! | `a - b` | `a` unless `b` matches at the same start |
//! | `a % s` | one or more `a` separated by `s` |
//! | `a >> f` | `a`, then `f(start, position)` on success |
//!
//! Unary `*a`, `+a` and `~a` have no Rust counterpart; use
//! [`Combinable::many`], [`Combinable::one_or_more`] and [`Combinable::opt`].

use crate::composite::{
    ActionRule, AndRule, FailRule, FindRule, ManyRule, NotRule, OnFail, OptRule, OrRule, RefRule,
    SelectRule, TestRule, TracedRule, XorRule,
};
use crate::recursive::{Recursive, RecursiveRef};
use crate::terminal::{
    AdvanceRule, AnyRule, CharRule, EmptyRule, EndRule, FlagRule, IdentRule, PredRule,
    PredRunRule, ProbeRule, SliceLitRule, StrRule, TokenRule,
};
use crate::traits::{BoxedRule, Combinable, FnRule};

/// `r1 - r2` is `!r2 & r1`.
pub type DiffRule<R1, R2> = AndRule<NotRule<R2>, R1>;

macro_rules! combinable {
    ($([$($g:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($g)*> Combinable for $ty {}

            impl<$($g)* Rhs: Combinable> std::ops::BitAnd<Rhs> for $ty {
                type Output = AndRule<Self, Rhs>;

                fn bitand(self, rhs: Rhs) -> Self::Output {
                    AndRule::new(self, rhs)
                }
            }

            impl<$($g)* Rhs: Combinable> std::ops::BitOr<Rhs> for $ty {
                type Output = OrRule<Self, Rhs>;

                fn bitor(self, rhs: Rhs) -> Self::Output {
                    OrRule::new(self, rhs)
                }
            }

            impl<$($g)* Handler> std::ops::BitOr<OnFail<Handler>> for $ty {
                type Output = FailRule<Self, Handler>;

                fn bitor(self, rhs: OnFail<Handler>) -> Self::Output {
                    FailRule::new(self, rhs.into_inner())
                }
            }

            impl<$($g)* Rhs: Combinable> std::ops::BitXor<Rhs> for $ty {
                type Output = XorRule<Self, Rhs>;

                fn bitxor(self, rhs: Rhs) -> Self::Output {
                    XorRule::new(self, rhs)
                }
            }

            impl<$($g)*> std::ops::Not for $ty {
                type Output = NotRule<Self>;

                fn not(self) -> Self::Output {
                    NotRule::new(self)
                }
            }

            impl<$($g)* Rhs: Combinable> std::ops::Sub<Rhs> for $ty {
                type Output = DiffRule<Self, Rhs>;

                fn sub(self, rhs: Rhs) -> Self::Output {
                    AndRule::new(NotRule::new(rhs), self)
                }
            }

            impl<$($g)* Rhs: Combinable> std::ops::Rem<Rhs> for $ty {
                type Output = ManyRule<Self, Rhs>;

                fn rem(self, rhs: Rhs) -> Self::Output {
                    ManyRule::new(self, rhs, 1, usize::MAX)
                }
            }

            impl<$($g)* Action> std::ops::Shr<Action> for $ty {
                type Output = ActionRule<Self, Action>;

                fn shr(self, rhs: Action) -> Self::Output {
                    ActionRule::new(self, rhs)
                }
            }
        )*
    };
}

combinable![
    [] EmptyRule,
    [] AnyRule,
    [C,] CharRule<C>,
    [T,] TokenRule<T>,
    [S,] StrRule<S>,
    [S,] SliceLitRule<S>,
    [F,] PredRule<F>,
    [F,] PredRunRule<F>,
    [F,] ProbeRule<F>,
    [] FlagRule,
    [] IdentRule,
    [] EndRule,
    [] AdvanceRule,
    [R1, R2,] AndRule<R1, R2>,
    [R1, R2,] OrRule<R1, R2>,
    [R, F,] FailRule<R, F>,
    [R1, R2,] XorRule<R1, R2>,
    [R,] NotRule<R>,
    [R,] OptRule<R>,
    [R, S,] ManyRule<R, S>,
    ['r, R: ?Sized,] RefRule<'r, R>,
    [R,] FindRule<R>,
    [P, T, E,] SelectRule<P, T, E>,
    [R,] TestRule<R>,
    [R, F,] ActionRule<R, F>,
    [R,] TracedRule<R>,
    [F,] FnRule<F>,
    ['g, I,] BoxedRule<'g, I>,
    ['g, I,] Recursive<'g, I>,
    ['g, I,] RecursiveRef<'g, I>,
];

#[cfg(feature = "binary")]
mod binary_ops {
    use super::*;
    use crate::terminal::binary::{ArrayRule, BinRule, SequenceRule, VarRule};

    combinable![
        [T,] BinRule<T>,
        ['v, T,] VarRule<'v, T>,
        ['v, T, const N: usize,] ArrayRule<'v, T, N>,
        ['v, T,] SequenceRule<'v, T>,
    ];
}

/// Makes a closure usable with the operators.
pub fn rule<F>(f: F) -> FnRule<F> {
    FnRule::new(f)
}

/// `r1 & r2`.
pub fn and<R1, R2>(r1: R1, r2: R2) -> AndRule<R1, R2> {
    AndRule::new(r1, r2)
}

/// `r1 | r2`.
pub fn or<R1, R2>(r1: R1, r2: R2) -> OrRule<R1, R2> {
    OrRule::new(r1, r2)
}

/// `r1 ^ r2`.
pub fn xor<R1, R2>(r1: R1, r2: R2) -> XorRule<R1, R2> {
    XorRule::new(r1, r2)
}

/// `!r`.
pub fn not<R>(r: R) -> NotRule<R> {
    NotRule::new(r)
}

/// `r` zero or one time.
pub fn opt<R>(r: R) -> OptRule<R> {
    OptRule::new(r)
}

/// `r` between `min` and `max` times.
pub fn many<R>(r: R, min: usize, max: usize) -> ManyRule<R, EmptyRule> {
    ManyRule::new(r, EmptyRule, min, max)
}

/// `r` between `min` and `max` times, separated by `separator`.
pub fn many_sep<R, S>(r: R, separator: S, min: usize, max: usize) -> ManyRule<R, S> {
    ManyRule::new(r, separator, min, max)
}

/// `r1 - r2`.
pub fn difference<R1, R2>(r1: R1, r2: R2) -> DiffRule<R1, R2> {
    AndRule::new(NotRule::new(r2), r1)
}

/// Borrows `r` as a rule.
pub fn reference<R: ?Sized>(r: &R) -> RefRule<'_, R> {
    RefRule::new(r)
}

/// Skips input until `r` matches.
pub fn skip_until<R>(r: R) -> FindRule<R> {
    FindRule::new(r)
}

/// Wraps a failure handler for `rule | on_fail(handler)`.
pub fn on_fail<F>(handler: F) -> OnFail<F> {
    OnFail::new(handler)
}

/// `r`, calling `handler(i1, i2)` when it fails.
pub fn fail_hook<R, F>(r: R, handler: F) -> FailRule<R, F> {
    FailRule::new(r, handler)
}

/// `probe & then` if `probe` matches, otherwise `otherwise`.
pub fn select<P, T, E>(probe: P, then: T, otherwise: E) -> SelectRule<P, T, E> {
    SelectRule::new(probe, then, otherwise)
}

/// Runs `r` without consuming input.
pub fn test<R>(r: R) -> TestRule<R> {
    TestRule::new(r)
}

/// Logs invocations of `r` at trace level.
pub fn traced<R>(name: &'static str, r: R) -> TracedRule<R> {
    TracedRule::new(r, name)
}
