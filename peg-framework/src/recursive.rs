//! Forward-declared rules for self-referencing grammars.
//!
//! A rule cannot mention itself before it exists, so a recursive grammar is
//! built in two steps: create a [`Recursive`] cell, use its
//! [`handle`](Recursive::handle) wherever the rule is needed, then
//! [`define`](Recursive::define) the cell with the finished expression.
//!
//! ```
//! use cursor_framework::TextCursor;
//! use peg_framework::{ch, pred, Combinable, Recursive, Rule};
//!
//! let nested = Recursive::named("nested");
//! let digit = pred(|c: &char| c.is_ascii_digit());
//! nested.define(digit | (ch('(') & nested.handle() & ch(')'))).unwrap();
//!
//! let (begin, end) = TextCursor::range("((7))");
//! assert!(nested.parse_all(begin, end));
//! ```
//!
//! The cell owns the definition; handles are weak, so the rule graph has no
//! ownership cycle. Keep the `Recursive` alive for as long as the grammar is
//! used.

use crate::error::GrammarError;
use crate::result::Match;
use crate::traits::{BoxedRule, Rule};
use cursor_framework::Cursor;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Slot<'g, I> = OnceCell<BoxedRule<'g, I>>;

/// A rule whose definition is supplied after construction.
pub struct Recursive<'g, I> {
    name: &'static str,
    slot: Rc<Slot<'g, I>>,
}

impl<'g, I> Recursive<'g, I> {
    pub fn new() -> Self {
        Self::named("recursive")
    }

    /// Creates a cell whose name appears in diagnostics.
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            slot: Rc::new(OnceCell::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a non-owning rule that delegates to this cell.
    pub fn handle(&self) -> RecursiveRef<'g, I> {
        RecursiveRef {
            name: self.name,
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Supplies the definition. A cell can only be defined once.
    pub fn define<R>(&self, rule: R) -> Result<(), GrammarError>
    where
        R: Rule<I> + 'g,
    {
        self.slot
            .set(BoxedRule::new(rule))
            .map_err(|_| GrammarError::AlreadyDefined {
                name: self.name.to_string(),
            })
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<I> Default for Recursive<'_, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for Recursive<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recursive")
            .field("name", &self.name)
            .field("defined", &self.is_defined())
            .finish()
    }
}

impl<I: Cursor> Rule<I> for Recursive<'_, I> {
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        delegate(self.name, &self.slot, i1, i2)
    }
}

/// Weak handle to a [`Recursive`] cell.
pub struct RecursiveRef<'g, I> {
    name: &'static str,
    slot: Weak<Slot<'g, I>>,
}

impl<I> Clone for RecursiveRef<'_, I> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<I> fmt::Debug for RecursiveRef<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecursiveRef")
            .field("name", &self.name)
            .finish()
    }
}

impl<I: Cursor> Rule<I> for RecursiveRef<'_, I> {
    fn parse(&self, i1: I, i2: I) -> Match<I> {
        match self.slot.upgrade() {
            Some(slot) => delegate(self.name, &slot, i1, i2),
            None => {
                log::warn!("rule `{}` was dropped before use", self.name);
                Match::failure(i1)
            }
        }
    }
}

fn delegate<I: Cursor>(name: &str, slot: &Slot<'_, I>, i1: I, i2: I) -> Match<I> {
    match slot.get() {
        Some(rule) => rule.parse(i1, i2),
        None => {
            log::warn!("rule `{}` used before it was defined", name);
            Match::failure(i1)
        }
    }
}
