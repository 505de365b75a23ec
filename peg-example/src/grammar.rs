//! Grammar of the process-hitting text format.
//!
//! ```text
//! directive default_rate 0.5          (* or Inf *)
//! directive stochasticity_absorption 3
//! process a 1                         (* sort a, processes a_0 and a_1 *)
//! process b 2
//! a 1 -> b 0 2 @0.3~5                 (* a_1 hits b_0, b bounces to b_2 *)
//! ```
//!
//! Parsing only checks the shape of the text and collects [`Statement`]s;
//! names and numbers are checked when the model is built.

use peg_framework::predicate::{is_digit, is_space};
use peg_framework::{
    ch, empty, lit, opt, parse_text, pred, pred_run, pred_run_bounded, skip_until, Combinable,
    ParseError, TextCursor,
};
use std::cell::{Cell, RefCell};

/// A rate as written: `Inf` or a decimal number.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRate {
    Infinite,
    Finite(String),
}

/// One statement of a model file, with its numbers still in text form.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    DefaultRate {
        rate: RawRate,
        line: usize,
    },
    StochasticityAbsorption {
        value: String,
        line: usize,
    },
    Process {
        sort: String,
        max: String,
        line: usize,
    },
    Action {
        hitter_sort: String,
        hitter: String,
        target_sort: String,
        target: String,
        bounce: String,
        rate: Option<RawRate>,
        stochasticity: Option<String>,
        line: usize,
    },
}

fn is_name_start(c: &char) -> bool {
    c.is_alphabetic() || *c == '_'
}

fn is_name_char(c: &char) -> bool {
    c.is_alphanumeric() || *c == '_' || *c == '\''
}

/// Values captured by the semantic actions of the statement being matched.
///
/// Every statement alternative starts with a reset, so values left behind
/// by an alternative that failed halfway never leak into the next one.
#[derive(Default)]
struct Captures {
    line: Cell<usize>,
    names: RefCell<Vec<String>>,
    numbers: RefCell<Vec<String>>,
    rate: RefCell<Option<RawRate>>,
    stochasticity: RefCell<Option<String>>,
    statements: RefCell<Vec<Statement>>,
}

type Build = fn(&Captures) -> Option<Statement>;

impl Captures {
    fn reset(&self) -> impl Fn(TextCursor<'_>, TextCursor<'_>) + '_ {
        move |start, _| {
            self.line.set(start.location().line);
            self.names.borrow_mut().clear();
            self.numbers.borrow_mut().clear();
            self.rate.replace(None);
            self.stochasticity.replace(None);
        }
    }

    fn name(&self) -> impl Fn(TextCursor<'_>, TextCursor<'_>) + '_ {
        move |start, end| self.names.borrow_mut().push(start.slice(&end).to_string())
    }

    fn number(&self) -> impl Fn(TextCursor<'_>, TextCursor<'_>) + '_ {
        move |start, end| self.numbers.borrow_mut().push(start.slice(&end).to_string())
    }

    fn finite_rate(&self) -> impl Fn(TextCursor<'_>, TextCursor<'_>) + '_ {
        move |start, end| {
            self.rate
                .replace(Some(RawRate::Finite(start.slice(&end).to_string())));
        }
    }

    fn infinite_rate(&self) -> impl Fn(TextCursor<'_>, TextCursor<'_>) + '_ {
        move |_, _| {
            self.rate.replace(Some(RawRate::Infinite));
        }
    }

    fn stochasticity(&self) -> impl Fn(TextCursor<'_>, TextCursor<'_>) + '_ {
        move |start, end| {
            self.stochasticity
                .replace(Some(start.slice(&end).to_string()));
        }
    }

    fn emit(&self, build: Build) -> impl Fn(TextCursor<'_>, TextCursor<'_>) + '_ {
        move |_, _| match build(self) {
            Some(statement) => self.statements.borrow_mut().push(statement),
            None => log::warn!("line {}: incomplete statement ignored", self.line.get()),
        }
    }

    fn default_rate(&self) -> Option<Statement> {
        Some(Statement::DefaultRate {
            rate: self.rate.take()?,
            line: self.line.get(),
        })
    }

    fn stochasticity_absorption(&self) -> Option<Statement> {
        let [value]: [String; 1] = self.numbers.take().try_into().ok()?;
        Some(Statement::StochasticityAbsorption {
            value,
            line: self.line.get(),
        })
    }

    fn process(&self) -> Option<Statement> {
        let [sort]: [String; 1] = self.names.take().try_into().ok()?;
        let [max]: [String; 1] = self.numbers.take().try_into().ok()?;
        Some(Statement::Process {
            sort,
            max,
            line: self.line.get(),
        })
    }

    fn action(&self) -> Option<Statement> {
        let [hitter_sort, target_sort]: [String; 2] = self.names.take().try_into().ok()?;
        let [hitter, target, bounce]: [String; 3] = self.numbers.take().try_into().ok()?;
        Some(Statement::Action {
            hitter_sort,
            hitter,
            target_sort,
            target,
            bounce,
            rate: self.rate.take(),
            stochasticity: self.stochasticity.take(),
            line: self.line.get(),
        })
    }
}

/// Parses model text into its statements.
pub fn parse_statements(text: &str) -> Result<Vec<Statement>, ParseError> {
    let captures = Captures::default();

    let gap = || {
        (pred_run_bounded(is_space::<char>, 1, usize::MAX) | (lit("(*") & skip_until(lit("*)"))))
            .many()
    };
    let keyword = |word: &'static str| lit(word) & !pred(is_name_char);
    let reserved = || keyword("directive") | keyword("process") | keyword("Inf");
    let digits = || pred_run_bounded(is_digit::<char>, 1, usize::MAX);
    let decimal = || (digits() & opt(ch('.') & pred_run(is_digit::<char>))) | (ch('.') & digits());

    let name = || ((pred(is_name_start) & pred_run(is_name_char)) - reserved()) >> captures.name();
    let number = || digits() >> captures.number();
    let rate = || (keyword("Inf") >> captures.infinite_rate()) | (decimal() >> captures.finite_rate());
    let begin = || empty() >> captures.reset();

    let default_rate = (begin()
        & keyword("directive")
        & gap()
        & keyword("default_rate")
        & gap()
        & rate())
        >> captures.emit(Captures::default_rate);

    let stochasticity_absorption = (begin()
        & keyword("directive")
        & gap()
        & keyword("stochasticity_absorption")
        & gap()
        & number())
        >> captures.emit(Captures::stochasticity_absorption);

    let process = (begin() & keyword("process") & gap() & name() & gap() & number())
        >> captures.emit(Captures::process);

    let action = (begin()
        & name()
        & gap()
        & number()
        & gap()
        & lit("->")
        & gap()
        & name()
        & gap()
        & number()
        & gap()
        & number()
        & opt(gap() & ch('@') & gap() & rate())
        & opt(gap() & ch('~') & gap() & (digits() >> captures.stochasticity())))
        >> captures.emit(Captures::action);

    let statement = default_rate | stochasticity_absorption | process | action;
    let model = gap() & (statement & gap()).many();

    parse_text(&model, text)?;
    Ok(captures.statements.take())
}
