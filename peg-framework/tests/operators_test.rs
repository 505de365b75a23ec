use peg_framework::predicate::{is_digit, is_space};
use peg_framework::{
    ch, end, ident, lit, on_fail, pred, pred_run, pred_run_bounded, rule, Combinable, Cursor, Match,
    Rule, TextCursor,
};
use std::cell::{Cell, RefCell};

fn run<'a, R: Rule<TextCursor<'a>>>(rule: &R, text: &'a str) -> (bool, &'a str) {
    let (begin, end) = TextCursor::range(text);
    let m = rule.parse(begin, end);
    (m.matched, m.start.slice(&m.position))
}

#[test]
fn test_rate_assignment_scenario() {
    let name = RefCell::new(String::new());
    let digits = RefCell::new(String::new());

    let assignment = (ident() >> |s: TextCursor<'_>, e: TextCursor<'_>| {
        name.replace(s.slice(&e).to_string());
    }) & ch('=')
        & (pred_run_bounded(is_digit, 1, usize::MAX)
            >> |s: TextCursor<'_>, e: TextCursor<'_>| {
                digits.replace(s.slice(&e).to_string());
            });

    assert_eq!(run(&assignment, "rate=12"), (true, "rate=12"));
    assert_eq!(name.borrow().as_str(), "rate");
    assert_eq!(digits.borrow().as_str(), "12");
}

#[test]
fn test_bitand_and_bitor() {
    let sign = ch('+') | ch('-');
    let number = sign.opt() & pred(is_digit).one_or_more();
    assert_eq!(run(&number, "-42;"), (true, "-42"));
    assert_eq!(run(&number, "7"), (true, "7"));
    assert_eq!(run(&number, "+"), (false, ""));
}

#[test]
fn test_bitxor() {
    let r = lit("<=") ^ ch('<');
    assert_eq!(run(&r, "<="), (false, ""));
    assert_eq!(run(&r, "<x"), (true, "<"));
}

#[test]
fn test_not_operator() {
    let not_digit = !pred(is_digit);
    assert_eq!(run(&not_digit, "a"), (true, ""));
    assert_eq!(run(&not_digit, "1"), (false, ""));
}

#[test]
fn test_sub_operator() {
    let keyword = lit("process") | lit("directive");
    let name = ident() - keyword;
    assert_eq!(run(&name, "worker"), (true, "worker"));
    assert_eq!(run(&name, "process"), (false, ""));
}

#[test]
fn test_rem_operator() {
    let spaces = pred_run(is_space);
    let comma = spaces.by_ref() & ch(',') & spaces.by_ref();
    let list = pred_run_bounded(is_digit, 1, usize::MAX) % comma;
    assert_eq!(run(&list, "1 , 22,3 ,"), (true, "1 , 22,3"));
}

#[test]
fn test_on_fail_operator() {
    let failures = Cell::new(0);
    let r = lit("ok")
        | on_fail(|_: TextCursor<'_>, _: TextCursor<'_>| failures.set(failures.get() + 1));
    assert_eq!(run(&r, "ok"), (true, "ok"));
    assert_eq!(run(&r, "ko"), (false, ""));
    assert_eq!(failures.get(), 1);
}

#[test]
fn test_closure_rule_combines() {
    fn upper<'t>(i1: TextCursor<'t>, i2: TextCursor<'t>) -> Match<TextCursor<'t>> {
        match i1.next_item(&i2) {
            Some((c, next)) if c.is_ascii_uppercase() => Match::success(i1, next),
            _ => Match::failure(i1),
        }
    }

    let r = rule(upper) & lit("bc") & end();
    assert_eq!(run(&r, "Abc"), (true, "Abc"));
    assert_eq!(run(&r, "abc"), (false, ""));
}

#[test]
fn test_builder_methods() {
    let digit = pred(is_digit);
    assert_eq!(run(&digit.many(), "123a"), (true, "123"));
    assert_eq!(run(&digit.repeat(1, 2), "123"), (true, "12"));
    assert_eq!(run(&digit.separated_by(ch('.')), "1.2.3"), (true, "1.2.3"));
    assert_eq!(run(&lit("*)").skip_until(), "ab*)c"), (true, "ab*)"));
    assert_eq!(run(&lit("ab").test(), "abc"), (true, ""));
}
