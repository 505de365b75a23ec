//! Algebraic properties of the composition operators over random inputs.

use peg_framework::{
    ch, fail_hook, lit, many, opt, reference, select, skip_until, Combinable, Rule, TextCursor,
};
use proptest::prelude::*;

fn outcome<'a, R: Rule<TextCursor<'a>>>(rule: &R, text: &'a str) -> (bool, usize) {
    let (begin, end) = TextCursor::range(text);
    let m = rule.parse(begin, end);
    if !m.matched {
        assert_eq!(m.position, begin);
    }
    (m.matched, m.position.offset())
}

proptest! {
    #[test]
    fn test_failure_never_consumes(input in "[ab]{0,8}") {
        let shared = lit("ab") & lit("ab");
        let rules = [
            (lit("ab") & lit("ba")).boxed(),
            (lit("aa") | lit("bb")).boxed(),
            (lit("a") ^ lit("ab")).boxed(),
            many(ch('a'), 2, 4).boxed(),
            many(opt(ch('a')) & ch('b'), 2, 3).boxed(),
            many(opt(ch('b')), 3, 3).boxed(),
            (lit("ab") - lit("aba")).boxed(),
            (ch('a') % ch('b')).boxed(),
            select(lit("a"), lit("bb"), lit("c")).boxed(),
            fail_hook(lit("a") & lit("ab"), |_: TextCursor<'_>, _: TextCursor<'_>| {}).boxed(),
            skip_until(lit("bb")).boxed(),
            ((lit("a") & lit("b")) >> |_: TextCursor<'_>, _: TextCursor<'_>| {}).boxed(),
            (reference(&shared) & ch('a')).boxed(),
        ];
        for rule in &rules {
            let _ = outcome(rule, &input);
        }
    }

    #[test]
    fn test_and_consumption_chains(input in "[ab]{0,8}") {
        let (first_ok, first_end) = outcome(&lit("a"), &input);
        let (and_ok, and_end) = outcome(&(lit("a") & lit("b")), &input);
        if and_ok {
            prop_assert!(first_ok);
            prop_assert_eq!(and_end, first_end + 1);
        }
    }

    #[test]
    fn test_or_is_left_biased(input in "[ab]{0,8}") {
        let (left_ok, left_end) = outcome(&lit("ab"), &input);
        let (or_ok, or_end) = outcome(&(lit("ab") | lit("a")), &input);
        if left_ok {
            prop_assert!(or_ok);
            prop_assert_eq!(or_end, left_end);
        }
    }

    #[test]
    fn test_not_is_non_consuming(input in "[ab]{0,8}") {
        let (inner_ok, _) = outcome(&lit("ab"), &input);
        let (not_ok, not_end) = outcome(&!lit("ab"), &input);
        prop_assert_eq!(not_ok, !inner_ok);
        prop_assert_eq!(not_end, 0);
    }

    #[test]
    fn test_many_count_within_bounds(
        input in "a{0,10}b?",
        min in 0usize..5,
        max in 0usize..6,
    ) {
        let rule = many(ch('a'), min, max);
        let (begin, end) = TextCursor::range(&input);
        let (m, count) = rule.parse_counted(begin, end);
        if m.matched {
            prop_assert!(count >= rule.min() && count <= max);
            prop_assert_eq!(m.position.offset(), count);
        }
        if max == 0 {
            prop_assert!(m.matched);
            prop_assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_many_nullable_count_within_bounds(
        input in "a{0,10}b?",
        min in 0usize..5,
        max in 0usize..6,
    ) {
        let rule = many(opt(ch('a')), min, max);
        let (begin, end) = TextCursor::range(&input);
        let (m, count) = rule.parse_counted(begin, end);
        let leading = input.chars().take_while(|&c| c == 'a').count();
        prop_assert!(m.matched);
        prop_assert!(count >= rule.min() && count <= max);
        prop_assert_eq!(count, max);
        prop_assert_eq!(m.position.offset(), leading.min(max));
    }

    #[test]
    fn test_xor_exclusivity(input in "[ab]{0,6}") {
        let (left, _) = outcome(&lit("ab"), &input);
        let (right, _) = outcome(&ch('a'), &input);
        let (xor_ok, _) = outcome(&(lit("ab") ^ ch('a')), &input);
        prop_assert_eq!(xor_ok, left != right);
    }
}
