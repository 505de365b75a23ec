use peg_framework::predicate::{is_digit, is_space};
use peg_framework::{
    ch, fail_hook, ident, parse_slice, parse_text, pred, pred_run, pred_run_bounded, token,
    Combinable, ParseError, Position, TextCursor,
};
use std::cell::Cell;

#[test]
fn test_parse_text_full_match() {
    let line = ident() & ch('=') & pred(is_digit).one_or_more();
    assert_eq!(parse_text(&line, "rate=12"), Ok(Position::at(1, 8, 7)));
}

#[test]
fn test_parse_text_no_match() {
    let line = ident() & ch('=');
    let err = parse_text(&line, "12=").unwrap_err();
    assert_eq!(err, ParseError::NoMatch { position: Position::new() });
    assert_eq!(err.to_string(), "input does not match at 1:1");
}

#[test]
fn test_no_match_points_at_start_while_hook_sees_failure_site() {
    let failed_at = Cell::new(None);
    let value = fail_hook(
        pred_run_bounded(is_digit, 1, usize::MAX),
        |i1: TextCursor<'_>, _: TextCursor<'_>| failed_at.set(Some(i1.location())),
    );
    let line = ident() & ch('=') & value;

    let err = parse_text(&line, "rate=x").unwrap_err();
    assert_eq!(err.position(), Position::new());
    assert_eq!(failed_at.get(), Some(Position::at(1, 6, 5)));
}

#[test]
fn test_parse_text_reports_trailing_input_location() {
    let lines = (ident() & pred_run(is_space)).many();
    let err = parse_text(&lines, "alpha\nbeta\n  42").unwrap_err();
    assert!(matches!(err, ParseError::TrailingInput { .. }));
    assert_eq!(err.position(), Position::at(3, 3, 13));
}

#[test]
fn test_parse_text_empty_input() {
    assert!(parse_text(&pred_run(is_digit), "").is_ok());
    assert!(parse_text(&ch('a'), "").is_err());
}

#[test]
fn test_parse_slice_over_tokens() {
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tok {
        Open,
        Close,
    }

    let balanced_pair = token(Tok::Open) & token(Tok::Close);
    let pairs = balanced_pair.one_or_more();

    let input = [Tok::Open, Tok::Close, Tok::Open, Tok::Close];
    assert_eq!(parse_slice(&pairs, &input), Ok(4));

    let err = parse_slice(&pairs, &input[..3]).unwrap_err();
    assert_eq!(err.position(), Position::of_index(2));
}
