use peg_example::{load_model, parse_model, ModelError, Process, Rate};
use rstest::rstest;
use std::path::Path;

const SWITCH: &str = "\
(* a two-gene switch *)
directive default_rate 0.5
directive stochasticity_absorption 3

process a 1
process b 2

a 1 -> b 0 1 @0.3~5
b 1 -> a 0 1
b 2 -> b 2 0   (* self hit *)
a 0 -> b 1 2 @Inf
";

#[test]
fn test_parse_switch_model() {
    let model = parse_model(SWITCH).unwrap();

    assert_eq!(model.default_rate, Rate::Finite(0.5));
    assert_eq!(model.stochasticity_absorption, 3);
    assert_eq!(model.sorts().len(), 2);
    assert_eq!(model.sort("b").map(|sort| sort.max), Some(2));
    assert_eq!(model.process_count(), 5);
    assert_eq!(model.actions().len(), 4);

    let first = &model.actions()[0];
    assert_eq!(first.hitter(), Process { sort: "a", index: 1 });
    assert_eq!(first.target(), Process { sort: "b", index: 0 });
    assert_eq!(first.bounce(), Process { sort: "b", index: 1 });
    assert_eq!(first.rate, Some(Rate::Finite(0.3)));
    assert_eq!(first.stochasticity, Some(5));

    assert_eq!(model.effective_rate(&model.actions()[1]), Rate::Finite(0.5));
    assert_eq!(model.actions()[3].rate, Some(Rate::Infinite));
}

#[test]
fn test_defaults_without_directives() {
    let model = parse_model("process a 1").unwrap();
    assert_eq!(model.default_rate, Rate::Infinite);
    assert_eq!(model.stochasticity_absorption, 1);
    assert!(model.actions().is_empty());
}

#[test]
fn test_actions_may_precede_declarations() {
    let model = parse_model("a 0 -> b 0 1\nprocess a 0\nprocess b 1").unwrap();
    assert_eq!(model.actions().len(), 1);
}

#[test]
fn test_ph_output_round_trips() {
    let model = parse_model(SWITCH).unwrap();
    let text = model.to_string();
    assert!(text.contains("process b 2\n"));
    assert!(text.contains("a 1 -> b 0 1 @0.3~5\n"));
    assert_eq!(parse_model(&text).unwrap(), model);
}

#[test]
fn test_dot_output() {
    let model = parse_model(SWITCH).unwrap();
    let dot = model.to_dot();
    assert!(dot.starts_with("digraph ph {"));
    assert!(dot.contains("subgraph \"cluster_a\""));
    assert!(dot.contains("\"a_1\" -> \"b_0\" [label = \"0.3\"];"));
    assert!(dot.contains("\"b_0\" -> \"b_1\" [style = dashed];"));
    assert!(dot.contains("\"a_0\" -> \"b_1\";"));
}

#[test]
fn test_summary() {
    let model = parse_model(SWITCH).unwrap();
    let summary = model.summary();
    assert!(summary.starts_with("2 sorts, 5 processes, 4 actions\n"));
    assert!(summary.contains("  b: 3 processes, hits 2 times\n"));
}

#[test]
fn test_syntax_error_points_at_line() {
    let err = parse_model("process a 1\na 1 => a 0 1\n").unwrap_err();
    assert!(matches!(err, ModelError::Syntax(_)));
    assert_eq!(err.line(), Some(2));
}

#[rstest]
#[case("process a 1\nprocess a 2", 2, "declared twice")]
#[case("process a 1\na 1 -> c 0 1", 2, "`c` is not declared")]
#[case("process a 1\nprocess b 1\na 2 -> b 0 1", 3, "a_2 does not exist")]
#[case("process a 1\nprocess b 1\na 1 -> b 0 5", 3, "b_5 does not exist")]
#[case("process a 1\nprocess b 1\na 1 -> b 0 0", 3, "bounces to itself")]
#[case("process a 2\na 1 -> a 0 2", 2, "can only hit its own sort")]
#[case("directive default_rate 0", 1, "rate must be positive")]
#[case("process a 99999999999999999999999", 1, "out of range")]
fn test_semantic_errors(#[case] text: &str, #[case] line: usize, #[case] message: &str) {
    let err = parse_model(text).unwrap_err();
    assert_eq!(err.line(), Some(line));
    assert!(
        err.to_string().contains(message),
        "`{}` does not mention `{}`",
        err,
        message
    );
}

#[test]
fn test_load_missing_file() {
    let err = load_model(Path::new("does/not/exist.ph")).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
    assert_eq!(err.line(), None);
    assert!(err.to_string().starts_with("cannot read does/not/exist.ph"));
}
