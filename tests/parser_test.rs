//! Grammar and diagnostics tests at the crate boundary

use sequitur::{parse_formula, parse_sequent};

#[test]
fn parse_display_round_trips() {
    for input in [
        "A",
        "!A",
        "!!A",
        "A & B",
        "A V B",
        "A -> B",
        "(A & B) -> C",
        "!(A V B) -> (C & !D)",
        "A -> (B -> (C -> D))",
    ] {
        let formula = parse_formula(input).unwrap();
        assert_eq!(formula.to_string(), input);
        let reparsed = parse_formula(&formula.to_string()).unwrap();
        assert_eq!(reparsed, formula);
    }
}

#[test]
fn whitespace_and_spelling_variants_normalize() {
    let dense = parse_formula("(A&B)->!C").unwrap();
    let spaced = parse_formula("  ( A & B )  ->  ~C ").unwrap();
    assert_eq!(dense, spaced);
    assert_eq!(dense.to_string(), "(A & B) -> !C");

    assert_eq!(parse_formula("A v B").unwrap(), parse_formula("A | B").unwrap());
}

#[test]
fn unterminated_group_reports_the_end_of_input() {
    let error = parse_formula("(A&B").unwrap_err();
    assert_eq!(error.offset, 4);
    assert_eq!(error.message, "expected )");

    let rendered = error.caret_diagnostic("(A&B");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "(A&B");
    assert_eq!(lines[1], "    ^");
    assert_eq!(lines[2], "    Error: expected )");
}

#[test]
fn caret_diagnostics_point_into_the_line() {
    let input = "A -> (B & )";
    let error = parse_formula(input).unwrap_err();
    assert_eq!(error.offset, 10);
    assert_eq!(error.message, "expected !, (, or variable");
    let rendered = error.caret_diagnostic(input);
    assert!(rendered.contains(&format!("{}^", " ".repeat(10))));
}

#[test]
fn reserved_or_letter_is_not_a_variable() {
    assert!(parse_formula("v").is_err());
    assert!(parse_formula("V -> A").is_err());
    // but every other letter is fine, either case
    assert!(parse_formula("w -> W").is_ok());
}

#[test]
fn sequent_round_trip_through_display() {
    for input in ["A, B => C", "=> A -> A", "A & B =>", "=>"] {
        let sequent = parse_sequent(input).unwrap();
        let reparsed = parse_sequent(&sequent.to_string()).unwrap();
        assert_eq!(reparsed, sequent);
    }
}
