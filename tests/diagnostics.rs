use numera::error::{AllocError, ParseError, RuntimeError};
use numera::interpreter::environment::MAX_SYMBOLS;
use numera::interpreter::session::Session;

fn assert_parse_error(source: &str, expected: ParseError) {
    let mut session = Session::new().unwrap();
    match session.parse(source) {
        Ok(_) => panic!("'{source}' parsed but should have been rejected"),
        Err(e) => assert_eq!(e, expected, "'{source}' raised the wrong error"),
    }
}

fn assert_runtime_error(source: &str, expected: RuntimeError) {
    let mut session = Session::new().unwrap();
    let root = match session.parse(source) {
        Ok(root) => root,
        Err(e) => panic!("'{source}' failed to parse: {e}"),
    };
    match session.evaluate(root) {
        Ok(value) => panic!("'{source}' evaluated to {value} but should have failed"),
        Err(e) => assert_eq!(e, expected, "'{source}' raised the wrong error"),
    }
}

#[test]
fn unrecognized_characters_are_reported_with_their_column() {
    assert_parse_error(
        "2 $ 3",
        ParseError::UnrecognizedCharacter {
            character: '$',
            column: 3,
        },
    );
    assert_parse_error(
        "#",
        ParseError::UnrecognizedCharacter {
            character: '#',
            column: 1,
        },
    );
}

#[test]
fn operators_cannot_begin_an_expression() {
    assert_parse_error(
        "* 2",
        ParseError::UnexpectedToken {
            token: "*".to_string(),
            column: 1,
        },
    );
    assert_parse_error(
        "2 + * 3",
        ParseError::UnexpectedToken {
            token: "*".to_string(),
            column: 5,
        },
    );
}

#[test]
fn dangling_operator_reports_end_of_input() {
    assert_parse_error("2 +", ParseError::UnexpectedEndOfInput { column: 4 });
    assert_parse_error("", ParseError::UnexpectedEndOfInput { column: 1 });
}

#[test]
fn unclosed_parenthesis_is_rejected() {
    assert_parse_error("(2 + 3", ParseError::ExpectedClosingParen { column: 7 });
    assert_parse_error("sin(1", ParseError::ExpectedClosingParen { column: 6 });
}

#[test]
fn leftover_tokens_after_a_complete_expression_are_rejected() {
    assert_parse_error(
        "2 + 3 4",
        ParseError::TrailingTokens {
            token: "4".to_string(),
            column: 7,
        },
    );
    assert_parse_error(
        "1 2",
        ParseError::TrailingTokens {
            token: "2".to_string(),
            column: 3,
        },
    );
}

#[test]
fn assignment_target_must_be_a_variable() {
    assert_parse_error("2 = 3", ParseError::InvalidAssignmentTarget { column: 3 });
    assert_parse_error(
        "x + y = 3",
        ParseError::InvalidAssignmentTarget { column: 7 },
    );
}

#[test]
fn reserved_names_cannot_be_assigned() {
    assert_parse_error(
        "pi = 1",
        ParseError::IdentifierReserved {
            name: "pi".to_string(),
            column: 1,
        },
    );
    assert_parse_error(
        "e = 2",
        ParseError::IdentifierReserved {
            name: "e".to_string(),
            column: 1,
        },
    );
    assert_parse_error(
        "sin = 0",
        ParseError::IdentifierReserved {
            name: "sin".to_string(),
            column: 1,
        },
    );
}

#[test]
fn only_names_can_be_called() {
    assert_parse_error("2(3)", ParseError::InvalidCallTarget { column: 2 });
    assert_parse_error("(1 + 2)(3)", ParseError::InvalidCallTarget { column: 8 });
}

#[test]
fn failed_parses_leave_the_environment_untouched() {
    let mut session = Session::new().unwrap();

    assert!(session.parse("x = 2 +").is_err());
    session.reset();

    let root = session.parse("x").unwrap();
    assert_eq!(
        session.evaluate(root),
        Err(RuntimeError::UnknownVariable {
            name: "x".to_string(),
        })
    );
}

#[test]
fn reading_an_undefined_variable_fails() {
    assert_runtime_error(
        "x + 1",
        RuntimeError::UnknownVariable {
            name: "x".to_string(),
        },
    );
}

#[test]
fn calling_an_unknown_function_fails() {
    assert_runtime_error(
        "foo(2)",
        RuntimeError::UnknownFunction {
            name: "foo".to_string(),
        },
    );
}

#[test]
fn division_by_zero_fails() {
    assert_runtime_error("1 / 0", RuntimeError::DivisionByZero);
    assert_runtime_error("1 / (2 - 2)", RuntimeError::DivisionByZero);
}

#[test]
fn errors_are_localized_to_their_subexpression() {
    let mut session = Session::new().unwrap();

    // The division fails, but the sibling assignment still lands.
    let root = session.parse("(1 / 0) + (x = 5)").unwrap();
    assert_eq!(session.evaluate(root), Err(RuntimeError::DivisionByZero));
    session.reset();

    let root = session.parse("x").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 5.0);
}

#[test]
fn first_of_several_errors_is_reported() {
    assert_runtime_error(
        "nope + 1 / 0",
        RuntimeError::UnknownVariable {
            name: "nope".to_string(),
        },
    );
}

#[test]
fn evaluating_across_a_reset_reports_a_detached_node() {
    let mut session = Session::new().unwrap();

    let root = session.parse("1 + 2").unwrap();
    session.reset();

    assert_eq!(session.evaluate(root), Err(RuntimeError::DetachedNode));
    assert!(session.render_ast(root).is_none());
}

#[test]
fn evaluating_across_a_replacing_parse_reports_a_detached_node() {
    let mut session = Session::new().unwrap();

    let stale = session.parse("pi").unwrap();

    // No reset in between: the new line replaces the stored source, and the
    // stale root's span must not resolve against it.
    let fresh = session.parse("zz").unwrap();

    assert_eq!(session.evaluate(stale), Err(RuntimeError::DetachedNode));
    assert!(session.render_ast(stale).is_none());

    assert_eq!(
        session.evaluate(fresh),
        Err(RuntimeError::UnknownVariable {
            name: "zz".to_string(),
        })
    );
}

#[test]
fn node_arena_exhaustion_is_a_parse_error() {
    let mut session = Session::with_capacity(3).unwrap();

    assert_eq!(
        session.parse("1 + 2 + 3"),
        Err(ParseError::Allocation(AllocError::Exhausted { capacity: 3 }))
    );
    session.reset();

    // The arena is usable again once the partial tree has been reclaimed.
    let root = session.parse("1 + 2").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 3.0);
}

#[test]
fn symbol_table_overflow_preserves_existing_entries() {
    let mut session = Session::new().unwrap();

    // Two slots are taken by the seeded constants.
    for i in 0..MAX_SYMBOLS - 2 {
        let root = session.parse(&format!("v{i} = {i}")).unwrap();
        assert_eq!(session.evaluate(root).unwrap(), i as f64);
        session.reset();
    }

    let root = session.parse("overflow = 1").unwrap();
    assert_eq!(
        session.evaluate(root),
        Err(RuntimeError::SymbolTableFull {
            capacity: MAX_SYMBOLS,
        })
    );
    session.reset();

    // Earlier variables still read back, and existing names still update.
    let root = session.parse("v0 + v125").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 125.0);
    session.reset();

    let root = session.parse("v0 = 40").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 40.0);
}
