use numera::eval_str;
use numera::interpreter::session::Session;

fn assert_evaluates(source: &str, expected: f64) {
    match eval_str(source) {
        Ok(value) => assert_eq!(
            value, expected,
            "'{source}' evaluated to {value}, expected {expected}"
        ),
        Err(e) => panic!("'{source}' failed: {e}"),
    }
}

fn assert_close(source: &str, expected: f64) {
    match eval_str(source) {
        Ok(value) => assert!(
            (value - expected).abs() < 1e-10,
            "'{source}' evaluated to {value}, expected about {expected}"
        ),
        Err(e) => panic!("'{source}' failed: {e}"),
    }
}

#[test]
fn numeric_literals() {
    assert_evaluates("42", 42.0);
    assert_evaluates("3.14", 3.14);
    assert_evaluates("0", 0.0);
    assert_evaluates("1.", 1.0);
    assert_evaluates("007", 7.0);
}

#[test]
fn operator_precedence() {
    assert_evaluates("2 + 3 * 4", 14.0);
    assert_evaluates("2 * 3 + 4", 10.0);
    assert_evaluates("2 + 12 / 4", 5.0);
    assert_evaluates("1 + 2 * 3 ^ 2", 19.0);
}

#[test]
fn associativity() {
    assert_evaluates("2 - 3 - 4", -5.0);
    assert_evaluates("16 / 4 / 2", 2.0);
    assert_evaluates("2 ^ 3 ^ 2", 512.0);
}

#[test]
fn grouping_overrides_precedence() {
    assert_evaluates("(2 + 3) * 4", 20.0);
    assert_evaluates("2 * (3 + 4)", 14.0);
    assert_evaluates("(2 ^ 3) ^ 2", 64.0);
    assert_evaluates("((((7))))", 7.0);
}

#[test]
fn unary_operators() {
    assert_evaluates("-3", -3.0);
    assert_evaluates("+3", 3.0);
    assert_evaluates("--3", 3.0);
    assert_evaluates("2 * -3", -6.0);
    assert_evaluates("-(2 + 3)", -5.0);
}

#[test]
fn prefix_minus_binds_tighter_than_power() {
    // unary := ('+' | '-') unary | postfix, so the base of '^' is (-2).
    assert_evaluates("-2 ^ 2", 4.0);
    assert_evaluates("2 ^ -1", 0.5);
}

#[test]
fn postfix_factorial() {
    assert_evaluates("5!", 120.0);
    assert_evaluates("0!", 1.0);
    assert_evaluates("3! + 1", 7.0);
    assert_evaluates("(3!)!", 720.0);
    assert_evaluates("3!!", 720.0);
    // -3! parses as -(3!).
    assert_evaluates("-3!", -6.0);
}

#[test]
fn factorial_generalizes_via_gamma() {
    // 0.5! = Γ(1.5) = √π / 2
    assert_close("0.5!", std::f64::consts::PI.sqrt() / 2.0);
}

#[test]
fn named_constants() {
    assert_evaluates("pi", std::f64::consts::PI);
    assert_evaluates("e", std::f64::consts::E);
    assert_close("sin(pi)", 0.0);
}

#[test]
fn builtin_functions() {
    assert_evaluates("sqrt(9)", 3.0);
    assert_evaluates("abs(-5)", 5.0);
    assert_evaluates("sin(0)", 0.0);
    assert_close("cos(0)", 1.0);
    assert_close("ln(e)", 1.0);
    assert_close("log(100)", 2.0);
    assert_close("exp(1)", std::f64::consts::E);
    assert_close("tanh(0)", 0.0);
    assert_close("arctan(1)", std::f64::consts::FRAC_PI_4);
}

#[test]
fn calls_compose_with_operators() {
    assert_evaluates("sqrt(9) + 1", 4.0);
    assert_evaluates("2 * abs(3 - 5)", 4.0);
    assert_close("sqrt(sqrt(16))", 2.0);
}

#[test]
fn assignment_returns_the_assigned_value() {
    assert_evaluates("x = 5", 5.0);
    assert_evaluates("x = 2 + 3 * 4", 14.0);
}

#[test]
fn assignment_round_trip() {
    let mut session = Session::new().unwrap();

    let root = session.parse("x = 5").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 5.0);
    session.reset();

    let root = session.parse("x + 1").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 6.0);
}

#[test]
fn chained_assignment_is_right_associative() {
    let mut session = Session::new().unwrap();

    let root = session.parse("a = b = 3").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 3.0);
    session.reset();

    let root = session.parse("a + b").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 6.0);
}

#[test]
fn assignment_value_threads_through_expressions() {
    let mut session = Session::new().unwrap();

    let root = session.parse("x = 2 + (y = 3)").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 5.0);
    session.reset();

    let root = session.parse("y").unwrap();
    assert_eq!(session.evaluate(root).unwrap(), 3.0);
}

#[test]
fn variables_snapshot_lists_constants_and_assignments() {
    let mut session = Session::new().unwrap();

    let root = session.parse("answer = 42").unwrap();
    session.evaluate(root).unwrap();

    let variables: Vec<(String, f64)> = session
        .variables()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    assert_eq!(
        variables,
        vec![
            ("pi".to_string(), std::f64::consts::PI),
            ("e".to_string(), std::f64::consts::E),
            ("answer".to_string(), 42.0),
        ]
    );
}

#[test]
fn arena_reuse_between_parses() {
    let mut session = Session::new().unwrap();

    let first = session.parse("1 + 2").unwrap();
    assert_eq!(session.evaluate(first).unwrap(), 3.0);
    session.reset();

    let second = session.parse("4 * 5").unwrap();
    assert_eq!(session.evaluate(second).unwrap(), 20.0);
}

#[test]
fn ast_rendering_uses_prefix_form() {
    let mut session = Session::new().unwrap();

    let root = session.parse("1 + 2 * x").unwrap();
    assert_eq!(session.render_ast(root).unwrap(), "(+ 1 (* 2 x))");

    let root = session.parse("sin(3!)").unwrap();
    assert_eq!(session.render_ast(root).unwrap(), "(sin (! 3))");

    let root = session.parse("y = -2").unwrap();
    assert_eq!(session.render_ast(root).unwrap(), "(= y (- 2))");
}
