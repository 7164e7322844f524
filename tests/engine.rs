use std::thread;

use roastulator::{
    ast::{BinaryOperator, Expr},
    config::Limits,
    engine::{
        core::Engine,
        evaluator::core::evaluate,
        parser::core::{parse, parse_with_limits},
    },
    error::{EngineError, EvalError, ParseError},
    evaluate_expression,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert!((value - expected).abs() <= 1e-12 * expected.abs().max(1.0),
                             "{src}: expected {expected}, got {value}"),
        Err(e) => panic!("{src}: expected {expected}, got error: {e}"),
    }
}

fn assert_parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("{src}: parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

fn num(value: f64) -> Expr {
    Expr::Number(value)
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2**10", 1024.0);
    assert_value("-3 + 5", 2.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("0.1 + 0.2", 0.1 + 0.2);
    assert_value("1.5e2 / .5", 300.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  2+3\t*\n4  ", 14.0);
    assert_value("2    **    3", 8.0);
}

#[test]
fn power_is_right_associative_and_binds_tighter_than_negation() {
    assert_eq!(parse("2 ** 3 ** 2").unwrap(),
               Expr::binary(num(2.0),
                            BinaryOperator::Pow,
                            Expr::binary(num(3.0), BinaryOperator::Pow, num(2.0))));
    assert_eq!(parse("-2 ** 2").unwrap(),
               Expr::negate(Expr::binary(num(2.0), BinaryOperator::Pow, num(2.0))));
    assert_value("2 ** 3 ** 2", 512.0);
    assert_value("-2 ** 2", -4.0);
    assert_value("(-2) ** 2", 4.0);
    assert_value("2 ** -2", 0.25);
    assert_value("4 ** 0.5", 2.0);
}

#[test]
fn additive_and_multiplicative_are_left_associative() {
    assert_eq!(parse("7 - 2 - 1").unwrap(),
               Expr::binary(Expr::binary(num(7.0), BinaryOperator::Sub, num(2.0)),
                            BinaryOperator::Sub,
                            num(1.0)));
    assert_value("7 - 2 - 1", 4.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("2 * 3 / 4", 1.5);
}

#[test]
fn negation_applies_to_operands() {
    assert_value("2 * -3", -6.0);
    assert_value("--3", 3.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("4 - -4", 8.0);
}

#[test]
fn division_by_zero_is_an_evaluation_error() {
    let err = evaluate_expression("5/0").unwrap_err();
    assert_eq!(err, EngineError::Eval(EvalError::DivisionByZero));
    assert!(err.is_eval());
    assert!(err.to_string().contains("Division by zero"));

    assert_value("0/5", 0.0);
    assert_eq!(evaluate_expression("5 / -0"),
               Err(EngineError::Eval(EvalError::DivisionByZero)));
    assert_eq!(evaluate_expression("1 / (3 - 3)"),
               Err(EngineError::Eval(EvalError::DivisionByZero)));
    assert_eq!(evaluate_expression("0 ** -2"),
               Err(EngineError::Eval(EvalError::DivisionByZero)));
    assert_value("0 ** 0", 1.0);
    assert_value("0 ** 2", 0.0);
}

#[test]
fn non_finite_results_are_successes() {
    assert_eq!(evaluate_expression("10 ** 400").unwrap(), f64::INFINITY);
    assert_eq!(evaluate_expression("-(10 ** 400)").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate_expression("(-8) ** (1 / 3)").unwrap().is_nan());
    assert!(evaluate_expression("10 ** 400 - 10 ** 400").unwrap().is_nan());
}

#[test]
fn disallowed_constructs_are_rejected() {
    for src in ["__import__('os')", "open('f')", "1; 2", "x + 1", "abs(-1)", "'a' * 3", "1 if 1 else 2",
                "(1, 2)", "[1, 2]", "{1: 2}", "1 == 1", "1 < 2", "3 % 2", "7 // 2", "2 ^ 3", "1 & 1",
                "~1", "x = 1", "(x := 1)", "1 # note", "(1).real", "not 1", "1 and 2", "lambda: 1"]
    {
        let err = assert_parse_failure(src);
        assert!(matches!(err,
                         ParseError::DisallowedConstruct { .. } | ParseError::UnexpectedToken { .. }),
                "{src}: {err}");
    }
}

#[test]
fn disallowed_constructs_are_named() {
    assert_eq!(assert_parse_failure("x + 1"),
               ParseError::DisallowedConstruct { construct: "Names",
                                                 token:     "x".into(),
                                                 position:  0, });
    assert_eq!(assert_parse_failure("1 + open('f')"),
               ParseError::DisallowedConstruct { construct: "Function calls",
                                                 token:     "open".into(),
                                                 position:  4, });
    assert_eq!(assert_parse_failure("1; 2"),
               ParseError::DisallowedConstruct { construct: "Statement separators",
                                                 token:     ";".into(),
                                                 position:  1, });
    assert_eq!(assert_parse_failure("(1, 2)"),
               ParseError::DisallowedConstruct { construct: "Sequences",
                                                 token:     ",".into(),
                                                 position:  2, });
}

#[test]
fn malformed_syntax_is_rejected() {
    assert_eq!(assert_parse_failure(""), ParseError::EmptyInput);
    assert_eq!(assert_parse_failure(" \t\n"), ParseError::EmptyInput);
    assert_eq!(assert_parse_failure("(2+3"),
               ParseError::ExpectedClosingParen { position: 0 });
    assert_eq!(assert_parse_failure("2 +"),
               ParseError::UnexpectedEndOfInput { position: 3 });
    assert_eq!(assert_parse_failure("2 + 3)"),
               ParseError::UnexpectedClosingParen { position: 5 });
    assert_eq!(assert_parse_failure("2(3+4)"),
               ParseError::UnexpectedTrailingTokens { token:    "(".into(),
                                                      position: 1, });
    assert_eq!(assert_parse_failure("2 3"),
               ParseError::UnexpectedTrailingTokens { token:    "3".into(),
                                                      position: 2, });
    assert_eq!(assert_parse_failure("1..2"),
               ParseError::UnexpectedTrailingTokens { token:    ".2".into(),
                                                      position: 2, });
    assert_eq!(assert_parse_failure("1e999"),
               ParseError::LiteralTooLarge { position: 0 });
    assert!(matches!(assert_parse_failure("()"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_failure("+3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_failure("2 * * 3"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_failure("1 + $"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn parse_errors_are_engine_parse_failures() {
    let err = evaluate_expression("(2+3").unwrap_err();
    assert!(err.is_parse());
    assert!(!err.is_eval());
    assert!(err.to_string().starts_with("Invalid or unsafe expression"));
}

#[test]
fn input_length_is_limited() {
    let limits = Limits::default().with_max_input_len(10);
    assert!(parse_with_limits("1+2+3+4+55", &limits).is_ok());
    assert_eq!(parse_with_limits("1+2+3+4+555", &limits),
               Err(ParseError::InputTooLong { length: 11,
                                              max:    10, }));

    let long = "1+".repeat(3000) + "1";
    assert_eq!(parse(&long),
               Err(ParseError::InputTooLong { length: 6001,
                                              max:    4096, }));
}

#[test]
fn nesting_is_limited() {
    let deep_parens = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert!(matches!(parse(&deep_parens),
                     Err(ParseError::NestingTooDeep { max: 100, .. })));

    let deep_negation = format!("{}1", "-".repeat(300));
    assert!(matches!(parse(&deep_negation),
                     Err(ParseError::NestingTooDeep { max: 100, .. })));

    let tower = vec!["2"; 300].join("**");
    assert!(matches!(parse(&tower),
                     Err(ParseError::NestingTooDeep { max: 100, .. })));

    let shallow = format!("{}1{}", "(".repeat(90), ")".repeat(90));
    assert_value(&shallow, 1.0);

    let engine = Engine::new(Limits::default().with_max_depth(2));
    assert_eq!(engine.evaluate("(1) + -2").unwrap(), -1.0);
    assert!(engine.evaluate("(((1)))").unwrap_err().is_parse());
}

#[test]
fn operator_chains_count_towards_nesting() {
    let longest = "1+".repeat(100) + "1";
    assert_value(&longest, 101.0);
    assert_eq!(parse(&(longest + "+1")),
               Err(ParseError::NestingTooDeep { max:      100,
                                                position: 201, }));

    let product = "2*".repeat(150) + "2";
    assert!(matches!(parse(&product), Err(ParseError::NestingTooDeep { max: 100, .. })));

    // A generous length limit must not let the tree outgrow the depth limit.
    let engine = Engine::new(Limits::new(1_000_000, 100));
    let chain = "1+".repeat(200_000) + "1";
    assert!(matches!(engine.evaluate(&chain),
                     Err(EngineError::Parse(ParseError::NestingTooDeep { max: 100, .. }))));
    assert_eq!(engine.score(&chain).score, 0);
}

#[test]
fn canonical_serialization_round_trips() {
    for src in ["2 + 3 * 4", "(2+3)*4", "-2 ** 2", "(-2) ** 2", "2 ** 3 ** 2", "2 ** -1", "7 - 2 - 1",
                "7 - (2 - 1)", "--3", "0.1 * 1e300 / .25", "1 / 3"]
    {
        let expr = parse(src).unwrap();
        let text = expr.to_string();
        assert_eq!(parse(&text).unwrap(), expr, "{src} serialized as {text}");
    }
    assert_eq!(parse("1 + 2 * 3").unwrap().to_string(), "(1 + (2 * 3))");
    assert_eq!(parse("-2 ** 2").unwrap().to_string(), "(-(2 ** 2))");
}

#[test]
fn hand_built_trees_evaluate() {
    let tree = Expr::binary(Expr::negate(num(3.0)), BinaryOperator::Add, num(5.0));
    assert_eq!(evaluate(&tree), Ok(2.0));
    assert_eq!(tree.node_count(), 4);

    let impossible = Expr::binary(num(1.0), BinaryOperator::Mul, num(-1.0));
    assert!(matches!(evaluate(&impossible), Err(EvalError::UnsupportedNode { .. })));
}

#[test]
fn engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
    assert_send_sync::<Expr>();
    assert_send_sync::<EngineError>();

    let engine = Engine::default();
    let handles: Vec<_> = (0..8).map(|i| {
                                    thread::spawn(move || {
                                        let src = format!("{i} * ({i} + 1)");
                                        engine.evaluate(&src).unwrap()
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let i = f64::from(u32::try_from(i).unwrap());
        assert_eq!(handle.join().unwrap(), i * (i + 1.0));
    }
}
