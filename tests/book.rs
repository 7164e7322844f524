use std::fs;

use roastulator::{
    error::{EngineError, EvalError},
    evaluate_expression, score_expression,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (kind, line) in extract_examples(&content) {
            count += 1;
            let (expression, expected) =
                line.split_once(" => ")
                    .unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));

            match kind.as_str() {
                "roastulator" => check_value(expression, expected),
                "roastulator-error" => check_error(expression, expected),
                "roastulator-score" => check_score(expression, expected),
                other => panic!("Unknown example block {other} in {path:?}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn check_value(expression: &str, expected: &str) {
    let expected: f64 = expected.parse()
                                .unwrap_or_else(|e| panic!("Bad expected value {expected}: {e}"));
    match evaluate_expression(expression) {
        Ok(value) => assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                             "{expression}: expected {expected}, got {value}"),
        Err(e) => panic!("{expression}: expected {expected}, got error {e}"),
    }
}

fn check_error(expression: &str, expected: &str) {
    let err = evaluate_expression(expression).expect_err(expression);
    match expected {
        "parse error" => assert!(err.is_parse(), "{expression}: expected parse error, got {err}"),
        "division by zero" => assert!(matches!(err, EngineError::Eval(EvalError::DivisionByZero)),
                                      "{expression}: expected division by zero, got {err}"),
        other => panic!("Unknown expected error {other}"),
    }
}

fn check_score(expression: &str, expected: &str) {
    let (score, level) = expected.split_once(' ')
                                 .unwrap_or_else(|| panic!("Malformed score {expected}"));
    let complexity = score_expression(expression);
    assert_eq!(complexity.score.to_string(), score, "{expression}");
    assert_eq!(complexity.level.to_string(), level, "{expression}");
}

/// Collects the lines of every fenced block whose info string starts with
/// `roastulator`, tagged with that info string.
fn extract_examples(content: &str) -> Vec<(String, String)> {
    let mut examples = Vec::new();
    let mut current: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(info) = trimmed.strip_prefix("```") {
            current = if current.is_none() && info.starts_with("roastulator") {
                Some(info.to_string())
            } else {
                None
            };
            continue;
        }
        if let Some(kind) = &current
           && !trimmed.is_empty()
        {
            examples.push((kind.clone(), trimmed.to_string()));
        }
    }

    examples
}
