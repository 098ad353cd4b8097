use approx::assert_relative_eq;
use cartesian_plane::EvalError;
use cartesian_plane::core::VariableTable;
use cartesian_plane::expr::{Expression, evaluate};

fn table(pairs: &[(&str, f64)]) -> VariableTable {
    let mut table = VariableTable::with_constants();
    for (name, value) in pairs {
        table.set(name, *value).expect("valid name");
    }
    table
}

#[test]
fn precedence_follows_arithmetic_convention() {
    let vars = VariableTable::empty();
    assert_eq!(evaluate("1 + 2 * 3", &vars).expect("eval"), 7.0);
    assert_eq!(evaluate("(1 + 2) * 3", &vars).expect("eval"), 9.0);
    assert_eq!(evaluate("2 ^ 3 ^ 2", &vars).expect("eval"), 512.0);
    assert_eq!(evaluate("-2 ^ 2", &vars).expect("eval"), -4.0);
    assert_eq!(evaluate("2 ^ -1", &vars).expect("eval"), 0.5);
    assert_eq!(evaluate("7 % 4", &vars).expect("eval"), 3.0);
    assert_eq!(evaluate("10 - 4 - 3", &vars).expect("eval"), 3.0);
}

#[test]
fn variables_and_constants_resolve_from_the_table() {
    let vars = table(&[("a", 3.0), ("x", 0.5)]);
    assert_eq!(evaluate("a * x + 1", &vars).expect("eval"), 2.5);
    assert_relative_eq!(evaluate("cos(pi)", &vars).expect("eval"), -1.0);
    assert_relative_eq!(evaluate("ln(e)", &vars).expect("eval"), 1.0);
}

#[test]
fn implicit_multiplication_is_accepted() {
    let vars = table(&[("x", 2.0)]);
    assert_eq!(evaluate("3x", &vars).expect("eval"), 6.0);
    assert_eq!(evaluate("2(x + 1)", &vars).expect("eval"), 6.0);
    assert_eq!(evaluate("(x)(x)", &vars).expect("eval"), 4.0);
}

#[test]
fn named_functions_cover_trig_log_and_two_argument_forms() {
    let vars = VariableTable::with_constants();
    assert_relative_eq!(evaluate("toDegrees(pi)", &vars).expect("eval"), 180.0);
    assert_relative_eq!(evaluate("toRadians(180)", &vars).expect("eval"), std::f64::consts::PI);
    assert_relative_eq!(evaluate("sec(0)", &vars).expect("eval"), 1.0);
    assert_relative_eq!(evaluate("log10(1000)", &vars).expect("eval"), 3.0);
    assert_eq!(evaluate("max(2, min(5, 3))", &vars).expect("eval"), 3.0);
    assert_eq!(evaluate("pow(2, 10)", &vars).expect("eval"), 1024.0);
    assert_relative_eq!(
        evaluate("atan2(1, 1)", &vars).expect("eval"),
        std::f64::consts::FRAC_PI_4
    );
    assert_eq!(evaluate("abs(-4) + sqrt(9)", &vars).expect("eval"), 7.0);
}

#[test]
fn domain_violations_are_values_not_errors() {
    let vars = VariableTable::empty();
    assert!(evaluate("sqrt(-1)", &vars).expect("eval").is_nan());
    assert_eq!(evaluate("1 / 0", &vars).expect("eval"), f64::INFINITY);
    assert!(evaluate("log(-1)", &vars).expect("eval").is_nan());
}

#[test]
fn undefined_variable_is_reported_by_name() {
    let vars = VariableTable::empty();
    assert_eq!(
        evaluate("q + 1", &vars),
        Err(EvalError::UndefinedVariable("q".to_owned()))
    );
}

#[test]
fn malformed_input_is_a_syntax_error() {
    let vars = VariableTable::empty();
    for source in ["", "   ", "1 +", "(1", "1 2 )", "* 3", "3 $ 4", "sin(1,"] {
        assert!(
            matches!(evaluate(source, &vars), Err(EvalError::Syntax { .. })),
            "expected syntax error for {source:?}"
        );
    }
}

#[test]
fn unknown_function_and_wrong_arity_are_distinguished() {
    let vars = VariableTable::empty();
    assert_eq!(
        evaluate("nope(1)", &vars),
        Err(EvalError::UnknownFunction("nope".to_owned()))
    );
    assert!(matches!(
        evaluate("sin(1, 2)", &vars),
        Err(EvalError::Arity {
            expected: 1,
            found: 2,
            ..
        })
    ));
}

#[test]
fn evaluation_is_pure_and_repeatable() {
    let expression = Expression::parse("a * x ^ 2 + b").expect("parse");
    let vars = table(&[("a", 2.0), ("b", -1.0), ("x", 3.0)]);

    let first = expression.eval(&vars).expect("eval");
    let second = expression.eval(&vars).expect("eval");
    assert_eq!(first, 17.0);
    assert_eq!(first, second);
}

#[test]
fn expression_lists_referenced_variables_once() {
    let expression = Expression::parse(" a*x + x*b - sin(a) ").expect("parse");
    assert_eq!(expression.source(), "a*x + x*b - sin(a)");
    assert_eq!(expression.variables(), vec!["a", "x", "b"]);
    assert_eq!(
        expression.check_variables(&table(&[("a", 1.0), ("x", 1.0)])),
        Err(EvalError::UndefinedVariable("b".to_owned()))
    );
}
