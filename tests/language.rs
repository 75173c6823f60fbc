use std::fs;

use pretty_assertions::assert_eq;
use seqcalc::{
    Error, Interpreter, Value,
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Config,
        parser::cursor::MAX_NESTING,
        value::{complex::ComplexNumber, matrix::Matrix},
    },
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

        for (i, block) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut interpreter = Interpreter::new();

            for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
                match line.split_once("=>") {
                    Some((input, expected)) => {
                        let actual = interpreter.try_eval(input).unwrap_or_else(|e| {
                                                                    panic!("Example {} in {path:?} failed on `{input}`: {e}",
                                                                           i + 1)
                                                                });
                        let expected = seqcalc::eval(expected).unwrap_or_else(|e| {
                                           panic!("Bad expectation `{expected}` in {path:?}: {e}")
                                       });
                        assert_close(&actual, &expected);
                    },
                    None => {
                        if let Err(e) = interpreter.try_eval(line) {
                            panic!("Example {} in {path:?} failed on `{line}`: {e}", i + 1);
                        }
                    },
                }
            }
        }
    }

    assert!(count > 0, "No seqcalc examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```seqcalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_close(actual: &Value, expected: &Value) {
    assert_eq!(actual.shape(), expected.shape(), "{actual} vs {expected}");
    for (a, e) in actual.elements().iter().zip(expected.elements()) {
        let tolerance = 1e-9 * e.abs().max(1.0);
        assert!((a.real - e.real).abs() <= tolerance && (a.imaginary - e.imaginary).abs() <= tolerance,
                "{actual} is not close to {expected}");
    }
}

fn run(interpreter: &mut Interpreter, src: &str) -> Value {
    interpreter.try_eval(src)
               .unwrap_or_else(|e| panic!("`{src}` failed: {e}"))
}

fn assert_value(src: &str, expected: f64) {
    let mut interpreter = Interpreter::new();
    assert_close(&run(&mut interpreter, src), &Value::from(expected));
}

fn assert_failure(interpreter: &mut Interpreter, src: &str) -> Error {
    match interpreter.try_eval(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("2^3^2", 512.0);
    assert_value("-2*3", -6.0);
    assert_value("-2^2", -4.0);
    assert_value("2*-3", -6.0);
    assert_value("2^-1*4", 0.0625);
    assert_value("10-4-3", 3.0);
    assert_value("8/4/2", 1.0);
    assert_value("(2+3)*4", 20.0);
}

#[test]
fn parentheses_are_neutral() {
    let mut interpreter = Interpreter::new();
    assert_eq!(run(&mut interpreter, "(((1+2)))"), run(&mut interpreter, "1+2"));
}

#[test]
fn numeric_literals() {
    assert_value("0.5", 0.5);
    assert_value(".25", 0.25);
    assert_value("1.", 1.0);
    assert_value("1e3", 1000.0);
    assert_value("2.5e-1", 0.25);

    let mut interpreter = Interpreter::new();
    assert_eq!(run(&mut interpreter, "3i"), Value::from(ComplexNumber::new(0.0, 3.0)));
    assert_eq!(run(&mut interpreter, "i*i"), Value::from(-1.0));
    assert_eq!(run(&mut interpreter, "(1+i)*(1-i)"), Value::from(2.0));
}

#[test]
fn factorials() {
    assert_value("5!", 120.0);
    assert_value("!5", 120.0);
    assert_value("3!!", 720.0);
    assert_value("!2^2", 24.0);
    assert_value("2*3!", 12.0);
    assert_value("0.5!", 0.886_226_925_452_758);

    let mut interpreter = Interpreter::new();
    assert!(matches!(assert_failure(&mut interpreter, "(-1)!"),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
    assert!(matches!(assert_failure(&mut interpreter, "i!"),
                     Error::Runtime(RuntimeError::ExpectedReal { .. })));
}

#[test]
fn empty_input_is_reported_not_raised() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.eval(""), Value::default());
    assert_eq!(interpreter.last_error(), Some(&Error::Lex(LexError::EmptyInput)));

    assert_eq!(interpreter.eval("   "), Value::default());
    assert!(interpreter.last_error().is_some());

    assert_eq!(interpreter.eval("1"), Value::from(1.0));
    assert_eq!(interpreter.last_error(), None);
}

#[test]
fn mismatched_delimiters_are_rejected() {
    let mut interpreter = Interpreter::new();

    assert_eq!(assert_failure(&mut interpreter, "(1+2"),
               Error::Parse(ParseError::MissingDelimiter { delimiter: ')',
                                                           after:     "2".into(), }));
    assert_eq!(assert_failure(&mut interpreter, "[1,2"),
               Error::Parse(ParseError::MissingDelimiter { delimiter: ']',
                                                           after:     "2".into(), }));
    assert!(matches!(assert_failure(&mut interpreter, "1+2)"),
                     Error::Parse(ParseError::TrailingInput { .. })));
}

#[test]
fn syntax_errors_name_the_offending_token() {
    let mut interpreter = Interpreter::new();

    let err = assert_failure(&mut interpreter, "2(3)");
    assert_eq!(err.to_string(),
               "Syntax error before '('. The operator '*' is probably missing.");

    assert_eq!(assert_failure(&mut interpreter, "1 + *"),
               Error::Parse(ParseError::UnexpectedToken { token:            "*".into(),
                                                          missing_operator: false, }));
    assert_eq!(assert_failure(&mut interpreter, "1 +"),
               Error::Parse(ParseError::UnexpectedEndOfInput { after: "+".into() }));
    assert_eq!(assert_failure(&mut interpreter, "1 $ 2"),
               Error::Lex(LexError::UnexpectedCharacter { character: '$',
                                                          position:  2, }));

    let err = assert_failure(&mut interpreter, "(2 (3))");
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedToken { token:            "(".into(),
                                                          missing_operator: true, }));
    assert_eq!(err.to_string(),
               "Unexpected operator '('. The operator '*' is probably missing.");
}

#[test]
fn empty_argument_list_is_a_syntax_error() {
    let mut interpreter = Interpreter::new();
    let stray_paren = Error::Parse(ParseError::TrailingInput { token:            "(".into(),
                                                               missing_operator: true, });

    assert_eq!(assert_failure(&mut interpreter, "f() = 3"), stray_paren);
    assert!(!interpreter.workspace().contains("f"));

    run(&mut interpreter, "f = 3");
    let err = assert_failure(&mut interpreter, "f()");
    assert_eq!(err, stray_paren);
    assert_eq!(err.to_string(),
               "Syntax error before '('. The operator '*' is probably missing.");
    assert_eq!(run(&mut interpreter, "f(2)"), Value::from(3.0));
}

#[test]
fn deep_nesting_is_reported_not_fatal() {
    let mut interpreter = Interpreter::new();

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(interpreter.eval(&deep), Value::default());
    assert_eq!(interpreter.last_error(),
               Some(&Error::Parse(ParseError::NestingTooDeep { limit: MAX_NESTING })));
    assert_eq!(interpreter.eval("1 + 1"), Value::from(2.0));

    let parens = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(run(&mut interpreter, &parens), Value::from(1.0));
    let brackets = format!("{}1{}", "[".repeat(300), "]".repeat(300));
    assert_eq!(run(&mut interpreter, &brackets), Value::from(1.0));
    let negations = format!("{}1", "-".repeat(300));
    assert_eq!(run(&mut interpreter, &negations), Value::from(1.0));
    let powers = format!("{}1", "1^".repeat(300));
    assert_eq!(run(&mut interpreter, &powers), Value::from(1.0));
}

#[test]
fn deep_recursion_within_the_limit_completes() {
    let mut interpreter = Interpreter::new().with_config(Config::default().with_max_depth(5_000));

    run(&mut interpreter, "s_0 = 0");
    run(&mut interpreter, "s_n = s_(n - 1) + 1");
    assert_eq!(run(&mut interpreter, "s_3000"), Value::from(3000.0));
}

#[test]
fn variables() {
    let mut interpreter = Interpreter::new();

    assert_eq!(run(&mut interpreter, "x = 3"), Value::from(3.0));
    assert_eq!(run(&mut interpreter, "x * 2"), Value::from(6.0));
    assert_eq!(run(&mut interpreter, "x = 4"), Value::from(4.0));
    assert_eq!(run(&mut interpreter, "x * 2"), Value::from(8.0));
    assert_eq!(run(&mut interpreter, "(y = 2) + 1"), Value::from(3.0));
    assert_eq!(run(&mut interpreter, "y"), Value::from(2.0));
}

#[test]
fn definitions_are_lazy() {
    let mut interpreter = Interpreter::new();

    // `z` is unknown yet: the definition of `y` is kept, its value fails.
    assert_eq!(assert_failure(&mut interpreter, "y = z + 1"),
               Error::Runtime(RuntimeError::UnresolvedReference { name: "z".into() }));
    run(&mut interpreter, "z = 1");
    assert_eq!(run(&mut interpreter, "y"), Value::from(2.0));
    run(&mut interpreter, "z = 10");
    assert_eq!(run(&mut interpreter, "y"), Value::from(11.0));
}

#[test]
fn function_definition_round_trip() {
    let mut interpreter = Interpreter::new();

    assert_eq!(run(&mut interpreter, "f(a,b)=a+b"), Value::default());
    assert_eq!(run(&mut interpreter, "f(2,3)"), Value::from(5.0));
    assert_eq!(run(&mut interpreter, "f(2 3)"), Value::from(5.0));
    assert_eq!(run(&mut interpreter, "f(f(1,1), 10)"), Value::from(12.0));
}

#[test]
fn parameters_shadow_definitions() {
    let mut interpreter = Interpreter::new();

    run(&mut interpreter, "a = 100");
    run(&mut interpreter, "p(a) = a + 1");
    assert_eq!(run(&mut interpreter, "p(1)"), Value::from(2.0));
    assert_eq!(run(&mut interpreter, "a"), Value::from(100.0));
}

#[test]
fn default_parameters() {
    let mut interpreter = Interpreter::new();

    run(&mut interpreter, "g(a, b = 10) = a * b");
    assert_eq!(run(&mut interpreter, "g(2)"), Value::from(20.0));
    assert_eq!(run(&mut interpreter, "g(2, 3)"), Value::from(6.0));

    run(&mut interpreter, "h(a, b = a + 1) = a * b");
    assert_eq!(run(&mut interpreter, "h(3)"), Value::from(12.0));

    // Defaults inside a parameter list never define globals.
    assert!(!interpreter.workspace().contains("b"));

    assert_eq!(assert_failure(&mut interpreter, "g"),
               Error::Runtime(RuntimeError::MissingArgument { name:      "g".into(),
                                                              parameter: "a".into(), }));
    assert_eq!(assert_failure(&mut interpreter, "g(1, 2, 3)"),
               Error::Runtime(RuntimeError::ArgumentCountMismatch { name:     "g".into(),
                                                                    expected: 2,
                                                                    found:    3, }));
}

#[test]
fn bare_parameter_after_default_is_an_error() {
    let mut interpreter = Interpreter::new();

    assert_eq!(assert_failure(&mut interpreter, "k(a = 1, b) = a + b"),
               Error::Parse(ParseError::ParameterAfterDefault { name: "b".into() }));
}

#[test]
fn invalid_definition_head_falls_back_to_plain_name() {
    let mut interpreter = Interpreter::new();

    assert_eq!(run(&mut interpreter, "f(1) = 3"), Value::from(3.0));
    assert_eq!(run(&mut interpreter, "f"), Value::from(3.0));
    assert_eq!(run(&mut interpreter, "q_(n*n) = 2"), Value::from(2.0));
    assert_eq!(run(&mut interpreter, "q"), Value::from(2.0));
}

#[test]
fn indexed_definitions_are_independent() {
    let mut interpreter = Interpreter::new();

    assert_eq!(run(&mut interpreter, "u_0 = 1"), Value::from(1.0));
    assert_eq!(run(&mut interpreter, "u_1 = 2"), Value::from(2.0));
    assert_eq!(run(&mut interpreter, "u_0"), Value::from(1.0));
    assert_eq!(run(&mut interpreter, "u_1"), Value::from(2.0));
    assert_eq!(run(&mut interpreter, "u_(2-1)"), Value::from(2.0));

    assert_eq!(assert_failure(&mut interpreter, "u_2"),
               Error::Runtime(RuntimeError::UnresolvedReference { name: "u".into() }));
    assert_eq!(assert_failure(&mut interpreter, "u"),
               Error::Runtime(RuntimeError::UnresolvedReference { name: "u".into() }));
}

#[test]
fn recursive_sequences_stop_at_indexed_base_cases() {
    let mut interpreter = Interpreter::new();

    run(&mut interpreter, "fact_0 = 1");
    assert_eq!(run(&mut interpreter, "fact_n = n * fact_(n - 1)"), Value::default());
    assert_eq!(run(&mut interpreter, "fact_5"), Value::from(120.0));

    run(&mut interpreter, "v_1 = 1");
    run(&mut interpreter, "v_(n+1) = 2 * v_n");
    assert_eq!(run(&mut interpreter, "v_5"), Value::from(16.0));

    run(&mut interpreter, "w_(2*k) = k");
    assert_eq!(run(&mut interpreter, "w_10"), Value::from(5.0));
}

#[test]
fn unbounded_recursion_hits_the_depth_limit() {
    let mut interpreter = Interpreter::new().with_config(Config::default().with_max_depth(16));

    run(&mut interpreter, "r_n = r_(n - 1) + 1");
    assert_eq!(assert_failure(&mut interpreter, "r_3"),
               Error::Runtime(RuntimeError::RecursionLimit { name:  "r".into(),
                                                             depth: 16, }));

    // The interpreter keeps working afterwards.
    run(&mut interpreter, "r_0 = 0");
    assert_eq!(run(&mut interpreter, "r_3"), Value::from(3.0));
}

#[test]
fn matrix_literal() {
    let mut interpreter = Interpreter::new();

    let m = run(&mut interpreter, "[1,2;3,4]");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.to_string(), "[1, 2; 3, 4]");
    assert_eq!(run(&mut interpreter, "[1 2; 3 4]"), m);
    assert_eq!(run(&mut interpreter, "[5]"), Value::from(5.0));
}

#[test]
fn matrix_arithmetic() {
    let mut interpreter = Interpreter::new();

    run(&mut interpreter, "A = [1,2;3,4]");
    assert_eq!(run(&mut interpreter, "A*[1;1]").to_string(), "[3; 7]");
    assert_eq!(run(&mut interpreter, "A + 1").to_string(), "[2, 3; 4, 5]");
    assert_eq!(run(&mut interpreter, "2*A - A").to_string(), "[1, 2; 3, 4]");
    assert_eq!(run(&mut interpreter, "A^2").to_string(), "[7, 10; 15, 22]");
    assert_eq!(run(&mut interpreter, "[1,2]*[3;4]"), Value::from(11.0));

    let identity = run(&mut interpreter, "A^(-1) * A");
    assert_close(&identity, &run(&mut interpreter, "[1,0;0,1]"));
    assert_close(&run(&mut interpreter, "A / A"), &identity);

    assert_eq!(assert_failure(&mut interpreter, "[1,2;2,4]^-1"),
               Error::Runtime(RuntimeError::SingularMatrix));
    assert!(matches!(assert_failure(&mut interpreter, "[1,2] + [1;2]"),
                     Error::Runtime(RuntimeError::DimensionMismatch { .. })));
    assert!(matches!(assert_failure(&mut interpreter, "[1,2;3]"),
                     Error::Runtime(RuntimeError::DimensionMismatch { .. })));
    assert!(matches!(assert_failure(&mut interpreter, "[1,2;3,4;5,6]^2"),
                     Error::Runtime(RuntimeError::NotSquare { .. })));
    assert_eq!(assert_failure(&mut interpreter, "A / 0"),
               Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn empty_matrix_literals_are_rejected() {
    let mut interpreter = Interpreter::new();

    for src in ["[]", "[;]", "[] + 1", "2 * [;;]"] {
        assert_eq!(assert_failure(&mut interpreter, src),
                   Error::Runtime(RuntimeError::EmptyMatrix),
                   "{src}");
    }
    assert_eq!(run(&mut interpreter, "[;1, 2;]"), run(&mut interpreter, "[1, 2]"));
}

#[test]
fn matrix_literals_match_constructed_matrices() {
    let mut interpreter = Interpreter::new();

    let expected = Matrix::from_rows(vec![vec![1.0.into(), 2.0.into()],
                                          vec![3.0.into(), ComplexNumber::new(0.0, 4.0)]]).unwrap();
    assert_eq!(run(&mut interpreter, "[1, 2; 3, 4i]"), Value::from(expected));
}

#[test]
fn failures_keep_earlier_definitions() {
    let mut interpreter = Interpreter::new();

    interpreter.eval("x = 5");
    assert_eq!(interpreter.eval("x +"), Value::default());
    assert!(interpreter.last_error().is_some());
    assert_eq!(interpreter.eval("x"), Value::from(5.0));
}

#[test]
fn workspace_is_owned_by_the_host() {
    let mut first = Interpreter::new();
    first.eval("s_0 = 7");

    let workspace = first.into_workspace();
    assert!(workspace.get_expr("s").is_some());

    let mut second = Interpreter::with_workspace(workspace);
    assert_eq!(second.eval("s_0 * 2"), Value::from(14.0));

    second.workspace_mut().clear();
    assert_eq!(second.eval("s_0"), Value::default());
}

#[test]
fn token_rendering() {
    assert_eq!(Interpreter::render_tokens("f(a, b=2) = [a; b]").unwrap(),
               "f ( a , b = 2 ) = [ a ; b ]");
    assert!(Interpreter::render_tokens("").is_err());
}
