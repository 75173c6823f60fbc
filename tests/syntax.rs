use pretty_assertions::assert_eq;
use seqcalc::{
    ast::{BinaryOperator, DefinitionShape, Expr, UnaryOperator},
    error::{LexError, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse_all,
        value::complex::{ComplexNumber, I},
    },
};

fn parse(src: &str) -> Expr {
    parse_all(&tokenize(src).unwrap()).unwrap_or_else(|e| panic!("`{src}` failed to parse: {e}"))
}

fn num(value: f64) -> Expr {
    Expr::Value(value.into())
}

fn name(name: &str) -> Expr {
    Expr::FunctionCall { name:      name.to_string(),
                         arguments: None,
                         subscript: None, }
}

#[test]
fn numbers_and_names() {
    assert_eq!(tokenize("12 3.5 .5 1. 2e3 4i i").unwrap(),
               vec![Token::Value(12.0.into()),
                    Token::Value(3.5.into()),
                    Token::Value(0.5.into()),
                    Token::Value(1.0.into()),
                    Token::Value(2000.0.into()),
                    Token::Value(ComplexNumber::new(0.0, 4.0)),
                    Token::Value(I),]);

    assert_eq!(tokenize("ab12 x_1").unwrap(),
               vec![Token::Name("ab12".into()),
                    Token::Name("x".into()),
                    Token::Subscript,
                    Token::Value(1.0.into()),]);
}

#[test]
fn lexer_errors_carry_positions() {
    assert_eq!(tokenize("2 + #"),
               Err(LexError::UnexpectedCharacter { character: '#',
                                                   position:  4, }));
    assert_eq!(tokenize("\t\n"), Err(LexError::EmptyInput));
}

#[test]
fn subtraction_is_addition_of_a_negation() {
    assert_eq!(parse("a - b"),
               Expr::binary(name("a"),
                            BinaryOperator::Add,
                            Expr::unary(UnaryOperator::Negate, name("b"))));
}

#[test]
fn prefix_minus_takes_a_product() {
    assert_eq!(parse("-2*3"),
               Expr::unary(UnaryOperator::Negate,
                           Expr::binary(num(2.0), BinaryOperator::Multiply, num(3.0))));
}

#[test]
fn prefix_and_postfix_factorial() {
    assert_eq!(parse("!2^3"),
               Expr::unary(UnaryOperator::Factorial,
                           Expr::binary(num(2.0), BinaryOperator::Power, num(3.0))));
    assert_eq!(parse("2^3!"),
               Expr::binary(num(2.0),
                            BinaryOperator::Power,
                            Expr::unary(UnaryOperator::Factorial, num(3.0))));
}

#[test]
fn power_is_right_associative() {
    assert_eq!(parse("2^3^4"),
               Expr::binary(num(2.0),
                            BinaryOperator::Power,
                            Expr::binary(num(3.0), BinaryOperator::Power, num(4.0))));
}

#[test]
fn calls_with_arguments_and_subscripts() {
    assert_eq!(parse("f(1, 2)_3"),
               Expr::FunctionCall { name:      "f".into(),
                                    arguments: Some(Box::new(Expr::Matrix(vec![vec![num(1.0),
                                                                                    num(2.0)]]))),
                                    subscript: Some(Box::new(num(3.0))), });
    assert_eq!(parse("u_3!"), Expr::unary(UnaryOperator::Factorial, parse("u_3")));
}

#[test]
fn matrix_rows() {
    assert_eq!(parse("[1 2; 3, 4]"),
               Expr::Matrix(vec![vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]]));
    assert_eq!(parse("[]"), Expr::Matrix(vec![vec![]]));
}

#[test]
fn definition_shapes() {
    let shape_of = |src: &str| match parse(src) {
        Expr::Assignment { definition, .. } => definition.shape.clone(),
        other => panic!("`{src}` is not a definition: {other:?}"),
    };

    assert_eq!(shape_of("x = 1"), DefinitionShape::Simple);
    assert_eq!(shape_of("u_2 = 1"), DefinitionShape::Indexed { index: 2.0 });
    assert_eq!(shape_of("u_(1+1) = 1"), DefinitionShape::Indexed { index: 2.0 });
    assert_eq!(shape_of("u_n = 1"),
               DefinitionShape::General { index_name: "n".into(),
                                          stride:     1.0,
                                          offset:     0.0, });
    assert_eq!(shape_of("u_(n-1) = 1"),
               DefinitionShape::General { index_name: "n".into(),
                                          stride:     1.0,
                                          offset:     -1.0, });
    assert_eq!(shape_of("u_(-k/2 + 3) = 1"),
               DefinitionShape::General { index_name: "k".into(),
                                          stride:     -0.5,
                                          offset:     3.0, });
}

#[test]
fn definition_targets() {
    let Expr::Assignment { target,
                           definition,
                           .. } = parse("f(a, b = 2) = a * b")
    else {
        panic!("expected a definition");
    };
    assert!(matches!(*target, Expr::FunctionCall { ref name, .. } if name == "f"));
    assert_eq!(definition.parameters, vec!["a", "b"]);
    assert_eq!(definition.defaults.get("b").map(|d| d.as_ref().clone()), Some(num(2.0)));

    let Expr::Assignment { target, .. } = parse("x = 1") else {
        panic!("expected a definition");
    };
    assert_eq!(*target, Expr::VariableReference("x".into()));
}

#[test]
fn heads_without_definition_shape_assign_the_name() {
    for src in ["f(1) = 2", "f(a, a) = 2", "u_(n*n) = 2", "u_(n + m) = 2", "f(a + 1) = 2"] {
        let Expr::Assignment { target,
                               definition,
                               .. } = parse(src)
        else {
            panic!("`{src}` is not a definition");
        };
        assert_eq!(*target, Expr::VariableReference(target.target_name().unwrap().into()));
        assert_eq!(definition.shape, DefinitionShape::Simple);
        assert!(definition.parameters.is_empty());
    }
}

#[test]
fn equality_inside_expressions_is_not_a_definition() {
    // `1 = 2` has no name before `=`.
    assert_eq!(parse_all(&tokenize("1 = 2").unwrap()),
               Err(ParseError::TrailingInput { token:            "=".into(),
                                               missing_operator: false, }));
    assert!(matches!(parse("f(2) + 1"), Expr::BinaryOp { .. }));
}
