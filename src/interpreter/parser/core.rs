use std::rc::Rc;

use crate::{
    ast::{Expr, ParametersDefinition},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            cursor::TokenCursor,
            definition::{HeadError, analyze_definition_head},
            matrix::parse_parameter_list,
            unary::parse_subscript,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token list into one expression.
///
/// # Errors
/// - Any error of the expression grammar.
/// - `TrailingInput` if tokens remain after a complete expression; when the
///   leftover token is `(` the message suggests a missing `*`.
///
/// # Example
/// ```
/// use seqcalc::{
///     ast::{BinaryOperator, Expr},
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_all},
/// };
///
/// let expr = parse_all(&tokenize("1 + 2").unwrap()).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
///
/// let err = parse_all(&tokenize("2 (3)").unwrap()).unwrap_err();
/// assert_eq!(err,
///            ParseError::TrailingInput { token:            "(".into(),
///                                        missing_operator: true, });
/// ```
pub fn parse_all(tokens: &[Token]) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);
    let expr = parse_expression(&mut cursor)?;

    if let Some(token) = cursor.peek() {
        return Err(ParseError::TrailingInput { token:            token.to_string(),
                                               missing_operator: *token == Token::LeftParen, });
    }
    tracing::debug!(?expr, "parsed expression");
    Ok(expr)
}

/// Parses a full expression.
///
/// A single leading `,` is skipped, which is what lets list elements be
/// separated by commas.
///
/// Grammar: `expression := ","? equal`
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    cursor.eat(&Token::Comma);
    parse_equal(cursor)
}

/// Parses a definition, or falls back to an ordinary expression.
///
/// A name followed by an optional parameter list, an optional subscript and
/// `=` starts a definition. Anything else rewinds to the name and parses an
/// additive expression instead.
///
/// Grammar:
/// ```text
///     equal := NAME parameters? subscript? "=" expression
///            | additive
/// ```
fn parse_equal(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let Some(Token::Name(name)) = cursor.peek() else {
        return parse_additive(cursor);
    };

    let start = cursor.snapshot();
    cursor.advance();

    let head = parse_parameter_list(cursor).and_then(|parameters| {
                                               let subscript = parse_subscript(cursor)?;
                                               Ok((parameters, subscript))
                                           });
    let Ok((parameters, subscript)) = head else {
        cursor.restore(start);
        return parse_additive(cursor);
    };
    if !cursor.eat(&Token::Equal) {
        cursor.restore(start);
        return parse_additive(cursor);
    }

    let body = parse_expression(cursor)?;
    build_assignment(name, parameters, subscript, body)
}

/// Turns a parsed definition head and body into an `Assignment` node.
///
/// A head whose parameters or subscript do not have a definition shape makes
/// the whole left side a plain name; the parameters and subscript are dropped.
fn build_assignment(name: &str,
                    parameters: Option<Expr>,
                    subscript: Option<Expr>,
                    body: Expr)
                    -> ParseResult<Expr> {
    let body = Rc::new(body);

    match analyze_definition_head(parameters.as_ref(), subscript.as_ref()) {
        Ok(definition) => {
            tracing::debug!(name, shape = ?definition.shape, "parsed definition head");
            let target = if parameters.is_none() && subscript.is_none() {
                Expr::VariableReference(name.to_string())
            } else {
                Expr::FunctionCall { name:      name.to_string(),
                                     arguments: parameters.map(Box::new),
                                     subscript: subscript.map(Box::new), }
            };
            Ok(Expr::Assignment { target: Box::new(target),
                                  definition: Rc::new(definition),
                                  body })
        },
        Err(HeadError::ShapeMismatch) => {
            tracing::debug!(name, "definition head has no definition shape, assigning plain name");
            Ok(Expr::Assignment { target: Box::new(Expr::VariableReference(name.to_string())),
                                  definition: Rc::new(ParametersDefinition::default()),
                                  body })
        },
        Err(HeadError::Invalid(err)) => Err(err),
    }
}
