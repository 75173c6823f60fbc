use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_multiplicative, parse_power},
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
            matrix::{parse_matrix, parse_parameter_list},
        },
    },
};

/// Parses a simple expression: an operand with its prefix or postfix
/// operators.
///
/// Prefix operators reach further than their operand:
/// - `-` negates a whole multiplicative expression, so `-2*3` is `-(2*3)`.
/// - `!` takes the factorial of a power expression, so `!2^2` is `(2^2)!`.
///
/// Postfix `!` applies to the operand directly before it.
///
/// Grammar:
/// ```text
///     simple := "-" multiplicative
///             | "!" power
///             | primary "!"*
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left.
/// - `UnexpectedToken` for a token that cannot start an operand.
pub fn parse_simple(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_prefixed(cursor, true)
}

/// Parses an optional subscript: `_` followed by one simple operand.
///
/// Returns `None` and leaves the cursor untouched when no `_` follows.
/// Postfix `!` after the operand is left for the enclosing expression, so
/// `u_3!` is `(u_3)!`.
pub fn parse_subscript(cursor: &mut TokenCursor<'_>) -> ParseResult<Option<Expr>> {
    if !cursor.eat(&Token::Subscript) {
        return Ok(None);
    }
    parse_prefixed(cursor, false).map(Some)
}

fn parse_prefixed(cursor: &mut TokenCursor<'_>, postfix: bool) -> ParseResult<Expr> {
    cursor.nested(|cursor| parse_prefixed_operand(cursor, postfix))
}

fn parse_prefixed_operand(cursor: &mut TokenCursor<'_>, postfix: bool) -> ParseResult<Expr> {
    match cursor.peek() {
        Some(Token::Minus) => {
            cursor.advance();
            let operand = parse_multiplicative(cursor)?;
            Ok(Expr::unary(UnaryOperator::Negate, operand))
        },
        Some(Token::Factorial) => {
            cursor.advance();
            let operand = parse_power(cursor)?;
            Ok(Expr::unary(UnaryOperator::Factorial, operand))
        },
        _ => {
            let primary = parse_primary(cursor)?;
            if postfix {
                Ok(parse_postfix(cursor, primary))
            } else {
                Ok(primary)
            }
        },
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := VALUE
///              | NAME parameters? subscript?
///              | "(" expression ")"
///              | "[" matrix "]"
/// ```
fn parse_primary(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let Some(token) = cursor.advance() else {
        return Err(ParseError::UnexpectedEndOfInput { after: cursor.last_consumed() });
    };

    match token {
        Token::Value(value) => Ok(Expr::Value(*value)),
        Token::Name(name) => parse_call(cursor, name),
        Token::LeftParen => {
            let inner = parse_expression(cursor)?;
            expect_closing(cursor, &Token::RightParen, ')')?;
            Ok(inner)
        },
        Token::LeftBracket => {
            let matrix = parse_matrix(cursor)?;
            expect_closing(cursor, &Token::RightBracket, ']')?;
            Ok(matrix)
        },
        other => Err(ParseError::UnexpectedToken { token:            other.to_string(),
                                                   missing_operator: false, }),
    }
}

/// Parses the optional argument list and subscript after a name.
fn parse_call(cursor: &mut TokenCursor<'_>, name: &str) -> ParseResult<Expr> {
    let arguments = parse_parameter_list(cursor)?;
    let subscript = parse_subscript(cursor)?;
    Ok(Expr::FunctionCall { name:      name.to_string(),
                            arguments: arguments.map(Box::new),
                            subscript: subscript.map(Box::new), })
}

/// Folds any number of postfix `!` into factorial nodes.
fn parse_postfix(cursor: &mut TokenCursor<'_>, mut node: Expr) -> Expr {
    while cursor.eat(&Token::Factorial) {
        node = Expr::unary(UnaryOperator::Factorial, node);
    }
    node
}

/// Consumes a closing delimiter or reports it missing.
///
/// A `(` where the delimiter should be is reported as an unexpected token
/// with the missing `*` hint, as in `(2 (3))`.
pub(crate) fn expect_closing(cursor: &mut TokenCursor<'_>,
                             closing: &Token,
                             delimiter: char)
                             -> ParseResult<()> {
    if cursor.eat(closing) {
        return Ok(());
    }
    if cursor.check(&Token::LeftParen) {
        return Err(ParseError::UnexpectedToken { token:            Token::LeftParen.to_string(),
                                                 missing_operator: true, });
    }
    Err(ParseError::MissingDelimiter { delimiter,
                                       after: cursor.last_consumed() })
}
