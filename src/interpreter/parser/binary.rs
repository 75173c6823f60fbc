use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, cursor::TokenCursor, unary::parse_simple},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative operators `+` and `-`. A subtraction is stored
/// as the addition of a negated right operand.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor)?;
    loop {
        if cursor.eat(&Token::Add) {
            let right = parse_multiplicative(cursor)?;
            left = Expr::binary(left, BinaryOperator::Add, right);
        } else if cursor.eat(&Token::Minus) {
            let right = parse_multiplicative(cursor)?;
            left = Expr::binary(left,
                                BinaryOperator::Add,
                                Expr::unary(UnaryOperator::Negate, right));
        } else {
            break;
        }
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
pub fn parse_multiplicative(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_power(cursor)?;
    loop {
        let op = match cursor.peek() {
            Some(Token::Multiply) => BinaryOperator::Multiply,
            Some(Token::Divide) => BinaryOperator::Divide,
            _ => break,
        };
        cursor.advance();
        let right = parse_power(cursor)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses exponentiation.
///
/// The exponent is parsed at the same level, which makes `^`
/// right-associative: `2^3^2` is `2^(3^2)`.
///
/// The rule is: `power := simple ("^" power)?`
pub fn parse_power(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    cursor.nested(|cursor| {
        let base = parse_simple(cursor)?;
        if cursor.eat(&Token::Power) {
            let exponent = parse_power(cursor)?;
            return Ok(Expr::binary(base, BinaryOperator::Power, exponent));
        }
        Ok(base)
    })
}
