use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
            unary::expect_closing,
        },
    },
};

/// Parses rows of expressions up to a closing `]` or `)`, or the end of
/// input. The closing token is not consumed.
///
/// Elements are separated by `,` or by nothing at all; `;` starts a new row.
/// The result is always an `Expr::Matrix` with at least one (possibly empty)
/// row.
///
/// Grammar:
/// ```text
///     matrix := row (";" row)*
///     row    := expression*
/// ```
///
/// # Example
/// ```
/// use seqcalc::{
///     ast::Expr,
///     interpreter::{
///         lexer::tokenize,
///         parser::{cursor::TokenCursor, matrix::parse_matrix},
///     },
/// };
///
/// let tokens = tokenize("1, 2; 3, 4]").unwrap();
/// let mut cursor = TokenCursor::new(&tokens);
/// let Expr::Matrix(rows) = parse_matrix(&mut cursor).unwrap() else {
///     panic!("expected a matrix");
/// };
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1], vec![Expr::Value(3.0.into()), Expr::Value(4.0.into())]);
/// ```
pub fn parse_matrix(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut rows = vec![Vec::new()];
    loop {
        match cursor.peek() {
            None | Some(Token::RightBracket | Token::RightParen) => break,
            Some(Token::Semicolon) => {
                cursor.advance();
                rows.push(Vec::new());
            },
            Some(_) => {
                let element = parse_expression(cursor)?;
                if let Some(row) = rows.last_mut() {
                    row.push(element);
                }
            },
        }
    }
    Ok(Expr::Matrix(rows))
}

/// Parses an optional parenthesised list.
///
/// Returns `None` with the cursor untouched if the next token is not `(`, or
/// if the list would be empty: `()` is not a list, so `f()` leaves a stray
/// `(` for the caller to report.
///
/// # Example
/// ```
/// use seqcalc::interpreter::{
///     lexer::tokenize,
///     parser::{cursor::TokenCursor, matrix::parse_parameter_list},
/// };
///
/// let tokens = tokenize("()").unwrap();
/// let mut cursor = TokenCursor::new(&tokens);
/// assert_eq!(parse_parameter_list(&mut cursor), Ok(None));
/// assert!(!cursor.is_at_end());
/// ```
pub fn parse_parameter_list(cursor: &mut TokenCursor<'_>) -> ParseResult<Option<Expr>> {
    let snapshot = cursor.snapshot();
    if !cursor.eat(&Token::LeftParen) {
        return Ok(None);
    }
    if cursor.check(&Token::RightParen) {
        cursor.restore(snapshot);
        return Ok(None);
    }
    let list = parse_matrix(cursor)?;
    expect_closing(cursor, &Token::RightParen, ')')?;
    Ok(Some(list))
}
