use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    util::stack::ensure_sufficient_stack,
};

/// Deepest operand nesting the parser accepts.
///
/// Every parenthesis, bracket, prefix operator and exponent opens one or two
/// levels. The bound keeps expression trees shallow enough to be cloned,
/// compared and dropped recursively.
pub const MAX_NESTING: usize = 1024;

/// Saved cursor position.
///
/// Taken before a speculative parse and handed back to
/// [`TokenCursor::restore`] if the speculation does not pan out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    position: usize,
}

/// Read position over a borrowed token list.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens:   &'a [Token],
    position: usize,
    depth:    usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               position: 0,
               depth: 0 }
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Returns `true` if the next token is `expected`.
    #[must_use]
    pub fn check(&self, expected: &Token) -> bool {
        self.peek() == Some(expected)
    }

    /// Consumes the next token if it is `expected`.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Rendering of the last consumed token, or an empty string at the start.
    #[must_use]
    pub fn last_consumed(&self) -> String {
        self.position
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Captures the current position.
    #[must_use]
    pub const fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot { position: self.position }
    }

    /// Rewinds to a previously captured position.
    pub const fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
    }

    /// Runs `f` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING`] levels are open.
    ///
    /// # Example
    /// ```
    /// use seqcalc::{
    ///     error::ParseError,
    ///     interpreter::{
    ///         lexer::tokenize,
    ///         parser::{core::parse_all, cursor::MAX_NESTING},
    ///     },
    /// };
    ///
    /// let deep = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    /// assert_eq!(parse_all(&tokenize(&deep).unwrap()),
    ///            Err(ParseError::NestingTooDeep { limit: MAX_NESTING }));
    /// ```
    pub fn nested<T>(&mut self,
                     f: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}
