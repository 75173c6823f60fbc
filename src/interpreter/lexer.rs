use std::fmt::Display;

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::value::complex::{ComplexNumber, I},
};

pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `^`
    #[token("^")]
    Power,
    /// `!`
    #[token("!")]
    Factorial,
    /// `_`, introducing an index.
    #[token("_")]
    Subscript,
    /// `=`
    #[token("=")]
    Equal,
    /// Numeric literals such as `3`, `3.14`, `.5`, `2e-3`, `4i` or the bare
    /// imaginary unit `i`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?i?", parse_number)]
    #[token("i", |_| I, priority = 3)]
    Value(ComplexNumber),
    /// Names of variables, functions and sequences. Trailing digits belong to
    /// the name, so `u2` is one name.
    #[regex(r"[a-zA-Z]+[0-9]*", |lex| lex.slice().to_string())]
    Name(String),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Add => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Power => write!(f, "^"),
            Self::Factorial => write!(f, "!"),
            Self::Subscript => write!(f, "_"),
            Self::Equal => write!(f, "="),
            Self::Value(c) => write!(f, "{c}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

/// Hands a delimited numeric literal to the literal parser.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<ComplexNumber> {
    ComplexNumber::parse_literal(lex.slice())
}

/// Splits `text` into tokens.
///
/// # Errors
/// - `UnexpectedCharacter` for a character that starts no token.
/// - `MalformedLiteral` for a number the literal parser rejects.
/// - `EmptyInput` if `text` holds no token at all.
///
/// # Example
/// ```
/// use seqcalc::{
///     error::LexError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("u_n = 2*u2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Name("u".into()),
///                 Token::Subscript,
///                 Token::Name("n".into()),
///                 Token::Equal,
///                 Token::Value(2.0.into()),
///                 Token::Multiply,
///                 Token::Name("u2".into()),]);
///
/// assert_eq!(tokenize("   "), Err(LexError::EmptyInput));
/// assert!(matches!(tokenize("1 $ 2"),
///                  Err(LexError::UnexpectedCharacter { character: '$', position: 2 })));
/// ```
pub fn tokenize(text: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for (token, span) in Token::lexer(text).spanned() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let slice = &text[span.clone()];
                let first = slice.chars().next().unwrap_or_default();
                return Err(if first.is_ascii_digit() || first == '.' {
                               LexError::MalformedLiteral { literal:  slice.to_string(),
                                                            position: span.start, }
                           } else {
                               LexError::UnexpectedCharacter { character: first,
                                                               position:  span.start, }
                           });
            },
        }
    }

    if tokens.is_empty() {
        return Err(LexError::EmptyInput);
    }
    tracing::debug!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Renders a token list as space-separated text, for diagnostics.
///
/// # Example
/// ```
/// use seqcalc::interpreter::lexer::{render_tokens, tokenize};
///
/// let tokens = tokenize("f(x,2)_1").unwrap();
/// assert_eq!(render_tokens(&tokens), "f ( x , 2 ) _ 1");
/// ```
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
