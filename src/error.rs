use thiserror::Error;

/// Lexing errors.
///
/// Raised while turning raw text into tokens: characters that belong to no
/// token, numeric literals the literal parser rejects, and empty input.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from the
/// token list: unexpected tokens, missing closing delimiters, trailing input
/// and malformed parameter lists.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unresolved
/// references, argument mismatches, arithmetic failures of the value type and
/// the recursion boundary of general definitions.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single evaluation call.
///
/// Each phase keeps its own error enum; this wrapper lets `?` carry all of
/// them up to the interpreter entry point, which reports and swallows them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token list is not a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A panic was caught at the interpreter boundary.
    #[error("Unexpected internal failure: {0}")]
    Internal(String),
}
