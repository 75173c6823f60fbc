use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A character that starts no token was found.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A numeric literal was delimited but could not be parsed.
    #[error("Failed to parse number '{literal}' at position {position}.")]
    MalformedLiteral {
        /// The text of the literal.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// The input produced no token at all.
    #[error("Cannot evaluate an empty expression.")]
    EmptyInput,
}
