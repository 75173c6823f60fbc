use thiserror::Error;

/// Renders the hint appended to errors caused by a stray `(`.
fn missing_operator_hint(missing_operator: &bool) -> &'static str {
    if *missing_operator {
        " The operator '*' is probably missing."
    } else {
        ""
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression here.
    #[error("Unexpected operator '{token}'.{}", missing_operator_hint(.missing_operator))]
    UnexpectedToken {
        /// Textual rendering of the token.
        token:            String,
        /// Set when the token is `(`, which usually means a `*` was omitted.
        missing_operator: bool,
    },
    /// The tokens ran out while an operand was expected.
    #[error("Unexpected end of input after '{after}'.")]
    UnexpectedEndOfInput {
        /// Rendering of the last consumed token.
        after: String,
    },
    /// A `)` or `]` was expected but not found.
    #[error("Missing operator '{delimiter}' after '{after}'.")]
    MissingDelimiter {
        /// The expected closing delimiter.
        delimiter: char,
        /// Rendering of the last consumed token.
        after:     String,
    },
    /// A complete expression was parsed but tokens remain.
    #[error("Syntax error before '{token}'.{}", missing_operator_hint(.missing_operator))]
    TrailingInput {
        /// Rendering of the first leftover token.
        token:            String,
        /// Set when the leftover token is `(`.
        missing_operator: bool,
    },
    /// Operands are nested deeper than the parser accepts.
    #[error("Expression is nested too deeply (limit {limit}).")]
    NestingTooDeep {
        /// The nesting limit.
        limit: usize,
    },
    /// A bare parameter name follows a defaulted parameter.
    #[error("Parameters definition only includes parameter names followed by defaulted \
             parameters, found '{name}' after a default.")]
    ParameterAfterDefault {
        /// The offending parameter name.
        name: String,
    },
}
