use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// No stored definition matches the name and call shape.
    #[error("'{name}' is not defined in this context.")]
    UnresolvedReference {
        /// The referenced name.
        name: String,
    },
    /// A reference received a definition recorded under another name.
    #[error("Interpreter internal error: invalid reference names '{found}' and '{expected}'.")]
    InternalConsistency {
        /// The name the reference was created with.
        expected: String,
        /// The conflicting name.
        found:    String,
    },
    /// More arguments were supplied than the definition declares.
    #[error("'{name}' takes {expected} argument(s) but {found} were supplied.")]
    ArgumentCountMismatch {
        /// The called name.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// A parameter without default received no argument.
    #[error("Missing argument '{parameter}' in call to '{name}'.")]
    MissingArgument {
        /// The called name.
        name:      String,
        /// The parameter left unbound.
        parameter: String,
    },
    /// Nested definition evaluation went deeper than the configured limit.
    #[error("Evaluation of '{name}' exceeds the nesting limit of {depth}; recursive general \
             definitions are only supported when explicit indexed definitions end the recursion.")]
    RecursionLimit {
        /// The reference being evaluated when the limit was hit.
        name:  String,
        /// The configured limit.
        depth: usize,
    },
    /// Operand shapes are incompatible.
    #[error("Dimension mismatch in {operation}: {left_rows}x{left_cols} and {right_rows}x{right_cols}.")]
    DimensionMismatch {
        /// The operation being applied.
        operation:  &'static str,
        /// Rows of the left operand.
        left_rows:  usize,
        /// Columns of the left operand.
        left_cols:  usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },
    /// A matrix literal has no elements.
    #[error("Matrix literal has no elements.")]
    EmptyMatrix,
    /// A matrix has no inverse.
    #[error("Matrix is singular.")]
    SingularMatrix,
    /// A non-square matrix was used where a square one is required.
    #[error("Matrix must be square for {operation}, found {rows}x{cols}.")]
    NotSquare {
        /// The operation being applied.
        operation: &'static str,
        /// Rows of the operand.
        rows:      usize,
        /// Columns of the operand.
        cols:      usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A scalar was required.
    #[error("Expected a scalar for {context}, found a matrix.")]
    ExpectedScalar {
        /// What needed the scalar.
        context: &'static str,
    },
    /// A real number was required.
    #[error("Expected a real number for {context}, found {value}.")]
    ExpectedReal {
        /// What needed the real number.
        context: &'static str,
        /// Rendering of the offending value.
        value:   String,
    },
    /// A real number was used where an integer was required.
    #[error("Value {value} is fractional and cannot be used as an integer.")]
    RealIsFractional {
        /// The offending value.
        value: f64,
    },
    /// An argument was invalid or out of range.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// Arithmetic produced a value that cannot be represented.
    #[error("Overflow while trying to compute result.")]
    Overflow,
}
