/// Binary operator evaluation.
///
/// Implements addition, multiplication, division and exponentiation over
/// scalars and matrices, including scalar broadcasting and matrix products.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles negation and factorial.
pub mod unary;

/// Core evaluation logic for expressions and values.
///
/// Contains the evaluation context, the expression dispatcher and scope
/// handling.
pub mod core;

/// Name resolution at use sites.
///
/// Evaluates bare names, calls with arguments and indexed accesses against the
/// scoped environment and the workspace.
pub mod call;

/// Definitions.
///
/// Registers assignments in the workspace and evaluates stored definitions
/// with their parameters and running index bound.
pub mod definition;

/// Matrix literals.
pub mod matrix;
