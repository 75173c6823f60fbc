/// Core parsing entry points.
///
/// Holds `parse_all`, the top-level expression rule and the speculative
/// definition-head rule that tells `f(x) = ...` apart from `f(x) + ...`.
pub mod core;

/// Token cursor with snapshot and restore for backtracking.
pub mod cursor;

/// Binary operator precedence levels.
///
/// Implements the additive, multiplicative and power levels.
pub mod binary;

/// Operands and prefix/postfix operators.
///
/// Parses literals, names with arguments and subscripts, parenthesised
/// groups, matrix literals, negation and factorial.
pub mod unary;

/// Rows of comma- or space-separated expressions.
///
/// Shared by matrix literals, call arguments and parameter lists.
pub mod matrix;

/// Structural analysis of definition heads.
///
/// Extracts parameter names, defaults and the index shape from the parameter
/// list and subscript of a definition.
pub mod definition;
