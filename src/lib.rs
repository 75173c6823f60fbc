//! # seqcalc
//!
//! seqcalc is the evaluation core of a small numeric expression language
//! written in Rust. It tokenizes, parses and evaluates one expression at a
//! time over complex scalars and matrices, and remembers definitions between
//! calls: variables (`x = 2`), functions with default parameters
//! (`f(a, b = 1) = a * b`) and recursively indexed sequences
//! (`u_0 = 1`, `u_n = n * u_(n - 1)`).
//!
//! ```
//! use seqcalc::{Interpreter, Value};
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.eval("fib_0 = 0");
//! interpreter.eval("fib_1 = 1");
//! interpreter.eval("fib_n = fib_(n - 1) + fib_(n - 2)");
//! assert_eq!(interpreter.eval("fib_10"), Value::from(55.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents an expression as a
/// tree, together with `ParametersDefinition`, the shape of a stored
/// definition. The AST is built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Wraps them in a single `Error` for the interpreter entry points.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the scoped environment and the workspace registry. It
/// exposes the [`Interpreter`] entry point.
pub mod interpreter;
/// General utilities for safe numeric conversion and stack growth.
pub mod util;

pub use error::Error;
pub use interpreter::{session::Interpreter, value::core::Value};

/// Evaluates `text` in a fresh interpreter with an empty workspace.
///
/// # Examples
/// ```
/// use seqcalc::{Value, eval};
///
/// assert_eq!(eval("2 + 3 * 4").unwrap(), Value::from(14.0));
/// assert!(eval("x + 1").is_err()); // 'x' is not defined
/// ```
pub fn eval(text: &str) -> Result<Value, Error> {
    Interpreter::new().try_eval(text)
}
