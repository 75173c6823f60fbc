use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            complex::{ComplexNumber, ZERO},
            matrix::Matrix,
        },
    },
    util::num::f64_to_i64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates either to a complex scalar or to a matrix of
/// complex scalars. A `1 × 1` matrix is never stored; it collapses to the
/// scalar it holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A complex scalar; real numbers have a zero imaginary part.
    Scalar(ComplexNumber),
    /// A matrix with at least two elements.
    Matrix(Rc<Matrix>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Scalar(ZERO)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Scalar(c)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::from_matrix(m)
    }
}

impl Value {
    /// Wraps a matrix, collapsing a `1 × 1` matrix into its only element.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::{core::Value, matrix::Matrix};
    ///
    /// let single = Matrix::from_rows(vec![vec![7.0.into()]]).unwrap();
    /// assert_eq!(Value::from_matrix(single), Value::from(7.0));
    ///
    /// let pair = Matrix::from_rows(vec![vec![1.0.into(), 2.0.into()]]).unwrap();
    /// assert!(matches!(Value::from_matrix(pair), Value::Matrix(_)));
    /// ```
    #[must_use]
    pub fn from_matrix(m: Matrix) -> Self {
        match m.shape() {
            (1, 1) => m.get(0, 0).map_or_else(Self::default, Self::Scalar),
            _ => Self::Matrix(Rc::new(m)),
        }
    }

    /// Returns the scalar, or an error naming `context` if the value is a
    /// matrix.
    pub fn as_scalar(&self, context: &'static str) -> EvalResult<ComplexNumber> {
        match self {
            Self::Scalar(c) => Ok(*c),
            Self::Matrix(_) => Err(RuntimeError::ExpectedScalar { context }),
        }
    }

    /// Returns the value as a real number.
    ///
    /// Fails for matrices and for scalars with a nonzero imaginary part.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::value::{complex::ComplexNumber, core::Value};
    ///
    /// assert_eq!(Value::from(2.5).as_real("index").unwrap(), 2.5);
    /// assert!(Value::from(ComplexNumber::new(1.0, 1.0)).as_real("index").is_err());
    /// ```
    pub fn as_real(&self, context: &'static str) -> EvalResult<f64> {
        let c = self.as_scalar(context)?;
        if c.is_real() {
            Ok(c.real)
        } else {
            Err(RuntimeError::ExpectedReal { context,
                                             value: c.to_string() })
        }
    }

    /// Returns the value as an exact integer.
    pub fn as_integer(&self, context: &'static str) -> EvalResult<i64> {
        f64_to_i64_checked(self.as_real(context)?)
    }

    /// Returns the value as a matrix; a scalar becomes a `1 × 1` matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix {
        match self {
            Self::Scalar(c) => Matrix::scalar(*c),
            Self::Matrix(m) => m.as_ref().clone(),
        }
    }

    /// Returns the elements in row-major order.
    #[must_use]
    pub fn elements(&self) -> Vec<ComplexNumber> {
        match self {
            Self::Scalar(c) => vec![*c],
            Self::Matrix(m) => m.elements().to_vec(),
        }
    }

    /// `(rows, cols)`; `(1, 1)` for a scalar.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Scalar(_) => (1, 1),
            Self::Matrix(m) => m.shape(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(c) => write!(f, "{c}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
