use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Multiplies two values.
    ///
    /// # Shape rules
    /// - scalar `*` scalar is the complex product.
    /// - scalar `*` matrix scales every element.
    /// - matrix `*` matrix is the matrix product; the left column count must
    ///   match the right row count. A `1 × 1` result collapses to a scalar.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{core::Value, matrix::Matrix},
    /// };
    ///
    /// let row = Value::from(Matrix::from_rows(vec![vec![1.0.into(), 2.0.into()]]).unwrap());
    /// let column = Value::from(Matrix::from_rows(vec![vec![3.0.into()], vec![4.0.into()]]).unwrap());
    ///
    /// // [1, 2] * [3; 4] = 11
    /// assert_eq!(Context::eval_multiply(&row, &column).unwrap(), Value::from(11.0));
    /// assert!(Context::eval_multiply(&row, &row).is_err());
    /// ```
    pub fn eval_multiply(left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(*a * *b)),
            (Value::Scalar(s), Value::Matrix(m)) | (Value::Matrix(m), Value::Scalar(s)) => {
                Ok(Value::from_matrix(m.map(|x| x * *s)))
            },
            (Value::Matrix(a), Value::Matrix(b)) => Ok(Value::from_matrix(a.matmul(b)?)),
        }
    }

    /// Divides two values.
    ///
    /// Dividing by a scalar divides every element. Dividing by a matrix
    /// multiplies by its inverse, so the divisor must be square and
    /// invertible.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero scalar divisor.
    /// - `NotSquare` or `SingularMatrix` for a matrix divisor without inverse.
    /// - `DimensionMismatch` if the product with the inverse is undefined.
    pub fn eval_divide(left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(a.checked_div(*b)?)),
            (Value::Matrix(m), Value::Scalar(s)) => {
                if s.is_zero() {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::from_matrix(m.map(|x| x / *s)))
            },
            (Value::Scalar(s), Value::Matrix(m)) => {
                Ok(Value::from_matrix(m.inverse()?.map(|x| *s * x)))
            },
            (Value::Matrix(a), Value::Matrix(b)) => {
                Ok(Value::from_matrix(a.matmul(&b.inverse()?)?))
            },
        }
    }
}
