use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: negates a scalar or every element of a matrix.
    /// - `Factorial`: factorial of a real scalar. Non-negative integers give
    ///   exact products; other positive reals use the gamma function
    ///   (`Γ(x + 1)`). Negative integers, complex numbers and matrices are
    ///   rejected.
    ///
    /// # Example
    /// ```
    /// use seqcalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::from(5.0)).unwrap();
    /// assert_eq!(v, Value::from(-5.0));
    ///
    /// // Factorial: 4! = 24
    /// let v = Context::eval_unary(UnaryOperator::Factorial, &Value::from(4.0)).unwrap();
    /// assert_eq!(v, Value::from(24.0));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Factorial, &Value::from(-1.0)).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Scalar(c) => Ok(Value::Scalar(-*c)),
                Value::Matrix(m) => Ok(Value::from_matrix(m.map(|x| -x))),
            },
            UnaryOperator::Factorial => Ok(Value::Scalar(value.as_scalar("factorial")?.factorial()?)),
        }
    }
}
