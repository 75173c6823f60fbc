use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Scalar powers use the principal branch of the complex power, with an
    /// exact path for integer exponents. A square matrix can be raised to an
    /// integer power; negative powers go through the inverse. Exponents must be
    /// scalars.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let b = Value::from(2.0);
    /// let e = Value::from(10.0);
    ///
    /// let result = Context::eval_pow(&b, &e).unwrap();
    /// assert_eq!(result, Value::from(1024.0));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
        match (base, exponent) {
            (Value::Scalar(b), Value::Scalar(e)) => Ok(Value::Scalar(b.checked_pow(*e)?)),
            (Value::Matrix(m), Value::Scalar(_)) => {
                let exp = exponent.as_integer("matrix exponent")?;
                Ok(Value::from_matrix(m.powi(exp)?))
            },
            (_, Value::Matrix(_)) => Err(RuntimeError::ExpectedScalar { context: "exponent" }),
        }
    }
}
