use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

impl Context<'_> {
    /// Adds two values.
    ///
    /// Scalars add directly. A scalar added to a matrix is added to every
    /// element. Two matrices must have the same shape and add element by
    /// element.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{core::Value, matrix::Matrix},
    /// };
    ///
    /// let m = Value::from(Matrix::from_rows(vec![vec![1.0.into(), 2.0.into()]]).unwrap());
    /// let shifted = Context::eval_add(&m, &Value::from(10.0)).unwrap();
    /// assert_eq!(shifted.to_string(), "[11, 12]");
    ///
    /// let column = Value::from(Matrix::from_rows(vec![vec![1.0.into()], vec![2.0.into()]]).unwrap());
    /// assert!(Context::eval_add(&m, &column).is_err());
    /// ```
    pub fn eval_add(left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(*a + *b)),
            (Value::Scalar(s), Value::Matrix(m)) | (Value::Matrix(m), Value::Scalar(s)) => {
                Ok(Value::from_matrix(m.map(|x| x + *s)))
            },
            (Value::Matrix(a), Value::Matrix(b)) => {
                Ok(Value::from_matrix(a.zip_with(b, "addition", |x, y| x + y)?))
            },
        }
    }
}
