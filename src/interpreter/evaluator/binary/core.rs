use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation to the handler for its operator. Each handler
    /// accepts any combination of scalars and matrices and reports shape
    /// errors itself.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use seqcalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::from(3.0);
    /// let right = Value::from(4.0);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right);
    /// assert_eq!(result.unwrap(), Value::from(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Self::eval_add(left, right),
            BinaryOperator::Multiply => Self::eval_multiply(left, right),
            BinaryOperator::Divide => Self::eval_divide(left, right),
            BinaryOperator::Power => Self::eval_pow(left, right),
        }
    }
}
