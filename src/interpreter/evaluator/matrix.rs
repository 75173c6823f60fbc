use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, matrix::Matrix},
    },
};

impl Context<'_> {
    /// Evaluates a matrix literal.
    ///
    /// Elements may be scalars or matrices; the blocks of a row are joined
    /// side by side and the rows stacked. Empty rows are skipped. A literal
    /// with one element evaluates to that element.
    ///
    /// # Errors
    /// - `EmptyMatrix` if no row has an element, as in `[]` or `[;]`.
    /// - `DimensionMismatch` if blocks do not line up.
    ///
    /// # Example
    /// ```
    /// use seqcalc::interpreter::{
    ///     evaluator::core::Context, lexer::tokenize, parser::core::parse_all,
    ///     workspace::Workspace,
    /// };
    ///
    /// let mut workspace = Workspace::new();
    /// let mut ctx = Context::new(&mut workspace);
    /// let expr = parse_all(&tokenize("[[1; 2], [3; 4]; 5, 6]").unwrap()).unwrap();
    /// let value = ctx.eval(&expr).unwrap();
    ///
    /// assert_eq!(value.shape(), (3, 2));
    /// assert_eq!(value.to_string(), "[1, 3; 2, 4; 5, 6]");
    /// ```
    pub fn eval_matrix(&mut self, rows: &[Vec<Expr>]) -> EvalResult<Value> {
        let mut stacked = Vec::with_capacity(rows.len());
        for row in rows.iter().filter(|row| !row.is_empty()) {
            let mut blocks = Vec::with_capacity(row.len());
            for element in row {
                blocks.push(self.eval(element)?.to_matrix());
            }
            stacked.push(Matrix::hconcat(&blocks)?);
        }
        if stacked.is_empty() {
            return Err(RuntimeError::EmptyMatrix);
        }
        Ok(Value::from_matrix(Matrix::vconcat(&stacked)?))
    }
}
