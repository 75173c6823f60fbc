use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        reference::ParametersCall,
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a bare name.
    ///
    /// A binding in the scoped environment (a parameter or running index)
    /// wins over a definition in the workspace.
    ///
    /// # Errors
    /// `UnresolvedReference` if the name is neither bound nor defined.
    pub fn eval_name(&mut self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.environment.get(name) {
            return Ok(value.clone());
        }
        self.eval_reference(name, ParametersCall::bare())
    }

    /// Evaluates a use of `name` with optional arguments and subscript.
    ///
    /// Arguments and subscript are evaluated in the caller's scope, before
    /// the definition is entered. The subscript must be a real scalar.
    ///
    /// # Example
    /// ```
    /// use seqcalc::{
    ///     error::RuntimeError,
    ///     interpreter::{
    ///         evaluator::core::Context, lexer::tokenize, parser::core::parse_all,
    ///         value::core::Value, workspace::Workspace,
    ///     },
    /// };
    ///
    /// let mut workspace = Workspace::new();
    /// let mut ctx = Context::new(&mut workspace);
    /// let mut run = |text: &str| ctx.eval(&parse_all(&tokenize(text).unwrap()).unwrap());
    ///
    /// run("u_0 = 1").unwrap();
    /// run("u_n = 2 * u_(n - 1)").unwrap();
    /// assert_eq!(run("u_10").unwrap(), Value::from(1024.0));
    /// assert_eq!(run("v_1"), Err(RuntimeError::UnresolvedReference { name: "v".into() }));
    /// ```
    pub fn eval_call(&mut self,
                     name: &str,
                     arguments: Option<&Expr>,
                     subscript: Option<&Expr>)
                     -> EvalResult<Value> {
        if arguments.is_none() && subscript.is_none() {
            return self.eval_name(name);
        }

        let b = match subscript {
            Some(index) => Some(self.eval(index)?.as_real("subscript")?),
            None => None,
        };
        let mut values = Vec::new();
        if let Some(list) = arguments {
            for argument in list.argument_list() {
                values.push(self.eval(argument)?);
            }
        }

        self.eval_reference(name,
                            ParametersCall { a: None,
                                             b,
                                             arguments: values })
    }

    /// Evaluates the workspace definition of `name` answering `call`.
    fn eval_reference(&mut self, name: &str, call: ParametersCall) -> EvalResult<Value> {
        let reference =
            self.workspace()
                .reference(name)
                .ok_or_else(|| RuntimeError::UnresolvedReference { name: name.to_string() })?;
        reference.eval(call, self)
    }
}
