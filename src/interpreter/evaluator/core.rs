use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Mapstack, value::core::Value, workspace::Workspace},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested definition evaluations.
pub const MAX_DEPTH: usize = 128;

/// Evaluation settings.
///
/// # Example
/// ```
/// use seqcalc::interpreter::evaluator::core::{Config, MAX_DEPTH};
///
/// assert_eq!(Config::default().max_depth, MAX_DEPTH);
/// assert_eq!(Config::default().with_max_depth(16).max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many definition evaluations may be nested before evaluation fails
    /// with `RecursionLimit`.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: MAX_DEPTH }
    }
}

impl Config {
    /// Replaces the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Stores the runtime evaluation context.
///
/// A context lives for one evaluation. It owns the scoped environment holding
/// parameters and running indices, and borrows the workspace where
/// definitions are stored and looked up.
///
/// ## Usage
///
/// ```
/// use seqcalc::interpreter::{
///     evaluator::core::Context,
///     lexer::tokenize,
///     parser::core::parse_all,
///     value::core::Value,
///     workspace::Workspace,
/// };
///
/// let mut workspace = Workspace::new();
/// let mut ctx = Context::new(&mut workspace);
///
/// for (text, expected) in [("f(x) = x^2", 0.0), ("f(3) + 1", 10.0)] {
///     let expr = parse_all(&tokenize(text).unwrap()).unwrap();
///     assert_eq!(ctx.eval(&expr).unwrap(), Value::from(expected));
/// }
/// ```
pub struct Context<'w> {
    /// Bindings of parameters and running indices.
    pub environment: Mapstack<String, Value>,
    workspace:       &'w mut Workspace,
    config:          Config,
    depth:           usize,
}

impl<'w> Context<'w> {
    /// Creates a context over `workspace` with the default configuration.
    #[must_use]
    pub fn new(workspace: &'w mut Workspace) -> Self {
        Self::with_config(workspace, Config::default())
    }

    /// Creates a context over `workspace` with the given configuration.
    #[must_use]
    pub fn with_config(workspace: &'w mut Workspace, config: Config) -> Self {
        Self { environment: Mapstack::new(),
               workspace,
               config,
               depth: 0 }
    }

    /// The workspace definitions are read from and written to.
    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &*self.workspace
    }

    /// Mutable access to the workspace.
    pub fn workspace_mut(&mut self) -> &mut Workspace {
        &mut *self.workspace
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Number of definition evaluations currently in progress.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; operators evaluate their operands
    /// left to right first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_node(expr))
    }

    fn eval_node(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Value(c) => Ok(Value::Scalar(*c)),
            Expr::VariableReference(name) => self.eval_name(name),
            Expr::Assignment { target,
                               definition,
                               body, } => self.eval_assignment(expr, target, definition, body),
            Expr::FunctionCall { name,
                                 arguments,
                                 subscript, } => {
                self.eval_call(name, arguments.as_deref(), subscript.as_deref())
            },
            Expr::UnaryOp { op, expr } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::Matrix(rows) => self.eval_matrix(rows),
        }
    }

    /// Runs `f` inside a new scope frame.
    ///
    /// The frame is popped whether `f` succeeds or fails, so bindings made
    /// inside never outlive the call.
    ///
    /// # Example
    /// ```
    /// use seqcalc::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value, workspace::Workspace},
    /// };
    ///
    /// let mut workspace = Workspace::new();
    /// let mut context = Context::new(&mut workspace);
    /// let before = context.environment.depth();
    ///
    /// let result: Result<(), _> = context.with_scope(|ctx| {
    ///                                        ctx.environment.set("n", Value::from(1.0));
    ///                                        assert_eq!(ctx.environment.depth(), before + 1);
    ///                                        Err(RuntimeError::Overflow)
    ///                                    });
    ///
    /// assert!(result.is_err());
    /// assert_eq!(context.environment.depth(), before);
    /// assert_eq!(context.environment.get("n"), None);
    /// ```
    pub fn with_scope<T>(&mut self,
                         f: impl FnOnce(&mut Self) -> EvalResult<T>)
                         -> EvalResult<T> {
        self.environment.push();
        tracing::trace!(depth = self.environment.depth(), "pushed scope");
        let result = f(self);
        self.environment.pop();
        tracing::trace!(depth = self.environment.depth(), "popped scope");
        result
    }

    /// Runs `f` one definition level deeper, failing once the configured
    /// limit is reached.
    pub(crate) fn nested<T>(&mut self,
                            name: &str,
                            f: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(RuntimeError::RecursionLimit { name:  name.to_string(),
                                                      depth: self.config.max_depth, });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
