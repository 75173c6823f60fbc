use std::panic::{self, AssertUnwindSafe};

use crate::{
    error::{Error, LexError},
    interpreter::{
        evaluator::core::{Config, Context},
        lexer::{self, tokenize},
        parser::core::parse_all,
        value::core::Value,
        workspace::Workspace,
    },
};

/// Evaluates one expression at a time against a persistent workspace.
///
/// Definitions made by one call stay available to the next. Everything else
/// (tokens, parse state, scoped bindings) lives only for the duration of a
/// call.
///
/// # Example
/// ```
/// use seqcalc::{Interpreter, Value};
///
/// let mut interpreter = Interpreter::new();
/// interpreter.eval("f(a, b) = a + b");
/// assert_eq!(interpreter.eval("f(2, 3)"), Value::from(5.0));
///
/// // Failures are reported, not propagated.
/// assert_eq!(interpreter.eval("(1 + 2"), Value::default());
/// assert!(interpreter.last_error().is_some());
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    workspace:  Workspace,
    config:     Config,
    last_error: Option<Error>,
}

impl Interpreter {
    /// Creates an interpreter with an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter over an existing workspace.
    #[must_use]
    pub fn with_workspace(workspace: Workspace) -> Self {
        Self { workspace,
               ..Self::default() }
    }

    /// Replaces the evaluation settings.
    #[must_use]
    pub const fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The stored definitions.
    #[must_use]
    pub const fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Mutable access to the stored definitions.
    pub const fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    /// Gives the workspace back to the host.
    #[must_use]
    pub fn into_workspace(self) -> Workspace {
        self.workspace
    }

    /// The active settings.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// The failure reported by the last call to [`Interpreter::eval`], if it
    /// failed.
    #[must_use]
    pub const fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Evaluates `text`, never failing.
    ///
    /// Any error, including a panic inside evaluation, is logged as a warning
    /// and kept in [`Interpreter::last_error`]; the result is then zero.
    /// Definitions registered before the failure are kept.
    pub fn eval(&mut self, text: &str) -> Value {
        self.last_error = None;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_eval(text)));
        let err = match outcome {
            Ok(Ok(value)) => return value,
            Ok(Err(err)) => err,
            Err(payload) => {
                let message = payload.downcast_ref::<&str>()
                                     .map(ToString::to_string)
                                     .or_else(|| payload.downcast_ref::<String>().cloned())
                                     .unwrap_or_else(|| "unknown panic".to_string());
                Error::Internal(message)
            },
        };

        tracing::warn!(input = text, error = %err, "evaluation failed");
        self.last_error = Some(err);
        Value::default()
    }

    /// Evaluates `text`, returning the first error.
    ///
    /// # Example
    /// ```
    /// use seqcalc::{
    ///     Interpreter, Value,
    ///     error::{Error, LexError},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.try_eval("2^3^2"), Ok(Value::from(512.0)));
    /// assert_eq!(interpreter.try_eval(""), Err(Error::Lex(LexError::EmptyInput)));
    /// ```
    pub fn try_eval(&mut self, text: &str) -> Result<Value, Error> {
        let tokens = tokenize(text)?;
        let expr = parse_all(&tokens)?;
        let mut ctx = Context::with_config(&mut self.workspace, self.config);
        Ok(ctx.eval(&expr)?)
    }

    /// Renders the tokens of `text`, for diagnostics.
    ///
    /// ```
    /// use seqcalc::Interpreter;
    ///
    /// assert_eq!(Interpreter::render_tokens("u_(n+1)=2").unwrap(), "u _ ( n + 1 ) = 2");
    /// ```
    pub fn render_tokens(text: &str) -> Result<String, LexError> {
        Ok(lexer::render_tokens(&tokenize(text)?))
    }
}
