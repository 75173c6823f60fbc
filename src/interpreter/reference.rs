use std::{collections::BTreeMap, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{
    ast::{DefinitionShape, Expr, ParametersDefinition},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// A stored definition: its shape and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionDefinition {
    /// Parameters and index shape.
    pub definition: Rc<ParametersDefinition>,
    /// The expression evaluated on use.
    pub body:       Rc<Expr>,
}

/// The actual-argument view of a use site.
///
/// `a` and `b` mirror the discriminators of [`ParametersDefinition`]: `b` is
/// the index written after `_`, `a` an optional scale applied to the running
/// index of a general definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParametersCall {
    /// Explicit value scaling the running index.
    pub a:         Option<f64>,
    /// Explicit index.
    pub b:         Option<f64>,
    /// Evaluated positional arguments.
    pub arguments: Vec<Value>,
}

impl ParametersCall {
    /// A call with neither index nor arguments, as in a bare `x`.
    #[must_use]
    pub fn bare() -> Self {
        Self::default()
    }

    /// A call at index `index`, as in `u_3`.
    #[must_use]
    pub fn at_index(index: f64) -> Self {
        Self { b: Some(index),
               ..Self::default() }
    }

    /// Adds positional arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<Value>) -> Self {
        self.arguments = arguments;
        self
    }
}

/// The definition picked for a call, with the running index to bind when it
/// is a general formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    /// The selected definition.
    pub expression: &'a ExpressionDefinition,
    /// Name and value of the running index of a general definition.
    pub index:      Option<(&'a str, f64)>,
}

/// Everything stored under one name.
///
/// A name holds at most one simple definition, any number of definitions at
/// explicit indices, and at most one general formula. Adding a definition of a
/// shape already present replaces it (per index for indexed ones).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reference {
    name:    String,
    single:  Option<ExpressionDefinition>,
    indexed: BTreeMap<OrderedFloat<f64>, ExpressionDefinition>,
    general: Option<ExpressionDefinition>,
}

impl Reference {
    /// Creates an empty reference for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               ..Self::default() }
    }

    /// The name every stored definition belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores a definition, classified by its shape.
    ///
    /// # Errors
    /// `InternalConsistency` if `name` differs from the name this reference
    /// was created for.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use seqcalc::{
    ///     ast::{DefinitionShape, Expr, ParametersDefinition},
    ///     interpreter::reference::Reference,
    /// };
    ///
    /// let mut u = Reference::new("u");
    /// for (index, value) in [(0.0, 1.0), (1.0, 2.0)] {
    ///     let shape = DefinitionShape::Indexed { index };
    ///     u.add_expression("u",
    ///                      Rc::new(ParametersDefinition::with_shape(shape)),
    ///                      Rc::new(Expr::Value(value.into())))
    ///      .unwrap();
    /// }
    /// assert_eq!(u.indices().collect::<Vec<_>>(), vec![0.0, 1.0]);
    /// assert!(u.single().is_none());
    ///
    /// let other = u.add_expression("v",
    ///                              Rc::new(ParametersDefinition::default()),
    ///                              Rc::new(Expr::Value(0.0.into())));
    /// assert!(other.is_err());
    /// ```
    pub fn add_expression(&mut self,
                          name: &str,
                          definition: Rc<ParametersDefinition>,
                          body: Rc<Expr>)
                          -> EvalResult<()> {
        if self.name.is_empty() {
            self.name = name.to_string();
        } else if self.name != name {
            return Err(RuntimeError::InternalConsistency { expected: self.name.clone(),
                                                           found:    name.to_string(), });
        }

        let shape = definition.shape.clone();
        let stored = ExpressionDefinition { definition, body };
        match shape {
            DefinitionShape::General { .. } => self.general = Some(stored),
            DefinitionShape::Indexed { index } => {
                self.indexed.insert(OrderedFloat(index), stored);
            },
            DefinitionShape::Simple => self.single = Some(stored),
        }
        Ok(())
    }

    /// The simple definition, if any.
    #[must_use]
    pub const fn single(&self) -> Option<&ExpressionDefinition> {
        self.single.as_ref()
    }

    /// The general formula, if any.
    #[must_use]
    pub const fn general(&self) -> Option<&ExpressionDefinition> {
        self.general.as_ref()
    }

    /// The definition at an explicit index, if any.
    #[must_use]
    pub fn indexed(&self, index: f64) -> Option<&ExpressionDefinition> {
        self.indexed.get(&OrderedFloat(index))
    }

    /// Explicit indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = f64> + '_ {
        self.indexed.keys().map(|k| k.0)
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.single.is_none() && self.indexed.is_empty() && self.general.is_none()
    }

    /// Picks the definition answering `call`.
    ///
    /// The order is strict:
    /// 1. an explicit index without a scale selects the definition stored at
    ///    that index;
    /// 2. otherwise, a call with an index or a scale selects the general
    ///    formula, with the running index `(b - offset) * a / stride`;
    /// 3. otherwise the simple definition.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use seqcalc::{
    ///     ast::{DefinitionShape, Expr, ParametersDefinition},
    ///     interpreter::reference::{ParametersCall, Reference},
    /// };
    ///
    /// let mut u = Reference::new("u");
    /// let general = DefinitionShape::General { index_name: "n".into(),
    ///                                          stride:     1.0,
    ///                                          offset:     1.0, };
    /// u.add_expression("u",
    ///                  Rc::new(ParametersDefinition::with_shape(general)),
    ///                  Rc::new(Expr::Value(0.0.into())))
    ///  .unwrap();
    ///
    /// let resolved = u.resolve(&ParametersCall::at_index(5.0)).unwrap();
    /// assert_eq!(resolved.index, Some(("n", 4.0)));
    /// assert!(u.resolve(&ParametersCall::bare()).is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, call: &ParametersCall) -> Option<Resolution<'_>> {
        if let (None, Some(b)) = (call.a, call.b)
           && let Some(expression) = self.indexed(b)
        {
            tracing::trace!(name = %self.name, index = b, "resolved to indexed definition");
            return Some(Resolution { expression,
                                     index: None });
        }

        if (call.a.is_some() || call.b.is_some())
           && let Some(expression) = &self.general
           && let Some(index_name) = expression.definition.index_name()
        {
            let definition = &expression.definition;
            let index = (call.b.unwrap_or(0.0) - definition.b()) * call.a.unwrap_or(1.0)
                        / definition.a();
            tracing::trace!(name = %self.name, index_name, index, "resolved to general definition");
            return Some(Resolution { expression,
                                     index: Some((index_name, index)) });
        }

        self.single.as_ref().map(|expression| {
                                tracing::trace!(name = %self.name, "resolved to simple definition");
                                Resolution { expression,
                                             index: None }
                            })
    }

    /// Evaluates the definition answering `call`.
    ///
    /// # Errors
    /// - `UnresolvedReference` if no stored definition matches the call.
    /// - Any error raised while binding arguments or evaluating the body.
    pub fn eval(&self, call: ParametersCall, ctx: &mut Context<'_>) -> EvalResult<Value> {
        let resolution =
            self.resolve(&call)
                .ok_or_else(|| RuntimeError::UnresolvedReference { name: self.name.clone() })?;
        ctx.eval_definition(&self.name, resolution, call.arguments)
    }
}
