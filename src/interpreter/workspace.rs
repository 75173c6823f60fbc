use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, ParametersDefinition},
    interpreter::{evaluator::core::EvalResult, reference::Reference},
};

/// The store of named definitions that outlives single evaluations.
///
/// Holds one [`Reference`] per defined name, plus the last top-level
/// assignment node recorded for each name. It is created by the host (or
/// defaulted by the interpreter), passed explicitly to every evaluation, and
/// only emptied by [`Workspace::clear`].
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use seqcalc::{
///     ast::{Expr, ParametersDefinition},
///     interpreter::workspace::Workspace,
/// };
///
/// let mut workspace = Workspace::new();
/// workspace.add_expression("x",
///                          Rc::new(ParametersDefinition::default()),
///                          Rc::new(Expr::Value(3.0.into())))
///          .unwrap();
///
/// assert!(workspace.contains("x"));
/// assert_eq!(workspace.names(), vec!["x"]);
/// workspace.clear();
/// assert!(workspace.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    references:  HashMap<String, Rc<Reference>>,
    expressions: HashMap<String, Rc<Expr>>,
}

impl Workspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a definition under `name`, creating its reference on first use.
    ///
    /// # Errors
    /// `InternalConsistency` if the stored reference belongs to another name.
    pub fn add_expression(&mut self,
                          name: &str,
                          definition: Rc<ParametersDefinition>,
                          body: Rc<Expr>)
                          -> EvalResult<()> {
        let reference = self.references
                            .entry(name.to_string())
                            .or_insert_with(|| Rc::new(Reference::new(name)));
        Rc::make_mut(reference).add_expression(name, definition, body)?;
        tracing::debug!(name, "registered definition");
        Ok(())
    }

    /// Returns the reference stored under `name`.
    ///
    /// The reference is shared, so it stays valid while evaluating a body that
    /// redefines the same name.
    #[must_use]
    pub fn reference(&self, name: &str) -> Option<Rc<Reference>> {
        self.references.get(name).cloned()
    }

    /// Records the top-level assignment node that defined `name`.
    pub fn set_expr(&mut self, name: &str, assignment: Rc<Expr>) {
        self.expressions.insert(name.to_string(), assignment);
    }

    /// Returns the last top-level assignment node recorded for `name`.
    #[must_use]
    pub fn get_expr(&self, name: &str) -> Option<&Rc<Expr>> {
        self.expressions.get(name)
    }

    /// Returns `true` if `name` has at least one definition.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.references.contains_key(name)
    }

    /// Defined names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.references.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Forgets every definition of `name`.
    pub fn remove(&mut self, name: &str) -> Option<Rc<Reference>> {
        self.expressions.remove(name);
        self.references.remove(name)
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.references.clear();
        self.expressions.clear();
    }

    /// Number of defined names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Returns `true` if nothing is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
