use std::rc::Rc;

use crate::{
    ast::{DefinitionShape, Expr, ParametersDefinition},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        reference::Resolution,
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an assignment node.
    ///
    /// The definition is stored in the workspace before anything is
    /// evaluated, and the node itself is recorded as the latest assignment of
    /// its name. A simple or indexed definition without parameters then
    /// evaluates to its body; parametric and general definitions evaluate to
    /// zero.
    ///
    /// # Parameters
    /// - `node`: The whole assignment, recorded in the workspace.
    /// - `target`: The name being defined, possibly with parameters and index.
    /// - `definition`: Shape of the definition.
    /// - `body`: Right-hand side.
    pub fn eval_assignment(&mut self,
                           node: &Expr,
                           target: &Expr,
                           definition: &Rc<ParametersDefinition>,
                           body: &Rc<Expr>)
                           -> EvalResult<Value> {
        let Some(name) = target.target_name() else {
            return Err(RuntimeError::InvalidArgument { details: format!("cannot assign to {target:?}") });
        };

        let workspace = self.workspace_mut();
        workspace.add_expression(name, Rc::clone(definition), Rc::clone(body))?;
        workspace.set_expr(name, Rc::new(node.clone()));

        match definition.shape {
            DefinitionShape::Simple | DefinitionShape::Indexed { .. }
                if !definition.has_parameters() =>
            {
                self.eval(body)
            },
            _ => Ok(Value::default()),
        }
    }

    /// Evaluates a stored definition selected for a call.
    ///
    /// A new scope frame binds the running index of a general definition,
    /// then the parameters: positional arguments first, then default
    /// expressions for the missing trailing ones. Defaults are evaluated
    /// inside the frame, so they can refer to earlier parameters.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if more arguments than parameters are given.
    /// - `MissingArgument` for a missing argument without default.
    /// - `RecursionLimit` if definitions nest deeper than the configured limit.
    pub fn eval_definition(&mut self,
                           name: &str,
                           resolution: Resolution<'_>,
                           arguments: Vec<Value>)
                           -> EvalResult<Value> {
        let definition = &resolution.expression.definition;
        if arguments.len() > definition.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: definition.parameters
                                                                                 .len(),
                                                             found:    arguments.len(), });
        }

        self.nested(name, |ctx| {
                ctx.with_scope(|ctx| {
                       if let Some((index_name, index)) = resolution.index {
                           ctx.environment.set(index_name, Value::from(index));
                       }

                       let mut arguments = arguments.into_iter();
                       for parameter in &definition.parameters {
                           let value = match arguments.next() {
                               Some(value) => value,
                               None => match definition.defaults.get(parameter) {
                                   Some(default) => ctx.eval(default)?,
                                   None => {
                                       return Err(RuntimeError::MissingArgument {
                                           name:      name.to_string(),
                                           parameter: parameter.clone(),
                                       });
                                   },
                               },
                           };
                           ctx.environment.set(parameter.as_str(), value);
                       }

                       ctx.eval(&resolution.expression.body)
                   })
            })
    }
}
