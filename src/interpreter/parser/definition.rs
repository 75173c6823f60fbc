use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BinaryOperator, DefinitionShape, Expr, ParametersDefinition, UnaryOperator},
    error::ParseError,
};

/// Why a definition head could not be analysed.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadError {
    /// The parameters or subscript do not have a definition shape; the caller
    /// falls back to a plain assignment.
    ShapeMismatch,
    /// The head is malformed in a way that must be reported.
    Invalid(ParseError),
}

impl From<ParseError> for HeadError {
    fn from(err: ParseError) -> Self {
        Self::Invalid(err)
    }
}

/// Builds the [`ParametersDefinition`] of a definition from its parsed
/// parameter list and subscript.
///
/// # Errors
/// - `ShapeMismatch` if a parameter is not a name or `name = default`, a name
///   is repeated, or the subscript is neither a constant nor affine in one
///   name.
/// - `Invalid(ParameterAfterDefault)` for a bare name after a default.
///
/// # Example
/// ```
/// use seqcalc::{
///     ast::{DefinitionShape, Expr},
///     interpreter::{
///         lexer::tokenize,
///         parser::{core::parse_all, definition::analyze_definition_head},
///     },
/// };
///
/// let Expr::FunctionCall { arguments, subscript, .. } =
///     parse_all(&tokenize("f(a, b = 2)_(2*n + 1)").unwrap()).unwrap()
/// else {
///     panic!("expected a call");
/// };
/// let definition = analyze_definition_head(arguments.as_deref(), subscript.as_deref()).unwrap();
///
/// assert_eq!(definition.parameters, vec!["a".to_string(), "b".to_string()]);
/// assert!(definition.defaults.contains_key("b"));
/// assert_eq!(definition.shape,
///            DefinitionShape::General { index_name: "n".into(),
///                                       stride:     2.0,
///                                       offset:     1.0, });
/// ```
pub fn analyze_definition_head(parameters: Option<&Expr>,
                               subscript: Option<&Expr>)
                               -> Result<ParametersDefinition, HeadError> {
    let (parameters, defaults) = match parameters {
        Some(list) => analyze_parameters(list)?,
        None => (Vec::new(), HashMap::new()),
    };
    let shape = match subscript {
        Some(index) => analyze_subscript(index)?,
        None => DefinitionShape::Simple,
    };
    Ok(ParametersDefinition { parameters,
                              defaults,
                              shape })
}

type Parameters = (Vec<String>, HashMap<String, Rc<Expr>>);

fn analyze_parameters(list: &Expr) -> Result<Parameters, HeadError> {
    let mut names: Vec<String> = Vec::new();
    let mut defaults = HashMap::new();

    for entry in list.argument_list() {
        let (name, default) = match entry {
            Expr::Assignment { target,
                               definition,
                               body, }
                if definition.shape == DefinitionShape::Simple && !definition.has_parameters() =>
            {
                let name = target.bare_name().ok_or(HeadError::ShapeMismatch)?;
                (name, Some(body))
            },
            other => (other.bare_name().ok_or(HeadError::ShapeMismatch)?, None),
        };

        if names.iter().any(|n| n == name) {
            return Err(HeadError::ShapeMismatch);
        }
        match default {
            Some(body) => {
                defaults.insert(name.to_string(), Rc::clone(body));
            },
            None if !defaults.is_empty() => {
                return Err(ParseError::ParameterAfterDefault { name: name.to_string() }.into());
            },
            None => {},
        }
        names.push(name.to_string());
    }
    Ok((names, defaults))
}

/// A subscript of the form `stride * name + offset`, or a constant when
/// `name` is `None`.
struct Affine {
    name:   Option<String>,
    stride: f64,
    offset: f64,
}

impl Affine {
    const fn constant(value: f64) -> Self {
        Self { name:   None,
               stride: 0.0,
               offset: value, }
    }

    fn scaled(self, factor: f64) -> Self {
        Self { name:   self.name,
               stride: self.stride * factor,
               offset: self.offset * factor, }
    }
}

fn analyze_subscript(index: &Expr) -> Result<DefinitionShape, HeadError> {
    let affine = affine_form(index).ok_or(HeadError::ShapeMismatch)?;
    match affine.name {
        None => Ok(DefinitionShape::Indexed { index: affine.offset }),
        Some(index_name) if affine.stride != 0.0 && affine.stride.is_finite() => {
            Ok(DefinitionShape::General { index_name,
                                          stride: affine.stride,
                                          offset: affine.offset })
        },
        Some(_) => Err(HeadError::ShapeMismatch),
    }
}

fn affine_form(expr: &Expr) -> Option<Affine> {
    match expr {
        Expr::Value(c) if c.is_real() => Some(Affine::constant(c.real)),
        Expr::UnaryOp { op: UnaryOperator::Negate,
                        expr, } => affine_form(expr).map(|a| a.scaled(-1.0)),
        Expr::BinaryOp { left, op, right } => {
            let left = affine_form(left)?;
            let right = affine_form(right)?;
            match op {
                BinaryOperator::Add => {
                    let name = match (left.name, right.name) {
                        (Some(l), Some(r)) if l != r => return None,
                        (l, r) => l.or(r),
                    };
                    Some(Affine { name,
                                  stride: left.stride + right.stride,
                                  offset: left.offset + right.offset })
                },
                BinaryOperator::Multiply => match (&left.name, &right.name) {
                    (None, _) => Some(right.scaled(left.offset)),
                    (_, None) => Some(left.scaled(right.offset)),
                    _ => None,
                },
                BinaryOperator::Divide if right.name.is_none() && right.offset != 0.0 => {
                    Some(left.scaled(right.offset.recip()))
                },
                _ => None,
            }
        },
        other => other.bare_name().map(|name| Affine { name:   Some(name.to_string()),
                                                       stride: 1.0,
                                                       offset: 0.0, }),
    }
}
