use std::{collections::HashMap, rc::Rc};

use crate::interpreter::value::complex::ComplexNumber;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// The tree is built once by the parser and never mutated afterwards. Bodies of
/// definitions are shared through `Rc` so the workspace can keep them alive
/// after the tree that introduced them is gone.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Value(ComplexNumber),
    /// A plain name, used as the target of a simple assignment and as a
    /// parameter name inside a definition head.
    VariableReference(String),
    /// A definition such as `x = 2`, `f(a, b = 1) = a + b` or `u_n = 2 * u_(n-1)`.
    Assignment {
        /// Either a `VariableReference` or a `FunctionCall` naming the target.
        target:     Box<Self>,
        /// Shape of the definition derived from the target's parameters and
        /// subscript.
        definition: Rc<ParametersDefinition>,
        /// Right-hand side, evaluated lazily on every use.
        body:       Rc<Self>,
    },
    /// Use of a name, with an optional argument list and an optional index:
    /// `x`, `f(1, 2)`, `u_3`, `g(2)_(n+1)`.
    FunctionCall {
        /// The name being referenced.
        name:      String,
        /// Arguments as parsed; a matrix of rows, flattened on call.
        arguments: Option<Box<Self>>,
        /// The index expression following `_`.
        subscript: Option<Box<Self>>,
    },
    /// A unary operation (negation or factorial).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Matrix literal or argument list: rows of element expressions.
    Matrix(Vec<Vec<Self>>),
}

impl Expr {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Returns the name of a `VariableReference`, or of a `FunctionCall`
    /// without arguments and subscript.
    ///
    /// ## Example
    /// ```
    /// use seqcalc::ast::Expr;
    ///
    /// let x = Expr::FunctionCall { name:      "x".to_string(),
    ///                              arguments: None,
    ///                              subscript: None, };
    /// assert_eq!(x.bare_name(), Some("x"));
    /// assert_eq!(Expr::Value(1.0.into()).bare_name(), None);
    /// ```
    #[must_use]
    pub fn bare_name(&self) -> Option<&str> {
        match self {
            Self::VariableReference(name)
            | Self::FunctionCall { name,
                                   arguments: None,
                                   subscript: None, } => Some(name),
            _ => None,
        }
    }

    /// Returns the name an assignment target refers to.
    #[must_use]
    pub fn target_name(&self) -> Option<&str> {
        match self {
            Self::VariableReference(name) | Self::FunctionCall { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Flattens a parsed argument list into the positional argument
    /// expressions, row by row.
    #[must_use]
    pub fn argument_list(&self) -> Vec<&Self> {
        match self {
            Self::Matrix(rows) => rows.iter().flatten().collect(),
            other => vec![other],
        }
    }
}

/// Shape of a stored definition, decided from the target's subscript.
///
/// The three shapes are mutually exclusive: a name may hold one simple
/// definition, any number of indexed ones and one general formula.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionShape {
    /// No subscript: `x = 3`, `f(a) = a^2`.
    Simple,
    /// Bound to one explicit index: `u_0 = 1`.
    Indexed {
        /// The index the definition answers for.
        index: f64,
    },
    /// A formula in a running index: `u_n = ...`, `v_(2*n+1) = ...`.
    ///
    /// A call at index `k` binds `index_name` to `(k - offset) / stride`.
    General {
        /// Name bound to the running index while the body is evaluated.
        index_name: String,
        /// Multiplier of the index variable in the subscript; never zero.
        stride:     f64,
        /// Constant term of the subscript.
        offset:     f64,
    },
}

/// Describes what a stored definition looks like: its parameters, their
/// defaults and its index shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametersDefinition {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// Default expressions of the trailing defaulted parameters.
    pub defaults:   HashMap<String, Rc<Expr>>,
    /// Index shape.
    pub shape:      DefinitionShape,
}

impl Default for ParametersDefinition {
    fn default() -> Self {
        Self { parameters: Vec::new(),
               defaults:   HashMap::new(),
               shape:      DefinitionShape::Simple, }
    }
}

impl ParametersDefinition {
    /// Creates a definition with no parameters and the given shape.
    #[must_use]
    pub fn with_shape(shape: DefinitionShape) -> Self {
        Self { shape,
               ..Self::default() }
    }

    /// The stride of a general definition, `0` for the other shapes.
    ///
    /// ```
    /// use seqcalc::ast::{DefinitionShape, ParametersDefinition};
    ///
    /// let general = ParametersDefinition::with_shape(DefinitionShape::General {
    ///     index_name: "n".into(),
    ///     stride: 2.0,
    ///     offset: 1.0,
    /// });
    /// assert_eq!((general.a(), general.b()), (2.0, 1.0));
    ///
    /// let indexed = ParametersDefinition::with_shape(DefinitionShape::Indexed { index: 3.0 });
    /// assert_eq!((indexed.a(), indexed.b()), (0.0, 3.0));
    /// ```
    #[must_use]
    pub const fn a(&self) -> f64 {
        match self.shape {
            DefinitionShape::General { stride, .. } => stride,
            _ => 0.0,
        }
    }

    /// The explicit index of an indexed definition, the offset of a general
    /// one, `0` for a simple one.
    #[must_use]
    pub const fn b(&self) -> f64 {
        match self.shape {
            DefinitionShape::Indexed { index } => index,
            DefinitionShape::General { offset, .. } => offset,
            DefinitionShape::Simple => 0.0,
        }
    }

    /// Name of the running index of a general definition.
    #[must_use]
    pub fn index_name(&self) -> Option<&str> {
        match &self.shape {
            DefinitionShape::General { index_name, .. } => Some(index_name),
            _ => None,
        }
    }

    /// Returns `true` if the definition declares parameters.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

/// Represents a binary operator.
///
/// Subtraction has no operator of its own: `a - b` is parsed as
/// `a + (-b)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`^`)
    Power,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Factorial, written `!x` or `x!`.
    Factorial,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        };
        write!(f, "{operator}")
    }
}
