use std::rc::Rc;

use pretty_assertions::assert_eq;
use seqcalc::{
    ast::{DefinitionShape, Expr, ParametersDefinition},
    error::RuntimeError,
    interpreter::{
        reference::{ParametersCall, Reference},
        workspace::Workspace,
    },
};

fn constant(value: f64) -> Rc<Expr> {
    Rc::new(Expr::Value(value.into()))
}

fn shaped(shape: DefinitionShape) -> Rc<ParametersDefinition> {
    Rc::new(ParametersDefinition::with_shape(shape))
}

fn general(stride: f64, offset: f64) -> DefinitionShape {
    DefinitionShape::General { index_name: "n".into(),
                               stride,
                               offset }
}

fn body_of(reference: &Reference, call: &ParametersCall) -> Option<Expr> {
    reference.resolve(call)
             .map(|r| r.expression.body.as_ref().clone())
}

#[test]
fn indexed_wins_over_general_and_single() {
    let mut u = Reference::new("u");
    u.add_expression("u", shaped(DefinitionShape::Simple), constant(1.0))
     .unwrap();
    u.add_expression("u", shaped(general(1.0, 0.0)), constant(2.0))
     .unwrap();
    u.add_expression("u", shaped(DefinitionShape::Indexed { index: 3.0 }), constant(3.0))
     .unwrap();

    assert_eq!(body_of(&u, &ParametersCall::at_index(3.0)), Some(Expr::Value(3.0.into())));
    assert_eq!(body_of(&u, &ParametersCall::at_index(4.0)), Some(Expr::Value(2.0.into())));
    assert_eq!(body_of(&u, &ParametersCall::bare()), Some(Expr::Value(1.0.into())));
}

#[test]
fn scale_forces_the_general_formula() {
    let mut u = Reference::new("u");
    u.add_expression("u", shaped(DefinitionShape::Indexed { index: 4.0 }), constant(3.0))
     .unwrap();
    u.add_expression("u", shaped(general(2.0, 1.0)), constant(2.0))
     .unwrap();

    let call = ParametersCall { a: Some(3.0),
                                b: Some(4.0),
                                arguments: Vec::new() };
    let resolved = u.resolve(&call).unwrap();
    assert_eq!(resolved.index, Some(("n", 4.5)));

    let scaled_only = ParametersCall { a: Some(2.0),
                                       ..ParametersCall::default() };
    assert_eq!(u.resolve(&scaled_only).unwrap().index, Some(("n", -1.0)));
}

#[test]
fn missing_shapes_do_not_resolve() {
    let mut u = Reference::new("u");
    assert!(u.is_empty());
    assert!(u.resolve(&ParametersCall::bare()).is_none());

    u.add_expression("u", shaped(DefinitionShape::Indexed { index: 0.0 }), constant(1.0))
     .unwrap();
    assert!(u.resolve(&ParametersCall::at_index(1.0)).is_none());
    assert!(u.resolve(&ParametersCall::bare()).is_none());
}

#[test]
fn redefinition_replaces_the_same_shape() {
    let mut x = Reference::new("x");
    x.add_expression("x", shaped(DefinitionShape::Simple), constant(1.0))
     .unwrap();
    x.add_expression("x", shaped(DefinitionShape::Simple), constant(2.0))
     .unwrap();
    x.add_expression("x", shaped(DefinitionShape::Indexed { index: 1.0 }), constant(5.0))
     .unwrap();
    x.add_expression("x", shaped(DefinitionShape::Indexed { index: 1.0 }), constant(6.0))
     .unwrap();

    assert_eq!(x.single().map(|d| d.body.as_ref().clone()), Some(Expr::Value(2.0.into())));
    assert_eq!(x.indices().collect::<Vec<_>>(), vec![1.0]);
    assert_eq!(x.indexed(1.0).map(|d| d.body.as_ref().clone()),
               Some(Expr::Value(6.0.into())));
    assert!(x.general().is_none());
}

#[test]
fn foreign_names_are_rejected() {
    let mut x = Reference::new("x");
    let err = x.add_expression("y", shaped(DefinitionShape::Simple), constant(1.0))
               .unwrap_err();
    assert_eq!(err,
               RuntimeError::InternalConsistency { expected: "x".into(),
                                                   found:    "y".into(), });
    assert!(x.is_empty());
}

#[test]
fn workspace_groups_definitions_by_name() {
    let mut workspace = Workspace::new();
    workspace.add_expression("u", shaped(DefinitionShape::Indexed { index: 0.0 }), constant(1.0))
             .unwrap();
    workspace.add_expression("u", shaped(general(1.0, 1.0)), constant(2.0))
             .unwrap();
    workspace.add_expression("a", shaped(DefinitionShape::Simple), constant(3.0))
             .unwrap();

    let u = workspace.reference("u").unwrap();
    assert_eq!(u.name(), "u");
    assert_eq!(u.indices().collect::<Vec<_>>(), vec![0.0]);
    assert!(u.general().is_some());
    assert_eq!(workspace.names(), vec!["a", "u"]);
    assert_eq!(workspace.len(), 2);

    workspace.remove("a");
    assert!(!workspace.contains("a"));
    assert!(workspace.reference("a").is_none());
}
