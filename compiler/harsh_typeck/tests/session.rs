//! Type checking declarations registered on a `Session`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use harsh_diagnostic::{Diagnostic, ErrorCode};
use harsh_eval::{CallError, Session, Variant};
use harsh_ir::{BinaryOp, FunctionType, NamedType, Node, NodeArena, TypeKind};
use harsh_typeck::{TypeErrorKind, TypecheckSession};
use pretty_assertions::assert_eq;

/// func add(a int, b int) int { return a + b }
/// func greet(name string) int { return "hi " + name }
fn session() -> Session {
    let mut arena = NodeArena::new();
    let a = arena.alloc(Node::var("a", TypeKind::Int));
    let b = arena.alloc(Node::var("b", TypeKind::Int));
    let sum = arena.alloc(Node::Binary {
        op: BinaryOp::Add,
        left: a,
        right: b,
    });
    let ret = arena.alloc(Node::Return(sum));
    let add_body = arena.block([ret]);
    let add = FunctionType::new(
        [NamedType::new("a", TypeKind::Int), NamedType::new("b", TypeKind::Int)],
        TypeKind::Int,
        add_body,
    );

    let hi = arena.alloc(Node::str("hi "));
    let name = arena.alloc(Node::var("name", TypeKind::Str));
    let concat = arena.alloc(Node::Binary {
        op: BinaryOp::Add,
        left: hi,
        right: name,
    });
    let ret = arena.alloc(Node::Return(concat));
    let greet_body = arena.block([ret]);
    let greet = FunctionType::new([NamedType::new("name", TypeKind::Str)], TypeKind::Int, greet_body);

    Session::builder(arena)
        .function("add", add)
        .function("greet", greet)
        .declaration("limit", TypeKind::Int)
        .build()
}

#[test]
fn well_typed_function_has_no_errors() {
    let session = session();
    assert_eq!(session.typecheck("add").unwrap(), vec![]);
}

#[test]
fn return_type_mismatch_is_reported() {
    let session = session();
    let errors = session.typecheck("greet").unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, TypeErrorKind::IncompatibleTypes);
    assert_eq!(Diagnostic::from(&errors[0]).code, ErrorCode::E2001);
}

#[test]
fn lookup_failures_match_call() {
    let session = session();
    assert!(matches!(
        session.typecheck("missing"),
        Err(CallError::FunctionNotFound(name)) if name == "missing"
    ));
    assert!(matches!(session.typecheck("limit"), Err(CallError::NotAFunction(_))));
}

#[test]
fn checking_does_not_execute() {
    let mut session = session();
    session.typecheck("add").unwrap();
    assert_eq!(
        session.call("add", [("a", 2_i64), ("b", 5_i64)]).unwrap(),
        Variant::int(7)
    );
}
