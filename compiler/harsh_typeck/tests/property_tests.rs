//! Property-based tests for the type checker.
//!
//! Covers:
//! 1. Binary operators on equal scalar kinds check exactly when the operator
//!    is defined for that kind
//! 2. Mismatched scalar operands produce exactly one diagnostic
//! 3. A single bad leaf reports once however deep the tree above it is

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use harsh_ir::{BinaryOp, Node, NodeArena, NodeId, TypeKind};
use harsh_typeck::{TypeChecker, TypeError, TypecheckContext};
use proptest::prelude::*;

fn check(arena: &NodeArena, id: NodeId) -> (TypeKind, Vec<TypeError>) {
    let mut ctx = TypecheckContext::new();
    let ty = TypeChecker::new(arena).check(id, &mut ctx);
    (ty, ctx.errors)
}

// -- Strategies --

fn scalar_type_strategy() -> impl Strategy<Value = TypeKind> {
    prop_oneof![Just(TypeKind::Int), Just(TypeKind::Str), Just(TypeKind::Bool)]
}

fn op_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::Mod),
        Just(BinaryOp::And),
        Just(BinaryOp::Or),
        Just(BinaryOp::Eq),
    ]
}

fn literal_of(arena: &mut NodeArena, ty: &TypeKind) -> NodeId {
    match ty {
        TypeKind::Str => arena.alloc(Node::str("s")),
        TypeKind::Bool => arena.alloc(Node::Bool(true)),
        _ => arena.alloc(Node::Int(1)),
    }
}

fn defined_for(ty: &TypeKind, op: BinaryOp) -> bool {
    match ty {
        TypeKind::Int => !matches!(op, BinaryOp::And | BinaryOp::Or),
        TypeKind::Str => matches!(op, BinaryOp::Add | BinaryOp::Eq),
        _ => matches!(op, BinaryOp::And | BinaryOp::Or | BinaryOp::Eq),
    }
}

proptest! {
    #[test]
    fn operators_on_equal_kinds(ty in scalar_type_strategy(), op in op_strategy()) {
        let mut arena = NodeArena::new();
        let left = literal_of(&mut arena, &ty);
        let right = literal_of(&mut arena, &ty);
        let node = arena.alloc(Node::Binary { op, left, right });

        let (result, errors) = check(&arena, node);
        if defined_for(&ty, op) {
            prop_assert!(errors.is_empty());
            let expected = if op == BinaryOp::Eq { TypeKind::Bool } else { ty };
            prop_assert_eq!(result, expected);
        } else {
            prop_assert!(result.is_unknown());
            prop_assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn mismatched_operands_report_once(
        (left_ty, right_ty) in (scalar_type_strategy(), scalar_type_strategy())
            .prop_filter("distinct kinds", |(l, r)| l != r),
        op in op_strategy(),
    ) {
        let mut arena = NodeArena::new();
        let left = literal_of(&mut arena, &left_ty);
        let right = literal_of(&mut arena, &right_ty);
        let node = arena.alloc(Node::Binary { op, left, right });

        let (result, errors) = check(&arena, node);
        prop_assert!(result.is_unknown());
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].node, node);
    }

    #[test]
    fn bad_leaf_reports_once(depth in 0_usize..32) {
        let mut arena = NodeArena::new();
        let one = arena.alloc(Node::Int(1));
        let s = arena.alloc(Node::str("s"));
        let mut node = arena.alloc(Node::Binary { op: BinaryOp::Add, left: one, right: s });
        for _ in 0..depth {
            let rhs = arena.alloc(Node::Int(2));
            node = arena.alloc(Node::Binary { op: BinaryOp::Mul, left: node, right: rhs });
        }

        let (result, errors) = check(&arena, node);
        prop_assert!(result.is_unknown());
        prop_assert_eq!(errors.len(), 1);
    }
}
