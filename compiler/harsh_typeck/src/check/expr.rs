//! Operator type rules.

use harsh_ir::{BinaryOp, Kind, NodeId, TypeKind, UnaryOp};

use crate::{TypeChecker, TypecheckContext};

/// Whether `op` is defined for two operands of kind `kind`.
fn binary_op_allowed(kind: Kind, op: BinaryOp) -> bool {
    match kind {
        Kind::Int => op.is_arithmetic() || op == BinaryOp::Eq,
        Kind::Str => matches!(op, BinaryOp::Add | BinaryOp::Eq),
        Kind::Bool => op.is_logical() || op == BinaryOp::Eq,
        _ => false,
    }
}

pub fn check_binary(
    checker: &TypeChecker<'_>,
    id: NodeId,
    op: BinaryOp,
    left: NodeId,
    right: NodeId,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    let left_ty = checker.check(left, ctx);
    let right_ty = checker.check(right, ctx);
    if left_ty.is_unknown() || right_ty.is_unknown() {
        return TypeKind::Unknown;
    }

    if left_ty != right_ty {
        return ctx.incompatible(format!("Invalid types for operands: {left_ty} and {right_ty}"), id);
    }
    if !binary_op_allowed(left_ty.kind(), op) {
        return ctx.incompatible(
            format!("Invalid operation for {} operands: {op}", left_ty.kind()),
            id,
        );
    }

    match op {
        BinaryOp::Eq => TypeKind::Bool,
        _ => left_ty,
    }
}

pub fn check_unary(
    checker: &TypeChecker<'_>,
    id: NodeId,
    op: UnaryOp,
    operand: NodeId,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    let ty = checker.check(operand, ctx);
    match (op, &ty) {
        (_, TypeKind::Unknown) => TypeKind::Unknown,
        (UnaryOp::Not, TypeKind::Bool) => TypeKind::Bool,
        (UnaryOp::Not, _) => ctx.incompatible(format!("Invalid operation for {} operand: {op}", ty.kind()), id),
    }
}
