//! Statement type rules.

use harsh_ir::{NodeId, TypeKind};

use crate::{TypeChecker, TypecheckContext};

/// Check a returned value against the enclosing function's return type.
pub fn check_return(checker: &TypeChecker<'_>, id: NodeId, expr: NodeId, ctx: &mut TypecheckContext) -> TypeKind {
    let ty = checker.check(expr, ctx);
    let Some(expected) = ctx.return_type.clone() else {
        return ty;
    };
    if ty.is_unknown() || expected.is_unknown() || ty == expected {
        return ty;
    }
    ctx.incompatible(
        format!("Returned value does not match return type {expected}. Got type {ty}"),
        id,
    )
}

pub fn check_if(
    checker: &TypeChecker<'_>,
    init: Option<NodeId>,
    cond: NodeId,
    then_branch: NodeId,
    else_branch: Option<NodeId>,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    if let Some(init) = init {
        checker.check(init, ctx);
    }

    let cond_ty = checker.check(cond, ctx);
    if !matches!(cond_ty, TypeKind::Bool | TypeKind::Unknown) {
        ctx.incompatible(format!("If condition must be bool - got type {cond_ty}"), cond);
    }

    checker.check(then_branch, ctx);
    if let Some(else_branch) = else_branch {
        checker.check(else_branch, ctx);
    }
    TypeKind::Undefined
}

/// The value is checked before the target.
pub fn check_assign(
    checker: &TypeChecker<'_>,
    id: NodeId,
    target: NodeId,
    value: NodeId,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    let value_ty = checker.check(value, ctx);
    let target_ty = checker.check(target, ctx);
    if value_ty.is_unknown() || target_ty.is_unknown() {
        return TypeKind::Unknown;
    }
    if value_ty != target_ty {
        return ctx.incompatible(
            format!("Cannot assign value of type {value_ty} to target of type {target_ty}"),
            id,
        );
    }
    target_ty
}
