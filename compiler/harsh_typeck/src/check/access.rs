//! Subscript and field selection.

use harsh_ir::{NodeId, TypeKind};

use crate::{TypeChecker, TypeErrorKind, TypecheckContext};

/// Yields the element type of the base array.
pub fn check_subscript(
    checker: &TypeChecker<'_>,
    id: NodeId,
    base: NodeId,
    index: NodeId,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    let index_ty = checker.check(index, ctx);
    if !matches!(index_ty, TypeKind::Int | TypeKind::Unknown) {
        ctx.incompatible(
            format!("Cannot subscript with non-integer index - got type: {index_ty}"),
            index,
        );
    }

    match checker.check(base, ctx) {
        TypeKind::Unknown => TypeKind::Unknown,
        TypeKind::Array(array) => *array.elem,
        other => ctx.incompatible(format!("Cannot subscript non-array type {other}"), id),
    }
}

pub fn check_select(
    checker: &TypeChecker<'_>,
    id: NodeId,
    base: NodeId,
    field: &str,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    match checker.check(base, ctx) {
        TypeKind::Unknown => TypeKind::Unknown,
        TypeKind::Struct(record) => match record.field(field) {
            Some(ty) => ty.clone(),
            None => ctx.report(TypeErrorKind::NotFound, format!("Cannot find sub-element {field}"), id),
        },
        other => ctx.incompatible(format!("Cannot select non-struct type {other}"), id),
    }
}
