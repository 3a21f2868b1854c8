//! Function call type rules.

use harsh_ir::{NodeId, NodeRange, TypeKind};

use crate::{TypeChecker, TypecheckContext};

/// Check arity and each argument against the callee's parameters. Yields the
/// callee's return type.
pub fn check_call(
    checker: &TypeChecker<'_>,
    id: NodeId,
    callee: NodeId,
    args: NodeRange,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    let callee_ty = checker.check(callee, ctx);
    let arg_ids = checker.arena().get_list(args);
    let arg_types: Vec<TypeKind> = arg_ids.iter().map(|&arg| checker.check(arg, ctx)).collect();

    let function = match &callee_ty {
        TypeKind::Unknown => return TypeKind::Unknown,
        TypeKind::Function(function) => function,
        other => return ctx.incompatible(format!("Cannot perform function invocation on type {other}"), id),
    };

    if function.arity() != arg_types.len() {
        return ctx.incompatible(
            format!(
                "Wrong number of arguments: function takes {} but was called with {}",
                function.arity(),
                arg_types.len()
            ),
            id,
        );
    }

    for ((param, arg_ty), &arg) in function.params.iter().zip(&arg_types).zip(arg_ids) {
        if !arg_ty.is_unknown() && *arg_ty != param.ty {
            ctx.incompatible(
                format!(
                    "Parameter type mismatch: parameter has type {} but was called with {arg_ty}",
                    param.ty
                ),
                arg,
            );
        }
    }

    (*function.ret).clone()
}
