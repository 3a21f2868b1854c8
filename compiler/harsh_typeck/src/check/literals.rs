//! Composite literal type rules.

use harsh_eval::static_length;
use harsh_ir::{ArrayType, FieldInitRange, NodeId, NodeRange, StructType, TypeKind};

use crate::{TypeChecker, TypeErrorKind, TypecheckContext};

pub fn check_array_literal(
    checker: &TypeChecker<'_>,
    id: NodeId,
    ty: &ArrayType,
    elements: NodeRange,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    let before = ctx.errors.len();
    let elements = checker.arena().get_list(elements);

    for &element in elements {
        let element_ty = checker.check(element, ctx);
        if !element_ty.is_unknown() && element_ty != *ty.elem {
            ctx.incompatible(
                format!(
                    "Invalid array literal - cannot have value of type {element_ty} in array of {}",
                    ty.elem
                ),
                element,
            );
        }
    }

    match static_length(checker.arena(), ty.len) {
        Ok(len) if !elements.is_empty() && elements.len() != len => {
            ctx.report(
                TypeErrorKind::Bounds,
                format!(
                    "Invalid array literal - {} elements given for an array of length {len}",
                    elements.len()
                ),
                id,
            );
        }
        Ok(_) => {}
        Err(err) => {
            ctx.incompatible(format!("Invalid array literal - {err}"), ty.len);
        }
    }

    if ctx.errors.len() == before {
        TypeKind::Array(ty.clone())
    } else {
        TypeKind::Unknown
    }
}

pub fn check_struct_literal(
    checker: &TypeChecker<'_>,
    id: NodeId,
    ty: &StructType,
    fields: FieldInitRange,
    ctx: &mut TypecheckContext,
) -> TypeKind {
    let before = ctx.errors.len();

    for init in checker.arena().get_field_inits(fields) {
        let value_ty = checker.check(init.value, ctx);
        match ty.field(&init.name) {
            None => {
                ctx.report(
                    TypeErrorKind::NotFound,
                    format!("Invalid struct literal - no field named {}", init.name),
                    id,
                );
            }
            Some(field_ty) if !value_ty.is_unknown() && value_ty != *field_ty => {
                ctx.incompatible(
                    format!(
                        "Invalid struct literal - cannot have value of type {value_ty} when the field is typed {field_ty}"
                    ),
                    init.value,
                );
            }
            Some(_) => {}
        }
    }

    if ctx.errors.len() == before {
        TypeKind::Struct(ty.clone())
    } else {
        TypeKind::Unknown
    }
}
