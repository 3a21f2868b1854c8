//! Subscript and named selector reads.

use harsh_ir::{Kind, NodeId};

use super::Interpreter;
use crate::{ExecContext, ExecError, Variant};

impl Interpreter<'_> {
    /// `base[index]`: the element, or undefined plus one error.
    pub(super) fn eval_subscript(
        &self,
        id: NodeId,
        base: NodeId,
        index: NodeId,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        let base = self.eval(base, ctx);
        let index = self.eval(index, ctx);

        if base.is_unresolved() {
            ctx.push_error(ExecError::not_found(
                "Could not resolve a value/variable for subscript base",
                id,
            ));
            return Variant::undefined();
        }
        let Some(elements) = base.elements() else {
            ctx.push_error(ExecError::type_error(
                format!("Cannot perform subscript operation on type {}", base.ty()),
                id,
            ));
            return Variant::undefined();
        };
        let Some(i) = index.as_int() else {
            ctx.push_error(ExecError::type_error(
                format!("Subscript index must be int, got {}", index.ty()),
                id,
            ));
            return Variant::undefined();
        };

        match usize::try_from(i).ok().and_then(|i| elements.get(i)) {
            Some(element) => element.clone(),
            None => {
                ctx.push_error(ExecError::bounds(
                    format!("Subscript out of bounds: index {i}, length {}", elements.len()),
                    id,
                ));
                Variant::undefined()
            }
        }
    }

    /// `base.field`: the field's value, or undefined plus one error.
    pub(super) fn eval_select(
        &self,
        id: NodeId,
        base: NodeId,
        field: &str,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        let base = self.eval(base, ctx);

        if base.is_unresolved() {
            ctx.push_error(ExecError::not_found(
                "Could not resolve a value/variable for selector base",
                id,
            ));
            return Variant::undefined();
        }
        if base.kind() != Kind::Struct {
            ctx.push_error(ExecError::type_error(
                format!("Cannot select field {field} on type {}", base.ty()),
                id,
            ));
            return Variant::undefined();
        }
        match base.field(field) {
            Some(value) => value.clone(),
            None => {
                ctx.push_error(ExecError::not_found(format!("No field named {field}"), id));
                Variant::undefined()
            }
        }
    }
}
