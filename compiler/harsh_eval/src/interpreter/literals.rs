//! Composite literals.

use harsh_ir::{ArrayType, FieldInitRange, NodeId, NodeRange, StructType};

use super::Interpreter;
use crate::defaults::{default_variant, filled, static_length};
use crate::{DefaultValueError, ExecContext, ExecError, Variant};

impl Interpreter<'_> {
    /// An array literal lists either no elements (all default) or exactly
    /// as many as the type's static length.
    pub(super) fn eval_array_literal(
        &self,
        id: NodeId,
        ty: &ArrayType,
        elements: NodeRange,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        let len = match static_length(self.arena, ty.len) {
            Ok(len) => len,
            Err(err @ DefaultValueError::LengthTooLarge(_)) => {
                ctx.push_error(ExecError::bounds(err.to_string(), id));
                return Variant::undefined();
            }
            Err(err) => {
                ctx.push_error(ExecError::type_error(err.to_string(), id));
                return Variant::undefined();
            }
        };

        let element_ids = self.arena.get_list(elements);
        if !element_ids.is_empty() && element_ids.len() != len {
            ctx.push_error(ExecError::bounds(
                format!(
                    "Literal used in array assignment does not match the size of the underlying array ({len} elements, got {})",
                    element_ids.len()
                ),
                id,
            ));
            return Variant::undefined();
        }

        let values = if element_ids.is_empty() {
            if len == 0 {
                Vec::new()
            } else {
                match default_variant(self.arena, &ty.elem).and_then(|zero| filled(zero, len)) {
                    Ok(elements) => elements,
                    Err(err @ DefaultValueError::LengthTooLarge(_)) => {
                        ctx.push_error(ExecError::bounds(err.to_string(), id));
                        return Variant::undefined();
                    }
                    Err(err) => {
                        ctx.push_error(ExecError::internal(
                            format!("Failed to create default array element of type {}: {err}", ty.elem),
                            id,
                        ));
                        return Variant::undefined();
                    }
                }
            }
        } else {
            element_ids.iter().map(|&e| self.eval(e, ctx)).collect()
        };

        Variant::list(ty.clone(), values)
    }

    /// Fields are filled in declaration order; those without an
    /// initializer take their default. Initializers naming no field are
    /// not evaluated.
    pub(super) fn eval_struct_literal(
        &self,
        id: NodeId,
        ty: &StructType,
        fields: FieldInitRange,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        let inits = self.arena.get_field_inits(fields);
        let mut values = Vec::with_capacity(ty.fields.len());

        for field in &ty.fields {
            let value = match inits.iter().find(|init| init.name == field.name) {
                Some(init) => self.eval(init.value, ctx),
                None => match default_variant(self.arena, &field.ty) {
                    Ok(zero) => zero,
                    Err(err) => {
                        ctx.push_error(ExecError::internal(
                            format!(
                                "Failed to create default value to populate field '{}' with type {}: {err}",
                                field.name, field.ty
                            ),
                            id,
                        ));
                        Variant::undefined()
                    }
                },
            };
            values.push((field.name.as_str(), value));
        }

        Variant::record(ty.clone(), values)
    }
}
