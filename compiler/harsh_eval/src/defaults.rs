//! Default-value synthesis and static length evaluation.
//!
//! A declared-but-uninitialized variable, and every field or element a
//! composite literal leaves out, takes its type's zero value:
//! `0`, `""`, `false`, `undefined`, records field by field, and arrays of
//! the statically evaluated length filled with the element's zero value.

use harsh_ir::{NodeArena, NodeId, TypeKind};

use crate::{DefaultValueError, ExecContext, Interpreter, Namespace, Value, Variant};

/// Most values a synthesized array may hold, nested elements included.
pub const MAX_ARRAY_LENGTH: usize = 1_048_576;

/// Evaluate an array length node with no variables in scope.
///
/// Any recorded error, an unresolved reference, a non-integer or a negative
/// result means the length is not static. Lengths above
/// [`MAX_ARRAY_LENGTH`] are rejected.
#[tracing::instrument(level = "trace", skip(arena))]
pub fn static_length(arena: &NodeArena, len: NodeId) -> Result<usize, DefaultValueError> {
    let mut locals = Namespace::new();
    let mut globals = Namespace::new();
    let mut ctx = ExecContext::new(&mut locals, &mut globals, false);
    let value = Interpreter::new(arena).eval(len, &mut ctx);

    if let Some(err) = ctx.errors.first() {
        return Err(DefaultValueError::LengthNotStatic(err.message.clone()));
    }
    if value.is_unresolved() {
        return Err(DefaultValueError::LengthNotStatic(
            "length refers to a variable".to_owned(),
        ));
    }
    let n = value
        .as_int()
        .ok_or(DefaultValueError::LengthNotInteger(value.kind()))?;
    let len = usize::try_from(n).map_err(|_| DefaultValueError::NegativeLength(n))?;
    if len > MAX_ARRAY_LENGTH {
        return Err(DefaultValueError::LengthTooLarge(len));
    }
    Ok(len)
}

/// `len` copies of `zero`, failing instead of aborting when the total
/// number of values is too large to allocate.
pub(crate) fn filled(zero: Variant, len: usize) -> Result<Vec<Variant>, DefaultValueError> {
    if len.saturating_mul(value_count(&zero)) > MAX_ARRAY_LENGTH {
        return Err(DefaultValueError::LengthTooLarge(len));
    }
    let mut elements = Vec::new();
    elements
        .try_reserve_exact(len)
        .map_err(|_| DefaultValueError::LengthTooLarge(len))?;
    elements.resize(len, zero);
    Ok(elements)
}

/// Number of values in `v`, counting itself and every nested element.
fn value_count(v: &Variant) -> usize {
    let nested = match v.value() {
        Value::List(items) => items.iter().map(value_count).fold(0, usize::saturating_add),
        Value::Record(fields) => fields.values().map(value_count).fold(0, usize::saturating_add),
        _ => 0,
    };
    nested.saturating_add(1)
}

/// Zero value of `ty`.
pub fn default_variant(arena: &NodeArena, ty: &TypeKind) -> Result<Variant, DefaultValueError> {
    harsh_stack::ensure_sufficient_stack(|| default_variant_inner(arena, ty))
}

fn default_variant_inner(arena: &NodeArena, ty: &TypeKind) -> Result<Variant, DefaultValueError> {
    match ty {
        TypeKind::Int => Ok(Variant::int(0)),
        TypeKind::Str => Ok(Variant::string("")),
        TypeKind::Bool => Ok(Variant::bool(false)),
        TypeKind::Undefined => Ok(Variant::undefined()),
        TypeKind::Array(array) => {
            let len = static_length(arena, array.len)?;
            let elements = if len == 0 {
                Vec::new()
            } else {
                filled(default_variant(arena, &array.elem)?, len)?
            };
            Ok(Variant::list(array.clone(), elements))
        }
        TypeKind::Struct(record) => {
            let fields = record
                .fields
                .iter()
                .map(|field| Ok((field.name.clone(), default_variant(arena, &field.ty)?)))
                .collect::<Result<Vec<_>, DefaultValueError>>()?;
            Ok(Variant::record(record.clone(), fields))
        }
        TypeKind::Function(_) | TypeKind::Unknown => Err(DefaultValueError::NoDefault(ty.kind())),
    }
}
