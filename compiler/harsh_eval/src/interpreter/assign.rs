//! Assignment.
//!
//! A plain variable target picks its scope from the assignment flags and
//! current occupancy. A composite target (`a[i]`, `r.f`, or any chain of
//! them) is resolved into a [`Place`]: the root variable plus the index and
//! field steps leading to the slot. The write is then a single navigation
//! from the root followed by an overwrite.

use harsh_ir::{Kind, Node, NodeId};
use smallvec::SmallVec;

use super::Interpreter;
use crate::{ExecContext, ExecError, Namespace, Variant};

/// Which namespace holds a place's root variable.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Scope {
    Local,
    Global,
}

#[derive(Clone, Debug)]
enum Step {
    Index { index: i64, node: NodeId },
    Field { name: String, node: NodeId },
}

/// An addressable slot inside a variable.
#[derive(Clone, Debug)]
struct Place {
    scope: Scope,
    name: String,
    steps: SmallVec<[Step; 4]>,
}

impl Interpreter<'_> {
    pub(super) fn eval_assign(
        &self,
        id: NodeId,
        target: NodeId,
        value: NodeId,
        new_local: bool,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        match self.arena.try_get(target) {
            Some(Node::Var { name, .. }) => {
                let value = self.eval(value, ctx);
                match assignment_scope(name, new_local, &value, ctx) {
                    Scope::Local => ctx.locals.save(name.as_str(), value),
                    Scope::Global => ctx.globals.save(name.as_str(), value),
                }
            }
            Some(Node::Subscript { .. } | Node::Select { .. }) => {
                let place = self.resolve_place(target, ctx);
                let value = self.eval(value, ctx);
                match place.and_then(|place| write_place(&place, value, ctx)) {
                    Ok(()) => {}
                    Err(err) => ctx.push_error(err),
                }
            }
            Some(other) => {
                tracing::warn!(node = %target, kind = other.describe(), "assignment to non-addressable target");
                ctx.push_error(ExecError::not_supported(
                    format!("Cannot assign to {}", other.describe()),
                    id,
                ));
            }
            None => {
                ctx.push_error(ExecError::invalid_ast(
                    format!("assignment target {target} does not exist"),
                    id,
                ));
            }
        }
        Variant::undefined()
    }

    /// Walk a target expression down to its root variable, evaluating
    /// index expressions on the way.
    fn resolve_place(&self, id: NodeId, ctx: &mut ExecContext<'_>) -> Result<Place, ExecError> {
        match self.arena.try_get(id) {
            Some(Node::Var { name, .. }) => {
                let scope = if ctx.locals.contains(name) {
                    Scope::Local
                } else if ctx.globals.contains(name) {
                    Scope::Global
                } else {
                    return Err(ExecError::not_found(
                        format!("Could not resolve variable {name}"),
                        id,
                    ));
                };
                Ok(Place {
                    scope,
                    name: name.clone(),
                    steps: SmallVec::new(),
                })
            }
            Some(Node::Subscript { base, index }) => {
                let mut place = self.resolve_place(*base, ctx)?;
                let index_value = self.eval(*index, ctx);
                let Some(index) = index_value.as_int() else {
                    return Err(ExecError::type_error(
                        format!("Subscript index must be int, got {}", index_value.ty()),
                        id,
                    ));
                };
                place.steps.push(Step::Index { index, node: id });
                Ok(place)
            }
            Some(Node::Select { base, field }) => {
                let mut place = self.resolve_place(*base, ctx)?;
                place.steps.push(Step::Field {
                    name: field.clone(),
                    node: id,
                });
                Ok(place)
            }
            Some(other) => {
                tracing::warn!(node = %id, kind = other.describe(), "assignment through non-addressable base");
                Err(ExecError::not_supported(
                    format!("Cannot assign through {}", other.describe()),
                    id,
                ))
            }
            None => Err(ExecError::invalid_ast(
                format!("node {id} does not exist in this program"),
                id,
            )),
        }
    }
}

/// Scope a plain variable assignment writes to.
///
/// Declarations and values that came from a failed lookup always bind
/// locally. Otherwise the first match wins: a local inside a function body,
/// an existing global, then the frame's own scope.
fn assignment_scope(name: &str, new_local: bool, value: &Variant, ctx: &ExecContext<'_>) -> Scope {
    if new_local || value.is_unresolved() || (ctx.is_function && ctx.locals.contains(name)) {
        Scope::Local
    } else if ctx.globals.contains(name) {
        Scope::Global
    } else if ctx.is_function {
        Scope::Local
    } else {
        Scope::Global
    }
}

fn write_place(place: &Place, value: Variant, ctx: &mut ExecContext<'_>) -> Result<(), ExecError> {
    let namespace: &mut Namespace = match place.scope {
        Scope::Local => &mut *ctx.locals,
        Scope::Global => &mut *ctx.globals,
    };
    let slot = navigate(namespace, place)?;
    *slot = value.cleaned();
    Ok(())
}

fn navigate<'n>(namespace: &'n mut Namespace, place: &Place) -> Result<&'n mut Variant, ExecError> {
    let root_node = place.steps.first().map_or(NodeId::INVALID, |step| match step {
        Step::Index { node, .. } | Step::Field { node, .. } => *node,
    });
    let mut slot = namespace.get_mut(&place.name).ok_or_else(|| {
        ExecError::not_found(format!("Could not resolve variable {}", place.name), root_node)
    })?;

    for step in &place.steps {
        slot = match step {
            Step::Index { index, node } => {
                let len = slot.elements().map(<[Variant]>::len);
                let Some(len) = len else {
                    return Err(ExecError::type_error(
                        format!("Cannot perform subscript operation on type {}", slot.ty()),
                        *node,
                    ));
                };
                let position = usize::try_from(*index).ok().filter(|i| *i < len);
                match (position, slot.elements_mut()) {
                    (Some(i), Some(items)) => &mut items[i],
                    _ => {
                        return Err(ExecError::bounds(
                            format!("Subscript out of bounds: index {index}, length {len}"),
                            *node,
                        ))
                    }
                }
            }
            Step::Field { name, node } => {
                if slot.kind() != Kind::Struct {
                    return Err(ExecError::type_error(
                        format!("Cannot select field {name} on type {}", slot.ty()),
                        *node,
                    ));
                }
                match slot.field_mut(name) {
                    Some(field) => field,
                    None => return Err(ExecError::not_found(format!("No field named {name}"), *node)),
                }
            }
        };
    }
    Ok(slot)
}
