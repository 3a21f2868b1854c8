//! Statement sequences and conditionals.

use harsh_ir::{NodeId, NodeRange};

use super::Interpreter;
use crate::{ExecContext, ExecError, Variant};

impl Interpreter<'_> {
    /// Run statements in order until one yields a return.
    ///
    /// The sequence runs in a nested context: same namespaces, not a call
    /// frame. Its errors are folded into the caller's on the way out.
    pub(super) fn eval_block(&self, stmts: NodeRange, ctx: &mut ExecContext<'_>) -> Variant {
        let mut nested = ctx.nested();
        let mut result = Variant::undefined();
        for &stmt in self.arena.get_list(stmts) {
            let value = self.eval(stmt, &mut nested);
            if value.is_return() {
                result = value;
                break;
            }
        }
        let errors = nested.errors;
        ctx.absorb(errors);
        result
    }

    /// `if init; cond { then } else { else }`.
    ///
    /// The init statement shares the context, so its writes are visible to
    /// the condition and both branches. A non-bool condition runs neither
    /// branch.
    pub(super) fn eval_if(
        &self,
        init: Option<NodeId>,
        cond: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        if let Some(init) = init {
            self.eval(init, ctx);
        }

        let condition = self.eval(cond, ctx);
        match (condition.as_bool(), else_branch) {
            (Some(true), _) => self.eval(then_branch, ctx),
            (Some(false), Some(else_branch)) => self.eval(else_branch, ctx),
            (Some(false), None) => Variant::undefined(),
            (None, _) => {
                ctx.push_error(ExecError::type_error(
                    format!("if condition must be bool, got {}", condition.ty()),
                    cond,
                ));
                Variant::undefined()
            }
        }
    }
}
