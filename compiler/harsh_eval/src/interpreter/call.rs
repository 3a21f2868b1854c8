//! Function calls.

use harsh_ir::{FunctionType, NodeId, NodeRange};

use super::Interpreter;
use crate::{ExecContext, ExecError, Namespace, Variant};

impl Interpreter<'_> {
    pub(super) fn eval_call(
        &self,
        id: NodeId,
        callee: NodeId,
        args: NodeRange,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        let callee = self.eval(callee, ctx);
        if callee.is_unresolved() {
            ctx.push_error(ExecError::not_found("Could not resolve function for call", id));
            return Variant::undefined();
        }
        let Some(function) = callee.ty().as_function() else {
            ctx.push_error(ExecError::type_error(
                format!("Cannot call value of type {}", callee.ty()),
                id,
            ));
            return Variant::undefined();
        };

        let arg_ids = self.arena.get_list(args);
        if arg_ids.len() != function.arity() {
            tracing::warn!(
                node = %id,
                expected = function.arity(),
                got = arg_ids.len(),
                "call with wrong number of arguments"
            );
            ctx.push_error(ExecError::invalid_ast(
                format!(
                    "function {} expects {} arguments, got {}",
                    callee.ty(),
                    function.arity(),
                    arg_ids.len()
                ),
                id,
            ));
            return Variant::undefined();
        }

        // Arguments are evaluated in the caller's frame.
        let values: Vec<Variant> = arg_ids.iter().map(|&arg| self.eval(arg, ctx)).collect();
        let mut locals: Namespace = function
            .params
            .iter()
            .zip(values)
            .map(|(param, value)| (param.name.as_str(), value))
            .collect();

        self.call_function(id, function, &mut locals, ctx)
    }

    /// Run `function`'s body in a new frame over `locals` and the caller's
    /// globals. The frame's errors join the caller's; the return flag is
    /// stripped from the result.
    fn call_function(
        &self,
        id: NodeId,
        function: &FunctionType,
        locals: &mut Namespace,
        ctx: &mut ExecContext<'_>,
    ) -> Variant {
        if let Some(max) = self.max_call_depth {
            if ctx.depth() >= max {
                ctx.push_error(ExecError::internal(
                    format!("maximum call depth of {max} exceeded"),
                    id,
                ));
                return Variant::undefined();
            }
        }

        let mut frame = ctx.call_frame(locals);
        let result = self.eval(function.body, &mut frame);
        let errors = frame.errors;
        ctx.absorb(errors);
        result.cleaned()
    }
}
