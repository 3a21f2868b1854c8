//! Tree-walking interpreter.
//!
//! [`Interpreter::eval`] executes one node against an [`ExecContext`] and
//! always returns a [`Variant`]. Program-level problems are appended to the
//! context's error list and evaluation continues with `undefined` in place
//! of the failed value, so one pass surfaces every independent problem.
//!
//! The only value that unwinds is a return: a variant carrying the return
//! flag stops the enclosing statement sequence and travels up to the call.

mod access;
mod assign;
mod call;
mod control;
mod literals;

use harsh_ir::{Node, NodeArena, NodeId};
use harsh_stack::ensure_sufficient_stack;

use crate::operators::{evaluate_binary, evaluate_unary, OperatorError};
use crate::{ExecContext, ExecError, Variant};

/// Evaluator over the nodes of one arena.
///
/// Holds no execution state of its own; everything mutable lives in the
/// [`ExecContext`] passed to each call.
#[derive(Copy, Clone, Debug)]
pub struct Interpreter<'a> {
    arena: &'a NodeArena,
    max_call_depth: Option<usize>,
}

impl<'a> Interpreter<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        Interpreter {
            arena,
            max_call_depth: None,
        }
    }

    /// Limit nested function calls. `None` leaves recursion bounded only by
    /// available memory.
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Evaluate a node.
    #[tracing::instrument(level = "trace", skip(self, ctx))]
    pub fn eval(&self, id: NodeId, ctx: &mut ExecContext<'_>) -> Variant {
        ensure_sufficient_stack(|| self.eval_inner(id, ctx))
    }

    fn eval_inner(&self, id: NodeId, ctx: &mut ExecContext<'_>) -> Variant {
        let Some(node) = self.arena.try_get(id) else {
            ctx.push_error(ExecError::invalid_ast(
                format!("node {id} does not exist in this program"),
                id,
            ));
            return Variant::undefined();
        };

        match node {
            // Literals
            Node::Int(n) => Variant::int(*n),
            Node::Str(s) => Variant::string(s.as_str()),
            Node::Bool(b) => Variant::bool(*b),
            Node::Nil => Variant::undefined(),
            Node::ArrayLit { ty, elements } => self.eval_array_literal(id, ty, *elements, ctx),
            Node::StructLit { ty, fields } => self.eval_struct_literal(id, ty, *fields, ctx),

            // Statements
            Node::Block(stmts) => self.eval_block(*stmts, ctx),
            Node::Return(expr) => self.eval(*expr, ctx).cleaned().into_return(),
            Node::If {
                init,
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(*init, *cond, *then_branch, *else_branch, ctx),
            Node::Assign {
                target,
                value,
                new_local,
            } => self.eval_assign(id, *target, *value, *new_local, ctx),

            // Expressions
            Node::Binary { op, left, right } => {
                let left = self.eval(*left, ctx);
                let right = self.eval(*right, ctx);
                operator_result(evaluate_binary(&left, &right, *op), id, ctx)
            }
            Node::Unary { op, operand } => {
                let operand = self.eval(*operand, ctx);
                operator_result(evaluate_unary(&operand, *op), id, ctx)
            }
            Node::Var { name, .. } => ctx
                .lookup(name)
                .cloned()
                .unwrap_or_else(Variant::unresolved),
            Node::Subscript { base, index } => self.eval_subscript(id, *base, *index, ctx),
            Node::Select { base, field } => self.eval_select(id, *base, field, ctx),
            Node::Call { callee, args } => self.eval_call(id, *callee, *args, ctx),
        }
    }
}

fn operator_result(
    result: Result<Variant, OperatorError>,
    id: NodeId,
    ctx: &mut ExecContext<'_>,
) -> Variant {
    result.unwrap_or_else(|err| {
        ctx.push_error(ExecError::new(err.kind(), err.to_string(), id));
        Variant::undefined()
    })
}
