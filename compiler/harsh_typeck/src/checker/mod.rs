//! Type checker entry points.

use harsh_eval::{CallError, Session};
use harsh_ir::{FunctionType, Node, NodeArena, NodeId, TypeKind};
use harsh_stack::ensure_sufficient_stack;

use crate::check;
use crate::{TypeError, TypeErrorKind};

/// State carried through one checking walk.
#[derive(Clone, Debug, Default)]
pub struct TypecheckContext {
    pub errors: Vec<TypeError>,
    /// Declared return type of the enclosing function, if known.
    pub return_type: Option<TypeKind>,
}

impl TypecheckContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_return_type(return_type: TypeKind) -> Self {
        TypecheckContext {
            errors: Vec::new(),
            return_type: Some(return_type),
        }
    }

    /// Record an error and yield the unknown type for the failed node.
    pub(crate) fn report(&mut self, kind: TypeErrorKind, message: impl Into<String>, node: NodeId) -> TypeKind {
        self.errors.push(TypeError::new(kind, message, node));
        TypeKind::Unknown
    }

    pub(crate) fn incompatible(&mut self, message: impl Into<String>, node: NodeId) -> TypeKind {
        self.report(TypeErrorKind::IncompatibleTypes, message, node)
    }
}

/// Checker over the nodes of one arena.
#[derive(Copy, Clone, Debug)]
pub struct TypeChecker<'a> {
    arena: &'a NodeArena,
}

impl<'a> TypeChecker<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        TypeChecker { arena }
    }

    #[inline]
    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    /// Type the node would have if executed.
    #[tracing::instrument(level = "trace", skip(self, ctx))]
    pub fn check(&self, id: NodeId, ctx: &mut TypecheckContext) -> TypeKind {
        ensure_sufficient_stack(|| self.check_inner(id, ctx))
    }

    fn check_inner(&self, id: NodeId, ctx: &mut TypecheckContext) -> TypeKind {
        let Some(node) = self.arena.try_get(id) else {
            return ctx.report(
                TypeErrorKind::Internal,
                format!("Cannot typecheck missing node {id}"),
                id,
            );
        };

        match node {
            Node::Int(_) => TypeKind::Int,
            Node::Str(_) => TypeKind::Str,
            Node::Bool(_) => TypeKind::Bool,
            Node::Nil => TypeKind::Unknown,
            Node::ArrayLit { ty, elements } => check::check_array_literal(self, id, ty, *elements, ctx),
            Node::StructLit { ty, fields } => check::check_struct_literal(self, id, ty, *fields, ctx),

            Node::Block(stmts) => {
                for &stmt in self.arena.get_list(*stmts) {
                    self.check(stmt, ctx);
                }
                TypeKind::Undefined
            }
            Node::Return(expr) => check::check_return(self, id, *expr, ctx),
            Node::If {
                init,
                cond,
                then_branch,
                else_branch,
            } => check::check_if(self, *init, *cond, *then_branch, *else_branch, ctx),
            Node::Assign { target, value, .. } => check::check_assign(self, id, *target, *value, ctx),

            Node::Binary { op, left, right } => check::check_binary(self, id, *op, *left, *right, ctx),
            Node::Unary { op, operand } => check::check_unary(self, id, *op, *operand, ctx),
            Node::Var { name, ty } => {
                if ty.is_unknown() {
                    ctx.report(
                        TypeErrorKind::Internal,
                        format!("Variable reference {name} has no resolved type"),
                        id,
                    )
                } else {
                    ty.clone()
                }
            }
            Node::Subscript { base, index } => check::check_subscript(self, id, *base, *index, ctx),
            Node::Select { base, field } => check::check_select(self, id, *base, field, ctx),
            Node::Call { callee, args } => check::check_call(self, id, *callee, *args, ctx),
        }
    }
}

/// Check a function body against its declared signature.
pub fn check_function(arena: &NodeArena, function: &FunctionType) -> Vec<TypeError> {
    let mut ctx = TypecheckContext::with_return_type((*function.ret).clone());
    TypeChecker::new(arena).check(function.body, &mut ctx);
    ctx.errors
}

/// Type checking over a [`Session`]'s declarations.
pub trait TypecheckSession {
    /// Check the declared function `name`. Lookup failures use the same
    /// errors as a call would.
    fn typecheck(&self, name: &str) -> Result<Vec<TypeError>, CallError>;
}

impl TypecheckSession for Session {
    #[tracing::instrument(level = "debug", skip(self))]
    fn typecheck(&self, name: &str) -> Result<Vec<TypeError>, CallError> {
        let declaration = self
            .declaration(name)
            .ok_or_else(|| CallError::FunctionNotFound(name.to_owned()))?;
        let function = declaration
            .as_function()
            .ok_or_else(|| CallError::NotAFunction(name.to_owned()))?;
        let errors = check_function(self.arena(), function);
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "type errors found");
        }
        Ok(errors)
    }
}
