//! Program tree nodes.
//!
//! Every construct the engine executes is one variant of [`Node`]. Children
//! are [`NodeId`]s into the owning [`NodeArena`](crate::NodeArena); lists of
//! children are ranges into its flattened storage.
//!
//! The front end is responsible for attaching resolved types: literals of
//! composite type carry their declared type, and every variable reference
//! carries the type of the variable it names.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use crate::types::{ArrayType, StructType, TypeKind};
use crate::{FieldInitRange, NodeId, NodeRange};

/// A program tree node.
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    // Literals
    /// Integer literal.
    Int(i64),
    /// String literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// The nil literal, evaluating to `undefined`.
    Nil,
    /// Array literal of a statically sized array type.
    ///
    /// `elements` is either empty (every slot defaults) or exactly as long as
    /// the type's length.
    ArrayLit { ty: ArrayType, elements: NodeRange },
    /// Record literal; fields absent from `fields` take their default value.
    StructLit { ty: StructType, fields: FieldInitRange },

    // Statements
    /// Statement sequence, executed in order until a `Return` fires.
    Block(NodeRange),
    /// Return the value of the expression from the enclosing function.
    Return(NodeId),
    /// Conditional with optional init statement and optional else branch.
    If {
        init: Option<NodeId>,
        cond: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },
    /// Store `value` into `target`.
    ///
    /// `new_local` marks a declaration (`x := v`, `var x T`), which always
    /// binds in the function-local namespace.
    Assign {
        target: NodeId,
        value: NodeId,
        new_local: bool,
    },

    // Expressions
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    Unary {
        op: UnaryOp,
        operand: NodeId,
    },
    /// Variable reference. `ty` is the variable's resolved type, or
    /// `TypeKind::Unknown` if the front end could not resolve it.
    Var { name: String, ty: TypeKind },
    /// Array element access: `base[index]`.
    Subscript { base: NodeId, index: NodeId },
    /// Record field access: `base.field`.
    Select { base: NodeId, field: String },
    /// Function call with positional arguments.
    Call { callee: NodeId, args: NodeRange },
}

impl Node {
    /// Variable reference node.
    pub fn var(name: impl Into<String>, ty: TypeKind) -> Self {
        Node::Var {
            name: name.into(),
            ty,
        }
    }

    pub fn str(value: impl Into<String>) -> Self {
        Node::Str(value.into())
    }

    /// Short name of the variant, for diagnostics and tracing.
    pub const fn describe(&self) -> &'static str {
        match self {
            Node::Int(_) => "integer literal",
            Node::Str(_) => "string literal",
            Node::Bool(_) => "bool literal",
            Node::Nil => "nil literal",
            Node::ArrayLit { .. } => "array literal",
            Node::StructLit { .. } => "struct literal",
            Node::Block(_) => "statement list",
            Node::Return(_) => "return statement",
            Node::If { .. } => "if statement",
            Node::Assign { .. } => "assignment",
            Node::Binary { .. } => "binary operation",
            Node::Unary { .. } => "unary operation",
            Node::Var { .. } => "variable reference",
            Node::Subscript { .. } => "subscript",
            Node::Select { .. } => "named selector",
            Node::Call { .. } => "function call",
        }
    }
}

/// One explicitly initialized field of a record literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldInit {
    pub name: String,
    pub value: NodeId,
}

impl FieldInit {
    pub fn new(name: impl Into<String>, value: NodeId) -> Self {
        FieldInit {
            name: name.into(),
            value,
        }
    }
}
