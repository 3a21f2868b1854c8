//! Type check errors.

use std::fmt;

use harsh_diagnostic::{Diagnostic, ErrorCode};
use harsh_ir::NodeId;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeErrorKind {
    /// A checker invariant was violated, usually a malformed tree.
    Internal,
    /// Operands, operators or values whose types do not combine.
    IncompatibleTypes,
    /// A named sub element that does not exist.
    NotFound,
    /// An array literal whose length disagrees with its type.
    Bounds,
}

impl TypeErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            TypeErrorKind::IncompatibleTypes => ErrorCode::E2001,
            TypeErrorKind::NotFound => ErrorCode::E2002,
            TypeErrorKind::Bounds => ErrorCode::E2003,
            TypeErrorKind::Internal => ErrorCode::E9001,
        }
    }
}

impl fmt::Display for TypeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeErrorKind::Internal => "internal",
            TypeErrorKind::IncompatibleTypes => "incompatible types",
            TypeErrorKind::NotFound => "not found",
            TypeErrorKind::Bounds => "bounds",
        })
    }
}

/// A problem found during type checking.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("{message}")]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub message: String,
    pub node: NodeId,
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, message: impl Into<String>, node: NodeId) -> Self {
        TypeError {
            kind,
            message: message.into(),
            node,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind.code(), self.message.clone(), self.node)
    }
}

impl From<&TypeError> for Diagnostic {
    fn from(err: &TypeError) -> Self {
        err.to_diagnostic()
    }
}
