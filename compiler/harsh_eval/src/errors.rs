//! Execution errors and host-facing failures.
//!
//! Program-level problems are recorded as [`ExecError`] values in the
//! context and never abort evaluation. The `thiserror` enums here cover the
//! few failures a host call can hit directly.

use std::fmt;

use harsh_diagnostic::{Diagnostic, ErrorCode};
use harsh_ir::{Kind, NodeId};

use crate::Variant;

/// Class of a runtime problem.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExecErrorKind {
    /// Operand or value of the wrong kind.
    Type,
    /// Array index or literal length out of range.
    Bounds,
    /// Unresolved variable or missing record field.
    NotFound,
    /// A tree shape the evaluator cannot execute.
    InvalidAst,
    /// Evaluator invariant violated.
    Internal,
    NotSupported,
    /// Division by zero or integer overflow.
    Arithmetic,
}

impl ExecErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecErrorKind::Type => "type",
            ExecErrorKind::Bounds => "bounds",
            ExecErrorKind::NotFound => "not found",
            ExecErrorKind::InvalidAst => "invalid tree",
            ExecErrorKind::Internal => "internal",
            ExecErrorKind::NotSupported => "not supported",
            ExecErrorKind::Arithmetic => "arithmetic",
        }
    }

    pub fn code(self) -> ErrorCode {
        match self {
            ExecErrorKind::Type => ErrorCode::E6001,
            ExecErrorKind::Bounds => ErrorCode::E6002,
            ExecErrorKind::NotFound => ErrorCode::E6003,
            ExecErrorKind::Arithmetic => ErrorCode::E6004,
            ExecErrorKind::NotSupported => ErrorCode::E6005,
            ExecErrorKind::InvalidAst => ErrorCode::E6006,
            ExecErrorKind::Internal => ErrorCode::E9002,
        }
    }
}

impl fmt::Display for ExecErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found while executing a node.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct ExecError {
    pub kind: ExecErrorKind,
    pub message: String,
    /// The node whose evaluation recorded the problem.
    pub node: NodeId,
}

impl ExecError {
    pub fn new(kind: ExecErrorKind, message: impl Into<String>, node: NodeId) -> Self {
        ExecError {
            kind,
            message: message.into(),
            node,
        }
    }

    pub fn type_error(message: impl Into<String>, node: NodeId) -> Self {
        Self::new(ExecErrorKind::Type, message, node)
    }

    pub fn bounds(message: impl Into<String>, node: NodeId) -> Self {
        Self::new(ExecErrorKind::Bounds, message, node)
    }

    pub fn not_found(message: impl Into<String>, node: NodeId) -> Self {
        Self::new(ExecErrorKind::NotFound, message, node)
    }

    pub fn invalid_ast(message: impl Into<String>, node: NodeId) -> Self {
        Self::new(ExecErrorKind::InvalidAst, message, node)
    }

    pub fn internal(message: impl Into<String>, node: NodeId) -> Self {
        Self::new(ExecErrorKind::Internal, message, node)
    }

    pub fn not_supported(message: impl Into<String>, node: NodeId) -> Self {
        Self::new(ExecErrorKind::NotSupported, message, node)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.kind.code(), self.message.clone(), self.node)
    }
}

impl From<&ExecError> for Diagnostic {
    fn from(err: &ExecError) -> Self {
        err.to_diagnostic()
    }
}

/// Default-value synthesis failed for a type.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum DefaultValueError {
    /// Evaluating the array length recorded errors.
    #[error("array length is not statically resolvable: {0}")]
    LengthNotStatic(String),
    #[error("array length is not an integer (got {0})")]
    LengthNotInteger(Kind),
    #[error("array length is negative ({0})")]
    NegativeLength(i64),
    /// The array, counting nested elements, would exceed `MAX_ARRAY_LENGTH` values.
    #[error("array length {0} is too large")]
    LengthTooLarge(usize),
    /// The type has no zero value (function or unknown types).
    #[error("type of kind {0} has no default value")]
    NoDefault(Kind),
}

/// A call entry failed.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// No declaration carries the requested name.
    #[error("function not found: {0}")]
    FunctionNotFound(String),
    /// The declaration exists but is not of function type.
    #[error("declaration {0} is not a function")]
    NotAFunction(String),
    #[error(transparent)]
    Execution(#[from] ExecutionFailure),
}

impl CallError {
    /// The value the call produced. Undefined unless execution ran.
    pub fn result(&self) -> Variant {
        match self {
            CallError::Execution(failure) => failure.result.clone(),
            CallError::FunctionNotFound(_) | CallError::NotAFunction(_) => Variant::undefined(),
        }
    }

    /// Errors collected during execution; empty for lookup failures.
    pub fn errors(&self) -> &[ExecError] {
        match self {
            CallError::Execution(failure) => &failure.errors,
            CallError::FunctionNotFound(_) | CallError::NotAFunction(_) => &[],
        }
    }
}

/// Execution finished but recorded errors.
#[derive(Debug, thiserror::Error)]
#[error("{} execution errors", .errors.len())]
pub struct ExecutionFailure {
    /// Whatever the body evaluated to, usually undefined.
    pub result: Variant,
    pub errors: Vec<ExecError>,
}

impl ExecutionFailure {
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ExecError::to_diagnostic).collect()
    }
}
