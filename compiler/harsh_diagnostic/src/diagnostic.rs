use std::fmt;

use harsh_ir::NodeId;

use crate::ErrorCode;

/// A single reported problem: what went wrong and at which node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// The node that produced the problem.
    pub node: NodeId,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>, node: NodeId) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            node,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if self.node.is_valid() {
            write!(f, " (at node {})", self.node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
