//! Error codes for all engine diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E2xxx: Type check errors
//! - E6xxx: Runtime / execution errors
//! - E9xxx: Internal errors (invariant violations)

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Type Check Errors (E2xxx)
    /// Incompatible types
    E2001,
    /// Named element not found (record field)
    E2002,
    /// Array literal does not match the array length
    E2003,

    // Runtime Errors (E6xxx)
    /// Operand or value of the wrong type
    E6001,
    /// Index or length out of bounds
    E6002,
    /// Variable or field not found
    E6003,
    /// Division by zero or integer overflow
    E6004,
    /// Construct not supported by the engine
    E6005,
    /// Malformed program tree
    E6006,

    // Internal Errors (E9xxx)
    /// Type checker invariant violated
    E9001,
    /// Evaluator invariant violated
    E9002,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line description for `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "incompatible types",
            ErrorCode::E2002 => "named element not found",
            ErrorCode::E2003 => "array literal length mismatch",
            ErrorCode::E6001 => "runtime type error",
            ErrorCode::E6002 => "out of bounds",
            ErrorCode::E6003 => "not found",
            ErrorCode::E6004 => "arithmetic error",
            ErrorCode::E6005 => "not supported",
            ErrorCode::E6006 => "invalid program tree",
            ErrorCode::E9001 => "internal type checker error",
            ErrorCode::E9002 => "internal evaluator error",
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
