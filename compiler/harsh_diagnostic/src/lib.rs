//! Diagnostic records shared by the type checker and the evaluator.
//!
//! Both walkers accumulate their own typed errors and convert them into a
//! [`Diagnostic`] for hosts that want a single ordered list:
//! - an error code for searchability,
//! - a human-readable message,
//! - the offending node.

mod diagnostic;
mod error_code;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
