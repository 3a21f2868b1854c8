//! Per-node type rules.
//!
//! Every rule records its own diagnostics in the context and yields
//! `TypeKind::Unknown` for the failing node. Parents treat an unknown
//! operand as compatible with anything, so one mistake produces one error.

mod access;
mod call;
mod control;
mod expr;
mod literals;

pub use access::{check_select, check_subscript};
pub use call::check_call;
pub use control::{check_assign, check_if, check_return};
pub use expr::{check_binary, check_unary};
pub use literals::{check_array_literal, check_struct_literal};
