//! Harsh Typeck - static type checker.
//!
//! A non-executing walk over a program tree that computes the type each node
//! would have at runtime and records mismatches as [`TypeError`]s.
//!
//! An expression that already failed resolves to `TypeKind::Unknown`, which
//! every parent check accepts silently, so one root mistake yields one
//! diagnostic rather than a cascade up the tree.

mod check;
mod checker;
mod errors;

pub use checker::{check_function, TypeChecker, TypecheckContext, TypecheckSession};
pub use errors::{TypeError, TypeErrorKind};
