#![deny(clippy::arithmetic_side_effects)]
//! Harsh Eval - runtime value model and tree-walking evaluator.
//!
//! # Architecture
//!
//! - `Variant`: a value with its type and transient control flags
//! - `Namespace`: one variable scope with copy-on-store semantics
//! - `ExecContext`: locals, globals and the error list of an active frame
//! - `Interpreter`: executes nodes of a `NodeArena` against a context
//! - `Session`: host entry point owning the program and its globals
//!
//! Program-level problems never abort evaluation. They accumulate as
//! [`ExecError`] records and are handed back with the call result.

mod context;
pub mod defaults;
pub mod errors;
mod interpreter;
mod namespace;
mod operators;
mod session;
mod value;

use std::sync::Once;

pub use context::ExecContext;
pub use defaults::{default_variant, static_length, MAX_ARRAY_LENGTH};
pub use errors::{
    CallError, DefaultValueError, ExecError, ExecErrorKind, ExecutionFailure,
};
pub use interpreter::Interpreter;
pub use namespace::Namespace;
pub use operators::{evaluate_binary, evaluate_unary, OperatorError, OperatorResult};
pub use session::{Session, SessionBuilder};
pub use value::{Value, Variant, VariantFlags};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or does not parse, or when the host
/// already installed a global subscriber. Useful targets:
/// - `RUST_LOG=harsh_eval::session=debug` - call entry and failures
/// - `RUST_LOG=harsh_eval::interpreter=trace` - every evaluated node
/// - `RUST_LOG=harsh_typeck=trace` - every checked node
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        // A host subscriber wins over ours.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}
