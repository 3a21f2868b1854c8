//! Stack growth for deep recursion.
//!
//! Both the interpreter and the type checker walk the program tree
//! recursively, and a user function that calls itself recurses through the
//! host stack as well. Every recursive step is wrapped in
//! [`ensure_sufficient_stack`], which grows the stack on demand so that a
//! deeply nested tree or a long chain of calls does not overflow it.
//!
//! On `wasm32` the wrapper is a plain call.

/// If less than this much stack remains, a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// ```text
/// fn eval(&self, id: NodeId, ctx: &mut ExecContext<'_>) -> Variant {
///     ensure_sufficient_stack(|| self.eval_inner(id, ctx))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
