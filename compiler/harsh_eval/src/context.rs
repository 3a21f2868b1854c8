//! Execution context: the scopes and error list of one active frame.

use crate::{ExecError, Namespace, Variant};

/// State threaded through evaluation of one call frame.
///
/// Both namespaces are borrowed: the locals belong to the call, the globals
/// to the owning [`Session`](crate::Session).
pub struct ExecContext<'a> {
    pub locals: &'a mut Namespace,
    pub globals: &'a mut Namespace,
    /// Set for a call frame's top-level body; governs assignment scoping.
    pub is_function: bool,
    /// Append-only errors recorded while executing this frame.
    pub errors: Vec<ExecError>,
    depth: usize,
}

impl<'a> ExecContext<'a> {
    pub fn new(locals: &'a mut Namespace, globals: &'a mut Namespace, is_function: bool) -> Self {
        ExecContext {
            locals,
            globals,
            is_function,
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Context for a statement sequence: same scopes, not a call frame, with
    /// its own error list to be folded back with [`absorb`](Self::absorb).
    pub fn nested(&mut self) -> ExecContext<'_> {
        ExecContext {
            locals: &mut *self.locals,
            globals: &mut *self.globals,
            is_function: false,
            errors: Vec::new(),
            depth: self.depth,
        }
    }

    /// Context for a function call: fresh locals, shared globals.
    pub(crate) fn call_frame<'f>(&'f mut self, locals: &'f mut Namespace) -> ExecContext<'f> {
        ExecContext {
            locals,
            globals: &mut *self.globals,
            is_function: true,
            errors: Vec::new(),
            depth: self.depth.saturating_add(1),
        }
    }

    /// Append errors collected by a derived context.
    pub fn absorb(&mut self, errors: Vec<ExecError>) {
        self.errors.extend(errors);
    }

    #[inline]
    pub fn push_error(&mut self, err: ExecError) {
        self.errors.push(err);
    }

    /// Locals first, then globals.
    pub fn lookup(&self, name: &str) -> Option<&Variant> {
        self.locals.get(name).or_else(|| self.globals.get(name))
    }

    /// Number of active calls above this frame.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}
