//! Host entry point.
//!
//! A [`Session`] owns a program's node arena, its declarations and the
//! global namespace shared by every call. It is built with a
//! [`SessionBuilder`]:
//!
//! ```ignore
//! let mut session = Session::builder(arena)
//!     .function("add", add_type)
//!     .global("offset", 10_i64)
//!     .build();
//! let sum = session.call("add", [("a", 1_i64), ("b", 2_i64)])?;
//! ```
//!
//! Calls run sequentially against the session's globals. A host sharing a
//! session between threads must serialize access to it.

use harsh_ir::{FunctionType, NodeArena, TypeKind};
use rustc_hash::FxHashMap;

use crate::defaults::default_variant;
use crate::{
    CallError, DefaultValueError, ExecContext, ExecutionFailure, Interpreter, Namespace, Variant,
};

/// A loaded program plus its persistent global state.
#[derive(Clone, Debug)]
pub struct Session {
    arena: NodeArena,
    declarations: FxHashMap<String, TypeKind>,
    globals: Namespace,
    max_call_depth: Option<usize>,
}

impl Session {
    pub fn builder(arena: NodeArena) -> SessionBuilder {
        SessionBuilder::new(arena)
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn globals(&self) -> &Namespace {
        &self.globals
    }

    #[inline]
    pub fn globals_mut(&mut self) -> &mut Namespace {
        &mut self.globals
    }

    /// Type of the declaration called `name`.
    pub fn declaration(&self, name: &str) -> Option<&TypeKind> {
        self.declarations.get(name)
    }

    /// Names of all declarations, sorted.
    pub fn declaration_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.declarations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Call the function declared as `name`.
    ///
    /// Each argument is bound into the call's local namespace under its
    /// given name. Execution problems do not abort the call; they come back
    /// together in [`CallError::Execution`] alongside the result.
    #[tracing::instrument(level = "debug", skip(self, args))]
    pub fn call<K, V, I>(&mut self, name: &str, args: I) -> Result<Variant, CallError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Variant>,
    {
        let Some(declaration) = self.declarations.get(name) else {
            tracing::debug!("function not found");
            return Err(CallError::FunctionNotFound(name.to_owned()));
        };
        let Some(function) = declaration.as_function() else {
            return Err(CallError::NotAFunction(name.to_owned()));
        };

        let interpreter = Interpreter::new(&self.arena).with_max_call_depth(self.max_call_depth);
        let mut locals: Namespace = args.into_iter().collect();
        let mut ctx = ExecContext::new(&mut locals, &mut self.globals, true);
        let result = interpreter.eval(function.body, &mut ctx).cleaned();
        let errors = ctx.errors;

        if errors.is_empty() {
            Ok(result)
        } else {
            tracing::debug!(errors = errors.len(), "call finished with execution errors");
            Err(CallError::Execution(ExecutionFailure { result, errors }))
        }
    }
}

/// Builder for [`Session`].
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    arena: NodeArena,
    declarations: FxHashMap<String, TypeKind>,
    globals: Namespace,
    max_call_depth: Option<usize>,
}

impl SessionBuilder {
    pub fn new(arena: NodeArena) -> Self {
        SessionBuilder {
            arena,
            declarations: FxHashMap::default(),
            globals: Namespace::new(),
            max_call_depth: None,
        }
    }

    /// Declare a function. It is also bound as a global so `Call` nodes can
    /// reach it by name.
    #[must_use]
    pub fn function(mut self, name: impl Into<String>, ty: FunctionType) -> Self {
        let name = name.into();
        self.globals.save(name.clone(), Variant::function(ty.clone()));
        self.declarations.insert(name, TypeKind::Function(ty));
        self
    }

    /// Declare a name of any type. Function types behave like
    /// [`function`](Self::function); other types are recorded so calls to
    /// them report [`CallError::NotAFunction`].
    #[must_use]
    pub fn declaration(self, name: impl Into<String>, ty: TypeKind) -> Self {
        match ty {
            TypeKind::Function(function) => self.function(name, function),
            other => {
                let mut builder = self;
                builder.declarations.insert(name.into(), other);
                builder
            }
        }
    }

    /// Bind a global to an initial value.
    #[must_use]
    pub fn global(mut self, name: impl Into<String>, value: impl Into<Variant>) -> Self {
        self.globals.save(name, value);
        self
    }

    /// Bind a global to the zero value of `ty`.
    pub fn global_default(mut self, name: impl Into<String>, ty: &TypeKind) -> Result<Self, DefaultValueError> {
        let value = default_variant(&self.arena, ty)?;
        self.globals.save(name, value);
        Ok(self)
    }

    /// Fail any call nested deeper than `depth` with an internal error.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Session {
        Session {
            arena: self.arena,
            declarations: self.declarations,
            globals: self.globals,
            max_call_depth: self.max_call_depth,
        }
    }
}
