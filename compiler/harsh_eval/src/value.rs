//! Runtime values.
//!
//! A [`Variant`] pairs a [`TypeKind`] with its payload. The payload shape
//! always agrees with the type's kind:
//!
//! | Kind | Payload |
//! |------|---------|
//! | int, string, bool | matching scalar |
//! | undefined | [`Value::Undefined`] |
//! | array | [`Value::List`] |
//! | struct | [`Value::Record`] |
//! | function | [`Value::Function`] (the body lives in the type) |
//!
//! Every constructor upholds this; there is no way to build a mismatched
//! variant from outside the crate.

use std::fmt;

use bitflags::bitflags;
use harsh_ir::{ArrayType, FunctionType, Kind, StructType, TypeKind};
use rustc_hash::FxHashMap;

bitflags! {
    /// Transient execution markers. Never stored in a namespace.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct VariantFlags: u8 {
        /// Short-circuit the enclosing statement sequence as a function return.
        const RETURN = 0b01;
        /// Produced by a variable lookup that found nothing.
        const UNRESOLVED = 0b10;
    }
}

/// Payload of a [`Variant`].
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
    Undefined,
    List(Vec<Variant>),
    Record(FxHashMap<String, Variant>),
    Function,
}

/// A runtime value with its type and control flags.
///
/// Equality compares type and payload; flags are ignored.
#[derive(Clone, Debug)]
pub struct Variant {
    ty: TypeKind,
    value: Value,
    flags: VariantFlags,
}

impl Variant {
    pub fn int(n: i64) -> Self {
        Self::scalar(TypeKind::Int, Value::Int(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::scalar(TypeKind::Str, Value::Str(s.into()))
    }

    pub fn bool(b: bool) -> Self {
        Self::scalar(TypeKind::Bool, Value::Bool(b))
    }

    pub fn undefined() -> Self {
        Self::scalar(TypeKind::Undefined, Value::Undefined)
    }

    /// Result of a variable lookup miss.
    pub fn unresolved() -> Self {
        Variant {
            flags: VariantFlags::UNRESOLVED,
            ..Self::undefined()
        }
    }

    /// Array value. Element flags are stripped.
    pub fn list(ty: ArrayType, elements: impl IntoIterator<Item = Variant>) -> Self {
        Variant {
            ty: TypeKind::Array(ty),
            value: Value::List(elements.into_iter().map(Variant::cleaned).collect()),
            flags: VariantFlags::empty(),
        }
    }

    /// Record value. Field flags are stripped.
    pub fn record<K: Into<String>>(ty: StructType, fields: impl IntoIterator<Item = (K, Variant)>) -> Self {
        Variant {
            ty: TypeKind::Struct(ty),
            value: Value::Record(
                fields
                    .into_iter()
                    .map(|(name, v)| (name.into(), v.cleaned()))
                    .collect(),
            ),
            flags: VariantFlags::empty(),
        }
    }

    /// A declared function, callable through a `Call` node.
    pub fn function(ty: FunctionType) -> Self {
        Self::scalar(TypeKind::Function(ty), Value::Function)
    }

    fn scalar(ty: TypeKind, value: Value) -> Self {
        Variant {
            ty,
            value,
            flags: VariantFlags::empty(),
        }
    }

    // ===== Type and payload =====

    #[inline]
    pub fn ty(&self) -> &TypeKind {
        &self.ty
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.ty.kind()
    }

    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.value {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self.value, Value::Undefined)
    }

    /// Array elements, if this is an array.
    pub fn elements(&self) -> Option<&[Variant]> {
        match &self.value {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub(crate) fn elements_mut(&mut self) -> Option<&mut Vec<Variant>> {
        match &mut self.value {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Record field, if this is a record holding `name`.
    pub fn field(&self, name: &str) -> Option<&Variant> {
        match &self.value {
            Value::Record(fields) => fields.get(name),
            _ => None,
        }
    }

    pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut Variant> {
        match &mut self.value {
            Value::Record(fields) => fields.get_mut(name),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&FxHashMap<String, Variant>> {
        match &self.value {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    // ===== Control flags =====

    #[inline]
    pub fn flags(&self) -> VariantFlags {
        self.flags
    }

    #[inline]
    pub fn is_return(&self) -> bool {
        self.flags.contains(VariantFlags::RETURN)
    }

    #[inline]
    pub fn is_unresolved(&self) -> bool {
        self.flags.contains(VariantFlags::UNRESOLVED)
    }

    /// Copy of `self` marked as a function return.
    #[must_use]
    pub fn into_return(mut self) -> Self {
        self.flags.insert(VariantFlags::RETURN);
        self
    }

    /// Strip both control flags in place.
    pub fn clean(&mut self) {
        self.flags = VariantFlags::empty();
    }

    #[must_use]
    pub fn cleaned(mut self) -> Self {
        self.clean();
        self
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.value == other.value
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::undefined()
    }
}

// ===== Host conversions =====

impl From<i64> for Variant {
    fn from(n: i64) -> Self {
        Variant::int(n)
    }
}

impl From<i32> for Variant {
    fn from(n: i32) -> Self {
        Variant::int(i64::from(n))
    }
}

impl From<bool> for Variant {
    fn from(b: bool) -> Self {
        Variant::bool(b)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Variant::string(s)
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Variant::string(s)
    }
}

impl From<&Variant> for Variant {
    fn from(v: &Variant) -> Self {
        v.clone().cleaned()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Undefined => f.write_str("undefined"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                let mut names: Vec<&String> = fields.keys().collect();
                names.sort();
                f.write_str("{")?;
                for (i, name) in names.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {}", fields[name])?;
                }
                f.write_str("}")
            }
            Value::Function => write!(f, "{}", self.ty),
        }
    }
}
