//! Type representation.
//!
//! [`TypeKind`] describes the shape of a value. Primitive kinds compare by
//! discriminator; composite kinds compare structurally:
//!
//! - arrays compare their element types (the length expression is not part of
//!   the type's identity),
//! - records compare by field name, ignoring declaration order: every field
//!   name present on either side must be present on both with equal types,
//! - functions compare their parameter types position by position and their
//!   return types. Parameter names and bodies do not participate.
//!
//! `TypeKind::Unknown` exists only for the type checker, which uses it as the
//! result of an expression that already produced a diagnostic.

use std::fmt;

use crate::NodeId;

/// Discriminator of a [`TypeKind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    Int,
    Str,
    Bool,
    Array,
    Struct,
    Function,
    Undefined,
    /// Checker-only; never produced by evaluation.
    Unknown,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Str => "string",
            Kind::Bool => "bool",
            Kind::Array => "array",
            Kind::Struct => "struct",
            Kind::Function => "function",
            Kind::Undefined => "undefined",
            Kind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved type.
#[derive(Clone, Debug)]
pub enum TypeKind {
    Int,
    Str,
    Bool,
    Undefined,
    Unknown,
    Array(ArrayType),
    Struct(StructType),
    Function(FunctionType),
}

impl TypeKind {
    /// Array type of `elem` whose length is the value of node `len`.
    pub fn array(elem: TypeKind, len: NodeId) -> Self {
        TypeKind::Array(ArrayType::new(elem, len))
    }

    pub fn record(fields: impl IntoIterator<Item = NamedType>) -> Self {
        TypeKind::Struct(StructType::new(fields))
    }

    pub fn function(params: impl IntoIterator<Item = NamedType>, ret: TypeKind, body: NodeId) -> Self {
        TypeKind::Function(FunctionType::new(params, ret, body))
    }

    pub fn kind(&self) -> Kind {
        match self {
            TypeKind::Int => Kind::Int,
            TypeKind::Str => Kind::Str,
            TypeKind::Bool => Kind::Bool,
            TypeKind::Undefined => Kind::Undefined,
            TypeKind::Unknown => Kind::Unknown,
            TypeKind::Array(_) => Kind::Array,
            TypeKind::Struct(_) => Kind::Struct,
            TypeKind::Function(_) => Kind::Function,
        }
    }

    /// Element type for arrays, the type itself for everything else.
    pub fn base_type(&self) -> &TypeKind {
        match self {
            TypeKind::Array(array) => &array.elem,
            _ => self,
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeKind::Unknown)
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            TypeKind::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl PartialEq for TypeKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeKind::Array(a), TypeKind::Array(b)) => a == b,
            (TypeKind::Struct(a), TypeKind::Struct(b)) => a == b,
            (TypeKind::Function(a), TypeKind::Function(b)) => a == b,
            // Primitives compare by discriminator.
            _ => self.kind() == other.kind(),
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Int => f.write_str("int"),
            TypeKind::Str => f.write_str("string"),
            TypeKind::Bool => f.write_str("bool"),
            TypeKind::Undefined => f.write_str("undefined"),
            TypeKind::Unknown => f.write_str("unknown"),
            TypeKind::Array(array) => write!(f, "[]{}", array.elem),
            TypeKind::Struct(record) => {
                f.write_str("struct{")?;
                for (i, field) in record.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str("}")
            }
            TypeKind::Function(function) => {
                f.write_str("func(")?;
                for (i, param) in function.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param.ty)?;
                }
                write!(f, ") {}", function.ret)
            }
        }
    }
}

/// Statically sized array type.
#[derive(Clone, Debug)]
pub struct ArrayType {
    pub elem: Box<TypeKind>,
    /// Expression producing the length. Must evaluate to an integer without
    /// any variables in scope.
    pub len: NodeId,
}

impl ArrayType {
    pub fn new(elem: TypeKind, len: NodeId) -> Self {
        ArrayType {
            elem: Box::new(elem),
            len,
        }
    }
}

impl PartialEq for ArrayType {
    fn eq(&self, other: &Self) -> bool {
        self.elem == other.elem
    }
}

/// Record type: ordered named fields.
#[derive(Clone, Debug, Default)]
pub struct StructType {
    pub fields: Vec<NamedType>,
}

impl StructType {
    pub fn new(fields: impl IntoIterator<Item = NamedType>) -> Self {
        StructType {
            fields: fields.into_iter().collect(),
        }
    }

    /// Type of the field called `name`.
    pub fn field(&self, name: &str) -> Option<&TypeKind> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.ty)
    }

    /// Every field of `self` exists in `other` with an equal type.
    fn joins_into(&self, other: &StructType) -> bool {
        self.fields
            .iter()
            .all(|field| other.field(&field.name).is_some_and(|ty| *ty == field.ty))
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.joins_into(other) && other.joins_into(self)
    }
}

/// Function signature plus body.
#[derive(Clone, Debug)]
pub struct FunctionType {
    pub params: Vec<NamedType>,
    pub ret: Box<TypeKind>,
    pub body: NodeId,
}

impl FunctionType {
    pub fn new(params: impl IntoIterator<Item = NamedType>, ret: TypeKind, body: NodeId) -> Self {
        FunctionType {
            params: params.into_iter().collect(),
            ret: Box::new(ret),
            body,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl PartialEq for FunctionType {
    fn eq(&self, other: &Self) -> bool {
        self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(a, b)| a.ty == b.ty)
            && self.ret == other.ret
    }
}

/// A name paired with a type: a record field or a function parameter.
#[derive(Clone, PartialEq, Debug)]
pub struct NamedType {
    pub name: String,
    pub ty: TypeKind,
}

impl NamedType {
    pub fn new(name: impl Into<String>, ty: TypeKind) -> Self {
        NamedType {
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

#[cfg(test)]
mod tests;
