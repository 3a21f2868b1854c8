//! Harsh IR - program tree and type representations.
//!
//! This crate contains the data the engine consumes from a front end:
//! - `Node` trees stored flat in a `NodeArena` and addressed by `NodeId`
//! - Binary and unary operators
//! - `TypeKind`, the resolved type attached to literals, references and
//!   declarations
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: No `Box<Node>`, children are `NodeId(u32)` indices
//! - **Closed Sets**: `Node` and `TypeKind` are sum types, every walker matches
//!   exhaustively
//! - **Read-only**: the engine never mutates a tree once the front end has
//!   built it

mod arena;
pub mod ast;
mod node_id;
pub mod types;

pub use arena::NodeArena;
pub use ast::{BinaryOp, FieldInit, Node, UnaryOp};
pub use node_id::{FieldInitRange, NodeId, NodeRange};
pub use types::{ArrayType, FunctionType, Kind, NamedType, StructType, TypeKind};
