//! Arena storage for the flat program tree.
//!
//! - Contiguous storage for every node of a program
//! - Child references are `NodeId` indices
//! - Node lists and record field initializers are ranges into flat vectors

use crate::ast::{FieldInit, Node};
use crate::{FieldInitRange, NodeId, NodeRange};

/// Contiguous storage for all nodes built by a front end.
///
/// Nodes are appended and never removed or changed afterwards; the engine
/// only reads from the arena.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    /// All nodes (indexed by `NodeId`).
    nodes: Vec<Node>,

    /// Flattened node lists (block statements, array elements, call args).
    node_lists: Vec<NodeId>,

    /// All record literal field initializers.
    field_inits: Vec<FieldInit>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Node allocation =====

    /// Allocate a node, return its ID.
    #[inline]
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get a node by ID.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a node by ID, or `None` if it was not issued by this arena.
    #[inline]
    pub fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== Node list allocation =====

    /// Allocate a node list, return its range.
    pub fn alloc_list(&mut self, ids: impl IntoIterator<Item = NodeId>) -> NodeRange {
        let start = self.node_lists.len() as u32;
        self.node_lists.extend(ids);
        let len = self.node_lists.len() as u32 - start;
        NodeRange::new(start, len)
    }

    /// Get a node list by range. Out-of-range requests yield an empty slice.
    #[inline]
    pub fn get_list(&self, range: NodeRange) -> &[NodeId] {
        let start = range.start as usize;
        let end = start + range.len();
        self.node_lists.get(start..end).unwrap_or(&[])
    }

    // ===== Field initializer allocation =====

    pub fn alloc_field_inits(&mut self, inits: impl IntoIterator<Item = FieldInit>) -> FieldInitRange {
        let start = self.field_inits.len() as u32;
        self.field_inits.extend(inits);
        let len = self.field_inits.len() as u32 - start;
        FieldInitRange::new(start, len)
    }

    #[inline]
    pub fn get_field_inits(&self, range: FieldInitRange) -> &[FieldInit] {
        let start = range.start as usize;
        let end = start + range.len();
        self.field_inits.get(start..end).unwrap_or(&[])
    }

    // ===== Convenience builders =====

    /// Allocate a statement sequence.
    pub fn block(&mut self, stmts: impl IntoIterator<Item = NodeId>) -> NodeId {
        let range = self.alloc_list(stmts);
        self.alloc(Node::Block(range))
    }

    pub fn call(&mut self, callee: NodeId, args: impl IntoIterator<Item = NodeId>) -> NodeId {
        let args = self.alloc_list(args);
        self.alloc(Node::Call { callee, args })
    }
}
