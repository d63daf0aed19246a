//! AVL tree engine with per-operation diagnostics.
//!
//! This crate provides a self-balancing binary search tree over integer
//! keys, supporting insert, search, and delete in O(log n) with automatic
//! rebalancing. Every operation returns an [`OperationRecord`] describing
//! what happened during that call (rotation kind, pivot node, found node,
//! elapsed time), which is enough state for an external host to drive a
//! visualization or report timings without any ambient globals.

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

pub use error::{AvlResult, AvlResultExt, AvlTreeError, KeyResult, ModifyResult};
pub use iteration::{KeyIterator, NodeIterator};
pub use types::{AvlTree, Key, Node, OperationKind, OperationRecord, RotationKind};

impl AvlTree {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        Self::len_recursive(self.root.as_deref())
    }

    /// Recursively count nodes.
    fn len_recursive(node: Option<&Node>) -> usize {
        match node {
            None => 0,
            Some(node) => {
                1 + Self::len_recursive(node.left.as_deref())
                    + Self::len_recursive(node.right.as_deref())
            }
        }
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    ///
    /// O(1) off the root's maintained height field; no traversal.
    pub fn tree_height(&self) -> i32 {
        crate::node::link_height(&self.root)
    }

    /// The root node, if any (read-only, for hosts walking the tree).
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Remove all keys from the tree.
    ///
    /// Dropping the root cascades through the owned links, tearing the
    /// whole structure down without any per-node cleanup.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<Key> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(current.key)
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<Key> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(current.key)
    }
}
