//! DELETE operations for AvlTree.
//!
//! Standard BST deletion with bottom-up rebalancing. Unlike insertion,
//! removing a node can shrink heights all the way to the root, so every
//! ancestor on the return path gets a rebalance check and more than one
//! rotation may fire in a single call.

use crate::error::{AvlTreeError, ModifyResult};
use crate::node::rebalance;
use crate::types::{AvlTree, Key, Link, Node, OperationKind, OperationRecord};
use std::cmp::Ordering;
use std::time::Instant;

impl AvlTree {
    /// Remove `key` from the tree.
    ///
    /// Removing a key that is not present is a silent no-op, mirroring
    /// [`insert`](Self::insert)'s duplicate policy. Use
    /// [`try_remove`](Self::try_remove) for explicit not-found errors.
    ///
    /// Returns the diagnostic record for this call; if several rotations
    /// were needed on the way back up, the record reports the last one.
    pub fn remove(&mut self, key: Key) -> OperationRecord {
        let start = Instant::now();
        let mut record = OperationRecord::new(OperationKind::Delete);
        self.root = Self::remove_recursive(self.root.take(), key, &mut record);
        record.elapsed = start.elapsed();
        record
    }

    /// Recursive BST delete returning the new subtree root.
    fn remove_recursive(link: Link, key: Key, record: &mut OperationRecord) -> Link {
        let mut node = match link {
            None => return None,
            Some(node) => node,
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                node.left = Self::remove_recursive(node.left.take(), key, record);
            }
            Ordering::Greater => {
                node.right = Self::remove_recursive(node.right.take(), key, record);
            }
            Ordering::Equal => {
                return Self::remove_node(node, record);
            }
        }

        Some(rebalance(node, record))
    }

    /// Unlink the node that holds the target key.
    ///
    /// With zero or one child the node is spliced out and replaced by its
    /// child. With two children the in-order successor's key is copied into
    /// this node and the successor is deleted from the right subtree; node
    /// identity is never swapped, only the key value moves.
    fn remove_node(mut node: Box<Node>, record: &mut OperationRecord) -> Link {
        match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(rebalance(child, record)),
            (Some(left), Some(right)) => {
                node.key = Self::subtree_min(&right);
                node.left = Some(left);
                node.right = Self::remove_recursive(Some(right), node.key, record);
                Some(rebalance(node, record))
            }
        }
    }

    /// Smallest key in a non-empty subtree (the in-order successor lookup).
    fn subtree_min(node: &Node) -> Key {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current.key
    }

    /// Remove with explicit not-found reporting and integrity validation.
    ///
    /// Validates tree invariants before and after the mutation. Removing an
    /// absent key returns [`AvlTreeError::KeyNotFound`] and leaves the tree
    /// untouched.
    pub fn try_remove(&mut self, key: Key) -> ModifyResult<OperationRecord> {
        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::DataIntegrityError(e));
        }

        if !self.contains(key) {
            return Err(AvlTreeError::KeyNotFound(key));
        }

        let record = self.remove(key);

        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::DataIntegrityError(e));
        }

        Ok(record)
    }
}
