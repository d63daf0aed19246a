//! INSERT operations for AvlTree.
//!
//! Standard BST insertion followed by bottom-up rebalancing on the path
//! from the new leaf back to the root. At most one rotation (single or
//! double) actually fires per insert, but heights are refreshed at every
//! ancestor regardless.

use crate::error::{AvlTreeError, ModifyResult};
use crate::node::rebalance;
use crate::types::{AvlTree, Key, Link, Node, OperationKind, OperationRecord};
use std::cmp::Ordering;
use std::time::Instant;

impl AvlTree {
    /// Insert `key` into the tree.
    ///
    /// Inserting a key that is already present is a silent no-op: the tree
    /// is structurally unchanged and no error is raised. Callers that need
    /// duplicate rejection should pre-check with [`contains`](Self::contains)
    /// or use [`try_insert`](Self::try_insert).
    ///
    /// Returns the diagnostic record for this call: which rotation (if any)
    /// restored balance, around which node, and how long the call took.
    pub fn insert(&mut self, key: Key) -> OperationRecord {
        let start = Instant::now();
        let mut record = OperationRecord::new(OperationKind::Insert);
        self.root = Self::insert_recursive(self.root.take(), key, &mut record);
        record.elapsed = start.elapsed();
        record
    }

    /// Recursive BST insert returning the new subtree root.
    fn insert_recursive(link: Link, key: Key, record: &mut OperationRecord) -> Link {
        let mut node = match link {
            None => return Some(Node::new(key)),
            Some(node) => node,
        };

        match key.cmp(&node.key) {
            Ordering::Less => {
                node.left = Self::insert_recursive(node.left.take(), key, record);
            }
            Ordering::Greater => {
                node.right = Self::insert_recursive(node.right.take(), key, record);
            }
            Ordering::Equal => {
                // Duplicate keys are not stored
                return Some(node);
            }
        }

        Some(rebalance(node, record))
    }

    /// Insert with explicit duplicate rejection and integrity validation.
    ///
    /// Validates tree invariants before and after the mutation; a failure
    /// there indicates a defect in the rebalancing logic, surfaced as
    /// [`AvlTreeError::DataIntegrityError`]. Inserting an existing key
    /// returns [`AvlTreeError::DuplicateKey`] and leaves the tree untouched.
    pub fn try_insert(&mut self, key: Key) -> ModifyResult<OperationRecord> {
        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::DataIntegrityError(e));
        }

        if self.contains(key) {
            return Err(AvlTreeError::DuplicateKey(key));
        }

        let record = self.insert(key);

        if let Err(e) = self.check_invariants_detailed() {
            return Err(AvlTreeError::DataIntegrityError(e));
        }

        Ok(record)
    }
}
