//! GET operations for AvlTree.
//!
//! Read-only BST descent. None of these touch tree structure or heights;
//! `search` additionally produces a diagnostic record for the host.

use crate::error::{AvlTreeError, KeyResult};
use crate::types::{AvlTree, Key, Node, OperationKind, OperationRecord};
use std::cmp::Ordering;
use std::time::Instant;

impl AvlTree {
    /// Look up `key`, returning the node and a diagnostic record.
    ///
    /// The record's `found_key` carries the key when it is present, so a
    /// host can highlight the hit (or report a miss) without touching the
    /// node itself. A miss is a normal outcome, not an error.
    pub fn search(&self, key: Key) -> (Option<&Node>, OperationRecord) {
        let start = Instant::now();
        let mut record = OperationRecord::new(OperationKind::Search);
        let found = self.get(key);
        record.found_key = found.map(|node| node.key);
        record.elapsed = start.elapsed();
        (found, record)
    }

    /// Get a reference to the node holding `key`, without diagnostics.
    pub fn get(&self, key: Key) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Returns true if `key` is present in the tree.
    ///
    /// This is the pre-check hosts use before [`insert`](Self::insert) when
    /// they want to reject duplicates themselves.
    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    /// Get the node holding `key` or a [`AvlTreeError::KeyNotFound`] error.
    pub fn try_get(&self, key: Key) -> KeyResult<&Node> {
        self.get(key).ok_or(AvlTreeError::KeyNotFound(key))
    }
}
