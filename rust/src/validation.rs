//! Validation and debugging utilities for AvlTree.
//!
//! This module contains the invariant checks (BST ordering, AVL balance,
//! stored-height correctness), debugging printers, and test helpers.

use crate::types::{AvlTree, Key, Node};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl AvlTree {
    /// Check if the tree maintains its BST, AVL, and height invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        // Structural invariants first
        Self::check_node_invariants(self.root.as_deref(), None, None)?;

        // Then confirm in-order iteration agrees
        self.check_iteration_order()
    }

    /// Recursively check invariants for a node and its children.
    ///
    /// Verifies, for every node: keys stay inside the (min, max) window
    /// inherited from ancestors, the stored height equals the recursively
    /// recomputed one, and the balance factor is consistent and within
    /// -1..=1.
    fn check_node_invariants(
        node: Option<&Node>,
        min_key: Option<Key>,
        max_key: Option<Key>,
    ) -> Result<i32, String> {
        let node = match node {
            Some(node) => node,
            None => return Ok(0),
        };

        if let Some(min) = min_key {
            if node.key <= min {
                return Err(format!("BST violation: key {} <= bound {}", node.key, min));
            }
        }
        if let Some(max) = max_key {
            if node.key >= max {
                return Err(format!("BST violation: key {} >= bound {}", node.key, max));
            }
        }

        let left_height = Self::check_node_invariants(node.left.as_deref(), min_key, Some(node.key))?;
        let right_height =
            Self::check_node_invariants(node.right.as_deref(), Some(node.key), max_key)?;

        let expected_height = left_height.max(right_height) + 1;
        if node.height != expected_height {
            return Err(format!(
                "Height violation at key {}: stored {} vs actual {}",
                node.key, node.height, expected_height
            ));
        }

        let expected_balance = left_height - right_height;
        if node.balance_factor != expected_balance {
            return Err(format!(
                "Balance bookkeeping violation at key {}: stored {} vs actual {}",
                node.key, node.balance_factor, expected_balance
            ));
        }
        if node.balance_factor.abs() > 1 {
            return Err(format!(
                "AVL violation at key {}: balance factor {}",
                node.key, node.balance_factor
            ));
        }

        Ok(expected_height)
    }

    /// Check that in-order iteration yields strictly increasing keys and
    /// agrees with the recursive count.
    fn check_iteration_order(&self) -> Result<(), String> {
        let keys: Vec<Key> = self.keys().collect();

        for i in 1..keys.len() {
            if keys[i - 1] >= keys[i] {
                return Err(format!("Iterator returned unsorted keys at index {}", i));
            }
        }

        if keys.len() != self.len() {
            return Err(format!(
                "Iterator returned {} keys but tree has {} nodes",
                keys.len(),
                self.len()
            ));
        }

        Ok(())
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Returns all keys as a sorted vector (for testing/debugging).
    pub fn slice(&self) -> Vec<Key> {
        self.keys().collect()
    }

    /// Prints the tree structure for debugging.
    pub fn print_node_chain(&self) {
        println!("Tree structure:");
        match self.root.as_deref() {
            Some(root) => Self::print_node(root, 0),
            None => println!("  <empty>"),
        }
    }

    /// Print a node and its children recursively for debugging.
    fn print_node(node: &Node, depth: usize) {
        let indent = "  ".repeat(depth);
        println!(
            "{}Node[key={}, h={}, bf={}]",
            indent, node.key, node.height, node.balance_factor
        );
        if let Some(left) = node.left.as_deref() {
            Self::print_node(left, depth + 1);
        }
        if let Some(right) = node.right.as_deref() {
            Self::print_node(right, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Link;

    fn leaf(key: Key) -> Link {
        Some(Node::new(key))
    }

    #[test]
    fn test_valid_tree_passes() {
        let tree = AvlTree::from_keys([20, 10, 30, 5, 15, 25, 35]);
        assert!(tree.check_invariants());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_empty_tree_passes() {
        assert!(AvlTree::new().check_invariants());
    }

    #[test]
    fn test_detects_bst_violation() {
        // Hand-build a tree where the right child is smaller than the root.
        let mut root = Node::new(10);
        root.right = leaf(5);
        root.update_height();
        let tree = AvlTree { root: Some(root) };

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.contains("BST violation"), "unexpected error: {}", err);
    }

    #[test]
    fn test_detects_stale_height() {
        let mut root = Node::new(10);
        root.left = leaf(5);
        // Deliberately skip update_height: stored height remains 1.
        let tree = AvlTree { root: Some(root) };

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.contains("Height violation"), "unexpected error: {}", err);
    }

    #[test]
    fn test_detects_avl_violation() {
        // A bare left chain of three nodes with honest heights is a valid
        // BST but not a valid AVL tree.
        let mut mid = Node::new(2);
        mid.left = leaf(1);
        mid.update_height();
        let mut top = Node::new(3);
        top.left = Some(mid);
        top.update_height();
        let tree = AvlTree { root: Some(top) };

        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.contains("AVL violation"), "unexpected error: {}", err);
    }

    #[test]
    fn test_slice_is_sorted() {
        let tree = AvlTree::from_keys([9, 1, 8, 2, 7, 3]);
        assert_eq!(tree.slice(), vec![1, 2, 3, 7, 8, 9]);
    }
}
