//! Iterator implementations for AvlTree.
//!
//! Two traversals are exposed: an in-order key iterator (sorted order, used
//! by validation and tests) and a pre-order node iterator that also yields
//! each node's depth, which is what a renderer walking the tree for layout
//! wants.

use crate::types::{AvlTree, Key, Node};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over the keys of the tree, smallest first.
pub struct KeyIterator<'a> {
    stack: Vec<&'a Node>,
}

/// Pre-order iterator over `(node, depth)` pairs. The root has depth 0.
pub struct NodeIterator<'a> {
    stack: Vec<(&'a Node, usize)>,
}

// ============================================================================
// AVLTREE ITERATOR METHODS
// ============================================================================

impl AvlTree {
    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> KeyIterator<'_> {
        KeyIterator::new(self)
    }

    /// Returns a pre-order iterator over all nodes with their depths.
    ///
    /// Parents are always yielded before their children, so a host can lay
    /// out or draw the tree in a single pass.
    pub fn nodes(&self) -> NodeIterator<'_> {
        NodeIterator::new(self)
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a> KeyIterator<'a> {
    fn new(tree: &'a AvlTree) -> Self {
        let mut iter = KeyIterator { stack: Vec::new() };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    /// Push `node` and the chain of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for KeyIterator<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.key)
    }
}

impl<'a> NodeIterator<'a> {
    fn new(tree: &'a AvlTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root.as_deref() {
            stack.push((root, 0));
        }
        NodeIterator { stack }
    }
}

impl<'a> Iterator for NodeIterator<'a> {
    type Item = (&'a Node, usize);

    fn next(&mut self) -> Option<(&'a Node, usize)> {
        let (node, depth) = self.stack.pop()?;
        // Right is pushed first so left comes off the stack first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push((left, depth + 1));
        }
        Some((node, depth))
    }
}
