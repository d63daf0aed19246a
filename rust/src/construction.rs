//! Construction and initialization logic for AvlTree and its nodes.

use crate::types::{AvlTree, Key, Node};

impl AvlTree {
    /// Create an empty AVL tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        AvlTree { root: None }
    }

    /// Create a tree from a sequence of keys, inserting in order.
    ///
    /// Duplicates in the input are silently skipped, matching [`insert`]'s
    /// duplicate policy.
    ///
    /// [`insert`]: AvlTree::insert
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTree;
    ///
    /// let tree = AvlTree::from_keys([20, 10, 30, 10]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn from_keys<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        let mut tree = AvlTree::new();
        for key in keys {
            tree.insert(key);
        }
        tree
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Node {
    /// Creates a new leaf node holding `key`.
    ///
    /// A fresh leaf has height 1 and balance factor 0.
    pub(crate) fn new(key: Key) -> Box<Node> {
        Box::new(Node {
            key,
            height: 1,
            balance_factor: 0,
            left: None,
            right: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_is_empty() {
        let tree = AvlTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.tree_height(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        let tree = AvlTree::default();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_fresh_leaf_bookkeeping() {
        let node = Node::new(5);
        assert_eq!(node.key(), 5);
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 0);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_from_keys_skips_duplicates() {
        let tree = AvlTree::from_keys([1, 2, 3, 2, 1]);
        assert_eq!(tree.len(), 3);
        assert!(tree.check_invariants());
    }
}
