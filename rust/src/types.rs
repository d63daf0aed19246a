//! Core types and data structures for AvlTree.
//!
//! This module contains all the fundamental data structures, type definitions,
//! and constants used throughout the AVL tree implementation.

use std::time::Duration;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Key type stored in the tree. Keys are the only payload.
pub type Key = i64;

/// Owned link to a subtree. `None` is the empty subtree.
pub(crate) type Link = Option<Box<Node>>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// AVL tree over integer keys with per-operation diagnostics.
///
/// An AVL tree is a self-balancing binary search tree where the heights of
/// the two child subtrees of any node differ by at most one. Insert, search,
/// and delete all run in O(log n). Every mutating or searching call returns
/// an [`OperationRecord`] describing what happened during that call (which
/// rotation fired, around which node, how long the call took), which is
/// enough for a host to drive a visualization without reaching into the
/// tree's internals.
///
/// # Examples
///
/// ```
/// use avltree::{AvlTree, RotationKind};
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// let record = tree.insert(30);
///
/// // Inserting 10, 20, 30 in order forces a left rotation at the root.
/// assert_eq!(record.rotation, RotationKind::RR);
/// assert_eq!(tree.first(), Some(10));
/// assert_eq!(tree.len(), 3);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n), at most one single or double rotation
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n), possibly one rotation per ancestor
/// - **Iteration**: O(n)
#[derive(Debug)]
pub struct AvlTree {
    /// The root node of the tree. `None` for an empty tree.
    pub(crate) root: Link,
}

/// A single node of the tree, owning its two subtrees exclusively.
#[derive(Debug)]
pub struct Node {
    /// The key stored at this node.
    pub(crate) key: Key,
    /// Height of the subtree rooted here. A leaf has height 1.
    pub(crate) height: i32,
    /// height(left) - height(right), kept in sync with `height`.
    pub(crate) balance_factor: i32,
    /// Left subtree: all keys strictly less than `key`.
    pub(crate) left: Link,
    /// Right subtree: all keys strictly greater than `key`.
    pub(crate) right: Link,
}

impl Node {
    /// The key stored at this node.
    pub fn key(&self) -> Key {
        self.key
    }

    /// Height of the subtree rooted at this node (a leaf has height 1).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// height(left) - height(right); always in -1..=1 between operations.
    pub fn balance_factor(&self) -> i32 {
        self.balance_factor
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// The four classic AVL restructuring patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationKind {
    /// No rotation was needed.
    None,
    /// Left-left case, fixed by a single right rotation.
    LL,
    /// Right-right case, fixed by a single left rotation.
    RR,
    /// Left-right case, fixed by a left rotation then a right rotation.
    LR,
    /// Right-left case, fixed by a right rotation then a left rotation.
    RL,
}

impl RotationKind {
    /// Returns true if this is one of the two double-rotation cases.
    pub fn is_double(&self) -> bool {
        matches!(self, RotationKind::LR | RotationKind::RL)
    }
}

impl std::fmt::Display for RotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationKind::None => write!(f, "none"),
            RotationKind::LL => write!(f, "LL"),
            RotationKind::RR => write!(f, "RR"),
            RotationKind::LR => write!(f, "LR"),
            RotationKind::RL => write!(f, "RL"),
        }
    }
}

/// Which public operation produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Insert,
    Search,
    Delete,
}

/// Diagnostic record describing a single insert/search/delete call.
///
/// A fresh record is produced by every call and returned by value; it is
/// never shared between calls, so a host can hold on to it (e.g. to keep a
/// rotation highlighted) without it being clobbered by a later operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    /// The operation that produced this record.
    pub operation: OperationKind,
    /// The last rotation performed during the call, if any. Insert performs
    /// at most one; delete may perform one per ancestor and reports the
    /// last.
    pub rotation: RotationKind,
    /// Key of the subtree root promoted by that rotation.
    pub rotation_pivot: Option<Key>,
    /// For search: the key that was found, if any.
    pub found_key: Option<Key>,
    /// Wall-clock time spent inside the call.
    pub elapsed: Duration,
}

impl OperationRecord {
    /// A record for `operation` with nothing observed yet.
    pub(crate) fn new(operation: OperationKind) -> Self {
        OperationRecord {
            operation,
            rotation: RotationKind::None,
            rotation_pivot: None,
            found_key: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns true if any rotation fired during the operation.
    pub fn rotated(&self) -> bool {
        self.rotation != RotationKind::None
    }
}
