//! Node-level structural operations: height bookkeeping, the four
//! rotations, and the rebalancing decision table.
//!
//! All functions here operate on owned subtrees and return the (possibly
//! new) subtree root. Heights are always recomputed child-before-parent so
//! a parent never reads a stale child height.

use crate::types::{Link, Node, OperationRecord, RotationKind};

// ============================================================================
// HEIGHT AND BALANCE BOOKKEEPING
// ============================================================================

/// Height of a possibly-empty subtree. An empty subtree has height 0.
pub(crate) fn link_height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a possibly-empty subtree.
pub(crate) fn link_balance_factor(link: &Link) -> i32 {
    link.as_ref()
        .map_or(0, |node| link_height(&node.left) - link_height(&node.right))
}

impl Node {
    /// Recompute this node's height and balance factor from its children.
    ///
    /// Children must already carry correct heights.
    pub(crate) fn update_height(&mut self) {
        let left_height = link_height(&self.left);
        let right_height = link_height(&self.right);
        self.height = left_height.max(right_height) + 1;
        self.balance_factor = left_height - right_height;
    }
}

// ============================================================================
// ROTATIONS
// ============================================================================

/// Right rotation around `y` (fixes the LL case).
///
/// `y`'s left child `x` becomes the subtree root; `x`'s old right subtree
/// is reattached as `y`'s left subtree.
pub(crate) fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let mut x = y
        .left
        .take()
        .expect("right rotation requires a left child");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Left rotation around `x` (fixes the RR case). Mirror of [`rotate_right`].
pub(crate) fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let mut y = x
        .right
        .take()
        .expect("left rotation requires a right child");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

// ============================================================================
// REBALANCING
// ============================================================================

/// Restore the AVL invariant at `node` after a structural edit below it.
///
/// Recomputes the node's bookkeeping, then applies the classic four-case
/// decision table. The case is selected by the sign of the child's own
/// balance factor: a child balance of exactly 0 falls in the single-rotation
/// family. Any rotation performed is written into `record` (kind plus the
/// key of the promoted subtree root); a later rotation in the same call
/// overwrites an earlier one.
///
/// Returns the possibly new subtree root.
pub(crate) fn rebalance(mut node: Box<Node>, record: &mut OperationRecord) -> Box<Node> {
    node.update_height();
    let balance = node.balance_factor;

    // Left-heavy
    if balance > 1 {
        if link_balance_factor(&node.left) >= 0 {
            // Left-Left case
            let root = rotate_right(node);
            record.rotation = RotationKind::LL;
            record.rotation_pivot = Some(root.key);
            return root;
        }
        // Left-Right case: rotate the child, then self
        node.left = node.left.take().map(rotate_left);
        let root = rotate_right(node);
        record.rotation = RotationKind::LR;
        record.rotation_pivot = Some(root.key);
        return root;
    }

    // Right-heavy
    if balance < -1 {
        if link_balance_factor(&node.right) <= 0 {
            // Right-Right case
            let root = rotate_left(node);
            record.rotation = RotationKind::RR;
            record.rotation_pivot = Some(root.key);
            return root;
        }
        // Right-Left case: rotate the child, then self
        node.right = node.right.take().map(rotate_right);
        let root = rotate_left(node);
        record.rotation = RotationKind::RL;
        record.rotation_pivot = Some(root.key);
        return root;
    }

    node
}
