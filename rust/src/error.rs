//! Error handling and result types for AvlTree operations.
//!
//! The plain `insert`/`remove`/`search` API treats duplicate inserts,
//! deletes of absent keys, and search misses as normal outcomes and never
//! returns an error. The `try_*` API layered on top reports those as
//! explicit errors and validates tree invariants around each mutation.

use crate::types::Key;

/// Error type for AVL tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AvlTreeError {
    /// Key not found in the tree.
    KeyNotFound(Key),
    /// Key already present; duplicates are not allowed.
    DuplicateKey(Key),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Invalid tree state for the requested operation.
    InvalidState(String),
}

impl AvlTreeError {
    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an InvalidState error with context
    pub fn invalid_state(operation: &str, state: &str) -> Self {
        Self::InvalidState(format!("Cannot {} in state: {}", operation, state))
    }

    /// Check if this error is a missing-key error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }

    /// Check if this error is a duplicate-key error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }
}

impl std::fmt::Display for AvlTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvlTreeError::KeyNotFound(key) => write!(f, "Key {} not found in tree", key),
            AvlTreeError::DuplicateKey(key) => write!(f, "Key {} already exists in tree", key),
            AvlTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            AvlTreeError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for AvlTreeError {}

/// Public result type for tree operations that may fail
pub type AvlResult<T> = Result<T, AvlTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, AvlTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, AvlTreeError>;

/// Result extension trait for improved error handling
pub trait AvlResultExt<T> {
    /// Convert to an AvlResult with additional context
    fn with_context(self, context: &str) -> AvlResult<T>;

    /// Convert to an AvlResult with operation context
    fn with_operation(self, operation: &str) -> AvlResult<T>;
}

impl<T> AvlResultExt<T> for Result<T, AvlTreeError> {
    fn with_context(self, context: &str) -> AvlResult<T> {
        self.map_err(|e| match e {
            AvlTreeError::KeyNotFound(key) => AvlTreeError::KeyNotFound(key),
            AvlTreeError::DuplicateKey(key) => AvlTreeError::DuplicateKey(key),
            AvlTreeError::DataIntegrityError(msg) => AvlTreeError::data_integrity(context, &msg),
            AvlTreeError::InvalidState(msg) => AvlTreeError::invalid_state(context, &msg),
        })
    }

    fn with_operation(self, operation: &str) -> AvlResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AvlTreeError::KeyNotFound(7).to_string(),
            "Key 7 not found in tree"
        );
        assert_eq!(
            AvlTreeError::DuplicateKey(-3).to_string(),
            "Key -3 already exists in tree"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(AvlTreeError::KeyNotFound(1).is_not_found());
        assert!(AvlTreeError::DuplicateKey(1).is_duplicate());
        assert!(!AvlTreeError::DuplicateKey(1).is_not_found());
    }

    #[test]
    fn test_with_context_wraps_integrity_errors() {
        let err: AvlResult<()> = Err(AvlTreeError::DataIntegrityError("bad height".to_string()));
        let wrapped = err.with_operation("insert").unwrap_err();
        match wrapped {
            AvlTreeError::DataIntegrityError(msg) => {
                assert!(msg.contains("Operation 'insert'"));
                assert!(msg.contains("bad height"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_with_context_preserves_key_errors() {
        let err: AvlResult<()> = Err(AvlTreeError::KeyNotFound(42));
        assert_eq!(
            err.with_context("remove").unwrap_err(),
            AvlTreeError::KeyNotFound(42)
        );
    }
}
