//! Error types for the drag-and-drop system.
//!
//! None of these escape the pointer event entry points: the controller logs
//! and absorbs them so the host never sees a failure mid-gesture. They are
//! returned from the explicit APIs (item mounting, the reorder engine, the
//! transition port) where the caller can act on them.

use crate::item::ItemId;
use crate::ports::TransitionHandle;

/// Errors produced by the reorder engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// An index does not exist in the ordered list.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the list.
        len: usize,
    },
    /// An id in the ordered list has no item record.
    UnknownItem(ItemId),
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for list of length {}", index, len)
            }
            ReorderError::UnknownItem(id) => write!(f, "Item {:?} has no record", id),
        }
    }
}

impl std::error::Error for ReorderError {}

/// Result type for reorder operations.
pub type ReorderResult<T> = Result<T, ReorderError>;

/// Errors reported by a [`TransitionPort`](crate::ports::TransitionPort).
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// The handle does not refer to an in-flight transition.
    UnknownHandle(TransitionHandle),
    /// The destination cannot be animated to (NaN or infinite coordinates).
    InvalidDestination,
    /// The animation backend refused to start the transition.
    Unavailable(String),
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionError::UnknownHandle(handle) => {
                write!(f, "Transition {:?} is not in flight", handle)
            }
            TransitionError::InvalidDestination => write!(f, "Invalid transition destination"),
            TransitionError::Unavailable(msg) => write!(f, "Transition unavailable: {}", msg),
        }
    }
}

impl std::error::Error for TransitionError {}

/// Result type for transition port calls.
pub type TransitionResult<T> = Result<T, TransitionError>;

/// Errors from the drag controller's explicit APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    /// An item with this id is already mounted.
    DuplicateItem(ItemId),
    /// No item with this id is mounted.
    UnknownItem(ItemId),
    /// Layout measurement returned nothing for the item.
    MeasureFailed(ItemId),
    /// Reorder engine rejected the request.
    Reorder(ReorderError),
}

impl std::fmt::Display for DragError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragError::DuplicateItem(id) => write!(f, "Item {:?} is already mounted", id),
            DragError::UnknownItem(id) => write!(f, "Item {:?} is not mounted", id),
            DragError::MeasureFailed(id) => write!(f, "Could not measure item {:?}", id),
            DragError::Reorder(err) => write!(f, "Reorder failed: {}", err),
        }
    }
}

impl std::error::Error for DragError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DragError::Reorder(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReorderError> for DragError {
    fn from(err: ReorderError) -> Self {
        DragError::Reorder(err)
    }
}

/// Result type for drag controller operations.
pub type DragResult<T> = Result<T, DragError>;
