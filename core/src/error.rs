//! Error types for store operations.

use crate::types::ItemId;

/// Errors returned by `ItemStore` lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No item in the collection carries this id.
    #[error("item {0} not found")]
    NotFound(ItemId),
}
