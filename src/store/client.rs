//! Store Client Contract
//!
//! The commands the service issues against the persisted quote list.
//! Implementations perform no retries; every failure is handed back to the caller.

use async_trait::async_trait;

use super::error::StoreError;

#[async_trait]
pub trait ListStore: Send + Sync {
    /// Number of entries in the list under `key` (0 if the key is absent).
    async fn len(&self, key: &str) -> Result<usize, StoreError>;

    /// Appends all `values` in order with a single command.
    ///
    /// # Returns
    /// The list length reported by the store after the append.
    async fn append_all(&self, key: &str, values: &[&str]) -> Result<usize, StoreError>;

    /// Removes the key and its whole list.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Entry at zero-based `index`. Fails with `IndexOutOfRange` past the end.
    async fn read_at(&self, key: &str, index: usize) -> Result<String, StoreError>;

    /// Liveness check, returns the store's acknowledgment (e.g. "PONG").
    async fn ping(&self) -> Result<String, StoreError>;
}
