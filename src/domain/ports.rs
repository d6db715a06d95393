use crate::error::Result;
use async_trait::async_trait;

/// String key/value storage used to persist reports.
///
/// Implementations must be safe to share across tasks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns every key starting with `prefix`, in ascending order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
    /// Removes `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

pub type KeyValueStoreBox = Box<dyn KeyValueStore>;
