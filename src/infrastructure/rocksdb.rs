use crate::domain::ports::KeyValueStore;
use crate::error::{CommissionError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Direction, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Column Family holding the persisted key/value entries.
pub const CF_ENTRIES: &str = "entries";

/// A persistent store implementation using RocksDB.
///
/// Keys and values are stored as UTF-8 bytes in their own column family, which
/// keeps them sorted so prefix listing is a bounded forward scan.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_entries = ColumnFamilyDescriptor::new(CF_ENTRIES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_entries])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn entries_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_ENTRIES).ok_or_else(|| {
            CommissionError::InternalError(Box::new(std::io::Error::other(
                "Entries column family not found",
            )))
        })
    }
}

fn decode(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| {
        CommissionError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Stored value is not UTF-8: {}", e),
        )))
    })
}

#[async_trait]
impl KeyValueStore for RocksDBStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let cf = self.entries_cf()?;
        let iter = self.db.iterator_cf(
            &cf,
            IteratorMode::From(prefix.as_bytes(), Direction::Forward),
        );

        let mut keys = Vec::new();
        for item in iter {
            let (key, _value) = item?;
            if !key.starts_with(prefix.as_bytes()) {
                break;
            }
            keys.push(decode(&key)?);
        }
        debug!(prefix, count = keys.len(), "listed rocksdb keys");
        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let cf = self.entries_cf()?;
        match self.db.get_cf(&cf, key.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let cf = self.entries_cf()?;
        self.db.put_cf(&cf, key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let cf = self.entries_cf()?;
        self.db.delete_cf(&cf, key.as_bytes())?;
        Ok(())
    }
}
