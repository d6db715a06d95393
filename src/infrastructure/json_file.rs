use crate::domain::ports::KeyValueStore;
use crate::error::{CommissionError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// A key/value store kept in a single JSON object file.
///
/// The whole map is loaded on open and rewritten after every `set` or `delete`.
/// Writes go to a temporary file in the same directory which then replaces the
/// target, so a crash never leaves a half-written file behind.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), entries = entries.len(), "opened json store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path)
            .map_err(|e| CommissionError::Io(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = self.entries.lock().await;
        Ok(entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
        self.flush(&entries)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_json_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("reports.json")).unwrap();

        assert!(store.list("").await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_json_store_persists_across_opens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("report:1", "first".to_string()).await.unwrap();
        store.set("report:2", "second".to_string()).await.unwrap();
        store.delete("report:1").await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.list("report:").await.unwrap(), vec!["report:2"]);
        assert_eq!(
            reopened.get("report:2").await.unwrap().as_deref(),
            Some("second")
        );
    }

    #[tokio::test]
    async fn test_json_store_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(CommissionError::Json(_))
        ));
    }
}
