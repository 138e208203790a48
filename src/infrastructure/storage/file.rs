use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::services::storage::KeyValueStorage;

/// Key/value storage kept as one JSON object on disk. Writes go to a sibling
/// temp file and are renamed into place.
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_raw(&self) -> anyhow::Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read {}", self.path.display())),
        }
    }

    async fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match self.read_raw().await? {
            Some(raw) => serde_json::from_slice(&raw)
                .with_context(|| format!("failed to parse {}", self.path.display())),
            None => Ok(BTreeMap::new()),
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(items)?).await?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        // Unparseable contents are replaced; IO failures are not.
        let mut items = match self.read_raw().await? {
            Some(raw) => serde_json::from_slice(&raw).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "replacing unparseable storage file"
                );
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items).await
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_all().await?;
        if items.remove(key).is_some() {
            self.write_all(&items).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn persists_items_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let storage = FileStorage::new(&path);
        assert!(storage.get_item("devtool-state").await.unwrap().is_none());
        storage.set_item("devtool-state", r#"{"position":"top-left"}"#).await.unwrap();
        storage.set_item("other", "1").await.unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get_item("devtool-state").await.unwrap().as_deref(),
            Some(r#"{"position":"top-left"}"#)
        );

        reopened.remove_item("other").await.unwrap();
        assert!(FileStorage::new(&path).get_item("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_on_read_and_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.get_item("devtool-state").await.is_err());

        storage.set_item("devtool-state", "{}").await.unwrap();
        assert_eq!(storage.get_item("devtool-state").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn unreadable_path_fails_writes_without_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::create_dir(&path).await.unwrap();
        tokio::fs::write(path.join("keep"), "1").await.unwrap();

        let storage = FileStorage::new(&path);

        assert!(storage.set_item("devtool-state", "{}").await.is_err());
        assert!(!dir.path().join("state.tmp").exists());
        assert!(path.join("keep").exists());
    }
}
