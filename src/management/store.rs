use std::{collections::HashMap, io, path::PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Fixed key under which the single token record is stored. The backend
/// supports exactly one authorized identity, so this is the only key the
/// lifecycle manager ever touches.
pub const TOKEN_STORE_KEY: &str = "spotify_token";

/// A generic string key-value store holding serialized records.
///
/// Absence of a value is not an error; `get` returns `Ok(None)` for keys
/// that were never written.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self, key: &str) -> io::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Store keeping one JSON file per key under a root directory.
pub struct FileTokenStore {
    root: PathBuf,
}

impl FileTokenStore {
    pub fn new(root: PathBuf) -> Self {
        FileTokenStore { root }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        match async_fs::read_to_string(self.entry_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        async_fs::create_dir_all(&self.root).await?;
        async_fs::write(self.entry_path(key), value).await
    }
}

/// In-memory store. Backs the lifecycle tests and doubles as an ephemeral
/// store for deployments that can re-authorize on restart.
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        MemoryTokenStore {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
