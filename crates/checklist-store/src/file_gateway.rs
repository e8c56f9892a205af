use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GatewayError;
use crate::gateway::KeyValueStore;

/// Directory-backed key-value store: one file per key.
///
/// Key bytes outside `[A-Za-z0-9._-]` are escaped as `%XX`, so `@toDos`
/// lives in `%40toDos`. Writes are atomic (temp file + rename).
#[derive(Debug, Clone)]
pub struct FileGateway {
    dir: PathBuf,
}

impl FileGateway {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, GatewayError> {
        Ok(self.dir.join(file_name_for_key(key)?))
    }
}

/// Map a key to a file name that cannot escape the gateway directory.
fn file_name_for_key(key: &str) -> Result<String, GatewayError> {
    if key.is_empty() || key == "." || key == ".." {
        return Err(GatewayError::InvalidKey(key.to_string()));
    }
    let mut name = String::with_capacity(key.len());
    for b in key.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-') {
            name.push(b as char);
        } else {
            let _ = write!(name, "%{:02X}", b);
        }
    }
    Ok(name)
}

fn write_atomic(dir: &Path, path: &Path, value: &[u8]) -> Result<(), GatewayError> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(value)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| GatewayError::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileGateway {
    async fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GatewayError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        let path = self.key_path(key)?;
        let dir = self.dir.clone();
        let value = value.as_bytes().to_vec();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &path, &value))
            .await
            .map_err(|e| GatewayError::Unavailable(e.to_string()))?
    }
}
