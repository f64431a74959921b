use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::{common::entities::app_errors::CoreError, store::ports::KeyValueStorage};

/// One JSON file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CoreError::Invalid(format!("invalid storage key '{}'", key)));
        }

        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                Err(CoreError::StorageError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let temp_path = self.data_dir.join(format!(".{}.json.tmp", key));

        let storage_error = |e: std::io::Error| {
            tracing::error!("Failed to write {}: {}", path.display(), e);
            CoreError::StorageError(format!("Failed to write {}: {}", path.display(), e))
        };

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(storage_error)?;
        fs::write(&temp_path, value).await.map_err(storage_error)?;
        // rename is atomic on the same filesystem, readers never see a partial file
        fs::rename(&temp_path, &path)
            .await
            .map_err(storage_error)?;

        tracing::debug!("Wrote {}", path.display());

        Ok(())
    }
}
