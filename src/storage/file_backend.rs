use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::storage::errors::PersistenceError;
use crate::storage::PersistenceBackend;

/// Backend keeping one `<key>.json` file per key inside a data directory.
pub struct FileBackend {
    directory: PathBuf
}

impl FileBackend {
    /// The directory is created on the first save.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into()
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(PersistenceError::InvalidKey { key: key.to_string() });
        }

        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl PersistenceBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("Nothing saved at [{}]", path.display());
                Ok(None)
            }
            Err(source) => Err(PersistenceError::Read { path, source })
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.directory)
            .map_err(|source| PersistenceError::Write { path: self.directory.clone(), source })?;

        //NOTE: Staged write then rename, the key always holds either the old or the new snapshot in full
        let staging = path.with_extension("json.tmp");

        fs::write(&staging, value)
            .map_err(|source| PersistenceError::Write { path: staging.clone(), source })?;

        fs::rename(&staging, &path)
            .map_err(|source| PersistenceError::Write { path: path.clone(), source })?;

        debug!("Saved [{}] bytes to [{}]", value.len(), path.display());

        Ok(())
    }
}
