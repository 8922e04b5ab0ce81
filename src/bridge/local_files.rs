use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::bridge::errors::BridgeError;
use crate::bridge::FileBridge;

/// Reads picked files from anywhere and drops downloads into an export directory.
pub struct LocalFileBridge {
    export_directory: PathBuf
}

impl LocalFileBridge {
    pub fn new(export_directory: impl Into<PathBuf>) -> Self {
        Self {
            export_directory: export_directory.into()
        }
    }
}

impl FileBridge for LocalFileBridge {
    fn read_text(&self, path: &Path) -> Result<String, BridgeError> {
        fs::read_to_string(path).map_err(|source| BridgeError::Read { path: path.to_path_buf(), source })
    }

    fn offer_download(&self, file_name: &str, contents: &str) -> Result<PathBuf, BridgeError> {
        let mut components = Path::new(file_name).components();
        let is_plain_name = matches!((components.next(), components.next()), (Some(Component::Normal(_)), None));

        if !is_plain_name {
            return Err(BridgeError::InvalidFileName { file_name: file_name.to_string() });
        }

        fs::create_dir_all(&self.export_directory)
            .map_err(|source| BridgeError::Write { path: self.export_directory.clone(), source })?;

        let path = self.export_directory.join(file_name);

        fs::write(&path, contents).map_err(|source| BridgeError::Write { path: path.clone(), source })?;

        info!("Wrote [{}] bytes to [{}]", contents.len(), path.display());

        Ok(path)
    }
}
