mod clipboard;
mod errors;
mod local_files;

use std::path::{Path, PathBuf};

pub use clipboard::PanelClipboard;
pub use errors::BridgeError;
pub use local_files::LocalFileBridge;

/// Moves whole files between the user and the application.
pub trait FileBridge {
    /// Reads the full text of a file the user picked.
    fn read_text(&self, path: &Path) -> Result<String, BridgeError>;
    /// Hands `contents` to the user under `file_name` and returns where it ended up.
    fn offer_download(&self, file_name: &str, contents: &str) -> Result<PathBuf, BridgeError>;
}

/// Accepts a block of text for the user to copy.
pub trait ClipboardBridge {
    fn copy(&mut self, text: &str) -> Result<(), BridgeError>;
}
