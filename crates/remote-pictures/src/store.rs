use std::fs;
use std::path::PathBuf;

use crate::paths::OutputLayout;

/// Errors from the filesystem collaborator. Always fatal to the run; there
/// is no partial-write recovery.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Filesystem collaborator for the orchestrator: the presence check backing
/// cache decisions, plus the three write targets.
pub trait AssetStore {
    /// True if the asset file is already mirrored locally.
    fn asset_exists(&self, file_name: &str) -> bool;

    /// Write asset bytes, overwriting any existing content.
    fn write_asset(&self, file_name: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Write the generated re-export module for a collection.
    fn write_module(&self, collection_id: &str, contents: &str) -> Result<(), StoreError>;

    /// Write the generated type declarations for a collection.
    fn write_types(&self, collection_id: &str, contents: &str) -> Result<(), StoreError>;
}

/// Production store writing through an `OutputLayout`. Creates parent
/// directories as needed.
pub struct DiskStore {
    layout: OutputLayout,
}

impl DiskStore {
    pub fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }

    fn write(path: PathBuf, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;
        Ok(())
    }
}

impl AssetStore for DiskStore {
    fn asset_exists(&self, file_name: &str) -> bool {
        self.layout.asset_path(file_name).exists()
    }

    fn write_asset(&self, file_name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        Self::write(self.layout.asset_path(file_name), bytes)
    }

    fn write_module(&self, collection_id: &str, contents: &str) -> Result<(), StoreError> {
        Self::write(self.layout.module_path(collection_id), contents.as_bytes())
    }

    fn write_types(&self, collection_id: &str, contents: &str) -> Result<(), StoreError> {
        Self::write(self.layout.types_path(collection_id), contents.as_bytes())
    }
}
