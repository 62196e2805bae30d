use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

/// Subdirectory of the public root that holds mirrored assets.
pub const REMOTE_DIR: &str = "remote";

/// File extension of the URL path's final segment, without the dot.
/// Returns `None` when the final segment has no extension (including
/// directory-style URLs ending in `/`).
pub fn extension_from_url(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let (_, extension) = segment.rsplit_once('.')?;
    if extension.is_empty() {
        return None;
    }
    Some(extension.to_owned())
}

/// Local file name for a picture: `<collectionId>-<pictureId>.<ext>`.
///
/// Deterministic and stable across runs for the same inputs, which is what
/// makes an existing file a valid cache hit.
pub fn asset_file_name(collection_id: &str, picture_id: &str, extension: &str) -> String {
    format!("{collection_id}-{picture_id}.{extension}")
}

/// Where synced assets and generated modules land, and how generated import
/// lines reach back from the module directory to the asset root.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputLayout {
    /// Public asset root; asset bytes land under `<public_dir>/remote/`.
    pub public_dir: PathBuf,
    /// Directory receiving `<collection>.js` and `<collection>.d.ts`.
    pub module_dir: PathBuf,
    /// Path prefix that resolves from `module_dir` back to the directory
    /// containing `public_dir`.
    pub import_prefix: String,
    /// Import specifier shown in the readiness banner.
    pub specifier: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            module_dir: PathBuf::from("node_modules/remote-pictures"),
            import_prefix: "../..".to_owned(),
            specifier: "remote-pictures".to_owned(),
        }
    }
}

impl OutputLayout {
    /// On-disk location of a mirrored asset.
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.public_dir.join(REMOTE_DIR).join(file_name)
    }

    /// On-disk location of a collection's generated re-export module.
    pub fn module_path(&self, collection_id: &str) -> PathBuf {
        self.module_dir.join(format!("{collection_id}.js"))
    }

    /// On-disk location of a collection's generated declaration file.
    pub fn types_path(&self, collection_id: &str) -> PathBuf {
        self.module_dir.join(format!("{collection_id}.d.ts"))
    }

    /// Path a generated import line uses to reference an asset from within
    /// the module directory.
    pub fn import_path(&self, file_name: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.import_prefix,
            path_to_slashes(&self.public_dir),
            REMOTE_DIR,
            file_name
        )
    }
}

// Import specifiers always use forward slashes, whatever the host's path
// separator is.
fn path_to_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
