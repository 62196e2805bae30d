use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use remote_pictures::{Collection, DownloadOptions, OutputLayout, SyncConfig};
use serde::{Deserialize, Serialize};

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "remote-pictures.toml";

/// On-disk configuration. The layout fields default to the conventional
/// web-project shape: assets under `public/remote/`, generated modules
/// importable as `remote-pictures/<collection>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    /// Public asset root; mirrored files land under `<public_dir>/remote/`.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Where generated modules and declaration files are written.
    #[serde(default = "default_module_dir")]
    pub module_dir: PathBuf,

    /// Path prefix resolving from `module_dir` back to the directory that
    /// contains `public_dir`.
    #[serde(default = "default_import_prefix")]
    pub import_prefix: String,

    /// Import specifier shown in the readiness banner.
    #[serde(default = "default_specifier")]
    pub specifier: String,

    /// Request options forwarded verbatim to the downloader.
    pub download: Option<DownloadOptions>,

    #[serde(default)]
    pub collections: Vec<Collection>,
}

fn default_public_dir() -> PathBuf {
    "public".into()
}

fn default_module_dir() -> PathBuf {
    "node_modules/remote-pictures".into()
}

fn default_import_prefix() -> String {
    "../..".into()
}

fn default_specifier() -> String {
    "remote-pictures".into()
}

impl FileConfig {
    pub fn into_sync_config(self) -> SyncConfig {
        SyncConfig {
            collections: self.collections,
            download_options: self.download,
            layout: OutputLayout {
                public_dir: self.public_dir,
                module_dir: self.module_dir,
                import_prefix: self.import_prefix,
                specifier: self.specifier,
            },
        }
    }
}

/// Load and parse the config file. A missing or malformed file is a
/// structural failure; there is nothing useful to sync without one.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_default_layout() {
        let toml_str = r#"
[[collections]]
id = "heroes"

[[collections.pictures]]
id = "banner"
url = "https://cdn.example.com/banner.png"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.module_dir, PathBuf::from("node_modules/remote-pictures"));
        assert_eq!(config.import_prefix, "../..");
        assert_eq!(config.specifier, "remote-pictures");
        assert!(config.download.is_none());
        assert_eq!(config.collections.len(), 1);
        assert_eq!(config.collections[0].id, "heroes");
        assert_eq!(config.collections[0].pictures[0].id, "banner");
    }

    #[test]
    fn layout_fields_can_be_overridden() {
        let toml_str = r#"
public_dir = "static"
module_dir = "src/generated"
import_prefix = "../.."
specifier = "generated"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.public_dir, PathBuf::from("static"));
        assert_eq!(config.module_dir, PathBuf::from("src/generated"));
        assert_eq!(config.specifier, "generated");
        assert!(config.collections.is_empty());
    }

    #[test]
    fn download_options_parse_from_table() {
        let toml_str = r#"
[download]
timeout_secs = 30
user_agent = "picture-bot/1.0"

[download.headers]
Authorization = "Bearer sekrit"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let download = config.download.unwrap();
        assert_eq!(download.timeout_secs, Some(30));
        assert_eq!(download.user_agent.as_deref(), Some("picture-bot/1.0"));
        assert_eq!(
            download.headers.get("Authorization").map(String::as_str),
            Some("Bearer sekrit")
        );
    }

    #[test]
    fn picture_order_is_preserved() {
        let toml_str = r#"
[[collections]]
id = "heroes"

[[collections.pictures]]
id = "zebra"
url = "https://cdn.example.com/zebra.png"

[[collections.pictures]]
id = "apple"
url = "https://cdn.example.com/apple.png"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let ids: Vec<&str> = config.collections[0]
            .pictures
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["zebra", "apple"]);
    }

    #[test]
    fn into_sync_config_carries_everything_through() {
        let toml_str = r#"
public_dir = "static"

[[collections]]
id = "icons"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let sync_config = config.into_sync_config();
        assert_eq!(sync_config.layout.public_dir, PathBuf::from("static"));
        assert_eq!(sync_config.collections.len(), 1);
        assert!(sync_config.download_options.is_none());
    }
}
