use anyhow::{Context, Result};
use remote_pictures::{AssetStore, DiskStore, paths, sanitize};
use url::Url;

use crate::config::FileConfig;

/// Walk the sync derivation without network access: print each picture's
/// computed local path, binding name, and mirror state.
pub fn run(file_config: FileConfig) -> Result<()> {
    let config = file_config.into_sync_config();
    let store = DiskStore::new(config.layout.clone());

    for collection in &config.collections {
        println!("{}:", collection.id);

        for picture in &collection.pictures {
            let url = Url::parse(&picture.url)
                .with_context(|| format!("invalid url `{}`", picture.url))?;
            let extension = paths::extension_from_url(&url).with_context(|| {
                format!("url `{}` has no file extension in its final path segment", picture.url)
            })?;
            let file_name = paths::asset_file_name(&collection.id, &picture.id, &extension);

            let state = if store.asset_exists(&file_name) {
                "cached"
            } else {
                "needs download"
            };
            println!(
                "  {} -> {} (binding {}) [{state}]",
                picture.id,
                config.layout.asset_path(&file_name).display(),
                sanitize(&picture.id),
            );
        }
    }

    Ok(())
}
