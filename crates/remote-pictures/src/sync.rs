use url::Url;

use crate::download::Downloader;
use crate::emit::{self, BindingRecord};
use crate::feedback::Feedback;
use crate::ident::sanitize;
use crate::paths;
use crate::picture::{RunContext, SyncConfig};
use crate::store::{AssetStore, StoreError};

/// Structural failures that abort a sync invocation.
///
/// Per-picture download failures are not errors at this level; they are
/// reported through `SyncReport::feedback` and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("url `{0}` has no file extension in its final path segment")]
    NoExtension(String),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Outcome of one sync invocation.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub downloaded: u64,
    pub skipped: u64,
    pub failed: u64,
    pub feedback: Vec<Feedback>,
}

/// Mirror every declared picture and regenerate each collection's module
/// and declaration file.
///
/// Collections and pictures are processed strictly in declared order, each
/// download awaited to completion before the next picture is considered. A
/// picture whose asset file already exists is skipped without network
/// access unless `ctx.force_refresh` is set. Failed downloads are recorded
/// and skipped; the generated modules are always rewritten, so re-running
/// with an unchanged config and an intact mirror performs zero network
/// requests and produces identical output text.
pub async fn sync(
    config: &SyncConfig,
    ctx: &RunContext,
    downloader: &dyn Downloader,
    store: &dyn AssetStore,
) -> Result<SyncReport, SyncError> {
    let options = config.download_options.clone().unwrap_or_default();
    let mut report = SyncReport::default();

    for collection in &config.collections {
        report
            .feedback
            .push(Feedback::info(format!("Downloading pictures of {}:", collection.id)));

        let mut records = Vec::with_capacity(collection.pictures.len());

        for picture in &collection.pictures {
            let url = Url::parse(&picture.url).map_err(|e| SyncError::InvalidUrl {
                url: picture.url.clone(),
                reason: e.to_string(),
            })?;
            let extension = paths::extension_from_url(&url)
                .ok_or_else(|| SyncError::NoExtension(picture.url.clone()))?;
            let file_name = paths::asset_file_name(&collection.id, &picture.id, &extension);

            // Bindings are emitted even when the download later fails: a
            // missing asset only breaks consumers that import it.
            records.push(BindingRecord {
                binding: sanitize(&picture.id),
                alias: picture.id.clone(),
                import_path: config.layout.import_path(&file_name),
            });

            if store.asset_exists(&file_name) && !ctx.force_refresh {
                report
                    .feedback
                    .push(Feedback::info(format!("Skipping {}", picture.id)));
                report.skipped += 1;
                continue;
            }

            report
                .feedback
                .push(Feedback::info(format!("Downloading {}", picture.id)));

            match downloader.download(&url, &options).await {
                Ok(bytes) => {
                    store.write_asset(&file_name, &bytes)?;
                    report.downloaded += 1;
                }
                Err(e) => {
                    report.feedback.push(Feedback::error(format!(
                        "failed to download {}: {e}",
                        picture.url
                    )));
                    report.failed += 1;
                }
            }
        }

        store.write_module(&collection.id, &emit::render_module(&records))?;
        store.write_types(&collection.id, &emit::render_types(&records))?;

        if ctx.ready_banner {
            report.feedback.push(Feedback::info(format!(
                "Collection {} ready to use:\n{}",
                collection.id,
                emit::ready_banner(&collection.id, &config.layout.specifier)
            )));
        }
    }

    Ok(report)
}
