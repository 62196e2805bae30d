use anyhow::Result;
use remote_pictures::{DiskStore, Feedback, RunContext, sync};
use remote_pictures_http::HttpDownloader;

use crate::config::FileConfig;

/// Print feedback items to stderr.
fn print_feedback(feedback: &[Feedback]) {
    for item in feedback {
        eprintln!("{item}");
    }
}

/// Run a full sync and print its report. Per-picture failures are reported
/// but do not fail the command; mirroring is best-effort.
pub async fn run(file_config: FileConfig, force: bool, dev_mode: bool) -> Result<()> {
    let config = file_config.into_sync_config();
    let ctx = RunContext {
        force_refresh: force,
        ready_banner: dev_mode,
    };
    let downloader = HttpDownloader::new();
    let store = DiskStore::new(config.layout.clone());

    let report = sync(&config, &ctx, &downloader, &store).await?;

    print_feedback(&report.feedback);
    println!(
        "Downloaded {} pictures ({} skipped, {} failed).",
        report.downloaded, report.skipped, report.failed
    );

    Ok(())
}
