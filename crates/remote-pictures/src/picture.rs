use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::paths::OutputLayout;

/// One remote image resource, identified by an id unique within its
/// collection. Immutable once declared.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Picture {
    /// Author-supplied name. Sanitized into the export binding; the raw
    /// form stays the consumer-facing alias.
    pub id: String,
    /// Absolute source URL. The asset's file extension is taken from the
    /// final segment of its path.
    pub url: String,
}

/// A named group of remote pictures sharing one generated output module.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Collection {
    /// Output file stem and log grouping key.
    pub id: String,
    /// Processed in declared order; the order is preserved into the
    /// generated module. Duplicate ids within a collection are last-wins.
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

/// Request configuration forwarded verbatim to the downloader.
/// The core never interprets these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DownloadOptions {
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

/// Root input for one sync invocation. Constructed once by the caller and
/// read-only during the run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub collections: Vec<Collection>,
    pub download_options: Option<DownloadOptions>,
    pub layout: OutputLayout,
}

/// Per-invocation flags, passed explicitly rather than read from ambient
/// process state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunContext {
    /// Bypass the existence check and re-download every asset.
    pub force_refresh: bool,
    /// Append the decorative "ready to use" banner to the run's feedback.
    pub ready_banner: bool,
}
