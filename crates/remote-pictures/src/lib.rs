pub mod download;
pub mod emit;
pub mod feedback;
pub mod ident;
pub mod paths;
pub mod picture;
pub mod store;
pub mod sync;

pub use download::{DownloadError, Downloader};
pub use emit::BindingRecord;
pub use feedback::Feedback;
pub use ident::{is_legal_binding, sanitize};
pub use paths::OutputLayout;
pub use picture::{Collection, DownloadOptions, Picture, RunContext, SyncConfig};
pub use store::{AssetStore, DiskStore, StoreError};
pub use sync::{SyncError, SyncReport, sync};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
