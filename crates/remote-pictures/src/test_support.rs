use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use url::Url;

use crate::download::{DownloadError, Downloader};
use crate::picture::DownloadOptions;
use crate::store::{AssetStore, StoreError};

/// In-memory store for orchestrator tests. Seed assets to simulate cache
/// hits; every write is recorded and written assets count as present on
/// later checks, so one instance models a persistent mirror across runs.
#[derive(Default)]
pub struct MemoryStore {
    existing: Mutex<HashSet<String>>,
    assets: Mutex<BTreeMap<String, Vec<u8>>>,
    modules: Mutex<BTreeMap<String, String>>,
    types: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an asset file as already present without content.
    pub fn seed_asset(&self, file_name: &str) {
        self.existing.lock().unwrap().insert(file_name.to_owned());
    }

    pub fn asset(&self, file_name: &str) -> Option<Vec<u8>> {
        self.assets.lock().unwrap().get(file_name).cloned()
    }

    pub fn module(&self, collection_id: &str) -> Option<String> {
        self.modules.lock().unwrap().get(collection_id).cloned()
    }

    pub fn types(&self, collection_id: &str) -> Option<String> {
        self.types.lock().unwrap().get(collection_id).cloned()
    }
}

impl AssetStore for MemoryStore {
    fn asset_exists(&self, file_name: &str) -> bool {
        self.existing.lock().unwrap().contains(file_name)
    }

    fn write_asset(&self, file_name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.existing.lock().unwrap().insert(file_name.to_owned());
        self.assets
            .lock()
            .unwrap()
            .insert(file_name.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn write_module(&self, collection_id: &str, contents: &str) -> Result<(), StoreError> {
        self.modules
            .lock()
            .unwrap()
            .insert(collection_id.to_owned(), contents.to_owned());
        Ok(())
    }

    fn write_types(&self, collection_id: &str, contents: &str) -> Result<(), StoreError> {
        self.types
            .lock()
            .unwrap()
            .insert(collection_id.to_owned(), contents.to_owned());
        Ok(())
    }
}

/// Scripted downloader: responds per URL from a fixed table and records
/// every request, so tests can assert on exactly what hit the network.
#[derive(Default)]
pub struct StaticDownloader {
    responses: BTreeMap<String, Result<Vec<u8>, u16>>,
    requests: Mutex<Vec<String>>,
}

impl StaticDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response for `url`.
    pub fn ok(mut self, url: &str, bytes: &[u8]) -> Self {
        self.responses.insert(url.to_owned(), Ok(bytes.to_vec()));
        self
    }

    /// Script a non-success HTTP status for `url`.
    pub fn status(mut self, url: &str, code: u16) -> Self {
        self.responses.insert(url.to_owned(), Err(code));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Downloader for StaticDownloader {
    async fn download(
        &self,
        url: &Url,
        _options: &DownloadOptions,
    ) -> Result<Vec<u8>, DownloadError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(code)) => Err(DownloadError::Status(*code)),
            None => Err(DownloadError::Network(format!(
                "no scripted response for {url}"
            ))),
        }
    }
}
