use crate::identity::Identity;
use crate::models::{Dataset, UserRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::{env, fmt};
use thiserror::Error;
use tokio::fs;
use tracing::error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record query failed: {0}")]
    QueryFailed(String),
    #[error("record upsert failed: {0}")]
    UpsertFailed(String),
}

/// The external record store: one payload per email, create-or-replace.
/// A missing record is `Ok(None)`, never an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn query(&self, identity: &Identity) -> Result<Option<UserRecord>, StoreError>;
    async fn upsert(&self, identity: &Identity, dataset: &Dataset) -> Result<(), StoreError>;
}

/// Fetches the saved series for a freshly captured identity. Query failures
/// degrade to "nothing saved": the dashboard still renders with defaults and
/// no overwrite prompt gets armed off a failed load.
pub async fn load_existing(store: &dyn RecordStore, identity: &Identity) -> Option<Dataset> {
    match store.query(identity).await {
        Ok(Some(record)) => Some(record.dataset),
        Ok(None) => None,
        Err(err) => {
            error!("failed to load saved data for {identity}: {err}");
            None
        }
    }
}

/// Picks the backend from the environment: `VOLUME_STORE_URL` selects the
/// remote record service, otherwise records live in a local JSON file at
/// `APP_DATA_PATH` (default `data/records.json`).
pub fn resolve_store() -> Arc<dyn RecordStore> {
    if let Ok(url) = env::var("VOLUME_STORE_URL") {
        return Arc::new(HttpRecordStore::new(url));
    }

    let path = env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/records.json"));
    Arc::new(FileRecordStore::new(path))
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordFile {
    records: BTreeMap<String, UserRecord>,
}

/// Record store backed by a single JSON file, keyed by email.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_file(&self) -> Result<RecordFile, String> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| err.to_string()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(RecordFile::default()),
            Err(err) => Err(err.to_string()),
        }
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn query(&self, identity: &Identity) -> Result<Option<UserRecord>, StoreError> {
        let file = self.read_file().await.map_err(StoreError::QueryFailed)?;
        Ok(file.records.get(identity.as_str()).cloned())
    }

    async fn upsert(&self, identity: &Identity, dataset: &Dataset) -> Result<(), StoreError> {
        let mut file = self.read_file().await.map_err(StoreError::UpsertFailed)?;
        file.records.insert(
            identity.as_str().to_string(),
            UserRecord {
                email: identity.as_str().to_string(),
                dataset: dataset.clone(),
            },
        );

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StoreError::UpsertFailed(err.to_string()))?;
        }
        let payload =
            serde_json::to_vec_pretty(&file).map_err(|err| StoreError::UpsertFailed(err.to_string()))?;
        fs::write(&self.path, payload)
            .await
            .map_err(|err| StoreError::UpsertFailed(err.to_string()))?;
        Ok(())
    }
}

/// Record store backed by a remote record service speaking JSON over HTTP:
/// `GET`/`PUT {base}/records/{email}`, 404 meaning no record yet.
pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecordStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn record_url(&self, identity: &Identity) -> String {
        format!("{}/records/{}", self.base_url, identity.as_str())
    }
}

impl fmt::Debug for HttpRecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRecordStore")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn query(&self, identity: &Identity) -> Result<Option<UserRecord>, StoreError> {
        let response = self
            .client
            .get(self.record_url(identity))
            .send()
            .await
            .map_err(|err| StoreError::QueryFailed(err.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::QueryFailed(format!(
                "store returned {}",
                response.status()
            )));
        }

        let record = response
            .json()
            .await
            .map_err(|err| StoreError::QueryFailed(err.to_string()))?;
        Ok(Some(record))
    }

    async fn upsert(&self, identity: &Identity, dataset: &Dataset) -> Result<(), StoreError> {
        let record = UserRecord {
            email: identity.as_str().to_string(),
            dataset: dataset.clone(),
        };
        let response = self
            .client
            .put(self.record_url(identity))
            .json(&record)
            .send()
            .await
            .map_err(|err| StoreError::UpsertFailed(err.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::UpsertFailed(format!(
                "store returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
