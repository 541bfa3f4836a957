//! Firestore REST client - one authenticated handle to one database.

use std::env;
use std::time::Duration;

use folio_core::error::StoreError;

use super::document::{Document, ListDocumentsResponse};

/// Firestore connection configuration.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Cloud project that owns the database.
    pub project_id: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Database id within the project.
    pub database_id: String,
    /// Base endpoint. Overridable so tests can point at a local server.
    pub endpoint: String,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: api_key.into(),
            database_id: "(default)".to_string(),
            endpoint: "https://firestore.googleapis.com".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `PROJECT_ID` and `API_KEY` are required. `FIRESTORE_DATABASE`,
    /// `FIRESTORE_ENDPOINT` and `FIRESTORE_TIMEOUT_SECS` override the
    /// defaults. Values are consumed as-is, without validation.
    pub fn from_env() -> Result<Self, StoreError> {
        let project_id = env::var("PROJECT_ID")
            .map_err(|_| StoreError::Config("PROJECT_ID not set".to_string()))?;
        let api_key =
            env::var("API_KEY").map_err(|_| StoreError::Config("API_KEY not set".to_string()))?;

        let mut config = Self::new(project_id, api_key);

        if let Ok(database_id) = env::var("FIRESTORE_DATABASE") {
            config.database_id = database_id;
        }
        if let Ok(endpoint) = env::var("FIRESTORE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(secs) = env::var("FIRESTORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

/// Client bound to one Firestore database.
///
/// Holds a single pooled HTTP client; build it once at process start and
/// share the handle across calls. Timeout and cancellation policy belong
/// to the HTTP client, not to the stores built on top.
pub struct FirestoreClient {
    http: reqwest::Client,
    documents_url: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let documents_url = format!(
            "{}/v1/projects/{}/databases/{}/documents",
            config.endpoint.trim_end_matches('/'),
            config.project_id,
            config.database_id
        );

        tracing::info!(url = %documents_url, "Firestore client initialized");

        Ok(Self {
            http,
            documents_url,
            api_key: config.api_key,
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::new(FirestoreConfig::from_env()?)
    }

    /// Fetch every document in a collection.
    ///
    /// One GET, no pagination; the layer above treats the result as the
    /// whole collection.
    pub(crate) async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}/{}", self.documents_url, collection);
        tracing::debug!(collection = %collection, "Listing documents");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "list {} returned {}",
                collection,
                response.status()
            )));
        }

        let body: ListDocumentsResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        Ok(body.documents)
    }

    /// Fetch one document by id. An absent document is `None`.
    pub(crate) async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let url = format!("{}/{}/{}", self.documents_url, collection, id);
        tracing::debug!(collection = %collection, id = %id, "Fetching document");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "get {}/{} returned {}",
                collection,
                id,
                response.status()
            )));
        }

        let document = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        Ok(Some(document))
    }
}
