use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::{BackendError, RestaurantDocument, Result};

/// Narrow query/response contract against the document-search backend.
///
/// The query arrives already rendered into the backend's native JSON DSL and
/// hits are returned in exactly the order the backend ranked them.
/// Implementations make one attempt per call; retry policy belongs to the
/// caller, and the caller performs none.
pub trait SearchBackend {
    fn search(
        &self,
        body: Value,
    ) -> impl Future<Output = Result<Vec<RestaurantDocument>>> + Send;
}

/// Connection settings for the backend's `_search` endpoint.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    /// Index the restaurant documents live in.
    pub index: String,
    /// Document type within the index.
    pub doc_type: String,
    /// Upper bound on a single backend call. The call is the only blocking
    /// point per request, so an unbounded wait would pin the request forever.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9200".to_owned(),
            index: "restaurants".to_owned(),
            doc_type: "restaurants".to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl BackendConfig {
    /// Settings pointing at `base_url` with default index and timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn search_url(&self) -> String {
        format!(
            "{}/{}/{}/_search",
            self.base_url.trim_end_matches('/'),
            self.index,
            self.doc_type
        )
    }
}

/// HTTP implementation of [`SearchBackend`].
///
/// Wraps a single pooled client constructed once at startup; cloning shares
/// the pool, so one handle serves arbitrarily many concurrent requests.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpSearchBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

impl SearchBackend for HttpSearchBackend {
    async fn search(&self, body: Value) -> Result<Vec<RestaurantDocument>> {
        let url = self.config.search_url();
        debug!(%url, "Sending query to search backend");

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                %detail,
                "Search backend rejected the query"
            );
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let envelope: SearchResponse = response.json().await.map_err(BackendError::Decode)?;
        let hits = envelope.into_documents();
        debug!(hits = hits.len(), "Search backend returned hits");
        Ok(hits)
    }
}

/// Wire shape of the backend's hits envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_source")]
    source: RestaurantDocument,
}

impl SearchResponse {
    fn into_documents(self) -> Vec<RestaurantDocument> {
        self.hits
            .hits
            .into_iter()
            .map(|hit| {
                let mut document = hit.source;
                document.id = hit.id;
                document
            })
            .collect()
    }
}
