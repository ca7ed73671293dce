//! Search service orchestration.
//!
//! [`SearchService`] ties the pipeline together per request: classify the raw
//! parameters, build and render the structured query, execute it against the
//! backend, then annotate geo-mode hits with their distance from the query
//! point. Each request is handled independently and statelessly; the only
//! await point is the backend call.

use morsel_backend::{HttpSearchBackend, SearchBackend};
use tracing::{debug, error, instrument};

use crate::{
    config::ServiceConfig,
    enrich::{EnrichedHit, enrich},
    error::Result,
    query::{SearchParams, SearchRequest},
};

/// Per-request orchestrator over a shared backend handle.
///
/// The backend is injected once at construction and is safe for concurrent
/// use; the service itself holds no mutable state, so one instance (or a
/// clone) serves arbitrarily many requests in parallel.
///
/// # Examples
///
/// ```rust,no_run
/// use morsel::{SearchParams, SearchService, ServiceConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), morsel::MorselError> {
/// let service = SearchService::connect(ServiceConfig::default())?;
///
/// let params = SearchParams {
///     city: Some("Bangalore".into()),
///     search: Some("dosa".into()),
///     ..SearchParams::default()
/// };
/// let hits = service.search(&params).await?;
/// println!("Found {} restaurants", hits.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SearchService<B> {
    backend: B,
    config: ServiceConfig,
}

impl SearchService<HttpSearchBackend> {
    /// Wire a service to the configured HTTP backend.
    ///
    /// The underlying client is pooled and long-lived; construct the service
    /// once at startup and share it.
    pub fn connect(config: ServiceConfig) -> Result<Self> {
        let backend = HttpSearchBackend::new(config.backend.clone())?;
        Ok(Self { backend, config })
    }
}

impl<B: SearchBackend> SearchService<B> {
    /// Create a service over an injected backend with default settings.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: ServiceConfig::default(),
        }
    }

    /// Create a service over an injected backend with explicit settings.
    pub fn with_config(backend: B, config: ServiceConfig) -> Self {
        Self { backend, config }
    }

    /// Run one search request through the full pipeline.
    ///
    /// Hits come back in backend order; geo-mode hits carry a distance from
    /// the query point in the configured unit. Validation and backend
    /// failures propagate with their kind intact — nothing is reclassified in
    /// transit.
    #[instrument(name = "Search", level = "debug", skip_all)]
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<EnrichedHit>> {
        let request = SearchRequest::classify(params)?;
        debug!(?request, "Classified search request");

        let (query, point) = request.to_query();
        let body = query.to_backend_body();

        let hits = match self.backend.search(body).await {
            Ok(hits) => hits,
            Err(err) => {
                // Full detail goes to the log; the caller sees the generic
                // server-fault rendering only.
                error!(error = ?err, "Search backend call failed");
                return Err(err.into());
            }
        };
        debug!(hits = hits.len(), "Backend returned hits");

        Ok(enrich(hits, point.as_ref(), self.config.distance_unit))
    }

    /// Look up a single restaurant by its backend identifier.
    ///
    /// An unknown identifier yields an empty result, not an error.
    pub async fn search_by_id(&self, id: impl Into<String>) -> Result<Vec<EnrichedHit>> {
        self.search(&SearchParams::by_id(id)).await
    }

    /// Access the underlying backend handle.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Access the service settings.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
