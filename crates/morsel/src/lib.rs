//! Morsel - Restaurant Discovery Search Library
//!
//! Morsel is the search core of a restaurant discovery service. It classifies
//! an incoming request into one of several query modes from the fields it
//! carries, builds the corresponding structured query against a
//! document-search backend, and enriches the ranked results with great-circle
//! distance from the query point.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use morsel::{SearchParams, SearchService, ServiceConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), morsel::MorselError> {
//! let service = SearchService::connect(ServiceConfig::default())?;
//!
//! // Free-text search near a point; hits come back distance-annotated.
//! let params = SearchParams {
//!     location: Some("12.9,77.6".into()),
//!     search: Some("dosa".into()),
//!     ..SearchParams::default()
//! };
//!
//! for hit in service.search(&params).await? {
//!     println!("{} ({:?} km)", hit.document.name, hit.distance);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Search Modes
//!
//! Exactly one mode is selected per request, by field presence:
//!
//! - **Identifier lookup**: a path parameter fetches a single restaurant.
//! - **Tag search**: exact city and tag match, best-rated first.
//! - **Proximity search**: restaurants within 20 km of a point, optionally
//!   filtered and ranked by a search string (name matches weighted 10x over
//!   menu matches), always annotated with distance.
//! - **City search**: exact city match, with the same optional text ranking.
//! - **Listing**: no identifying fields at all returns everything.
//!
//! Routing, authentication and persistence live outside this crate; it
//! consumes already-parsed parameters and returns ordered, serializable hits.

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
mod enrich;
pub mod error;
mod geo;
mod query;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use enrich::{EnrichedHit, enrich};
pub use error::{Fault, MorselError};
pub use geo::{DistanceUnit, distance};
pub use morsel_backend::{
    BackendConfig, BackendError, HttpSearchBackend, Rating, RestaurantDocument, SearchBackend,
};
pub use query::{
    GEO_RADIUS_KM, GeoRadius, MENU_BOOST, NAME_BOOST, QueryError, ReferencePoint, SearchParams,
    SearchRequest, SortSpec, StructuredQuery, TermMatch, TextMatch,
};
pub use self::core::SearchService;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Morsel library.
///
/// Sets up structured logging with configurable levels and filtering. Call
/// once at the start of your application to enable detailed logging output
/// from search operations.
///
/// # Examples
///
/// ```rust
/// use morsel::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), morsel::MorselError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), MorselError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}
