//! Service configuration with an ergonomic builder.

use std::time::Duration;

use morsel_backend::BackendConfig;

use crate::geo::DistanceUnit;

/// Settings for a [`SearchService`](crate::SearchService).
///
/// Defaults target a local backend and report distances in kilometers.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Unit used for distance annotation on geo-mode hits.
    pub distance_unit: DistanceUnit,
    /// Connection settings for the search backend.
    pub backend: BackendConfig,
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }
}

/// Builder for creating service configurations.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the search backend.
    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.config.backend.base_url = url.into();
        self
    }

    /// Index the restaurant documents live in.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.config.backend.index = index.into();
        self
    }

    /// Document type within the index.
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.config.backend.doc_type = doc_type.into();
        self
    }

    /// Upper bound on a single backend call.
    pub fn backend_timeout(mut self, timeout: Duration) -> Self {
        self.config.backend.timeout = timeout;
        self
    }

    /// Unit for reported distances.
    pub fn distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.config.distance_unit = unit;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_report_kilometers_against_a_local_backend() {
        let config = ServiceConfig::default();
        assert_eq!(config.distance_unit, DistanceUnit::Kilometers);
        assert_eq!(config.backend.base_url, "http://localhost:9200");
        assert_eq!(config.backend.index, "restaurants");
    }

    #[test]
    fn builder_methods_chain() {
        let config = ServiceConfig::builder()
            .backend_url("http://search.internal:9200")
            .index("restaurant_db")
            .backend_timeout(Duration::from_secs(3))
            .distance_unit(DistanceUnit::Miles)
            .build();

        assert_eq!(config.backend.base_url, "http://search.internal:9200");
        assert_eq!(config.backend.index, "restaurant_db");
        assert_eq!(config.backend.timeout, Duration::from_secs(3));
        assert_eq!(config.distance_unit, DistanceUnit::Miles);
    }
}
