//! Request classification and structured query construction.
//!
//! Incoming search parameters are classified into exactly one request mode by
//! field presence, then translated into a backend-agnostic [`StructuredQuery`]
//! plus an optional reference point for distance annotation. Classification is
//! the single place parameter validation happens; translation afterwards is
//! pure and total.

pub use error::QueryError;
mod structured;

use serde::Deserialize;
use serde_json::Value;

pub use structured::{
    GEO_RADIUS_KM, GeoRadius, MENU_BOOST, NAME_BOOST, SortSpec, StructuredQuery, TermMatch,
    TextMatch,
};

use crate::geo;

mod error {
    use thiserror::Error;

    /// Client-fault validation failures. Each message names the field set the
    /// request was expected to carry.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum QueryError {
        #[error("city and tag required as strings")]
        TagSearchFields,
        #[error("location must be 'number,number'")]
        LocationFormat,
        #[error("expected city or location")]
        MissingSearchTarget,
        #[error("{0} must be a string")]
        NonStringField(&'static str),
    }
}

/// Raw inbound search fields, as delivered by the transport layer.
///
/// Body fields keep their JSON form so that wrong-typed values are observable
/// to classification rather than silently coerced; `id` comes from the
/// request path, never the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(skip)]
    pub id: Option<String>,
    pub city: Option<Value>,
    pub search: Option<Value>,
    pub location: Option<Value>,
    pub tag: Option<Value>,
}

impl SearchParams {
    /// Parameters for a path-parameter lookup.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// A `(latitude, longitude)` pair used solely for post-hoc distance
/// annotation of hits, not for the geo filter itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub lat: f64,
    pub lon: f64,
}

/// The recognized request shapes. Exactly one is selected per request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    ListAll,
    CityOnly { city: String },
    CityAndText { city: String, text: String },
    GeoOnly { lat: f64, lon: f64 },
    GeoAndText { lat: f64, lon: f64, text: String },
    TagSearch { city: String, tag: String },
    ById { id: String },
}

impl SearchRequest {
    /// Classify raw parameters into a request mode.
    ///
    /// Presence checks run in a fixed precedence: identifier, then tag, then
    /// location, then city. A request carrying none of those but still
    /// holding a search string has nothing to search within and is rejected.
    pub fn classify(params: &SearchParams) -> Result<Self, QueryError> {
        if let Some(id) = &params.id {
            return Ok(Self::ById { id: id.clone() });
        }

        if params.tag.is_some() {
            let (Some(city), Some(tag)) = (as_str(&params.city), as_str(&params.tag)) else {
                return Err(QueryError::TagSearchFields);
            };
            return Ok(Self::TagSearch {
                city: city.to_owned(),
                tag: tag.to_owned(),
            });
        }

        if let Some(location) = &params.location {
            let (lat, lon) = location
                .as_str()
                .and_then(geo::parse_coordinates)
                .ok_or(QueryError::LocationFormat)?;
            return Ok(match text_param(params)? {
                Some(text) => Self::GeoAndText { lat, lon, text },
                None => Self::GeoOnly { lat, lon },
            });
        }

        if let Some(city) = &params.city {
            let city = city
                .as_str()
                .ok_or(QueryError::NonStringField("city"))?
                .to_owned();
            return Ok(match text_param(params)? {
                Some(text) => Self::CityAndText { city, text },
                None => Self::CityOnly { city },
            });
        }

        if params.search.is_some() {
            return Err(QueryError::MissingSearchTarget);
        }

        Ok(Self::ListAll)
    }

    /// Translate the classified request into a structured query.
    ///
    /// Pure and total: validation already happened in [`Self::classify`].
    /// Every geo mode yields a reference point, so distance annotation covers
    /// proximity browsing with and without a search string.
    pub fn to_query(&self) -> (StructuredQuery, Option<ReferencePoint>) {
        match self {
            Self::ById { id } => (
                StructuredQuery {
                    ids: vec![id.clone()],
                    ..StructuredQuery::default()
                },
                None,
            ),
            Self::TagSearch { city, tag } => (
                StructuredQuery {
                    must: vec![TermMatch::new("city", city), TermMatch::new("tags", tag)],
                    sort: SortSpec::RatingDesc,
                    ..StructuredQuery::default()
                },
                None,
            ),
            Self::GeoAndText { lat, lon, text } => (
                StructuredQuery {
                    text: Some(TextMatch::new(text)),
                    geo: Some(GeoRadius::around(*lat, *lon)),
                    sort: SortSpec::Relevance,
                    ..StructuredQuery::default()
                },
                Some(ReferencePoint {
                    lat: *lat,
                    lon: *lon,
                }),
            ),
            Self::GeoOnly { lat, lon } => (
                StructuredQuery {
                    geo: Some(GeoRadius::around(*lat, *lon)),
                    sort: SortSpec::RatingDesc,
                    ..StructuredQuery::default()
                },
                Some(ReferencePoint {
                    lat: *lat,
                    lon: *lon,
                }),
            ),
            Self::CityAndText { city, text } => (
                StructuredQuery {
                    must: vec![TermMatch::new("city", city)],
                    text: Some(TextMatch::new(text)),
                    sort: SortSpec::Relevance,
                    ..StructuredQuery::default()
                },
                None,
            ),
            Self::CityOnly { city } => (
                StructuredQuery {
                    must: vec![TermMatch::new("city", city)],
                    sort: SortSpec::RatingDesc,
                    ..StructuredQuery::default()
                },
                None,
            ),
            Self::ListAll => (StructuredQuery::default(), None),
        }
    }
}

fn as_str(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

fn text_param(params: &SearchParams) -> Result<Option<String>, QueryError> {
    match &params.search {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|text| Some(text.to_owned()))
            .ok_or(QueryError::NonStringField("search")),
    }
}
