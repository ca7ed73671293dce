//! Post-processing of raw hits: distance annotation from a reference point.

use morsel_backend::RestaurantDocument;
use serde::Serialize;
use tracing::warn;

use crate::{
    geo::{self, DistanceUnit},
    query::ReferencePoint,
};

/// A restaurant hit plus its optional distance from the query point.
///
/// Hits keep the backend's order — relevance or rating order is preserved,
/// never re-sorted by distance. Serialization flattens the document and
/// omits an absent distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedHit {
    #[serde(flatten)]
    pub document: RestaurantDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Wrap hits, annotating each with its distance from `point` when present.
///
/// A hit whose stored location is missing or malformed keeps `distance =
/// None`; one bad document degrades only itself, never the response.
pub fn enrich(
    hits: Vec<RestaurantDocument>,
    point: Option<&ReferencePoint>,
    unit: DistanceUnit,
) -> Vec<EnrichedHit> {
    hits.into_iter()
        .map(|document| {
            let distance = point.and_then(|point| distance_to(point, &document, unit));
            EnrichedHit { document, distance }
        })
        .collect()
}

fn distance_to(
    point: &ReferencePoint,
    document: &RestaurantDocument,
    unit: DistanceUnit,
) -> Option<f64> {
    let location = document.location.as_deref()?;
    let Some((lat, lon)) = geo::parse_coordinates(location) else {
        warn!(
            id = %document.id,
            location,
            "Hit has a malformed stored location; leaving distance unset"
        );
        return None;
    };
    Some(geo::distance(point.lat, point.lon, lat, lon, unit))
}
