use serde::{Deserialize, Serialize};

/// A restaurant as stored in the backend index.
///
/// The index owns and persists these documents; this crate only reads them.
/// Fields the index may omit (`menu`, `tags`, `location`) default rather than
/// failing the whole hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDocument {
    /// Backend-assigned identifier, injected from the hit envelope's `_id`
    /// (the `_source` body does not carry it).
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub menu: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rating: Rating,
    /// Coordinates serialized as `"latitude,longitude"` text.
    #[serde(default)]
    pub location: Option<String>,
}

/// Aggregate rating of a restaurant. Kept as a nested object because the
/// backend sorts on the `rating.value` path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_full_source_body() {
        let doc: RestaurantDocument = serde_json::from_str(
            r#"{
                "name": "Vidyarthi Bhavan",
                "city": "Bangalore",
                "menu": "masala dosa, filter coffee",
                "tags": ["south-indian", "breakfast"],
                "rating": { "value": 4.6 },
                "location": "12.9442,77.5738"
            }"#,
        )
        .expect("full document should deserialize");

        assert_eq!(doc.name, "Vidyarthi Bhavan");
        assert_eq!(doc.tags.len(), 2);
        assert_eq!(doc.rating.value, 4.6);
        assert_eq!(doc.location.as_deref(), Some("12.9442,77.5738"));
        // The id only exists on the envelope, never in _source.
        assert!(doc.id.is_empty());
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let doc: RestaurantDocument = serde_json::from_str(
            r#"{ "name": "Corner Cart", "city": "Austin", "rating": { "value": 3.9 } }"#,
        )
        .expect("sparse document should deserialize");

        assert!(doc.menu.is_empty());
        assert!(doc.tags.is_empty());
        assert!(doc.location.is_none());
    }

    #[test]
    fn round_trips_through_serialization() {
        let doc = RestaurantDocument {
            id: "r42".to_owned(),
            name: "Taqueria Sur".to_owned(),
            city: "Austin".to_owned(),
            menu: "tacos al pastor".to_owned(),
            tags: vec!["mexican".to_owned()],
            rating: Rating { value: 4.2 },
            location: Some("30.26,-97.74".to_owned()),
        };

        let json = serde_json::to_value(&doc).expect("document should serialize");
        let back: RestaurantDocument =
            serde_json::from_value(json).expect("document should deserialize");
        assert_eq!(back, doc);
    }
}
