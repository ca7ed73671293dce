//! Backend-agnostic query description and its JSON DSL rendering.
//!
//! A [`StructuredQuery`] is built once per request and stays immutable; it is
//! only translated into the concrete backend's query language at execution
//! time, keeping the classification logic independent of the backend's DSL.

use serde_json::{Map, Value, json};

/// Fixed radius of the geographic proximity filter, in kilometers.
pub const GEO_RADIUS_KM: u32 = 20;
/// Match weight of the restaurant name in a text clause.
pub const NAME_BOOST: u32 = 10;
/// Match weight of the menu in a text clause.
pub const MENU_BOOST: u32 = 1;

/// Sort order embedded in a query.
///
/// Text presence selects relevance; its absence selects rating. Identifier
/// lookups and list-everything queries keep the backend's default ordering.
/// A query never carries two sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortSpec {
    #[default]
    BackendDefault,
    Relevance,
    RatingDesc,
}

/// Required, non-scoring exact match on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermMatch {
    pub field: &'static str,
    pub value: String,
}

impl TermMatch {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Boosted multi-field free-text clause. Contributes to ranking without being
/// required for a document to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    pub query: String,
    /// `(field, weight)` pairs; the name always outweighs the menu tenfold.
    pub fields: Vec<(&'static str, u32)>,
}

impl TextMatch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            fields: vec![("name", NAME_BOOST), ("menu", MENU_BOOST)],
        }
    }

    fn rendered_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(field, boost)| {
                if *boost > 1 {
                    format!("{field}^{boost}")
                } else {
                    (*field).to_owned()
                }
            })
            .collect()
    }
}

/// Restricts hits to documents within a fixed distance of a point. The point
/// comes from the request; the radius never varies.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRadius {
    pub lat: f64,
    pub lon: f64,
    pub radius_km: u32,
}

impl GeoRadius {
    pub fn around(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            radius_km: GEO_RADIUS_KM,
        }
    }
}

/// Immutable description of one search: exact-match clauses, an optional
/// boosted text clause, an optional identifier filter, an optional geo
/// filter, and exactly one sort specification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredQuery {
    /// Identifier filter for path-parameter lookups; rendered as a
    /// one-element identifier list.
    pub ids: Vec<String>,
    pub must: Vec<TermMatch>,
    pub text: Option<TextMatch>,
    pub geo: Option<GeoRadius>,
    pub sort: SortSpec,
}

impl StructuredQuery {
    /// Render into the backend's JSON query DSL.
    pub fn to_backend_body(&self) -> Value {
        let mut body = json!({ "query": self.query_clause() });
        if let Some(sort) = self.sort_clause() {
            body["sort"] = sort;
        }
        body
    }

    fn query_clause(&self) -> Value {
        if !self.ids.is_empty() {
            return json!({ "terms": { "_id": self.ids } });
        }
        if self.must.is_empty() && self.text.is_none() && self.geo.is_none() {
            return json!({ "match_all": {} });
        }

        let mut clause = Map::new();
        if !self.must.is_empty() {
            let must = self
                .must
                .iter()
                .map(|term| json!({ "term": { (term.field): term.value } }))
                .collect();
            clause.insert("must".to_owned(), Value::Array(must));
        }
        if let Some(text) = &self.text {
            clause.insert(
                "should".to_owned(),
                json!([{
                    "multi_match": {
                        "query": text.query,
                        "fields": text.rendered_fields(),
                    }
                }]),
            );
        }
        if let Some(geo) = &self.geo {
            clause.insert(
                "filter".to_owned(),
                json!({
                    "geo_distance": {
                        "distance": format!("{}km", geo.radius_km),
                        "location": { "lat": geo.lat, "lon": geo.lon },
                    }
                }),
            );
        }
        json!({ "bool": clause })
    }

    fn sort_clause(&self) -> Option<Value> {
        match self.sort {
            SortSpec::BackendDefault => None,
            SortSpec::Relevance => Some(json!({ "_score": { "order": "desc" } })),
            SortSpec::RatingDesc => Some(json!({ "rating.value": { "order": "desc" } })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_all_renders_match_all_without_sort() {
        let body = StructuredQuery::default().to_backend_body();
        assert_eq!(body, json!({ "query": { "match_all": {} } }));
    }

    #[test]
    fn identifier_filter_renders_a_terms_clause() {
        let query = StructuredQuery {
            ids: vec!["r42".to_owned()],
            ..StructuredQuery::default()
        };
        assert_eq!(
            query.to_backend_body(),
            json!({ "query": { "terms": { "_id": ["r42"] } } })
        );
    }

    #[test]
    fn city_and_text_renders_must_should_and_relevance_sort() {
        let query = StructuredQuery {
            must: vec![TermMatch::new("city", "Bangalore")],
            text: Some(TextMatch::new("dosa")),
            sort: SortSpec::Relevance,
            ..StructuredQuery::default()
        };

        let body = query.to_backend_body();
        assert_eq!(
            body["query"]["bool"]["must"],
            json!([{ "term": { "city": "Bangalore" } }])
        );
        assert_eq!(
            body["query"]["bool"]["should"],
            json!([{ "multi_match": { "query": "dosa", "fields": ["name^10", "menu"] } }])
        );
        assert_eq!(body["sort"], json!({ "_score": { "order": "desc" } }));
    }

    #[test]
    fn geo_filter_renders_twenty_km_around_the_point() {
        let query = StructuredQuery {
            geo: Some(GeoRadius::around(12.9, 77.6)),
            sort: SortSpec::RatingDesc,
            ..StructuredQuery::default()
        };

        let body = query.to_backend_body();
        assert_eq!(
            body["query"]["bool"]["filter"],
            json!({
                "geo_distance": {
                    "distance": "20km",
                    "location": { "lat": 12.9, "lon": 77.6 },
                }
            })
        );
        assert_eq!(body["sort"], json!({ "rating.value": { "order": "desc" } }));
    }

    #[test]
    fn tag_search_renders_two_term_clauses() {
        let query = StructuredQuery {
            must: vec![
                TermMatch::new("city", "Austin"),
                TermMatch::new("tags", "vegan"),
            ],
            sort: SortSpec::RatingDesc,
            ..StructuredQuery::default()
        };

        let body = query.to_backend_body();
        assert_eq!(
            body["query"]["bool"]["must"],
            json!([
                { "term": { "city": "Austin" } },
                { "term": { "tags": "vegan" } },
            ])
        );
    }

    #[test]
    fn name_weight_is_ten_times_menu_weight() {
        let text = TextMatch::new("anything");
        let name = text.fields.iter().find(|(f, _)| *f == "name").unwrap().1;
        let menu = text.fields.iter().find(|(f, _)| *f == "menu").unwrap().1;
        assert_eq!(name, 10 * menu);
        assert_eq!(text.rendered_fields(), vec!["name^10", "menu"]);
    }
}
