//! # Catalog
//!
//! Shared wire types for the catalog search system.
//!
//! Field names on the wire (`objectID`, `nbHits`) follow the store records,
//! so the same structs serialize into the search response and deserialize
//! out of both the store hash and the bulk-load file.

use serde::{Deserialize, Serialize};

/// Redis hash holding the catalog: field is the item's `objectID`, value is
/// the item's JSON document. Overridable through the `STORE_KEY` variable on
/// both the server and the loader.
pub const DEFAULT_STORE_KEY: &str = "items_store";

/// One stored catalog record.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CatalogItem {
    #[serde(rename = "objectID")]
    pub object_id: String,

    #[serde(default)]
    pub name: String,

    /// The only searched field. Records missing it decode to an empty
    /// string, which never contains a non-empty query.
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub image: String,
}

/// One page of search hits. `nb_hits` always equals `hits.len()` and
/// `query` always names the query that produced it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchResult {
    pub hits: Vec<CatalogItem>,

    #[serde(rename = "nbHits")]
    pub nb_hits: usize,

    #[serde(default)]
    pub query: String,
}

impl SearchResult {
    /// The degraded/empty result for `query`: no hits, zero count.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            hits: Vec::new(),
            nb_hits: 0,
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogItem, SearchResult};

    #[test]
    fn test_item_wire_names() {
        let json = r#"{
            "objectID": "42",
            "name": "Trail runner",
            "description": "red shoes",
            "brand": "Acme",
            "categories": ["shoes", "outdoor"],
            "image": "https://example.com/42.png"
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.object_id, "42");
        assert_eq!(item.description, "red shoes");
        assert_eq!(item.categories, vec!["shoes", "outdoor"]);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["objectID"], "42");
    }

    #[test]
    fn test_item_missing_fields() {
        let item: CatalogItem = serde_json::from_str(r#"{"objectID": "1"}"#).unwrap();
        assert_eq!(item.description, "");
        assert!(item.categories.is_empty());
    }

    #[test]
    fn test_empty_result() {
        let result = SearchResult::empty("shoes");
        assert_eq!(result.nb_hits, 0);
        assert!(result.hits.is_empty());
        assert_eq!(result.query, "shoes");

        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire["nbHits"], 0);
    }
}
