//! # Substring scan
//!
//! The match policy: an item matches iff its `description` contains the
//! query as a contiguous substring. Case-sensitive, no tokenization, no
//! ranking, every match in one page.

use catalog::{CatalogItem, SearchResult};
use tracing::debug;

/// Linear predicate scan over the raw store values. Records that fail to
/// decode are skipped, which makes a missing `description` a non-match.
pub fn scan_catalog<'a, I>(items: I, query: &str) -> SearchResult
where
    I: IntoIterator<Item = &'a String>,
{
    let mut hits = Vec::new();

    for raw in items {
        let item: CatalogItem = match serde_json::from_str(raw) {
            Ok(item) => item,
            Err(e) => {
                debug!("Skipping undecodable catalog record: {e}");
                continue;
            }
        };

        if item.description.contains(query) {
            hits.push(item);
        }
    }

    SearchResult {
        nb_hits: hits.len(),
        hits,
        query: query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::scan_catalog;

    fn store() -> Vec<String> {
        [
            r#"{"objectID": "1", "name": "Runner", "description": "red shoes"}"#,
            r#"{"objectID": "2", "name": "Walker", "description": "blue shoes"}"#,
            r#"{"objectID": "3", "name": "Cap", "description": "red hat"}"#,
        ]
        .map(String::from)
        .to_vec()
    }

    #[test]
    fn test_substring_matches() {
        let items = store();

        let result = scan_catalog(&items, "shoes");
        assert_eq!(result.nb_hits, 2);
        assert_eq!(result.hits.len(), 2);
        assert!(result.hits.iter().all(|h| h.description.contains("shoes")));
        assert_eq!(result.query, "shoes");

        let result = scan_catalog(&items, "hat");
        assert_eq!(result.nb_hits, 1);
        assert_eq!(result.hits[0].object_id, "3");
    }

    #[test]
    fn test_no_matches() {
        let items = store();

        let result = scan_catalog(&items, "zzz");
        assert_eq!(result.nb_hits, 0);
        assert!(result.hits.is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        let items = store();

        assert_eq!(scan_catalog(&items, "Shoes").nb_hits, 0);
        assert_eq!(scan_catalog(&items, "RED").nb_hits, 0);
    }

    #[test]
    fn test_missing_description_is_not_a_match() {
        let items = vec![
            r#"{"objectID": "1"}"#.to_string(),
            r#"{"objectID": "2", "description": "red shoes"}"#.to_string(),
        ];

        let result = scan_catalog(&items, "red");
        assert_eq!(result.nb_hits, 1);
        assert_eq!(result.hits[0].object_id, "2");
    }

    #[test]
    fn test_undecodable_record_is_skipped() {
        let items = vec![
            "not json".to_string(),
            r#"{"objectID": "2", "description": "red shoes"}"#.to_string(),
        ];

        let result = scan_catalog(&items, "shoes");
        assert_eq!(result.nb_hits, 1);
    }
}
