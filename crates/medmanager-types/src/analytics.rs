//! Search-analytics types for the admin console.

use chrono::{DateTime, Utc};

use crate::EntityId;

/// One logged search from the analytics endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchLog {
    /// Unique identifier of the log entry.
    pub id: EntityId,
    /// The user who searched, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_id: Option<String>,
    /// The query text as entered.
    pub term: String,
    /// Entity type searched, e.g. `Drug` or `Disease`.
    pub entity_type: String,
    /// Number of results returned.
    pub result_count: u32,
    /// When the search was issued.
    pub searched_at: DateTime<Utc>,
}

/// Response of `GET /searchanalytics/recent`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecentSearches {
    /// Most recent searches, newest first.
    pub searches: Vec<SearchLog>,
}

/// One aggregated entry of the popular-searches report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PopularSearch {
    /// The query text.
    pub term: String,
    /// Entity type searched.
    pub entity_type: String,
    /// Times this term was searched in the reporting window.
    pub count: u64,
}

/// Response of `GET /searchanalytics/popular`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PopularSearches {
    /// Reporting window in days.
    pub days: u32,
    /// Top terms for the window, most searched first.
    pub searches: Vec<PopularSearch>,
}

/// Response of `GET /searchanalytics/stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchStats {
    /// Reporting window in days.
    pub days: u32,
    /// Total searches in the window.
    pub total_searches: u64,
    /// Distinct query terms in the window.
    pub unique_terms: u64,
    /// Searches that returned no results.
    pub zero_result_searches: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_search_log_wire_shape() {
        let json = r#"{
            "searches": [{
                "id": 100,
                "userId": null,
                "term": "aspirin",
                "entityType": "Drug",
                "resultCount": 4,
                "searchedAt": "2026-08-29T10:15:00Z"
            }]
        }"#;
        let recent: RecentSearches = serde_json::from_str(json).unwrap();
        assert_eq!(recent.searches[0].term, "aspirin");
        assert_eq!(recent.searches[0].result_count, 4);
    }
}
