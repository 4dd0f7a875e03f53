//! Search analytics endpoints.

use std::sync::Arc;

use medmanager_types::{PopularSearches, RecentSearches, SearchLog, SearchStats};

use crate::error::ApiResult;
use crate::transport::{send_json, ApiRequest, Transport};

/// Client for `/searchanalytics` endpoints.
#[derive(Clone)]
pub struct SearchAnalyticsApi {
    transport: Arc<dyn Transport>,
}

impl SearchAnalyticsApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists the most recent search terms across all users.
    pub async fn recent(&self, count: u32) -> ApiResult<RecentSearches> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/searchanalytics/recent").query("count", count),
        )
        .await
    }

    /// Lists the most frequent search terms over a trailing window.
    ///
    /// `entity_type` narrows the ranking to one search target
    /// (for example `"drug"`); `None` ranks across all targets.
    pub async fn popular(
        &self,
        entity_type: Option<&str>,
        days: u32,
        top: u32,
    ) -> ApiResult<PopularSearches> {
        let mut request = ApiRequest::get("/searchanalytics/popular")
            .query("days", days)
            .query("top", top);
        if let Some(entity_type) = entity_type {
            request = request.query("entityType", entity_type);
        }
        send_json(self.transport.as_ref(), request).await
    }

    /// Summary counters over a trailing window.
    pub async fn stats(&self, days: u32) -> ApiResult<SearchStats> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/searchanalytics/stats").query("days", days),
        )
        .await
    }

    /// Lists one user's recent searches.
    pub async fn user_searches(&self, user_id: &str, count: u32) -> ApiResult<Vec<SearchLog>> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/searchanalytics/user/{user_id}")).query("count", count),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_popular_omits_entity_type_when_unset() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_json(200, json!({"days": 30, "searches": []}));
        transport.push_json(200, json!({"days": 7, "searches": []}));

        let api = SearchAnalyticsApi::new(Arc::clone(&transport) as Arc<dyn Transport>);
        api.popular(None, 30, 10).await.unwrap();
        api.popular(Some("drug"), 7, 5).await.unwrap();

        let recorded = transport.requests();
        assert_eq!(recorded[0].query.len(), 2);
        assert_eq!(recorded[1].query.len(), 3);
        assert_eq!(
            recorded[1].query[2],
            ("entityType".to_string(), "drug".to_string())
        );
    }

    #[tokio::test]
    async fn test_stats_decodes_counters() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_json(
            200,
            json!({
                "days": 30,
                "totalSearches": 412,
                "uniqueTerms": 97,
                "zeroResultSearches": 12
            }),
        );

        let api = SearchAnalyticsApi::new(Arc::clone(&transport) as Arc<dyn Transport>);
        let stats = api.stats(30).await.unwrap();

        assert_eq!(stats.total_searches, 412);
        assert_eq!(stats.zero_result_searches, 12);
    }
}
