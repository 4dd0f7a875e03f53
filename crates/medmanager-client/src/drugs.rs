//! Drug reference lookups and administration.

use std::collections::HashSet;
use std::sync::Arc;

use medmanager_types::{DrugDetail, DrugSummary, DrugUpdate, EntityId, NewDrug, NewReference, Page};

use crate::error::{ApiError, ApiResult};
use crate::transport::{send_json, send_unit, to_body, ApiRequest, Transport};

/// Client for `/drugs` endpoints.
#[derive(Clone)]
pub struct DrugApi {
    transport: Arc<dyn Transport>,
}

impl DrugApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Searches drugs by name or code.
    ///
    /// An empty (or whitespace-only) term returns an empty list without a
    /// network call. Any failure is reported as [`ApiError::SearchFailed`];
    /// callers sitting at the search-input boundary are expected to
    /// degrade that to an empty visible result list.
    pub async fn search(&self, term: &str) -> ApiResult<Vec<DrugSummary>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/drugs").query("search", term),
        )
        .await
        .map_err(|error| ApiError::SearchFailed {
            message: error.to_string(),
        })
    }

    /// Searches drugs, dropping any result whose id is in `exclude`.
    ///
    /// Used by pickers that must not offer an already selected drug again.
    pub async fn search_excluding(
        &self,
        term: &str,
        exclude: &HashSet<EntityId>,
    ) -> ApiResult<Vec<DrugSummary>> {
        let mut results = self.search(term).await?;
        results.retain(|drug| !exclude.contains(&drug.id));
        Ok(results)
    }

    /// Lists all drugs, paginated.
    pub async fn all(&self, page: u32, page_size: u32) -> ApiResult<Page<DrugSummary>> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/drugs/all")
                .query("page", page)
                .query("pageSize", page_size),
        )
        .await
    }

    /// Fetches a full drug monograph.
    pub async fn get(&self, id: EntityId) -> ApiResult<DrugDetail> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/drugs/{id}")),
        )
        .await
    }

    /// Creates a drug entry (admin workflow).
    pub async fn create(&self, drug: &NewDrug) -> ApiResult<DrugDetail> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/drugs").body(to_body(drug)?),
        )
        .await
    }

    /// Updates a drug entry (admin workflow).
    pub async fn update(&self, id: EntityId, drug: &DrugUpdate) -> ApiResult<DrugDetail> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::put(&format!("/drugs/{id}")).body(to_body(drug)?),
        )
        .await
    }

    /// Deletes a drug entry (admin workflow).
    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::delete(&format!("/drugs/{id}")),
        )
        .await
    }

    /// Attaches a literature reference to a drug monograph.
    pub async fn add_reference(&self, drug_id: EntityId, reference: &NewReference) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::post(&format!("/drugs/{drug_id}/references")).body(to_body(reference)?),
        )
        .await
    }
}
