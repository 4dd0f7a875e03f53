//! Interaction checking and interaction-record administration.
//!
//! The check operation is the core of the client: it composes a
//! multi-drug query, delegates the pairwise combination work to the
//! backend in a single request, and produces one merged
//! [`InteractionCheckResult`] with a deterministic overall severity.

use std::sync::Arc;

use medmanager_types::{
    EntityId, InteractionCheckRequest, InteractionCheckResponse, InteractionRecord,
    NewInteraction, NewReference, Severity,
};

use crate::error::{ApiError, ApiResult};
use crate::transport::{send_json, send_unit, to_body, ApiRequest, Transport};

/// Merged outcome of one interaction check.
///
/// Derived per request and discarded after display; it owns copies of the
/// records returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionCheckResult {
    /// Interaction records found, in the order the server returned them.
    pub interactions: Vec<InteractionRecord>,
    /// Overall severity of the whole combination.
    ///
    /// Taken verbatim from the backend; when the backend omits the field
    /// it is computed client-side as the highest record severity
    /// (`None` for an empty record list).
    pub overall_severity: Severity,
}

impl InteractionCheckResult {
    /// Returns true when no interactions were found.
    pub fn is_clear(&self) -> bool {
        self.interactions.is_empty()
    }
}

/// Client for `/interactions` endpoints.
#[derive(Clone)]
pub struct InteractionApi {
    transport: Arc<dyn Transport>,
}

impl InteractionApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Checks a set of concurrently administered drugs for interactions.
    ///
    /// Duplicate ids are dropped, keeping first-seen order. The request
    /// carries the full deduplicated list in one `POST /interactions/check`
    /// call; no pairwise combinations are computed locally, no retries are
    /// attempted, and nothing is cached across invocations.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidArgument`] when fewer than two distinct valid
    ///   ids remain; no network call is issued in that case.
    /// - [`ApiError::InteractionCheckFailed`] when the request fails or
    ///   the backend answers with a non-success status.
    pub async fn check(&self, drug_ids: &[EntityId]) -> ApiResult<InteractionCheckResult> {
        let distinct = dedup_ids(drug_ids);
        if distinct.len() < 2 {
            return Err(ApiError::InvalidArgument {
                detail: format!(
                    "an interaction check needs at least two distinct drug ids, got {}",
                    distinct.len()
                ),
            });
        }

        tracing::debug!(drug_count = distinct.len(), "checking drug interactions");

        let request = ApiRequest::post("/interactions/check")
            .body(to_body(&InteractionCheckRequest { drug_ids: distinct })?);

        let response: InteractionCheckResponse =
            send_json(self.transport.as_ref(), request)
                .await
                .map_err(as_check_failure)?;

        let overall_severity = response.overall_severity.unwrap_or_else(|| {
            Severity::aggregate(response.interactions.iter().map(|record| record.severity))
        });

        Ok(InteractionCheckResult {
            interactions: response.interactions,
            overall_severity,
        })
    }

    /// Fetches one interaction record by id.
    pub async fn get(&self, id: EntityId) -> ApiResult<InteractionRecord> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/interactions/{id}")),
        )
        .await
    }

    /// Creates an interaction record (admin workflow).
    ///
    /// Rejects a pair that does not relate two distinct drugs without
    /// issuing a request.
    pub async fn create(&self, interaction: &NewInteraction) -> ApiResult<InteractionRecord> {
        if !interaction.is_valid_pair() {
            return Err(ApiError::InvalidArgument {
                detail: "an interaction must relate two distinct drugs".to_string(),
            });
        }
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/interactions").body(to_body(interaction)?),
        )
        .await
    }

    /// Attaches a literature reference to an interaction record.
    pub async fn add_reference(
        &self,
        interaction_id: EntityId,
        reference: &NewReference,
    ) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::post(&format!("/interactions/{interaction_id}/references"))
                .body(to_body(reference)?),
        )
        .await
    }
}

/// Drops duplicate and zero ids, keeping first-seen order.
fn dedup_ids(drug_ids: &[EntityId]) -> Vec<EntityId> {
    let mut distinct = Vec::with_capacity(drug_ids.len());
    for &id in drug_ids {
        if id != 0 && !distinct.contains(&id) {
            distinct.push(id);
        }
    }
    distinct
}

/// Reclassifies transport-level failures as check failures.
fn as_check_failure(error: ApiError) -> ApiError {
    match error {
        ApiError::Status { status, message } => ApiError::InteractionCheckFailed {
            status: Some(status),
            message,
        },
        ApiError::Network { message } => ApiError::InteractionCheckFailed {
            status: None,
            message: Some(message),
        },
        other => other,
    }
}
