//! Disease catalog and treatment protocols.

use std::sync::Arc;

use medmanager_types::{Disease, DiseaseTreatment, EntityId, NewDisease, NewProtocol};

use crate::error::ApiResult;
use crate::transport::{send_json, send_unit, to_body, ApiRequest, Transport};

/// Client for `/diseases` endpoints.
#[derive(Clone)]
pub struct DiseaseApi {
    transport: Arc<dyn Transport>,
}

impl DiseaseApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists all diseases.
    pub async fn all(&self) -> ApiResult<Vec<Disease>> {
        send_json(self.transport.as_ref(), ApiRequest::get("/diseases")).await
    }

    /// Fetches the treatment protocol for a disease: preferred drugs
    /// first, alternatives second, each tier in preference order.
    pub async fn treatment(&self, id: EntityId) -> ApiResult<DiseaseTreatment> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/diseases/{id}/treatment")),
        )
        .await
    }

    /// Creates a disease entry (admin workflow).
    pub async fn create(&self, disease: &NewDisease) -> ApiResult<Disease> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/diseases").body(to_body(disease)?),
        )
        .await
    }

    /// Attaches a protocol entry to a disease (admin workflow).
    pub async fn add_protocol(&self, protocol: &NewProtocol) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::post("/diseases/protocols").body(to_body(protocol)?),
        )
        .await
    }
}
