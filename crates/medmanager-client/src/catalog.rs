//! Reference-catalog administration: ingredients, dosage forms, routes,
//! interaction mechanisms.

use std::sync::Arc;

use medmanager_types::{
    DosageForm, EntityId, Ingredient, Mechanism, NewDosageForm, NewIngredient, NewMechanism,
    NewRoute, Page, RouteInformation,
};

use crate::error::ApiResult;
use crate::transport::{send_json, send_unit, to_body, ApiRequest, Transport};

/// Client for `/ingredients` endpoints.
#[derive(Clone)]
pub struct IngredientApi {
    transport: Arc<dyn Transport>,
}

impl IngredientApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists ingredients, paginated.
    pub async fn all(&self, page: u32, page_size: u32) -> ApiResult<Page<Ingredient>> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/ingredients")
                .query("page", page)
                .query("pageSize", page_size),
        )
        .await
    }

    /// Searches ingredients by name.
    pub async fn search(&self, query: &str) -> ApiResult<Vec<Ingredient>> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/ingredients/search").query("q", query),
        )
        .await
    }

    /// Fetches one ingredient.
    pub async fn get(&self, id: EntityId) -> ApiResult<Ingredient> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/ingredients/{id}")),
        )
        .await
    }

    /// Creates an ingredient.
    pub async fn create(&self, ingredient: &NewIngredient) -> ApiResult<Ingredient> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/ingredients").body(to_body(ingredient)?),
        )
        .await
    }

    /// Updates an ingredient.
    pub async fn update(&self, id: EntityId, ingredient: &NewIngredient) -> ApiResult<Ingredient> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::put(&format!("/ingredients/{id}")).body(to_body(ingredient)?),
        )
        .await
    }

    /// Deletes an ingredient.
    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::delete(&format!("/ingredients/{id}")),
        )
        .await
    }
}

/// Client for `/dosageforms` endpoints.
#[derive(Clone)]
pub struct DosageFormApi {
    transport: Arc<dyn Transport>,
}

impl DosageFormApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists all dosage forms.
    pub async fn all(&self) -> ApiResult<Vec<DosageForm>> {
        send_json(self.transport.as_ref(), ApiRequest::get("/dosageforms")).await
    }

    /// Fetches one dosage form.
    pub async fn get(&self, id: EntityId) -> ApiResult<DosageForm> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/dosageforms/{id}")),
        )
        .await
    }

    /// Creates a dosage form.
    pub async fn create(&self, form: &NewDosageForm) -> ApiResult<DosageForm> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/dosageforms").body(to_body(form)?),
        )
        .await
    }

    /// Updates a dosage form.
    pub async fn update(&self, id: EntityId, form: &NewDosageForm) -> ApiResult<DosageForm> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::put(&format!("/dosageforms/{id}")).body(to_body(form)?),
        )
        .await
    }

    /// Deletes a dosage form.
    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::delete(&format!("/dosageforms/{id}")),
        )
        .await
    }
}

/// Client for `/routes` endpoints.
#[derive(Clone)]
pub struct RouteApi {
    transport: Arc<dyn Transport>,
}

impl RouteApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists all routes of administration.
    pub async fn all(&self) -> ApiResult<Vec<RouteInformation>> {
        send_json(self.transport.as_ref(), ApiRequest::get("/routes")).await
    }

    /// Fetches one route.
    pub async fn get(&self, id: EntityId) -> ApiResult<RouteInformation> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/routes/{id}")),
        )
        .await
    }

    /// Creates a route.
    pub async fn create(&self, route: &NewRoute) -> ApiResult<RouteInformation> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/routes").body(to_body(route)?),
        )
        .await
    }

    /// Updates a route.
    pub async fn update(&self, id: EntityId, route: &NewRoute) -> ApiResult<RouteInformation> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::put(&format!("/routes/{id}")).body(to_body(route)?),
        )
        .await
    }

    /// Deletes a route.
    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::delete(&format!("/routes/{id}")),
        )
        .await
    }
}

/// Client for `/mechanisms` endpoints.
#[derive(Clone)]
pub struct MechanismApi {
    transport: Arc<dyn Transport>,
}

impl MechanismApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists all interaction mechanisms.
    pub async fn all(&self) -> ApiResult<Vec<Mechanism>> {
        send_json(self.transport.as_ref(), ApiRequest::get("/mechanisms")).await
    }

    /// Fetches one mechanism.
    pub async fn get(&self, id: EntityId) -> ApiResult<Mechanism> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/mechanisms/{id}")),
        )
        .await
    }

    /// Creates a mechanism.
    pub async fn create(&self, mechanism: &NewMechanism) -> ApiResult<Mechanism> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/mechanisms").body(to_body(mechanism)?),
        )
        .await
    }

    /// Updates a mechanism.
    pub async fn update(&self, id: EntityId, mechanism: &NewMechanism) -> ApiResult<Mechanism> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::put(&format!("/mechanisms/{id}")).body(to_body(mechanism)?),
        )
        .await
    }

    /// Deletes a mechanism.
    pub async fn delete(&self, id: EntityId) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::delete(&format!("/mechanisms/{id}")),
        )
        .await
    }
}
