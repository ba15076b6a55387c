//! `/products` contract routes.
//!
//! Handlers translate HTTP requests into inventory endpoints and hand them
//! to the catalog service; failures become a JSON error body.

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use inventory::{Ack, ApiError, Component, ComponentDraft, Endpoint, Method, Product, ProductDraft, decode_body};
use serde::Serialize;

use crate::services::catalog;
use crate::state::AppState;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// [`ApiError`] as an HTTP response.
#[derive(Debug)]
pub struct ApiFailure(pub ApiError);

impl From<ApiError> for ApiFailure {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody { error: self.0.code(), message: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}

/// `GET /products`: list all products.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiFailure> {
    let products = catalog::execute(&state, Endpoint::ListProducts).await?.into_products()?;
    Ok(Json(products))
}

/// `GET /products/:id`: fetch one product.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiFailure> {
    let product = catalog::execute(&state, Endpoint::GetProduct { id }).await?.into_product()?;
    Ok(Json(product))
}

/// `POST /products/createProduct`: create an active product.
pub async fn create_product(State(state): State<AppState>, body: String) -> Result<Json<Product>, ApiFailure> {
    let draft: ProductDraft = decode_body(Some(&body))?;
    let product = catalog::execute(&state, Endpoint::CreateProduct(draft)).await?.into_product()?;
    Ok(Json(product))
}

/// `DELETE /products/:id`: delete a product and its components.
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Ack>, ApiFailure> {
    catalog::execute(&state, Endpoint::DeleteProduct { id }).await?.into_ack()?;
    Ok(Json(Ack {}))
}

/// `PUT /products/:id/toggle`: flip the active flag.
pub async fn toggle_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiFailure> {
    let product = catalog::execute(&state, Endpoint::ToggleProduct { id }).await?.into_product()?;
    Ok(Json(product))
}

/// `GET /products/:id/components`: list a product's components.
pub async fn list_components(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Component>>, ApiFailure> {
    let components = catalog::execute(&state, Endpoint::ListComponents { product_id })
        .await?
        .into_components()?;
    Ok(Json(components))
}

/// `POST /products/:id/components`: attach a component with synthetic history.
pub async fn create_component(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    body: String,
) -> Result<Json<Component>, ApiFailure> {
    let draft: ComponentDraft = decode_body(Some(&body))?;
    let component = catalog::execute(&state, Endpoint::CreateComponent { product_id, draft })
        .await?
        .into_component()?;
    Ok(Json(component))
}

/// `DELETE /products/:id/components/:component_id`: remove one component.
pub async fn delete_component(
    State(state): State<AppState>,
    Path((product_id, component_id)): Path<(String, String)>,
) -> Result<Json<Ack>, ApiFailure> {
    catalog::execute(&state, Endpoint::DeleteComponent { product_id, component_id })
        .await?
        .into_ack()?;
    Ok(Json(Ack {}))
}

/// Fallback for any method/path pair outside the contract.
pub async fn unhandled_route(method: axum::http::Method, uri: Uri) -> ApiFailure {
    ApiFailure(ApiError::UnhandledRoute { method: Method::parse(method.as_str()), path: uri.path().to_owned() })
}

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;
