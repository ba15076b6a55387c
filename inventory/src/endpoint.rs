//! Typed endpoint set for the `/products` contract.
//!
//! DESIGN
//! ======
//! Each supported method/path pair is one [`Endpoint`] variant. Route
//! strings are resolved by splitting the path into segments and matching
//! the `(method, segments)` pair structurally, so an unsupported
//! combination falls through to a single `UnhandledRoute` arm instead of a
//! chain of pattern checks.
//!
//! [`Endpoint::method`], [`Endpoint::path`] and [`Endpoint::body`] go the
//! other way, producing the HTTP request an endpoint corresponds to.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::model::{Component, ComponentDraft, Product, ProductDraft};

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// HTTP request method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    /// Any method outside the list above.
    Other,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Other => "OTHER",
        }
    }

    /// Parse a method name, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "OPTIONS" => Self::Options,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation of the data-access contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /products`
    ListProducts,
    /// `GET /products/{id}`
    GetProduct { id: String },
    /// `GET /products/{id}/components`
    ListComponents { product_id: String },
    /// `POST /products/createProduct`
    CreateProduct(ProductDraft),
    /// `DELETE /products/{id}`
    DeleteProduct { id: String },
    /// `POST /products/{id}/components`
    CreateComponent { product_id: String, draft: ComponentDraft },
    /// `DELETE /products/{id}/components/{componentId}`
    DeleteComponent { product_id: String, component_id: String },
    /// `PUT /products/{id}/toggle`
    ToggleProduct { id: String },
}

impl Endpoint {
    /// Resolve a route string into an endpoint.
    ///
    /// A missing `method` means `GET`. `body` is the raw JSON request body
    /// and is only read by the two create endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnhandledRoute`] when the method/path pair is not
    /// part of the contract, and [`ApiError::InvalidBody`] when a create
    /// endpoint gets no body or a body that is not a JSON object.
    pub fn resolve(method: Option<Method>, path: &str, body: Option<&str>) -> Result<Self, ApiError> {
        let method = method.unwrap_or(Method::Get);
        let route = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();

        match (method, segments.as_slice()) {
            (Method::Get, ["products"]) => Ok(Self::ListProducts),
            (Method::Post, ["products", "createProduct"]) => Ok(Self::CreateProduct(decode_body(body)?)),
            (Method::Get, ["products", id]) => Ok(Self::GetProduct { id: (*id).to_owned() }),
            (Method::Delete, ["products", id]) => Ok(Self::DeleteProduct { id: (*id).to_owned() }),
            (Method::Get, ["products", id, "components"]) => Ok(Self::ListComponents { product_id: (*id).to_owned() }),
            (Method::Post, ["products", id, "components"]) => {
                Ok(Self::CreateComponent { product_id: (*id).to_owned(), draft: decode_body(body)? })
            }
            (Method::Delete, ["products", id, "components", component_id]) => Ok(Self::DeleteComponent {
                product_id: (*id).to_owned(),
                component_id: (*component_id).to_owned(),
            }),
            (Method::Put, ["products", id, "toggle"]) => Ok(Self::ToggleProduct { id: (*id).to_owned() }),
            _ => Err(ApiError::UnhandledRoute { method, path: path.to_owned() }),
        }
    }

    /// Short operation name for logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListProducts => "ListProducts",
            Self::GetProduct { .. } => "GetProduct",
            Self::ListComponents { .. } => "ListComponents",
            Self::CreateProduct(_) => "CreateProduct",
            Self::DeleteProduct { .. } => "DeleteProduct",
            Self::CreateComponent { .. } => "CreateComponent",
            Self::DeleteComponent { .. } => "DeleteComponent",
            Self::ToggleProduct { .. } => "ToggleProduct",
        }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::ListProducts | Self::GetProduct { .. } | Self::ListComponents { .. } => Method::Get,
            Self::CreateProduct(_) | Self::CreateComponent { .. } => Method::Post,
            Self::DeleteProduct { .. } | Self::DeleteComponent { .. } => Method::Delete,
            Self::ToggleProduct { .. } => Method::Put,
        }
    }

    /// Request path, relative to the API base address.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ListProducts => "/products".to_owned(),
            Self::GetProduct { id } | Self::DeleteProduct { id } => format!("/products/{id}"),
            Self::ListComponents { product_id } | Self::CreateComponent { product_id, .. } => {
                format!("/products/{product_id}/components")
            }
            Self::CreateProduct(_) => "/products/createProduct".to_owned(),
            Self::DeleteComponent { product_id, component_id } => {
                format!("/products/{product_id}/components/{component_id}")
            }
            Self::ToggleProduct { id } => format!("/products/{id}/toggle"),
        }
    }

    /// JSON request body, for the endpoints that carry one.
    #[must_use]
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::CreateProduct(draft) => serde_json::to_value(draft).ok(),
            Self::CreateComponent { draft, .. } => serde_json::to_value(draft).ok(),
            _ => None,
        }
    }

    /// Decode a JSON response body into the reply this endpoint expects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not have the expected shape.
    pub fn decode_reply(&self, value: Value) -> Result<Reply, ApiError> {
        let decode_err = |e: serde_json::Error| ApiError::Decode(e.to_string());
        match self {
            Self::ListProducts => serde_json::from_value(value).map(Reply::Products).map_err(decode_err),
            Self::GetProduct { .. } | Self::CreateProduct(_) | Self::ToggleProduct { .. } => {
                serde_json::from_value(value).map(Reply::Product).map_err(decode_err)
            }
            Self::ListComponents { .. } => serde_json::from_value(value).map(Reply::Components).map_err(decode_err),
            Self::CreateComponent { .. } => serde_json::from_value(value).map(Reply::Component).map_err(decode_err),
            Self::DeleteProduct { .. } | Self::DeleteComponent { .. } => Ok(Reply::Ack(Ack {})),
        }
    }
}

/// Decode a raw JSON request body that must be a JSON object.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBody`] when the body is missing, is not JSON,
/// is not an object, or does not fit `T`.
pub fn decode_body<T: DeserializeOwned>(body: Option<&str>) -> Result<T, ApiError> {
    let raw = body.ok_or_else(|| ApiError::InvalidBody("missing request body".to_owned()))?;
    let value: Value = serde_json::from_str(raw).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::InvalidBody("expected a JSON object".to_owned()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// Empty acknowledgement; serializes as `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {}

/// Successful result of an endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Products(Vec<Product>),
    Product(Product),
    Components(Vec<Component>),
    Component(Component),
    Ack(Ack),
}

impl Reply {
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedReply`] for any other reply kind.
    pub fn into_products(self) -> Result<Vec<Product>, ApiError> {
        match self {
            Self::Products(products) => Ok(products),
            _ => Err(ApiError::UnexpectedReply("product list")),
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedReply`] for any other reply kind.
    pub fn into_product(self) -> Result<Product, ApiError> {
        match self {
            Self::Product(product) => Ok(product),
            _ => Err(ApiError::UnexpectedReply("product")),
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedReply`] for any other reply kind.
    pub fn into_components(self) -> Result<Vec<Component>, ApiError> {
        match self {
            Self::Components(components) => Ok(components),
            _ => Err(ApiError::UnexpectedReply("component list")),
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedReply`] for any other reply kind.
    pub fn into_component(self) -> Result<Component, ApiError> {
        match self {
            Self::Component(component) => Ok(component),
            _ => Err(ApiError::UnexpectedReply("component")),
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedReply`] for any other reply kind.
    pub fn into_ack(self) -> Result<(), ApiError> {
        match self {
            Self::Ack(_) => Ok(()),
            _ => Err(ApiError::UnexpectedReply("acknowledgement")),
        }
    }
}
