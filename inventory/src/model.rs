//! Product and component records as they appear on the wire.
//!
//! Field names follow the dashboard's JSON contract (`_id`, `isActive`,
//! `productId`, `gasLevel`) so the same payloads round-trip between the
//! server, the browser mock, and any external backend.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// A monitored storage unit, e.g. a cold-storage room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whether the product's components are monitored and displayed.
    pub is_active: bool,
}

/// A sensor group attached to a product.
///
/// `temperature`, `humidity`, `gas_level` and `timestamps` are parallel
/// sequences of equal length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub product_id: String,
    /// Degrees Celsius.
    pub temperature: Vec<f64>,
    /// Relative humidity, percent.
    pub humidity: Vec<f64>,
    /// Parts per million.
    pub gas_level: Vec<f64>,
    /// RFC 3339 UTC timestamps.
    pub timestamps: Vec<String>,
}

impl Component {
    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Request body for `POST /products/createProduct`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for `POST /products/{id}/components`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ProductDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into() }
    }
}

impl ComponentDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into() }
    }
}
