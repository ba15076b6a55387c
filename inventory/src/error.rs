//! Error taxonomy shared by the store, the server, and the client shim.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the dashboard can observe maps to one [`ApiError`] variant.
//! The server turns it into a status code plus JSON body; the client turns
//! it into a fixed, operation-specific notice and never branches on cause.

use crate::endpoint::Method;

/// Failure of a data-access operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No product has the requested identifier.
    #[error("product not found: {0}")]
    NotFound(String),
    /// The method/path combination is not part of the contract.
    #[error("unhandled route: {method} {path}")]
    UnhandledRoute { method: Method, path: String },
    /// A write was sent without a usable JSON object body.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),
    /// The remote backend answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// A backend answered an endpoint with the wrong kind of reply.
    #[error("unexpected reply for {0}")]
    UnexpectedReply(&'static str),
}

impl ApiError {
    /// Stable machine-readable code used in server error bodies.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_NOT_FOUND",
            Self::UnhandledRoute { .. } => "E_UNHANDLED_ROUTE",
            Self::InvalidBody(_) => "E_INVALID_BODY",
            Self::Network(_) => "E_NETWORK",
            Self::Status(_) => "E_STATUS",
            Self::Decode(_) => "E_DECODE",
            Self::UnexpectedReply(_) => "E_UNEXPECTED_REPLY",
        }
    }

    /// HTTP status the server answers with for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::UnhandledRoute { .. } => 404,
            Self::InvalidBody(_) => 400,
            Self::Status(status) => *status,
            Self::Network(_) | Self::Decode(_) | Self::UnexpectedReply(_) => 502,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
