//! Shopify Admin REST API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the high-privilege Admin API access token.**
//!
//! The token is attached to every request by the transport as
//! `X-Shopify-Access-Token` and is never logged.
//!
//! # Architecture
//!
//! - One generic invoker ([`ShopifyClient::invoke`]) driven by
//!   [`EndpointDescriptor`](shopify_tools_core::EndpointDescriptor) data
//! - Request planning is pure and happens before any I/O
//! - Exactly one HTTP request per invocation; no retries, no hidden pagination
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin_tools::shopify::ShopifyClient;
//! use shopify_tools_core::CallArguments;
//!
//! let client = ShopifyClient::from_config(&config)?;
//! let descriptor = catalog.get("get_order").expect("known tool");
//!
//! let args = CallArguments::new()
//!     .with("api_version", "2025-01")
//!     .with("order_id", "450789469");
//! let response = client.invoke(descriptor, &args).await?;
//! ```

mod client;
mod response;
mod transport;

pub use client::ShopifyClient;
pub use response::{ApiResponse, CallLimit, PageLink, Pagination};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};

use shopify_tools_core::ArgumentError;
use thiserror::Error;

/// Errors that can occur when invoking a Shopify Admin REST endpoint.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// A required argument is absent (or `null`).
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// An argument cannot be rendered where its parameter goes.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// An argument the endpoint does not declare.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Network failure before a response arrived.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Shopify answered with a non-2xx status.
    #[error("Shopify returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// A 2xx body that is not valid JSON.
    #[error("Failed to decode HTTP {status} response body: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl InvokeError {
    /// Stable snake_case discriminator for structured error output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "missing_parameter",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::UnknownParameter(_) => "unknown_parameter",
            Self::Transport(_) => "transport_error",
            Self::Remote { .. } => "remote_error",
            Self::Decode { .. } => "decode_error",
        }
    }

    /// Whether the error was raised before any request was sent.
    #[must_use]
    pub const fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::InvalidParameter { .. } | Self::UnknownParameter(_)
        )
    }

    /// HTTP status, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parse a remote error body as JSON (e.g. `{"errors": "Not Found"}`).
    ///
    /// Returns `None` for other variants or when the body is not JSON.
    #[must_use]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Remote { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

impl From<ArgumentError> for InvokeError {
    fn from(err: ArgumentError) -> Self {
        match err {
            ArgumentError::Missing(name) => Self::MissingParameter(name),
            ArgumentError::Invalid { name, reason } => Self::InvalidParameter { name, reason },
            ArgumentError::Unknown(name) => Self::UnknownParameter(name),
            ArgumentError::NotAnObject(found) => Self::InvalidParameter {
                name: "arguments".to_string(),
                reason: format!("expected a JSON object, got {found}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_error_display() {
        let err = InvokeError::MissingParameter("order_id".to_string());
        assert_eq!(err.to_string(), "Missing required parameter: order_id");

        let err = InvokeError::Remote {
            status: 404,
            body: r#"{"errors":"Not Found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Shopify returned HTTP 404: {"errors":"Not Found"}"#
        );
    }

    #[test]
    fn test_invoke_error_kind() {
        assert_eq!(
            InvokeError::UnknownParameter("note".to_string()).kind(),
            "unknown_parameter"
        );
        assert_eq!(
            InvokeError::Transport(TransportError::Timeout("30s".to_string())).kind(),
            "transport_error"
        );
        assert_eq!(
            InvokeError::Remote {
                status: 500,
                body: String::new()
            }
            .kind(),
            "remote_error"
        );
    }

    #[test]
    fn test_pre_flight_classification() {
        assert!(InvokeError::MissingParameter("x".to_string()).is_pre_flight());
        assert!(
            InvokeError::InvalidParameter {
                name: "x".to_string(),
                reason: "bad".to_string()
            }
            .is_pre_flight()
        );
        assert!(!InvokeError::Transport(TransportError::Connect("refused".to_string())).is_pre_flight());
        assert!(
            !InvokeError::Remote {
                status: 422,
                body: String::new()
            }
            .is_pre_flight()
        );
    }

    #[test]
    fn test_body_json() {
        let err = InvokeError::Remote {
            status: 404,
            body: r#"{"errors":"Not Found"}"#.to_string(),
        };
        assert_eq!(
            err.body_json(),
            Some(serde_json::json!({"errors": "Not Found"}))
        );
        assert_eq!(err.status(), Some(404));

        let err = InvokeError::Remote {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert!(err.body_json().is_none());
    }

    #[test]
    fn test_from_argument_error() {
        let err: InvokeError = ArgumentError::Missing("order_id".to_string()).into();
        assert!(matches!(err, InvokeError::MissingParameter(ref n) if n == "order_id"));

        let err: InvokeError = ArgumentError::NotAnObject("array").into();
        assert!(matches!(err, InvokeError::InvalidParameter { ref name, .. } if name == "arguments"));
    }
}
