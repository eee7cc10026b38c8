//! HTTP methods supported by the Admin REST API.

use serde::{Deserialize, Serialize};

/// HTTP method of an endpoint.
///
/// The Shopify Admin REST API only uses these four verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Canonical upper-case name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the method only reads state.
    #[must_use]
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::Get)
    }

    /// Whether repeating the request has the same effect as sending it once.
    ///
    /// This is a property of the HTTP verb only; a specific endpoint may
    /// still behave differently.
    #[must_use]
    pub const fn is_idempotent(self) -> bool {
        matches!(self, Self::Get | Self::Put | Self::Delete)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(format!("unsupported HTTP method: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display_and_parse() {
        for method in [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ] {
            let parsed: HttpMethod = method.to_string().parse().expect("parse method");
            assert_eq!(parsed, method);
        }
        assert_eq!("post".parse::<HttpMethod>(), Ok(HttpMethod::Post));
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_method_serializes_upper_case() {
        let json = serde_json::to_string(&HttpMethod::Delete).expect("serialize");
        assert_eq!(json, "\"DELETE\"");
    }

    #[test]
    fn test_method_semantics() {
        assert!(HttpMethod::Get.is_read_only());
        assert!(!HttpMethod::Put.is_read_only());
        assert!(HttpMethod::Delete.is_idempotent());
        assert!(!HttpMethod::Post.is_idempotent());
    }
}
