//! Parameter specifications for endpoint descriptors.

use serde::{Deserialize, Serialize};

/// Where a parameter ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    /// Substituted into a `{placeholder}` of the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as a top-level field of the JSON request body.
    Body,
}

impl std::fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// JSON type advertised for a parameter in the tool input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamKind {
    /// JSON Schema `type` keyword for this kind.
    #[must_use]
    pub const fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

/// A single declared parameter of an endpoint.
///
/// Path parameters are always required; query and body parameters are
/// optional unless marked with [`ParamSpec::required`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    name: String,
    location: ParamLocation,
    required: bool,
    kind: ParamKind,
    description: String,
}

impl ParamSpec {
    /// A required path parameter.
    #[must_use]
    pub fn path(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Path,
            required: true,
            kind: ParamKind::String,
            description: description.into(),
        }
    }

    /// An optional query-string parameter.
    #[must_use]
    pub fn query(name: impl Into<String>, kind: ParamKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Query,
            required: false,
            kind,
            description: description.into(),
        }
    }

    /// An optional JSON body field.
    #[must_use]
    pub fn body(name: impl Into<String>, kind: ParamKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Body,
            required: false,
            kind,
            description: description.into(),
        }
    }

    /// Mark the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the parameter as optional.
    ///
    /// Descriptors reject optional path parameters at construction.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn location(&self) -> ParamLocation {
        self.location
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_params_are_required() {
        let spec = ParamSpec::path("order_id", "The order ID");
        assert!(spec.is_required());
        assert_eq!(spec.location(), ParamLocation::Path);
        assert_eq!(spec.kind(), ParamKind::String);
    }

    #[test]
    fn test_query_and_body_default_to_optional() {
        let query = ParamSpec::query("limit", ParamKind::Integer, "Page size");
        assert!(!query.is_required());
        assert!(query.clone().required().is_required());

        let body = ParamSpec::body("order", ParamKind::Object, "Order payload");
        assert!(!body.is_required());
        assert_eq!(body.location(), ParamLocation::Body);
    }

    #[test]
    fn test_kind_json_type() {
        assert_eq!(ParamKind::Integer.json_type(), "integer");
        assert_eq!(ParamKind::Array.json_type(), "array");
        assert_eq!(ParamKind::default().json_type(), "string");
    }

    #[test]
    fn test_location_display() {
        assert_eq!(ParamLocation::Query.to_string(), "query");
    }
}
