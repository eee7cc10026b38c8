//! Request planning: descriptor + arguments -> method, path, query, body.
//!
//! Planning is the pre-flight half of an invocation. It performs no I/O, so
//! any error it returns is raised before a request could be sent.
//!
//! 1. Path resolution - every path parameter is substituted into the template
//! 2. Partitioning - remaining arguments go to the query string or the body,
//!    unknown keys follow the descriptor's [`ExtraArguments`] policy
//! 3. Required check - every required query/body parameter must be present

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::{CallArguments, EndpointDescriptor, ExtraArguments, HttpMethod, ParamLocation};

/// Errors in caller-supplied arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required parameter is absent (or `null`).
    #[error("missing required parameter '{0}'")]
    Missing(String),

    /// A value cannot be rendered where its parameter goes.
    #[error("invalid value for parameter '{name}': {reason}")]
    Invalid { name: String, reason: String },

    /// An undeclared key on an endpoint that rejects extra arguments.
    #[error("unknown parameter '{0}'")]
    Unknown(String),

    /// The argument payload was not a JSON object.
    #[error("tool arguments must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Fully resolved request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
    ignored: Vec<String>,
}

impl RequestPlan {
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Resolved path, with placeholders substituted and percent-encoded.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in argument order (values not yet URL-encoded).
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, `None` when the request must not carry one.
    #[must_use]
    pub const fn body(&self) -> Option<&Map<String, Value>> {
        self.body.as_ref()
    }

    /// Undeclared argument keys dropped under [`ExtraArguments::Ignore`].
    #[must_use]
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Consume the plan, returning the body.
    #[must_use]
    pub fn into_body(self) -> Option<Map<String, Value>> {
        self.body
    }
}

/// Plan a request for `descriptor` with `args`.
///
/// # Errors
///
/// - [`ArgumentError::Missing`] for the first absent required parameter
///   (path parameters first, then query/body in declaration order)
/// - [`ArgumentError::Invalid`] when a value cannot be rendered
/// - [`ArgumentError::Unknown`] for an undeclared key under
///   [`ExtraArguments::Reject`]
pub fn plan(
    descriptor: &EndpointDescriptor,
    args: &CallArguments,
) -> Result<RequestPlan, ArgumentError> {
    let path = descriptor.path_template().render(|name| {
        let value = args
            .get(name)
            .ok_or_else(|| ArgumentError::Missing(name.to_owned()))?;
        path_segment(name, value)
    })?;

    let mut query = Vec::new();
    let mut body = descriptor.has_body().then(Map::new);
    let mut extra_body = Map::new();
    let mut ignored = Vec::new();

    for (name, value) in args.iter() {
        match descriptor.param(name).map(|spec| spec.location()) {
            Some(ParamLocation::Path) => {}
            Some(ParamLocation::Query) => {
                if !value.is_null() {
                    query.push((name.clone(), query_value(name, value)?));
                }
            }
            Some(ParamLocation::Body) => {
                if let Some(body) = body.as_mut()
                    && !value.is_null()
                {
                    body.insert(name.clone(), value.clone());
                }
            }
            None => match descriptor.extra_arguments() {
                ExtraArguments::Reject => return Err(ArgumentError::Unknown(name.clone())),
                _ if value.is_null() => {}
                ExtraArguments::Ignore => ignored.push(name.clone()),
                ExtraArguments::Body => {
                    extra_body.insert(name.clone(), value.clone());
                }
            },
        }
    }

    if let Some(spec) = descriptor
        .params()
        .iter()
        .filter(|spec| spec.location() != ParamLocation::Path)
        .find(|spec| spec.is_required() && !args.contains(spec.name()))
    {
        return Err(ArgumentError::Missing(spec.name().to_owned()));
    }

    if let Some(body) = body.as_mut() {
        body.extend(extra_body);
    }

    Ok(RequestPlan {
        method: descriptor.method(),
        path,
        query,
        body,
        ignored,
    })
}

/// Render a scalar for use as one path segment, percent-encoded.
fn path_segment(name: &str, value: &Value) -> Result<String, ArgumentError> {
    let text = scalar_text(value).ok_or_else(|| ArgumentError::Invalid {
        name: name.to_owned(),
        reason: format!("expected a string, number, or boolean, got {}", type_name(value)),
    })?;
    if text.is_empty() {
        return Err(ArgumentError::Invalid {
            name: name.to_owned(),
            reason: "path segment cannot be empty".to_string(),
        });
    }
    // Dot segments are collapsed by URL normalization and would change the endpoint
    if text == "." || text == ".." {
        return Err(ArgumentError::Invalid {
            name: name.to_owned(),
            reason: format!("'{text}' is not a valid path segment"),
        });
    }
    Ok(urlencoding::encode(&text).into_owned())
}

/// Render a value for the query string.
///
/// Arrays become comma-separated lists (`ids=1,2,3`), the convention used by
/// the Admin API; objects are sent as compact JSON text.
fn query_value(name: &str, value: &Value) -> Result<String, ArgumentError> {
    match value {
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                let text = scalar_text(item).ok_or_else(|| ArgumentError::Invalid {
                    name: name.to_owned(),
                    reason: format!("array items must be scalars, got {}", type_name(item)),
                })?;
                parts.push(text);
            }
            Ok(parts.join(","))
        }
        Value::Object(_) => Ok(value.to_string()),
        _ => scalar_text(value).ok_or_else(|| ArgumentError::Invalid {
            name: name.to_owned(),
            reason: format!("unsupported value of type {}", type_name(value)),
        }),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{ParamKind, ParamSpec};

    fn get_order() -> EndpointDescriptor {
        EndpointDescriptor::builder(
            "get_order",
            HttpMethod::Get,
            "/admin/api/{api_version}/orders/{order_id}.json",
        )
        .path("api_version", "Admin API version")
        .path("order_id", "The order ID")
        .query("fields", ParamKind::String, "Fields to include")
        .build()
        .expect("valid descriptor")
    }

    fn create_customer(extra: ExtraArguments) -> EndpointDescriptor {
        EndpointDescriptor::builder(
            "create_customer",
            HttpMethod::Post,
            "/admin/api/{api_version}/customers.json",
        )
        .path("api_version", "Admin API version")
        .required_body("customer", ParamKind::Object, "Customer payload")
        .query("send_email_invite", ParamKind::Boolean, "Send invite")
        .extra_arguments(extra)
        .build()
        .expect("valid descriptor")
    }

    #[test]
    fn test_path_substitution_is_exact() {
        let args = CallArguments::new()
            .with("api_version", "2023-10")
            .with("order_id", "42");
        let planned = plan(&get_order(), &args).expect("plan");

        assert_eq!(planned.method(), HttpMethod::Get);
        assert_eq!(planned.path(), "/admin/api/2023-10/orders/42.json");
        assert!(planned.query().is_empty());
        assert!(planned.body().is_none());
    }

    #[test]
    fn test_numeric_path_values_and_encoding() {
        let args = CallArguments::new()
            .with("api_version", "2023-10")
            .with("order_id", 450_789_469);
        let planned = plan(&get_order(), &args).expect("plan");
        assert_eq!(planned.path(), "/admin/api/2023-10/orders/450789469.json");

        let args = CallArguments::new()
            .with("api_version", "2023-10")
            .with("order_id", "../shop");
        let planned = plan(&get_order(), &args).expect("plan");
        assert_eq!(planned.path(), "/admin/api/2023-10/orders/..%2Fshop.json");
    }

    #[test]
    fn test_missing_path_parameter() {
        let args = CallArguments::new().with("api_version", "2023-10");
        assert_eq!(
            plan(&get_order(), &args),
            Err(ArgumentError::Missing("order_id".to_string()))
        );
    }

    #[test]
    fn test_null_path_parameter_counts_as_missing() {
        let args = CallArguments::new()
            .with("api_version", "2023-10")
            .with("order_id", Value::Null);
        assert_eq!(
            plan(&get_order(), &args),
            Err(ArgumentError::Missing("order_id".to_string()))
        );
    }

    #[test]
    fn test_invalid_path_values() {
        let args = CallArguments::new()
            .with("api_version", "2023-10")
            .with("order_id", json!({"id": 1}));
        assert!(matches!(
            plan(&get_order(), &args),
            Err(ArgumentError::Invalid { ref name, .. }) if name == "order_id"
        ));

        let args = CallArguments::new()
            .with("api_version", "2023-10")
            .with("order_id", "");
        assert!(matches!(
            plan(&get_order(), &args),
            Err(ArgumentError::Invalid { .. })
        ));
    }

    #[test]
    fn test_partitioning_query_and_body() {
        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("customer", json!({"email": "a@example.com"}))
            .with("send_email_invite", true);
        let planned = plan(&create_customer(ExtraArguments::Reject), &args).expect("plan");

        assert_eq!(planned.path(), "/admin/api/2024-01/customers.json");
        assert_eq!(
            planned.query(),
            &[("send_email_invite".to_string(), "true".to_string())]
        );
        let body = planned.body().expect("body");
        assert_eq!(body.get("customer"), Some(&json!({"email": "a@example.com"})));
        assert!(!body.contains_key("send_email_invite"));
        assert!(!body.contains_key("api_version"));
    }

    #[test]
    fn test_missing_required_body_parameter() {
        let args = CallArguments::new().with("api_version", "2024-01");
        assert_eq!(
            plan(&create_customer(ExtraArguments::Reject), &args),
            Err(ArgumentError::Missing("customer".to_string()))
        );
    }

    #[test]
    fn test_extra_arguments_reject() {
        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("customer", json!({}))
            .with("note", "hello");
        assert_eq!(
            plan(&create_customer(ExtraArguments::Reject), &args),
            Err(ArgumentError::Unknown("note".to_string()))
        );
    }

    #[test]
    fn test_extra_arguments_ignore() {
        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("customer", json!({}))
            .with("note", "hello");
        let planned = plan(&create_customer(ExtraArguments::Ignore), &args).expect("plan");
        assert_eq!(planned.ignored(), &["note".to_string()]);
        assert!(!planned.body().expect("body").contains_key("note"));
    }

    #[test]
    fn test_extra_arguments_merge_into_body() {
        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("customer", json!({}))
            .with("note", "hello");
        let planned = plan(&create_customer(ExtraArguments::Body), &args).expect("plan");
        let body = planned.into_body().expect("body");
        assert_eq!(body.get("note"), Some(&json!("hello")));
        assert_eq!(body.get("customer"), Some(&json!({})));
    }

    #[test]
    fn test_null_extra_arguments_are_absent() {
        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("customer", json!({}))
            .with("note", Value::Null);

        let planned = plan(&create_customer(ExtraArguments::Body), &args).expect("plan");
        assert!(!planned.body().expect("body").contains_key("note"));

        let planned = plan(&create_customer(ExtraArguments::Ignore), &args).expect("plan");
        assert!(planned.ignored().is_empty());
        assert!(!planned.body().expect("body").contains_key("note"));
    }

    #[test]
    fn test_dot_path_segments_rejected() {
        for dots in [".", ".."] {
            for name in ["api_version", "order_id"] {
                let args = CallArguments::new()
                    .with("api_version", "2024-01")
                    .with("order_id", "450789469")
                    .with(name, dots);
                let err = plan(&get_order(), &args).expect_err("dot segment");
                assert!(
                    matches!(err, ArgumentError::Invalid { name: ref invalid, .. } if invalid == name),
                    "{name}={dots}: {err:?}"
                );
            }
        }

        // Dots inside a segment are ordinary characters
        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("order_id", "1.5");
        let planned = plan(&get_order(), &args).expect("plan");
        assert_eq!(planned.path(), "/admin/api/2024-01/orders/1.5.json");
    }

    #[test]
    fn test_query_value_rendering() {
        let descriptor = EndpointDescriptor::builder(
            "list_orders",
            HttpMethod::Get,
            "/admin/api/{api_version}/orders.json",
        )
        .path("api_version", "Admin API version")
        .query("ids", ParamKind::Array, "Order IDs")
        .query("limit", ParamKind::Integer, "Page size")
        .query("status", ParamKind::String, "Status filter")
        .query("fields", ParamKind::String, "Fields")
        .build()
        .expect("valid descriptor");

        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("ids", json!([1, 2, "3"]))
            .with("limit", 50)
            .with("status", "any")
            .with("fields", Value::Null);
        let planned = plan(&descriptor, &args).expect("plan");

        assert!(planned.body().is_none());
        let query: Vec<(&str, &str)> = planned
            .query()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert!(query.contains(&("ids", "1,2,3")));
        assert!(query.contains(&("limit", "50")));
        assert!(query.contains(&("status", "any")));
        assert!(!query.iter().any(|(k, _)| *k == "fields"));
    }

    #[test]
    fn test_nested_array_in_query_is_invalid() {
        let descriptor = EndpointDescriptor::builder("list", HttpMethod::Get, "/things.json")
            .param(ParamSpec::query("ids", ParamKind::Array, "IDs"))
            .build()
            .expect("valid descriptor");
        let args = CallArguments::new().with("ids", json!([[1]]));
        assert!(matches!(
            plan(&descriptor, &args),
            Err(ArgumentError::Invalid { .. })
        ));
    }

    #[test]
    fn test_post_without_body_params_sends_no_body() {
        let descriptor = EndpointDescriptor::builder(
            "close_order",
            HttpMethod::Post,
            "/admin/api/{api_version}/orders/{order_id}/close.json",
        )
        .path("api_version", "Admin API version")
        .path("order_id", "The order ID")
        .build()
        .expect("valid descriptor");
        let args = CallArguments::new()
            .with("api_version", "2024-01")
            .with("order_id", 7);
        let planned = plan(&descriptor, &args).expect("plan");
        assert!(planned.body().is_none());
        assert_eq!(planned.path(), "/admin/api/2024-01/orders/7/close.json");
    }
}
