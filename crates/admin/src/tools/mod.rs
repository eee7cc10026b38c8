//! Agent-facing tool definitions generated from the endpoint catalog.
//!
//! One [`Tool`] per [`EndpointDescriptor`]: the descriptor's parameters become
//! a JSON Schema object, and the HTTP method becomes MCP-style behaviour hints.

mod executor;

pub use executor::{ToolError, ToolExecutor, ToolOutput};

use serde::Serialize;
use serde_json::{Map, Value, json};
use shopify_tools_core::{EndpointDescriptor, ExtraArguments, HttpMethod, ParamKind};

use crate::catalog::Catalog;

/// Behaviour hints for the agent runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// The tool does not modify the store (GET).
    pub read_only_hint: bool,
    /// The tool deletes data (DELETE).
    pub destructive_hint: bool,
    /// Repeating the call has no further effect (GET, PUT, DELETE).
    pub idempotent_hint: bool,
}

/// A tool definition as sent to the agent runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
    pub annotations: ToolAnnotations,
    /// Domain the tool belongs to (internal, used for grouping).
    #[serde(skip)]
    pub domain: String,
}

impl Tool {
    /// Build a tool definition from a descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: &EndpointDescriptor) -> Self {
        Self::with_defaults(descriptor, &Map::new())
    }

    /// Build a tool definition, marking parameters that have a default as optional.
    ///
    /// A default only applies to parameters the descriptor declares; it is
    /// shown in the schema's `default` keyword.
    #[must_use]
    pub fn with_defaults(descriptor: &EndpointDescriptor, defaults: &Map<String, Value>) -> Self {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for spec in descriptor.params() {
            let mut property = json!({
                "type": spec.kind().json_type(),
                "description": spec.description(),
            });
            if spec.kind() == ParamKind::Array {
                property["items"] = json!({"type": ["string", "integer"]});
            }

            match defaults.get(spec.name()) {
                Some(default) => property["default"] = default.clone(),
                None if spec.is_required() => required.push(Value::from(spec.name())),
                None => {}
            }

            properties.insert(spec.name().to_owned(), property);
        }

        let additional = !matches!(descriptor.extra_arguments(), ExtraArguments::Reject);
        let method = descriptor.method();

        Self {
            name: descriptor.name().to_owned(),
            description: descriptor.description().to_owned(),
            input_schema: json!({
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": additional,
            }),
            annotations: ToolAnnotations {
                read_only_hint: method.is_read_only(),
                destructive_hint: matches!(method, HttpMethod::Delete),
                idempotent_hint: method.is_idempotent(),
            },
            domain: descriptor.domain().to_owned(),
        }
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.annotations.read_only_hint
    }
}

/// Tool definitions for every descriptor in the catalog, in catalog order.
#[must_use]
pub fn all_tools(catalog: &Catalog) -> Vec<Tool> {
    catalog.iter().map(Tool::from_descriptor).collect()
}

/// Tool definitions for one domain.
#[must_use]
pub fn tools_by_domain(catalog: &Catalog, domain: &str) -> Vec<Tool> {
    catalog.by_domain(domain).map(Tool::from_descriptor).collect()
}

/// Get tool names from a list of tools.
#[must_use]
pub fn tool_names(tools: &[Tool]) -> Vec<&str> {
    tools.iter().map(|t| t.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::shopify().expect("catalog is valid")
    }

    #[test]
    fn test_get_order_tool_schema() {
        let catalog = catalog();
        let tool = Tool::from_descriptor(catalog.get("get_order").expect("get_order"));

        assert_eq!(tool.name, "get_order");
        assert_eq!(tool.domain, "orders");
        assert!(tool.is_read_only());
        assert_eq!(tool.input_schema["type"], "object");
        assert_eq!(
            tool.input_schema["properties"]["order_id"]["type"],
            "string"
        );
        assert_eq!(
            tool.input_schema["required"],
            json!(["api_version", "order_id"])
        );
        assert_eq!(tool.input_schema["additionalProperties"], false);
    }

    #[test]
    fn test_defaults_relax_required() {
        let catalog = catalog();
        let mut defaults = Map::new();
        defaults.insert("api_version".to_string(), json!("2025-01"));
        defaults.insert("not_a_param".to_string(), json!(true));

        let tool = Tool::with_defaults(catalog.get("get_order").expect("get_order"), &defaults);
        assert_eq!(tool.input_schema["required"], json!(["order_id"]));
        assert_eq!(
            tool.input_schema["properties"]["api_version"]["default"],
            "2025-01"
        );
        assert!(tool.input_schema["properties"].get("not_a_param").is_none());
    }

    #[test]
    fn test_free_form_body_allows_additional_properties() {
        let catalog = catalog();
        let tool = Tool::from_descriptor(catalog.get("cancel_order").expect("cancel_order"));
        assert_eq!(tool.input_schema["additionalProperties"], true);
        assert!(!tool.is_read_only());
    }

    #[test]
    fn test_annotations_follow_method() {
        let catalog = catalog();
        for tool in all_tools(&catalog) {
            let method = catalog.get(&tool.name).expect("exists").method();
            assert_eq!(tool.annotations.read_only_hint, method == HttpMethod::Get);
            assert_eq!(tool.annotations.destructive_hint, method == HttpMethod::Delete);
        }
    }

    #[test]
    fn test_tool_serialization() {
        let catalog = catalog();
        let tool = Tool::from_descriptor(catalog.get("delete_webhook").expect("delete_webhook"));
        let value = serde_json::to_value(&tool).expect("serialize");

        assert_eq!(value["name"], "delete_webhook");
        assert!(value.get("inputSchema").is_some());
        assert_eq!(value["annotations"]["destructiveHint"], true);
        assert_eq!(value["annotations"]["idempotentHint"], true);
        assert!(value.get("domain").is_none());
    }

    #[test]
    fn test_tools_by_domain() {
        let catalog = catalog();
        let tools = tools_by_domain(&catalog, "gift_cards");
        assert!(!tools.is_empty());
        assert!(tools.iter().all(|t| t.domain == "gift_cards"));
        assert!(tool_names(&tools).contains(&"disable_gift_card"));
        assert!(tools_by_domain(&catalog, "analytics").is_empty());
        assert_eq!(all_tools(&catalog).len(), catalog.len());
    }
}
