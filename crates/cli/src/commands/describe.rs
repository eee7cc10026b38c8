//! `describe` command.

use std::io::Write;

use serde_json::{Value, json};
use shopify_admin_tools::Tool;

use super::{CliError, catalog};

/// Print a tool's definition with its method, path, and domain.
///
/// # Errors
///
/// Returns `CliError::UnknownTool` if no tool has this name.
pub fn run(name: &str, out: &mut impl Write) -> Result<(), CliError> {
    let catalog = catalog()?;
    let descriptor = catalog
        .get(name)
        .ok_or_else(|| CliError::UnknownTool(name.to_string()))?;

    let mut definition = serde_json::to_value(Tool::from_descriptor(descriptor))?;
    if let Value::Object(map) = &mut definition {
        map.insert("domain".to_string(), json!(descriptor.domain()));
        map.insert("method".to_string(), json!(descriptor.method()));
        map.insert(
            "path".to_string(),
            json!(descriptor.path_template().as_str()),
        );
    }

    serde_json::to_writer_pretty(&mut *out, &definition)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_get_order() {
        let mut buffer = Vec::new();
        run("get_order", &mut buffer).expect("describe");
        let definition: Value = serde_json::from_slice(&buffer).expect("json");

        assert_eq!(definition["name"], "get_order");
        assert_eq!(definition["method"], "GET");
        assert_eq!(definition["domain"], "orders");
        assert_eq!(
            definition["path"],
            "/admin/api/{api_version}/orders/{order_id}.json"
        );
        assert!(definition["inputSchema"]["properties"]["order_id"].is_object());
    }

    #[test]
    fn test_describe_unknown_tool() {
        let mut buffer = Vec::new();
        let err = run("nope", &mut buffer).expect_err("unknown");
        assert!(matches!(err, CliError::UnknownTool(ref n) if n == "nope"));
        assert!(buffer.is_empty());
    }
}
