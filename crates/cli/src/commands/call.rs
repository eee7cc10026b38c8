//! `call` command.
//!
//! # Environment Variables
//!
//! - `SHOPIFY_STORE` - Shopify store domain
//! - `SHOPIFY_API_KEY` - Admin API access token
//! - `SHOPIFY_API_VERSION` - filled into `api_version` when omitted

use std::io::Write;
use std::sync::Arc;

use serde_json::Value;
use shopify_admin_tools::{ShopifyClient, ShopifyConfig, ToolExecutor};
use shopify_tools_core::CallArguments;

use super::{CliError, catalog};

/// Call one tool and print its output (or its structured error) as JSON.
///
/// # Errors
///
/// Returns `CliError::InvalidArguments` for unparsable arguments,
/// `CliError::Config` if the environment is incomplete, and
/// `CliError::ToolFailed` after printing a tool error.
pub async fn run(
    tool: &str,
    args_json: Option<&str>,
    arg_pairs: &[String],
    out: &mut impl Write,
) -> Result<(), CliError> {
    let catalog = catalog()?;
    if catalog.get(tool).is_none() {
        return Err(CliError::UnknownTool(tool.to_string()));
    }

    let args = build_arguments(args_json, arg_pairs)?;

    let config = ShopifyConfig::from_env()?;
    tracing::debug!(store = %config.store, api_version = %config.api_version, "Loaded Shopify configuration");

    let client = ShopifyClient::from_config(&config)?;
    let executor = ToolExecutor::new(client, Arc::new(catalog))
        .with_default_argument("api_version", config.api_version.clone());

    match executor.execute(tool, &Value::from(args)).await {
        Ok(output) => {
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
            Ok(())
        }
        Err(err) => {
            serde_json::to_writer_pretty(&mut *out, &err.to_json())?;
            writeln!(out)?;
            Err(CliError::ToolFailed(err.kind()))
        }
    }
}

/// Merge `--args` JSON and `--arg key=value` pairs; pairs win on conflict.
fn build_arguments(args_json: Option<&str>, arg_pairs: &[String]) -> Result<CallArguments, CliError> {
    let mut args = match args_json {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw)
                .map_err(|e| CliError::InvalidArguments(format!("--args is not valid JSON: {e}")))?;
            CallArguments::try_from(value).map_err(|e| CliError::InvalidArguments(e.to_string()))?
        }
        None => CallArguments::new(),
    };

    for pair in arg_pairs {
        let (key, value) = parse_pair(pair)?;
        args.insert(key, value);
    }

    Ok(args)
}

/// Parse `key=value`; the value is JSON when it parses, otherwise a string.
fn parse_pair(pair: &str) -> Result<(String, Value), CliError> {
    let (key, raw) = pair
        .split_once('=')
        .ok_or_else(|| CliError::InvalidArguments(format!("expected KEY=VALUE, got '{pair}'")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidArguments(format!("empty key in '{pair}'")));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
