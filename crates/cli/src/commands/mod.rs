//! CLI command implementations.
//!
//! Commands write their results to the given writer (stdout in the binary)
//! so they can be exercised in tests.

pub mod call;
pub mod describe;
pub mod list;

use shopify_admin_tools::{Catalog, ConfigError};
use shopify_tools_core::DescriptorError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The built-in catalog failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] DescriptorError),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("No tools in domain '{0}'")]
    UnknownDomain(String),

    /// `--args` or `--arg` could not be parsed.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool call failed; the structured error was already printed.
    #[error("Tool call failed ({0})")]
    ToolFailed(&'static str),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the built-in catalog.
fn catalog() -> Result<Catalog, CliError> {
    Ok(Catalog::shopify()?)
}
