//! Tool execution: tool name + flat JSON arguments -> one invocation.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value, json};
use shopify_tools_core::CallArguments;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::shopify::{
    ApiResponse, CallLimit, InvokeError, Pagination, ReqwestTransport, ShopifyClient, Transport,
};

use super::Tool;

/// Errors returned to the agent runtime.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool with this name in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

impl ToolError {
    /// Stable snake_case discriminator.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::Invoke(err) => err.kind(),
        }
    }

    /// Structured error object: `{"error": kind, "message": ..., ...details}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("error".to_string(), json!(self.kind()));
        object.insert("message".to_string(), json!(self.to_string()));

        match self {
            Self::UnknownTool(name) => {
                object.insert("tool".to_string(), json!(name));
            }
            Self::Invoke(
                InvokeError::MissingParameter(name)
                | InvokeError::UnknownParameter(name)
                | InvokeError::InvalidParameter { name, .. },
            ) => {
                object.insert("parameter".to_string(), json!(name));
            }
            Self::Invoke(err @ InvokeError::Remote { status, body }) => {
                object.insert("status".to_string(), json!(status));
                object.insert(
                    "body".to_string(),
                    err.body_json().unwrap_or_else(|| json!(body)),
                );
            }
            Self::Invoke(InvokeError::Decode { status, .. }) => {
                object.insert("status".to_string(), json!(status));
            }
            Self::Invoke(InvokeError::Transport(_)) => {}
        }

        Value::Object(object)
    }
}

/// Successful tool result, as rendered to the agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    pub status: u16,
    /// Decoded response body (`null` for an empty body).
    pub data: Value,
    #[serde(skip_serializing_if = "Pagination::is_empty")]
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_call_limit: Option<CallLimit>,
}

impl From<ApiResponse> for ToolOutput {
    fn from(response: ApiResponse) -> Self {
        Self {
            status: response.status,
            data: response.body,
            pagination: response.pagination,
            retry_after_seconds: response.retry_after.map(|d| d.as_secs_f64()),
            api_call_limit: response.api_call_limit,
        }
    }
}

/// Executor for catalog tools.
///
/// Maps a tool name to its descriptor and invokes it. Holds only shared,
/// immutable state, so one executor serves concurrent calls.
pub struct ToolExecutor<T = ReqwestTransport> {
    client: ShopifyClient<T>,
    catalog: Arc<Catalog>,
    defaults: Map<String, Value>,
}

impl<T: Transport> ToolExecutor<T> {
    /// Create a new tool executor.
    #[must_use]
    pub fn new(client: ShopifyClient<T>, catalog: Arc<Catalog>) -> Self {
        Self {
            client,
            catalog,
            defaults: Map::new(),
        }
    }

    /// Fill `name` with `value` when a caller omits it.
    ///
    /// Only applied to tools that declare the parameter.
    #[must_use]
    pub fn with_default_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tool definitions reflecting this executor's defaults.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.catalog
            .iter()
            .map(|descriptor| Tool::with_defaults(descriptor, &self.defaults))
            .collect()
    }

    /// Look up a single tool definition.
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<Tool> {
        self.catalog
            .get(name)
            .map(|descriptor| Tool::with_defaults(descriptor, &self.defaults))
    }

    /// Execute a tool.
    ///
    /// # Arguments
    ///
    /// * `name` - Tool name
    /// * `input` - Flat JSON object of arguments (`null` means none)
    ///
    /// # Errors
    ///
    /// Returns `ToolError::UnknownTool` for a name not in the catalog, and
    /// `ToolError::Invoke` for anything the invocation reports.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub async fn execute(&self, name: &str, input: &Value) -> Result<ToolOutput, ToolError> {
        let descriptor = self
            .catalog
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let mut args = CallArguments::try_from(input.clone()).map_err(InvokeError::from)?;
        for (key, value) in &self.defaults {
            if descriptor.param(key).is_some() && !args.contains(key) {
                args.insert(key.clone(), value.clone());
            }
        }

        let response = self.client.invoke(descriptor, &args).await?;
        debug!(status = response.status, "Tool executed");

        Ok(ToolOutput::from(response))
    }
}
