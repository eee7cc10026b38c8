//! Shopify Admin REST tools library.
//!
//! Exposes the Shopify Admin REST API as agent tools through one generic
//! endpoint invoker:
//! - [`catalog`] - Validated endpoint descriptors, grouped by domain
//! - [`shopify`] - The invoker, its transport seam, and response decoding
//! - [`tools`] - Tool definitions and the tool executor
//! - [`config`] - Environment-driven client configuration
//!
//! # Security
//!
//! This crate handles a HIGH PRIVILEGE Shopify Admin API access token
//! (full store management). The token never appears in logs or `Debug` output.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod shopify;
pub mod tools;

pub use catalog::Catalog;
pub use config::{ConfigError, ShopifyConfig};
pub use shopify::{ApiResponse, InvokeError, ShopifyClient};
pub use tools::{Tool, ToolError, ToolExecutor, ToolOutput};
