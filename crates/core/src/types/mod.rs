//! Core types for Shopify Admin REST tools.
//!
//! This module provides the immutable, validated description of an endpoint
//! and the transient arguments of a single call.

pub mod arguments;
pub mod descriptor;
pub mod method;
pub mod param;
pub mod template;

pub use arguments::CallArguments;
pub use descriptor::{DescriptorError, EndpointBuilder, EndpointDescriptor, ExtraArguments};
pub use method::HttpMethod;
pub use param::{ParamKind, ParamLocation, ParamSpec};
pub use template::{PathTemplate, TemplateError};
