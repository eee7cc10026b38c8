//! Shopify Tools Core - Endpoint descriptors and request planning.
//!
//! This crate provides the data model shared by every Shopify Admin REST tool:
//! - [`EndpointDescriptor`] - static schema (method, path template, parameters) for one tool
//! - [`CallArguments`] - the flat argument object supplied per invocation
//! - [`plan`] - turns a descriptor plus arguments into a [`RequestPlan`]
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Path resolution, parameter partitioning, and required-parameter
//! checks all happen here, so they can be tested without a network and reused
//! by any transport.
//!
//! # Modules
//!
//! - [`types`] - Descriptors, parameter specs, path templates, and arguments
//! - [`plan`] - Request planning from descriptor + arguments

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod plan;
pub mod types;

pub use plan::{ArgumentError, RequestPlan, plan};
pub use types::*;
