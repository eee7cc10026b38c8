//! Endpoint descriptors: the static schema behind every tool.
//!
//! Descriptors are built once, at startup, through [`EndpointBuilder`]. All
//! structural invariants are checked in [`EndpointBuilder::build`], so a
//! descriptor that exists is always well-formed:
//!
//! - every `{placeholder}` in the path template has a required path parameter
//! - every path parameter appears in the template
//! - parameter names are unique

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::method::HttpMethod;
use super::param::{ParamKind, ParamLocation, ParamSpec};
use super::template::{PathTemplate, TemplateError};

/// What to do with argument keys the descriptor does not declare.
///
/// Every descriptor states this explicitly; nothing is inferred from the
/// shape of the arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtraArguments {
    /// Fail the call with an unknown-parameter error.
    #[default]
    Reject,
    /// Drop unknown keys.
    Ignore,
    /// Merge unknown keys into the JSON body (free-form body endpoints).
    Body,
}

/// Errors raised while constructing descriptors or catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Tool name is empty.
    #[error("tool name cannot be empty")]
    EmptyName,

    /// Path template failed to parse.
    #[error("{tool}: invalid path template: {source}")]
    Template {
        tool: String,
        #[source]
        source: TemplateError,
    },

    /// A template placeholder has no path parameter.
    #[error("{tool}: placeholder '{placeholder}' has no matching path parameter")]
    UndeclaredPlaceholder { tool: String, placeholder: String },

    /// A path parameter is not used by the template.
    #[error("{tool}: path parameter '{param}' does not appear in the path template")]
    UnusedPathParameter { tool: String, param: String },

    /// A path parameter was marked optional.
    #[error("{tool}: path parameter '{param}' must be required")]
    OptionalPathParameter { tool: String, param: String },

    /// The same parameter name was declared twice.
    #[error("{tool}: parameter '{param}' is declared more than once")]
    DuplicateParameter { tool: String, param: String },

    /// Two descriptors in one catalog share a name.
    #[error("tool '{0}' is declared more than once")]
    DuplicateTool(String),
}

/// Static description of one REST endpoint exposed as a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    name: String,
    description: String,
    domain: String,
    method: HttpMethod,
    template: PathTemplate,
    params: Vec<ParamSpec>,
    extra_arguments: ExtraArguments,
}

impl EndpointDescriptor {
    /// Start building a descriptor.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        method: HttpMethod,
        path_template: impl Into<String>,
    ) -> EndpointBuilder {
        EndpointBuilder {
            name: name.into(),
            description: String::new(),
            domain: String::new(),
            method,
            path_template: path_template.into(),
            params: Vec::new(),
            extra_arguments: ExtraArguments::default(),
        }
    }

    /// Tool name, unique within a catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description shown to the agent.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Domain used to group tools (e.g. `orders`).
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub const fn path_template(&self) -> &PathTemplate {
        &self.template
    }

    /// Declared parameters, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Look up a declared parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name() == name)
    }

    /// Declared parameters at `location`.
    pub fn params_at(&self, location: ParamLocation) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(move |p| p.location() == location)
    }

    #[must_use]
    pub const fn extra_arguments(&self) -> ExtraArguments {
        self.extra_arguments
    }

    /// Whether unknown argument keys are forwarded in the JSON body.
    #[must_use]
    pub const fn allows_extra_body_fields(&self) -> bool {
        matches!(self.extra_arguments, ExtraArguments::Body)
    }

    /// Whether requests to this endpoint carry a JSON body.
    ///
    /// True when the descriptor declares at least one body parameter or
    /// accepts free-form body fields.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.allows_extra_body_fields() || self.params_at(ParamLocation::Body).next().is_some()
    }
}

/// Builder for [`EndpointDescriptor`].
#[derive(Debug, Clone)]
#[must_use]
pub struct EndpointBuilder {
    name: String,
    description: String,
    domain: String,
    method: HttpMethod,
    path_template: String,
    params: Vec<ParamSpec>,
    extra_arguments: ExtraArguments,
}

impl EndpointBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Declare a parameter.
    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    /// Declare several parameters.
    pub fn params(mut self, specs: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.params.extend(specs);
        self
    }

    /// Declare a required path parameter.
    pub fn path(self, name: &str, description: &str) -> Self {
        self.param(ParamSpec::path(name, description))
    }

    /// Declare an optional query parameter.
    pub fn query(self, name: &str, kind: ParamKind, description: &str) -> Self {
        self.param(ParamSpec::query(name, kind, description))
    }

    /// Declare a required query parameter.
    pub fn required_query(self, name: &str, kind: ParamKind, description: &str) -> Self {
        self.param(ParamSpec::query(name, kind, description).required())
    }

    /// Declare an optional body field.
    pub fn body(self, name: &str, kind: ParamKind, description: &str) -> Self {
        self.param(ParamSpec::body(name, kind, description))
    }

    /// Declare a required body field.
    pub fn required_body(self, name: &str, kind: ParamKind, description: &str) -> Self {
        self.param(ParamSpec::body(name, kind, description).required())
    }

    pub const fn extra_arguments(mut self, policy: ExtraArguments) -> Self {
        self.extra_arguments = policy;
        self
    }

    /// Validate and build the descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] if the name is empty, the template does
    /// not parse, parameter names repeat, or path parameters and template
    /// placeholders do not correspond one-to-one.
    pub fn build(self) -> Result<EndpointDescriptor, DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        let template =
            PathTemplate::parse(&self.path_template).map_err(|source| DescriptorError::Template {
                tool: self.name.clone(),
                source,
            })?;

        let mut seen = HashSet::new();
        for spec in &self.params {
            if !seen.insert(spec.name()) {
                return Err(DescriptorError::DuplicateParameter {
                    tool: self.name.clone(),
                    param: spec.name().to_owned(),
                });
            }
        }

        for placeholder in template.placeholders() {
            let declared = self
                .params
                .iter()
                .any(|p| p.location() == ParamLocation::Path && p.name() == placeholder);
            if !declared {
                return Err(DescriptorError::UndeclaredPlaceholder {
                    tool: self.name.clone(),
                    placeholder: placeholder.to_owned(),
                });
            }
        }

        for spec in self
            .params
            .iter()
            .filter(|p| p.location() == ParamLocation::Path)
        {
            if !template.contains(spec.name()) {
                return Err(DescriptorError::UnusedPathParameter {
                    tool: self.name.clone(),
                    param: spec.name().to_owned(),
                });
            }
            if !spec.is_required() {
                return Err(DescriptorError::OptionalPathParameter {
                    tool: self.name.clone(),
                    param: spec.name().to_owned(),
                });
            }
        }

        Ok(EndpointDescriptor {
            name: self.name,
            description: self.description,
            domain: self.domain,
            method: self.method,
            template,
            params: self.params,
            extra_arguments: self.extra_arguments,
        })
    }
}
