//! Shopify Admin REST endpoint catalog, organized by domain.
//!
//! Every tool is one [`EndpointDescriptor`]. Descriptors are validated as the
//! catalog is built, so a malformed template or a duplicate tool name fails
//! at startup instead of on the first call.
//!
//! Every path starts with `/admin/api/{api_version}`; the version is an
//! ordinary required path parameter.

mod collections;
mod customers;
mod discounts;
mod draft_orders;
mod fulfillments;
mod gift_cards;
mod inventory;
mod metafields;
mod orders;
mod products;
mod shop;
mod webhooks;

use std::collections::{BTreeSet, HashMap};

use shopify_tools_core::{
    DescriptorError, EndpointBuilder, EndpointDescriptor, HttpMethod, ParamKind, ParamSpec,
};

/// Validated, name-indexed set of endpoint descriptors.
#[derive(Debug, Clone)]
pub struct Catalog {
    descriptors: Vec<EndpointDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in Shopify Admin REST catalog.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError` if any descriptor is malformed or two tools
    /// share a name.
    pub fn shopify() -> Result<Self, DescriptorError> {
        let mut descriptors = Vec::with_capacity(128);
        descriptors.extend(shop::endpoints()?);
        descriptors.extend(orders::endpoints()?);
        descriptors.extend(draft_orders::endpoints()?);
        descriptors.extend(products::endpoints()?);
        descriptors.extend(customers::endpoints()?);
        descriptors.extend(inventory::endpoints()?);
        descriptors.extend(fulfillments::endpoints()?);
        descriptors.extend(collections::endpoints()?);
        descriptors.extend(discounts::endpoints()?);
        descriptors.extend(gift_cards::endpoints()?);
        descriptors.extend(webhooks::endpoints()?);
        descriptors.extend(metafields::endpoints()?);
        Self::from_descriptors(descriptors)
    }

    /// Build a catalog from arbitrary descriptors, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::DuplicateTool` if two descriptors share a name.
    pub fn from_descriptors(descriptors: Vec<EndpointDescriptor>) -> Result<Self, DescriptorError> {
        let mut index = HashMap::with_capacity(descriptors.len());
        for (position, descriptor) in descriptors.iter().enumerate() {
            if index.insert(descriptor.name().to_owned(), position).is_some() {
                return Err(DescriptorError::DuplicateTool(descriptor.name().to_owned()));
            }
        }
        Ok(Self { descriptors, index })
    }

    /// Look up a descriptor by tool name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.index
            .get(name)
            .and_then(|&position| self.descriptors.get(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        self.descriptors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Tool names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(EndpointDescriptor::name)
    }

    /// Distinct domains, sorted.
    #[must_use]
    pub fn domains(&self) -> Vec<&str> {
        self.descriptors
            .iter()
            .map(EndpointDescriptor::domain)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Descriptors in one domain, in catalog order.
    pub fn by_domain<'a>(&'a self, domain: &'a str) -> impl Iterator<Item = &'a EndpointDescriptor> {
        self.descriptors.iter().filter(move |d| d.domain() == domain)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EndpointDescriptor;
    type IntoIter = std::slice::Iter<'a, EndpointDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

// =============================================================================
// Descriptor helpers shared by the domain modules
// =============================================================================

/// Start a versioned Admin API endpoint: `/admin/api/{api_version}{path}`.
fn endpoint(domain: &str, name: &str, method: HttpMethod, path: &str) -> EndpointBuilder {
    EndpointDescriptor::builder(name, method, format!("/admin/api/{{api_version}}{path}"))
        .domain(domain)
        .path("api_version", "Admin API version, e.g. 2025-01")
}

fn limit() -> ParamSpec {
    ParamSpec::query(
        "limit",
        ParamKind::Integer,
        "Maximum number of results to return (default 50, max 250)",
    )
}

fn since_id() -> ParamSpec {
    ParamSpec::query(
        "since_id",
        ParamKind::Integer,
        "Restrict results to after the specified ID",
    )
}

fn fields() -> ParamSpec {
    ParamSpec::query(
        "fields",
        ParamKind::String,
        "Comma-separated list of fields to include in the response",
    )
}

fn page_info() -> ParamSpec {
    ParamSpec::query(
        "page_info",
        ParamKind::String,
        "Cursor from a previous response's pagination link",
    )
}

fn ids() -> ParamSpec {
    ParamSpec::query(
        "ids",
        ParamKind::Array,
        "Restrict results to these IDs (sent comma-separated)",
    )
}

fn created_range() -> [ParamSpec; 2] {
    [
        ParamSpec::query(
            "created_at_min",
            ParamKind::String,
            "Show results created at or after this date (ISO 8601)",
        ),
        ParamSpec::query(
            "created_at_max",
            ParamKind::String,
            "Show results created at or before this date (ISO 8601)",
        ),
    ]
}

fn updated_range() -> [ParamSpec; 2] {
    [
        ParamSpec::query(
            "updated_at_min",
            ParamKind::String,
            "Show results last updated at or after this date (ISO 8601)",
        ),
        ParamSpec::query(
            "updated_at_max",
            ParamKind::String,
            "Show results last updated at or before this date (ISO 8601)",
        ),
    ]
}

/// Standard paging parameters for list endpoints.
fn paging() -> [ParamSpec; 4] {
    [limit(), since_id(), page_info(), fields()]
}

#[cfg(test)]
mod tests {
    use shopify_tools_core::{ParamLocation, PathTemplate};

    use super::*;

    #[test]
    fn test_shopify_catalog_builds() {
        let catalog = Catalog::shopify().expect("catalog is valid");
        assert!(catalog.len() >= 100, "catalog has {} tools", catalog.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_all_domains_present() {
        let catalog = Catalog::shopify().expect("catalog is valid");
        let domains = catalog.domains();
        for expected in [
            "collections",
            "customers",
            "discounts",
            "draft_orders",
            "fulfillments",
            "gift_cards",
            "inventory",
            "metafields",
            "orders",
            "products",
            "shop",
            "webhooks",
        ] {
            assert!(domains.contains(&expected), "missing domain {expected}");
        }
        assert_eq!(domains.len(), 12);
    }

    #[test]
    fn test_every_tool_is_versioned_and_described() {
        let catalog = Catalog::shopify().expect("catalog is valid");
        for descriptor in &catalog {
            assert!(
                descriptor
                    .path_template()
                    .as_str()
                    .starts_with("/admin/api/{api_version}/"),
                "{} is not versioned",
                descriptor.name()
            );
            assert!(
                descriptor.path_template().as_str().ends_with(".json"),
                "{} does not end in .json",
                descriptor.name()
            );
            assert!(
                !descriptor.description().is_empty(),
                "{} has no description",
                descriptor.name()
            );
            assert!(
                descriptor
                    .param("api_version")
                    .is_some_and(|p| p.location() == ParamLocation::Path)
            );
        }
    }

    #[test]
    fn test_get_and_by_domain() {
        let catalog = Catalog::shopify().expect("catalog is valid");

        let descriptor = catalog.get("get_order").expect("get_order exists");
        assert_eq!(descriptor.method(), HttpMethod::Get);
        assert_eq!(
            descriptor.path_template(),
            &PathTemplate::parse("/admin/api/{api_version}/orders/{order_id}.json").expect("parse")
        );
        assert!(catalog.get("get_orders").is_none());

        assert!(catalog.by_domain("orders").all(|d| d.domain() == "orders"));
        assert!(catalog.by_domain("orders").any(|d| d.name() == "cancel_order"));
        assert_eq!(catalog.by_domain("nonexistent").count(), 0);
    }

    #[test]
    fn test_every_name_resolves_to_its_descriptor() {
        let catalog = Catalog::shopify().expect("catalog is valid");

        for descriptor in &catalog {
            let found = catalog.get(descriptor.name()).expect("indexed");
            assert_eq!(found.name(), descriptor.name());
            assert_eq!(found.path_template(), descriptor.path_template());
        }
    }

    #[test]
    fn test_duplicate_tool_names_rejected() {
        let first = endpoint("shop", "get_shop", HttpMethod::Get, "/shop.json")
            .description("Shop")
            .build()
            .expect("valid");
        let err = Catalog::from_descriptors(vec![first.clone(), first]).expect_err("duplicate");
        assert_eq!(err, DescriptorError::DuplicateTool("get_shop".to_string()));
    }

    #[test]
    fn test_from_descriptors_preserves_order() {
        let a = endpoint("shop", "b_tool", HttpMethod::Get, "/b.json").build().expect("valid");
        let b = endpoint("shop", "a_tool", HttpMethod::Get, "/a.json").build().expect("valid");
        let catalog = Catalog::from_descriptors(vec![a, b]).expect("valid");
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["b_tool", "a_tool"]);
    }
}
