//! Metafield endpoints, shop-level and attached to an owner resource.
//!
//! Owner-scoped endpoints take the owner collection as a path segment
//! (`products`, `orders`, `customers`, `collections`, ...), so one descriptor
//! serves every owner type.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

use super::{endpoint, fields, paging};

const DOMAIN: &str = "metafields";

const OWNER_RESOURCE: &str =
    "Owner collection: products, variants, orders, draft_orders, customers, collections";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    let mut endpoints = shop_metafield_endpoints()?;
    endpoints.extend(resource_metafield_endpoints()?);
    Ok(endpoints)
}

fn metafield_filters() -> [ParamSpec; 3] {
    [
        ParamSpec::query("namespace", ParamKind::String, "Filter by namespace"),
        ParamSpec::query("key", ParamKind::String, "Filter by key"),
        ParamSpec::query("type", ParamKind::String, "Filter by type, e.g. single_line_text_field"),
    ]
}

fn shop_metafield_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_shop_metafields", HttpMethod::Get, "/metafields.json")
            .description("List metafields attached to the shop.")
            .params(paging())
            .params(metafield_filters())
            .build()?,
        endpoint(DOMAIN, "create_shop_metafield", HttpMethod::Post, "/metafields.json")
            .description("Create a metafield on the shop.")
            .required_body(
                "metafield",
                ParamKind::Object,
                "Metafield payload: namespace, key, type, value",
            )
            .build()?,
        endpoint(DOMAIN, "get_metafield", HttpMethod::Get, "/metafields/{metafield_id}.json")
            .description("Get a single shop metafield by ID.")
            .path("metafield_id", "The metafield ID")
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "delete_metafield", HttpMethod::Delete, "/metafields/{metafield_id}.json")
            .description("Delete a shop metafield.")
            .path("metafield_id", "The metafield ID")
            .build()?,
    ])
}

fn resource_metafield_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_resource_metafields",
            HttpMethod::Get,
            "/{owner_resource}/{owner_id}/metafields.json",
        )
        .description("List the metafields attached to a resource.")
        .path("owner_resource", OWNER_RESOURCE)
        .path("owner_id", "The owner resource ID")
        .params(paging())
        .params(metafield_filters())
        .build()?,
        endpoint(
            DOMAIN,
            "get_resource_metafield",
            HttpMethod::Get,
            "/{owner_resource}/{owner_id}/metafields/{metafield_id}.json",
        )
        .description("Get a single metafield of a resource.")
        .path("owner_resource", OWNER_RESOURCE)
        .path("owner_id", "The owner resource ID")
        .path("metafield_id", "The metafield ID")
        .build()?,
        endpoint(
            DOMAIN,
            "create_resource_metafield",
            HttpMethod::Post,
            "/{owner_resource}/{owner_id}/metafields.json",
        )
        .description("Create a metafield on a resource.")
        .path("owner_resource", OWNER_RESOURCE)
        .path("owner_id", "The owner resource ID")
        .required_body(
            "metafield",
            ParamKind::Object,
            "Metafield payload: namespace, key, type, value",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "update_resource_metafield",
            HttpMethod::Put,
            "/{owner_resource}/{owner_id}/metafields/{metafield_id}.json",
        )
        .description("Update the value or type of a resource metafield.")
        .path("owner_resource", OWNER_RESOURCE)
        .path("owner_id", "The owner resource ID")
        .path("metafield_id", "The metafield ID")
        .required_body("metafield", ParamKind::Object, "Fields to update: value, type")
        .build()?,
        endpoint(
            DOMAIN,
            "delete_resource_metafield",
            HttpMethod::Delete,
            "/{owner_resource}/{owner_id}/metafields/{metafield_id}.json",
        )
        .description("Delete a metafield of a resource.")
        .path("owner_resource", OWNER_RESOURCE)
        .path("owner_id", "The owner resource ID")
        .path("metafield_id", "The metafield ID")
        .build()?,
    ])
}
