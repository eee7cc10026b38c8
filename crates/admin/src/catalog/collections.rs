//! Collection endpoints: custom collections, smart collections, and collects.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

use super::{endpoint, fields, ids, limit, page_info, paging, updated_range};

const DOMAIN: &str = "collections";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    let mut endpoints = custom_collection_endpoints()?;
    endpoints.extend(smart_collection_endpoints()?);
    endpoints.extend(collect_endpoints()?);
    Ok(endpoints)
}

fn collection_filters() -> [ParamSpec; 3] {
    [
        ParamSpec::query("title", ParamKind::String, "Filter by collection title"),
        ParamSpec::query("handle", ParamKind::String, "Filter by collection handle"),
        ParamSpec::query(
            "product_id",
            ParamKind::Integer,
            "Show only collections that include this product",
        ),
    ]
}

fn custom_collection_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_custom_collections", HttpMethod::Get, "/custom_collections.json")
            .description("List custom (manually curated) collections.")
            .params(paging())
            .param(ids())
            .params(collection_filters())
            .params(updated_range())
            .build()?,
        endpoint(
            DOMAIN,
            "get_custom_collection",
            HttpMethod::Get,
            "/custom_collections/{collection_id}.json",
        )
        .description("Get a single custom collection by ID.")
        .path("collection_id", "The collection ID")
        .param(fields())
        .build()?,
        endpoint(DOMAIN, "create_custom_collection", HttpMethod::Post, "/custom_collections.json")
            .description("Create a custom collection, optionally with initial products (collects).")
            .required_body(
                "custom_collection",
                ParamKind::Object,
                "Collection payload: title, body_html, image, published, collects",
            )
            .build()?,
        endpoint(
            DOMAIN,
            "update_custom_collection",
            HttpMethod::Put,
            "/custom_collections/{collection_id}.json",
        )
        .description("Update a custom collection.")
        .path("collection_id", "The collection ID")
        .required_body("custom_collection", ParamKind::Object, "Fields to update")
        .build()?,
        endpoint(
            DOMAIN,
            "delete_custom_collection",
            HttpMethod::Delete,
            "/custom_collections/{collection_id}.json",
        )
        .description("Delete a custom collection. Products are not deleted.")
        .path("collection_id", "The collection ID")
        .build()?,
    ])
}

fn smart_collection_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_smart_collections", HttpMethod::Get, "/smart_collections.json")
            .description("List smart (rule-based) collections.")
            .params(paging())
            .param(ids())
            .params(collection_filters())
            .params(updated_range())
            .build()?,
        endpoint(
            DOMAIN,
            "get_smart_collection",
            HttpMethod::Get,
            "/smart_collections/{collection_id}.json",
        )
        .description("Get a single smart collection by ID, including its rules.")
        .path("collection_id", "The collection ID")
        .param(fields())
        .build()?,
        endpoint(DOMAIN, "create_smart_collection", HttpMethod::Post, "/smart_collections.json")
            .description("Create a smart collection whose products are selected by rules.")
            .required_body(
                "smart_collection",
                ParamKind::Object,
                "Collection payload: title, rules (column, relation, condition), disjunctive",
            )
            .build()?,
        endpoint(
            DOMAIN,
            "update_smart_collection",
            HttpMethod::Put,
            "/smart_collections/{collection_id}.json",
        )
        .description("Update a smart collection.")
        .path("collection_id", "The collection ID")
        .required_body("smart_collection", ParamKind::Object, "Fields to update")
        .build()?,
        endpoint(
            DOMAIN,
            "delete_smart_collection",
            HttpMethod::Delete,
            "/smart_collections/{collection_id}.json",
        )
        .description("Delete a smart collection.")
        .path("collection_id", "The collection ID")
        .build()?,
    ])
}

fn collect_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_collection_products",
            HttpMethod::Get,
            "/collections/{collection_id}/products.json",
        )
        .description("List the products in a collection, in collection sort order.")
        .path("collection_id", "The collection ID")
        .param(limit())
        .param(page_info())
        .build()?,
        endpoint(DOMAIN, "list_collects", HttpMethod::Get, "/collects.json")
            .description("List collects (product to custom collection links).")
            .params(paging())
            .build()?,
        endpoint(DOMAIN, "create_collect", HttpMethod::Post, "/collects.json")
            .description("Add a product to a custom collection.")
            .required_body(
                "collect",
                ParamKind::Object,
                "Collect payload: product_id, collection_id",
            )
            .build()?,
        endpoint(DOMAIN, "delete_collect", HttpMethod::Delete, "/collects/{collect_id}.json")
            .description("Remove a product from a custom collection.")
            .path("collect_id", "The collect ID")
            .build()?,
    ])
}
