//! Product endpoints: products, variants, and images.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind, ParamSpec};

use super::{created_range, endpoint, fields, ids, paging, updated_range};

const DOMAIN: &str = "products";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    let mut endpoints = product_endpoints()?;
    endpoints.extend(variant_endpoints()?);
    endpoints.extend(image_endpoints()?);
    Ok(endpoints)
}

fn product_filters() -> [ParamSpec; 5] {
    [
        ParamSpec::query("title", ParamKind::String, "Filter by product title"),
        ParamSpec::query("vendor", ParamKind::String, "Filter by vendor"),
        ParamSpec::query("product_type", ParamKind::String, "Filter by product type"),
        ParamSpec::query("collection_id", ParamKind::Integer, "Filter by collection ID"),
        ParamSpec::query(
            "status",
            ParamKind::String,
            "Filter by status: active, archived, draft",
        ),
    ]
}

fn product_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_products", HttpMethod::Get, "/products.json")
            .description("List products with their variants, options, and images.")
            .params(paging())
            .param(ids())
            .params(product_filters())
            .query("handle", ParamKind::String, "Filter by a comma-separated list of handles")
            .params(created_range())
            .params(updated_range())
            .build()?,
        endpoint(DOMAIN, "get_product", HttpMethod::Get, "/products/{product_id}.json")
            .description("Get a single product by ID.")
            .path("product_id", "The product ID")
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "count_products", HttpMethod::Get, "/products/count.json")
            .description("Count products matching the given filters.")
            .params(product_filters())
            .params(created_range())
            .params(updated_range())
            .build()?,
        endpoint(DOMAIN, "create_product", HttpMethod::Post, "/products.json")
            .description(
                "Create a product. The product object carries title, body_html, vendor, \
                 product_type, tags, status, variants, options, and images.",
            )
            .required_body("product", ParamKind::Object, "Product payload")
            .build()?,
        endpoint(DOMAIN, "update_product", HttpMethod::Put, "/products/{product_id}.json")
            .description("Update a product. Only the supplied fields are changed.")
            .path("product_id", "The product ID")
            .required_body("product", ParamKind::Object, "Fields to update")
            .build()?,
        endpoint(DOMAIN, "delete_product", HttpMethod::Delete, "/products/{product_id}.json")
            .description("Delete a product and all of its variants and images.")
            .path("product_id", "The product ID")
            .build()?,
    ])
}

fn variant_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_product_variants",
            HttpMethod::Get,
            "/products/{product_id}/variants.json",
        )
        .description("List the variants of a product.")
        .path("product_id", "The product ID")
        .params(paging())
        .build()?,
        endpoint(DOMAIN, "get_variant", HttpMethod::Get, "/variants/{variant_id}.json")
            .description("Get a single product variant by ID, including its inventory_item_id.")
            .path("variant_id", "The variant ID")
            .param(fields())
            .build()?,
        endpoint(
            DOMAIN,
            "create_product_variant",
            HttpMethod::Post,
            "/products/{product_id}/variants.json",
        )
        .description("Create a variant of a product.")
        .path("product_id", "The product ID")
        .required_body(
            "variant",
            ParamKind::Object,
            "Variant payload: option1, price, sku, barcode, weight",
        )
        .build()?,
        endpoint(DOMAIN, "update_variant", HttpMethod::Put, "/variants/{variant_id}.json")
            .description("Update a product variant (price, compare_at_price, sku, barcode, ...).")
            .path("variant_id", "The variant ID")
            .required_body("variant", ParamKind::Object, "Fields to update")
            .build()?,
        endpoint(
            DOMAIN,
            "delete_product_variant",
            HttpMethod::Delete,
            "/products/{product_id}/variants/{variant_id}.json",
        )
        .description("Delete a variant of a product.")
        .path("product_id", "The product ID")
        .path("variant_id", "The variant ID")
        .build()?,
    ])
}

fn image_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_product_images",
            HttpMethod::Get,
            "/products/{product_id}/images.json",
        )
        .description("List the images of a product.")
        .path("product_id", "The product ID")
        .param(fields())
        .build()?,
        endpoint(
            DOMAIN,
            "create_product_image",
            HttpMethod::Post,
            "/products/{product_id}/images.json",
        )
        .description("Add an image to a product from a URL (src) or base64 attachment.")
        .path("product_id", "The product ID")
        .required_body(
            "image",
            ParamKind::Object,
            "Image payload: src or attachment, alt, position, variant_ids",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "delete_product_image",
            HttpMethod::Delete,
            "/products/{product_id}/images/{image_id}.json",
        )
        .description("Remove an image from a product.")
        .path("product_id", "The product ID")
        .path("image_id", "The image ID")
        .build()?,
    ])
}
