//! Discount endpoints: price rules and their discount codes.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind};

use super::{created_range, endpoint, limit, page_info, paging, updated_range};

const DOMAIN: &str = "discounts";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    let mut endpoints = price_rule_endpoints()?;
    endpoints.extend(discount_code_endpoints()?);
    Ok(endpoints)
}

fn price_rule_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_price_rules", HttpMethod::Get, "/price_rules.json")
            .description("List price rules (the conditions behind discount codes).")
            .params(paging())
            .params(created_range())
            .params(updated_range())
            .query("starts_at_min", ParamKind::String, "Show rules starting at or after this date")
            .query("ends_at_max", ParamKind::String, "Show rules ending at or before this date")
            .build()?,
        endpoint(DOMAIN, "get_price_rule", HttpMethod::Get, "/price_rules/{price_rule_id}.json")
            .description("Get a single price rule by ID.")
            .path("price_rule_id", "The price rule ID")
            .build()?,
        endpoint(DOMAIN, "count_price_rules", HttpMethod::Get, "/price_rules/count.json")
            .description("Count price rules.")
            .build()?,
        endpoint(DOMAIN, "create_price_rule", HttpMethod::Post, "/price_rules.json")
            .description(
                "Create a price rule. Required fields include title, target_type, \
                 target_selection, allocation_method, value_type, value, customer_selection, \
                 and starts_at.",
            )
            .required_body("price_rule", ParamKind::Object, "Price rule payload")
            .build()?,
        endpoint(
            DOMAIN,
            "update_price_rule",
            HttpMethod::Put,
            "/price_rules/{price_rule_id}.json",
        )
        .description("Update a price rule.")
        .path("price_rule_id", "The price rule ID")
        .required_body("price_rule", ParamKind::Object, "Fields to update")
        .build()?,
        endpoint(
            DOMAIN,
            "delete_price_rule",
            HttpMethod::Delete,
            "/price_rules/{price_rule_id}.json",
        )
        .description("Delete a price rule and all of its discount codes.")
        .path("price_rule_id", "The price rule ID")
        .build()?,
    ])
}

fn discount_code_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_discount_codes",
            HttpMethod::Get,
            "/price_rules/{price_rule_id}/discount_codes.json",
        )
        .description("List the discount codes of a price rule.")
        .path("price_rule_id", "The price rule ID")
        .param(limit())
        .param(page_info())
        .build()?,
        endpoint(
            DOMAIN,
            "get_discount_code",
            HttpMethod::Get,
            "/price_rules/{price_rule_id}/discount_codes/{discount_code_id}.json",
        )
        .description("Get a single discount code.")
        .path("price_rule_id", "The price rule ID")
        .path("discount_code_id", "The discount code ID")
        .build()?,
        endpoint(DOMAIN, "lookup_discount_code", HttpMethod::Get, "/discount_codes/lookup.json")
            .description(
                "Find a discount code by its code string. Shopify answers with a redirect to \
                 the code's location, returned as a remote error carrying the status.",
            )
            .required_query("code", ParamKind::String, "The discount code, e.g. SUMMER10")
            .build()?,
        endpoint(
            DOMAIN,
            "create_discount_code",
            HttpMethod::Post,
            "/price_rules/{price_rule_id}/discount_codes.json",
        )
        .description("Create a discount code for a price rule.")
        .path("price_rule_id", "The price rule ID")
        .required_body("discount_code", ParamKind::Object, "Discount code payload: code")
        .build()?,
        endpoint(
            DOMAIN,
            "update_discount_code",
            HttpMethod::Put,
            "/price_rules/{price_rule_id}/discount_codes/{discount_code_id}.json",
        )
        .description("Change the code string of a discount code.")
        .path("price_rule_id", "The price rule ID")
        .path("discount_code_id", "The discount code ID")
        .required_body("discount_code", ParamKind::Object, "Fields to update")
        .build()?,
        endpoint(
            DOMAIN,
            "delete_discount_code",
            HttpMethod::Delete,
            "/price_rules/{price_rule_id}/discount_codes/{discount_code_id}.json",
        )
        .description("Delete a discount code.")
        .path("price_rule_id", "The price rule ID")
        .path("discount_code_id", "The discount code ID")
        .build()?,
    ])
}
