//! Gift card endpoints.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind};

use super::{endpoint, fields, limit, paging};

const DOMAIN: &str = "gift_cards";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_gift_cards", HttpMethod::Get, "/gift_cards.json")
            .description("List gift cards. The full code is never returned, only last_characters.")
            .params(paging())
            .query("status", ParamKind::String, "Filter by status: enabled, disabled")
            .build()?,
        endpoint(DOMAIN, "search_gift_cards", HttpMethod::Get, "/gift_cards/search.json")
            .description("Search gift cards by code, balance, email, or dates.")
            .required_query("query", ParamKind::String, "Search query, e.g. 'last_characters:mnop'")
            .query("order", ParamKind::String, "Sort order, e.g. 'disabled_at DESC'")
            .param(limit())
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "get_gift_card", HttpMethod::Get, "/gift_cards/{gift_card_id}.json")
            .description("Get a single gift card by ID.")
            .path("gift_card_id", "The gift card ID")
            .build()?,
        endpoint(DOMAIN, "count_gift_cards", HttpMethod::Get, "/gift_cards/count.json")
            .description("Count gift cards.")
            .query("status", ParamKind::String, "Filter by status: enabled, disabled")
            .build()?,
        endpoint(DOMAIN, "create_gift_card", HttpMethod::Post, "/gift_cards.json")
            .description("Issue a gift card.")
            .required_body(
                "gift_card",
                ParamKind::Object,
                "Gift card payload: initial_value, code, note, expires_on, customer_id",
            )
            .build()?,
        endpoint(DOMAIN, "update_gift_card", HttpMethod::Put, "/gift_cards/{gift_card_id}.json")
            .description("Update a gift card's note, expiry date, or template suffix.")
            .path("gift_card_id", "The gift card ID")
            .required_body("gift_card", ParamKind::Object, "Fields to update")
            .build()?,
        endpoint(
            DOMAIN,
            "disable_gift_card",
            HttpMethod::Post,
            "/gift_cards/{gift_card_id}/disable.json",
        )
        .description("Disable a gift card. This cannot be undone.")
        .path("gift_card_id", "The gift card ID")
        .build()?,
    ])
}
