//! Draft order endpoints.
//!
//! Creating or updating a draft order may return `202 Accepted` with a
//! `Retry-After` header while Shopify calculates totals. The caller polls
//! `get_draft_order` after the delay.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind};

use super::{endpoint, fields, ids, paging, updated_range};

const DOMAIN: &str = "draft_orders";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_draft_orders", HttpMethod::Get, "/draft_orders.json")
            .description("List draft orders.")
            .params(paging())
            .param(ids())
            .query("status", ParamKind::String, "Filter by status: open, invoice_sent, completed")
            .params(updated_range())
            .build()?,
        endpoint(
            DOMAIN,
            "get_draft_order",
            HttpMethod::Get,
            "/draft_orders/{draft_order_id}.json",
        )
        .description("Get a single draft order by ID.")
        .path("draft_order_id", "The draft order ID")
        .param(fields())
        .build()?,
        endpoint(DOMAIN, "count_draft_orders", HttpMethod::Get, "/draft_orders/count.json")
            .description("Count draft orders.")
            .query("status", ParamKind::String, "Filter by status: open, invoice_sent, completed")
            .build()?,
        endpoint(DOMAIN, "create_draft_order", HttpMethod::Post, "/draft_orders.json")
            .description(
                "Create a draft order. May answer 202 Accepted with Retry-After while totals \
                 are calculated; fetch it again after the delay.",
            )
            .required_body(
                "draft_order",
                ParamKind::Object,
                "Draft order payload: line_items, customer, applied_discount, shipping_line",
            )
            .build()?,
        endpoint(
            DOMAIN,
            "update_draft_order",
            HttpMethod::Put,
            "/draft_orders/{draft_order_id}.json",
        )
        .description("Update a draft order.")
        .path("draft_order_id", "The draft order ID")
        .required_body("draft_order", ParamKind::Object, "Fields to update")
        .build()?,
        endpoint(
            DOMAIN,
            "delete_draft_order",
            HttpMethod::Delete,
            "/draft_orders/{draft_order_id}.json",
        )
        .description("Delete a draft order.")
        .path("draft_order_id", "The draft order ID")
        .build()?,
        endpoint(
            DOMAIN,
            "send_draft_order_invoice",
            HttpMethod::Post,
            "/draft_orders/{draft_order_id}/send_invoice.json",
        )
        .description("Email the draft order's invoice to the customer.")
        .path("draft_order_id", "The draft order ID")
        .body(
            "draft_order_invoice",
            ParamKind::Object,
            "Invoice options: to, from, bcc, subject, custom_message",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "complete_draft_order",
            HttpMethod::Put,
            "/draft_orders/{draft_order_id}/complete.json",
        )
        .description("Complete a draft order, turning it into an order.")
        .path("draft_order_id", "The draft order ID")
        .query(
            "payment_pending",
            ParamKind::Boolean,
            "Mark the resulting order as payment pending instead of paid",
        )
        .build()?,
    ])
}
