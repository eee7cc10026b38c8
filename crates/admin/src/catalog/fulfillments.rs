//! Fulfillment endpoints: fulfillment orders and fulfillments.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind};

use super::{created_range, endpoint, fields, paging, updated_range};

const DOMAIN: &str = "fulfillments";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    let mut endpoints = fulfillment_order_endpoints()?;
    endpoints.extend(fulfillment_endpoints()?);
    Ok(endpoints)
}

fn fulfillment_order_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_order_fulfillment_orders",
            HttpMethod::Get,
            "/orders/{order_id}/fulfillment_orders.json",
        )
        .description(
            "List the fulfillment orders of an order. Fulfillment order line item IDs are \
             needed to create a fulfillment.",
        )
        .path("order_id", "The order ID")
        .build()?,
        endpoint(
            DOMAIN,
            "get_fulfillment_order",
            HttpMethod::Get,
            "/fulfillment_orders/{fulfillment_order_id}.json",
        )
        .description("Get a single fulfillment order by ID.")
        .path("fulfillment_order_id", "The fulfillment order ID")
        .build()?,
        endpoint(
            DOMAIN,
            "hold_fulfillment_order",
            HttpMethod::Post,
            "/fulfillment_orders/{fulfillment_order_id}/hold.json",
        )
        .description("Put a fulfillment order on hold.")
        .path("fulfillment_order_id", "The fulfillment order ID")
        .required_body(
            "fulfillment_hold",
            ParamKind::Object,
            "Hold details: reason (awaiting_payment, high_risk_of_fraud, incorrect_address, \
             inventory_out_of_stock, other), reason_notes, notify_merchant",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "release_fulfillment_order_hold",
            HttpMethod::Post,
            "/fulfillment_orders/{fulfillment_order_id}/release_hold.json",
        )
        .description("Release the hold on a fulfillment order.")
        .path("fulfillment_order_id", "The fulfillment order ID")
        .build()?,
        endpoint(
            DOMAIN,
            "move_fulfillment_order",
            HttpMethod::Post,
            "/fulfillment_orders/{fulfillment_order_id}/move.json",
        )
        .description("Move a fulfillment order to a new location.")
        .path("fulfillment_order_id", "The fulfillment order ID")
        .required_body(
            "fulfillment_order",
            ParamKind::Object,
            "Move details: new_location_id, fulfillment_order_line_items",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "cancel_fulfillment_order",
            HttpMethod::Post,
            "/fulfillment_orders/{fulfillment_order_id}/cancel.json",
        )
        .description("Cancel a fulfillment order.")
        .path("fulfillment_order_id", "The fulfillment order ID")
        .build()?,
    ])
}

fn fulfillment_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_order_fulfillments",
            HttpMethod::Get,
            "/orders/{order_id}/fulfillments.json",
        )
        .description("List the fulfillments of an order, with tracking details.")
        .path("order_id", "The order ID")
        .params(paging())
        .params(created_range())
        .params(updated_range())
        .build()?,
        endpoint(
            DOMAIN,
            "get_order_fulfillment",
            HttpMethod::Get,
            "/orders/{order_id}/fulfillments/{fulfillment_id}.json",
        )
        .description("Get a single fulfillment of an order.")
        .path("order_id", "The order ID")
        .path("fulfillment_id", "The fulfillment ID")
        .param(fields())
        .build()?,
        endpoint(DOMAIN, "create_fulfillment", HttpMethod::Post, "/fulfillments.json")
            .description(
                "Create a fulfillment for one or more fulfillment orders, optionally with \
                 tracking info and customer notification.",
            )
            .required_body(
                "fulfillment",
                ParamKind::Object,
                "Fulfillment payload: line_items_by_fulfillment_order, tracking_info, notify_customer",
            )
            .build()?,
        endpoint(
            DOMAIN,
            "update_fulfillment_tracking",
            HttpMethod::Post,
            "/fulfillments/{fulfillment_id}/update_tracking.json",
        )
        .description("Update the tracking information of a fulfillment.")
        .path("fulfillment_id", "The fulfillment ID")
        .required_body(
            "fulfillment",
            ParamKind::Object,
            "Tracking update: tracking_info (number, url, company), notify_customer",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "cancel_fulfillment",
            HttpMethod::Post,
            "/fulfillments/{fulfillment_id}/cancel.json",
        )
        .description("Cancel a fulfillment.")
        .path("fulfillment_id", "The fulfillment ID")
        .build()?,
    ])
}
