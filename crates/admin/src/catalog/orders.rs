//! Order endpoints: orders, transactions, refunds, and risks.

use shopify_tools_core::{
    DescriptorError, EndpointDescriptor, ExtraArguments, HttpMethod, ParamKind, ParamSpec,
};

use super::{created_range, endpoint, fields, ids, paging, updated_range};

const DOMAIN: &str = "orders";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    let mut endpoints = order_read_endpoints()?;
    endpoints.extend(order_write_endpoints()?);
    Ok(endpoints)
}

fn order_filters() -> [ParamSpec; 3] {
    [
        ParamSpec::query(
            "status",
            ParamKind::String,
            "Filter by order status: open (default), closed, cancelled, any",
        ),
        ParamSpec::query(
            "financial_status",
            ParamKind::String,
            "Filter by financial status: authorized, pending, paid, partially_paid, refunded, \
             voided, partially_refunded, any, unpaid",
        ),
        ParamSpec::query(
            "fulfillment_status",
            ParamKind::String,
            "Filter by fulfillment status: shipped, partial, unshipped, any, unfulfilled",
        ),
    ]
}

fn order_read_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_orders", HttpMethod::Get, "/orders.json")
            .description(
                "List orders. Defaults to open orders only; pass status=any for all. \
                 Supports cursor pagination through page_info.",
            )
            .params(paging())
            .param(ids())
            .params(order_filters())
            .params(created_range())
            .params(updated_range())
            .build()?,
        endpoint(DOMAIN, "get_order", HttpMethod::Get, "/orders/{order_id}.json")
            .description(
                "Get a single order by ID, including customer, line items, totals, \
                 fulfillment status, and payment status.",
            )
            .path("order_id", "The order ID (numeric)")
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "count_orders", HttpMethod::Get, "/orders/count.json")
            .description("Count orders matching the given filters.")
            .params(order_filters())
            .params(created_range())
            .params(updated_range())
            .build()?,
        endpoint(
            DOMAIN,
            "list_order_transactions",
            HttpMethod::Get,
            "/orders/{order_id}/transactions.json",
        )
        .description("List the payment transactions (authorizations, captures, refunds) of an order.")
        .path("order_id", "The order ID")
        .query("since_id", ParamKind::Integer, "Restrict results to after the specified ID")
        .build()?,
        endpoint(
            DOMAIN,
            "list_order_refunds",
            HttpMethod::Get,
            "/orders/{order_id}/refunds.json",
        )
        .description("List the refunds of an order.")
        .path("order_id", "The order ID")
        .query("limit", ParamKind::Integer, "Maximum number of results")
        .build()?,
        endpoint(
            DOMAIN,
            "get_order_refund",
            HttpMethod::Get,
            "/orders/{order_id}/refunds/{refund_id}.json",
        )
        .description("Get a single refund of an order.")
        .path("order_id", "The order ID")
        .path("refund_id", "The refund ID")
        .build()?,
        endpoint(DOMAIN, "list_order_risks", HttpMethod::Get, "/orders/{order_id}/risks.json")
            .description("List the fraud risk assessments of an order.")
            .path("order_id", "The order ID")
            .build()?,
    ])
}

fn order_write_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "create_order", HttpMethod::Post, "/orders.json")
            .description(
                "Create an order. The order object carries line_items, customer, addresses, \
                 transactions, and options such as send_receipt.",
            )
            .required_body("order", ParamKind::Object, "Order payload")
            .build()?,
        endpoint(DOMAIN, "update_order", HttpMethod::Put, "/orders/{order_id}.json")
            .description("Update an order's note, tags, email, shipping address, or metafields.")
            .path("order_id", "The order ID")
            .required_body("order", ParamKind::Object, "Fields to update")
            .build()?,
        endpoint(DOMAIN, "delete_order", HttpMethod::Delete, "/orders/{order_id}.json")
            .description("Delete an order. Only cancelled or archived orders can be deleted.")
            .path("order_id", "The order ID")
            .build()?,
        endpoint(DOMAIN, "close_order", HttpMethod::Post, "/orders/{order_id}/close.json")
            .description("Close (archive) an order.")
            .path("order_id", "The order ID")
            .build()?,
        endpoint(DOMAIN, "reopen_order", HttpMethod::Post, "/orders/{order_id}/open.json")
            .description("Re-open a closed order.")
            .path("order_id", "The order ID")
            .build()?,
        endpoint(DOMAIN, "cancel_order", HttpMethod::Post, "/orders/{order_id}/cancel.json")
            .description(
                "Cancel an order. Accepts free-form options such as reason \
                 (customer, inventory, fraud, declined, other), email, restock, and refund.",
            )
            .path("order_id", "The order ID")
            .body(
                "reason",
                ParamKind::String,
                "Cancellation reason: customer, inventory, fraud, declined, other",
            )
            .body("email", ParamKind::Boolean, "Send a cancellation email to the customer")
            .extra_arguments(ExtraArguments::Body)
            .build()?,
        endpoint(
            DOMAIN,
            "create_order_transaction",
            HttpMethod::Post,
            "/orders/{order_id}/transactions.json",
        )
        .description("Create a transaction (capture, void, or refund) for an order.")
        .path("order_id", "The order ID")
        .required_body(
            "transaction",
            ParamKind::Object,
            "Transaction payload: kind, amount, currency, parent_id",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "calculate_order_refund",
            HttpMethod::Post,
            "/orders/{order_id}/refunds/calculate.json",
        )
        .description(
            "Calculate a refund (line items, shipping, duties) without creating it. \
             Use the result as the refund payload for create_order_refund.",
        )
        .path("order_id", "The order ID")
        .required_body("refund", ParamKind::Object, "Refund to calculate")
        .build()?,
        endpoint(
            DOMAIN,
            "create_order_refund",
            HttpMethod::Post,
            "/orders/{order_id}/refunds.json",
        )
        .description("Create a refund for an order.")
        .path("order_id", "The order ID")
        .required_body("refund", ParamKind::Object, "Refund payload")
        .build()?,
    ])
}
