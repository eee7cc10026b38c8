//! Webhook subscription endpoints.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind};

use super::{created_range, endpoint, fields, paging, updated_range};

const DOMAIN: &str = "webhooks";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_webhooks", HttpMethod::Get, "/webhooks.json")
            .description("List webhook subscriptions.")
            .params(paging())
            .query("topic", ParamKind::String, "Filter by topic, e.g. orders/create")
            .query("address", ParamKind::String, "Filter by delivery URI")
            .params(created_range())
            .params(updated_range())
            .build()?,
        endpoint(DOMAIN, "get_webhook", HttpMethod::Get, "/webhooks/{webhook_id}.json")
            .description("Get a single webhook subscription.")
            .path("webhook_id", "The webhook ID")
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "count_webhooks", HttpMethod::Get, "/webhooks/count.json")
            .description("Count webhook subscriptions.")
            .query("topic", ParamKind::String, "Filter by topic")
            .query("address", ParamKind::String, "Filter by delivery URI")
            .build()?,
        endpoint(DOMAIN, "create_webhook", HttpMethod::Post, "/webhooks.json")
            .description("Subscribe a delivery URI to a webhook topic.")
            .required_body(
                "webhook",
                ParamKind::Object,
                "Webhook payload: topic, address, format (json or xml), fields",
            )
            .build()?,
        endpoint(DOMAIN, "update_webhook", HttpMethod::Put, "/webhooks/{webhook_id}.json")
            .description("Change a webhook subscription's address or fields.")
            .path("webhook_id", "The webhook ID")
            .required_body("webhook", ParamKind::Object, "Fields to update")
            .build()?,
        endpoint(DOMAIN, "delete_webhook", HttpMethod::Delete, "/webhooks/{webhook_id}.json")
            .description("Delete a webhook subscription.")
            .path("webhook_id", "The webhook ID")
            .build()?,
    ])
}
