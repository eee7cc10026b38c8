//! Inventory endpoints: inventory items and per-location levels.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod, ParamKind};

use super::{endpoint, ids, limit, page_info, updated_range};

const DOMAIN: &str = "inventory";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_inventory_items", HttpMethod::Get, "/inventory_items.json")
            .description("Get inventory items (SKU, cost, tracked) by ID.")
            .param(ids().required())
            .param(limit())
            .param(page_info())
            .build()?,
        endpoint(
            DOMAIN,
            "get_inventory_item",
            HttpMethod::Get,
            "/inventory_items/{inventory_item_id}.json",
        )
        .description("Get a single inventory item by ID.")
        .path("inventory_item_id", "The inventory item ID")
        .build()?,
        endpoint(
            DOMAIN,
            "update_inventory_item",
            HttpMethod::Put,
            "/inventory_items/{inventory_item_id}.json",
        )
        .description("Update an inventory item's SKU, cost, or tracked flag.")
        .path("inventory_item_id", "The inventory item ID")
        .required_body("inventory_item", ParamKind::Object, "Fields to update")
        .build()?,
        endpoint(DOMAIN, "list_inventory_levels", HttpMethod::Get, "/inventory_levels.json")
            .description(
                "List available quantities per location. Requires inventory_item_ids, \
                 location_ids, or both.",
            )
            .query("inventory_item_ids", ParamKind::Array, "Inventory item IDs")
            .query("location_ids", ParamKind::Array, "Location IDs")
            .param(limit())
            .param(page_info())
            .query(
                "updated_at_min",
                ParamKind::String,
                "Show levels updated at or after this date (ISO 8601)",
            )
            .build()?,
        endpoint(
            DOMAIN,
            "list_location_inventory_levels",
            HttpMethod::Get,
            "/locations/{location_id}/inventory_levels.json",
        )
        .description("List inventory levels at one location.")
        .path("location_id", "The location ID")
        .param(limit())
        .param(page_info())
        .params(updated_range())
        .build()?,
        endpoint(
            DOMAIN,
            "adjust_inventory_level",
            HttpMethod::Post,
            "/inventory_levels/adjust.json",
        )
        .description(
            "Adjust the available quantity of an item at a location by a relative amount \
             (negative to decrease).",
        )
        .required_body("inventory_item_id", ParamKind::Integer, "The inventory item ID")
        .required_body("location_id", ParamKind::Integer, "The location ID")
        .required_body(
            "available_adjustment",
            ParamKind::Integer,
            "Amount to add to the available quantity",
        )
        .build()?,
        endpoint(DOMAIN, "set_inventory_level", HttpMethod::Post, "/inventory_levels/set.json")
            .description("Set the available quantity of an item at a location to an absolute value.")
            .required_body("inventory_item_id", ParamKind::Integer, "The inventory item ID")
            .required_body("location_id", ParamKind::Integer, "The location ID")
            .required_body("available", ParamKind::Integer, "New available quantity")
            .body(
                "disconnect_if_necessary",
                ParamKind::Boolean,
                "Disconnect conflicting fulfillment service locations",
            )
            .build()?,
        endpoint(
            DOMAIN,
            "connect_inventory_level",
            HttpMethod::Post,
            "/inventory_levels/connect.json",
        )
        .description("Stock an inventory item at a location.")
        .required_body("inventory_item_id", ParamKind::Integer, "The inventory item ID")
        .required_body("location_id", ParamKind::Integer, "The location ID")
        .body(
            "relocate_if_necessary",
            ParamKind::Boolean,
            "Relocate from a conflicting fulfillment service location",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "delete_inventory_level",
            HttpMethod::Delete,
            "/inventory_levels.json",
        )
        .description("Stop stocking an inventory item at a location.")
        .required_query("inventory_item_id", ParamKind::Integer, "The inventory item ID")
        .required_query("location_id", ParamKind::Integer, "The location ID")
        .build()?,
    ])
}
