//! Shop-level endpoints.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, HttpMethod};

use super::{endpoint, fields};

const DOMAIN: &str = "shop";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "get_shop", HttpMethod::Get, "/shop.json")
            .description(
                "Get the shop's configuration: name, domain, currency, timezone, plan, \
                 and contact details.",
            )
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "list_locations", HttpMethod::Get, "/locations.json")
            .description("List the shop's locations (warehouses, retail stores, apps).")
            .build()?,
        endpoint(DOMAIN, "get_location", HttpMethod::Get, "/locations/{location_id}.json")
            .description("Get a single location by ID.")
            .path("location_id", "The location ID")
            .build()?,
        endpoint(DOMAIN, "count_locations", HttpMethod::Get, "/locations/count.json")
            .description("Count the shop's locations.")
            .build()?,
    ])
}
