//! Customer endpoints: customers and their addresses.

use shopify_tools_core::{DescriptorError, EndpointDescriptor, ExtraArguments, HttpMethod, ParamKind};

use super::{created_range, endpoint, fields, ids, limit, paging, updated_range};

const DOMAIN: &str = "customers";

pub(super) fn endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    let mut endpoints = customer_endpoints()?;
    endpoints.extend(address_endpoints()?);
    Ok(endpoints)
}

fn customer_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(DOMAIN, "list_customers", HttpMethod::Get, "/customers.json")
            .description("List customers.")
            .params(paging())
            .param(ids())
            .params(created_range())
            .params(updated_range())
            .build()?,
        endpoint(DOMAIN, "search_customers", HttpMethod::Get, "/customers/search.json")
            .description(
                "Search customers with Shopify search syntax, \
                 e.g. 'email:bob@example.com' or 'country:Canada'.",
            )
            .required_query("query", ParamKind::String, "Search query")
            .query("order", ParamKind::String, "Sort order, e.g. 'last_order_date DESC'")
            .param(limit())
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "get_customer", HttpMethod::Get, "/customers/{customer_id}.json")
            .description("Get a single customer by ID.")
            .path("customer_id", "The customer ID")
            .param(fields())
            .build()?,
        endpoint(DOMAIN, "count_customers", HttpMethod::Get, "/customers/count.json")
            .description("Count customers.")
            .params(created_range())
            .params(updated_range())
            .build()?,
        endpoint(
            DOMAIN,
            "list_customer_orders",
            HttpMethod::Get,
            "/customers/{customer_id}/orders.json",
        )
        .description("List the orders of a customer.")
        .path("customer_id", "The customer ID")
        .query("status", ParamKind::String, "Filter by order status: open, closed, cancelled, any")
        .param(limit())
        .build()?,
        endpoint(DOMAIN, "create_customer", HttpMethod::Post, "/customers.json")
            .description(
                "Create a customer. The customer object carries first_name, last_name, email, \
                 phone, addresses, tags, and marketing consent.",
            )
            .required_body("customer", ParamKind::Object, "Customer payload")
            .build()?,
        endpoint(DOMAIN, "update_customer", HttpMethod::Put, "/customers/{customer_id}.json")
            .description("Update a customer. Only the supplied fields are changed.")
            .path("customer_id", "The customer ID")
            .required_body("customer", ParamKind::Object, "Fields to update")
            .build()?,
        endpoint(
            DOMAIN,
            "delete_customer",
            HttpMethod::Delete,
            "/customers/{customer_id}.json",
        )
        .description("Delete a customer. Customers with existing orders cannot be deleted.")
        .path("customer_id", "The customer ID")
        .build()?,
        endpoint(
            DOMAIN,
            "send_customer_invite",
            HttpMethod::Post,
            "/customers/{customer_id}/send_invite.json",
        )
        .description(
            "Send an account invite to a customer. Accepts a free-form customer_invite object \
             (to, from, subject, custom_message).",
        )
        .path("customer_id", "The customer ID")
        .extra_arguments(ExtraArguments::Body)
        .build()?,
        endpoint(
            DOMAIN,
            "create_customer_account_activation_url",
            HttpMethod::Post,
            "/customers/{customer_id}/account_activation_url.json",
        )
        .description("Generate a one-time account activation URL for a disabled customer account.")
        .path("customer_id", "The customer ID")
        .build()?,
    ])
}

fn address_endpoints() -> Result<Vec<EndpointDescriptor>, DescriptorError> {
    Ok(vec![
        endpoint(
            DOMAIN,
            "list_customer_addresses",
            HttpMethod::Get,
            "/customers/{customer_id}/addresses.json",
        )
        .description("List the addresses of a customer.")
        .path("customer_id", "The customer ID")
        .param(limit())
        .build()?,
        endpoint(
            DOMAIN,
            "create_customer_address",
            HttpMethod::Post,
            "/customers/{customer_id}/addresses.json",
        )
        .description("Add an address to a customer.")
        .path("customer_id", "The customer ID")
        .required_body(
            "address",
            ParamKind::Object,
            "Address payload: address1, city, province, country, zip, phone",
        )
        .build()?,
        endpoint(
            DOMAIN,
            "update_customer_address",
            HttpMethod::Put,
            "/customers/{customer_id}/addresses/{address_id}.json",
        )
        .description("Update an address of a customer.")
        .path("customer_id", "The customer ID")
        .path("address_id", "The address ID")
        .required_body("address", ParamKind::Object, "Fields to update")
        .build()?,
        endpoint(
            DOMAIN,
            "delete_customer_address",
            HttpMethod::Delete,
            "/customers/{customer_id}/addresses/{address_id}.json",
        )
        .description("Remove an address from a customer. The default address cannot be removed.")
        .path("customer_id", "The customer ID")
        .path("address_id", "The address ID")
        .build()?,
        endpoint(
            DOMAIN,
            "set_default_customer_address",
            HttpMethod::Put,
            "/customers/{customer_id}/addresses/{address_id}/default.json",
        )
        .description("Make an address the customer's default address.")
        .path("customer_id", "The customer ID")
        .path("address_id", "The address ID")
        .build()?,
    ])
}
