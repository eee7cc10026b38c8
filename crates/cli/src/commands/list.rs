//! `list` command.

use std::io::Write;

use shopify_admin_tools::tools::{all_tools, tools_by_domain};

use super::{CliError, catalog};

/// List tools, optionally restricted to one domain.
///
/// Text output groups tools by domain, one line per tool with its method and
/// path template. `json` prints the full tool definitions instead.
///
/// # Errors
///
/// Returns `CliError::UnknownDomain` if `domain` matches no tools.
pub fn run(domain: Option<&str>, json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let catalog = catalog()?;

    if json {
        let tools = match domain {
            Some(domain) => tools_by_domain(&catalog, domain),
            None => all_tools(&catalog),
        };
        if tools.is_empty() {
            return Err(CliError::UnknownDomain(domain.unwrap_or_default().to_string()));
        }
        serde_json::to_writer_pretty(&mut *out, &tools)?;
        writeln!(out)?;
        return Ok(());
    }

    let domains: Vec<&str> = match domain {
        Some(domain) if catalog.by_domain(domain).next().is_none() => {
            return Err(CliError::UnknownDomain(domain.to_string()));
        }
        Some(domain) => vec![domain],
        None => catalog.domains(),
    };

    for domain in domains {
        writeln!(out, "{domain} ({})", catalog.by_domain(domain).count())?;
        for descriptor in catalog.by_domain(domain) {
            writeln!(
                out,
                "  {:<40} {:<6} {}",
                descriptor.name(),
                descriptor.method(),
                descriptor.path_template()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(domain: Option<&str>, json: bool) -> String {
        let mut buffer = Vec::new();
        run(domain, json, &mut buffer).expect("list");
        String::from_utf8(buffer).expect("utf-8")
    }

    #[test]
    fn test_list_text_groups_by_domain() {
        let text = output(None, false);
        assert!(text.contains("orders ("));
        assert!(text.contains("webhooks ("));
        assert!(text.contains("get_order"));
        assert!(text.contains("/admin/api/{api_version}/orders/{order_id}.json"));
    }

    #[test]
    fn test_list_single_domain() {
        let text = output(Some("gift_cards"), false);
        assert!(text.starts_with("gift_cards ("));
        assert!(!text.contains("get_order "));
    }

    #[test]
    fn test_list_json() {
        let text = output(Some("shop"), true);
        let tools: serde_json::Value = serde_json::from_str(&text).expect("json");
        let tools = tools.as_array().expect("array");
        assert!(tools.iter().any(|t| t["name"] == "get_shop"));
    }

    #[test]
    fn test_list_unknown_domain() {
        let mut buffer = Vec::new();
        let err = run(Some("analytics"), false, &mut buffer).expect_err("unknown domain");
        assert!(matches!(err, CliError::UnknownDomain(ref d) if d == "analytics"));
    }
}
