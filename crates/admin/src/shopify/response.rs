//! Decoded responses and pass-through header metadata.

use std::time::Duration;

use reqwest::header::{HeaderMap, LINK, RETRY_AFTER};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::InvokeError;
use super::transport::HttpResponse;

const CALL_LIMIT_HEADER: &str = "x-shopify-shop-api-call-limit";

/// One cursor link from the `Link` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Absolute URL as sent by Shopify.
    pub url: String,
    /// The `page_info` cursor to pass on the next invocation, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Cursor-based pagination links.
///
/// Callers page by invoking the same tool again with `page_info`; the
/// invoker never follows links on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,
}

impl Pagination {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.next.is_none() && self.previous.is_none()
    }
}

/// Leaky-bucket state from `X-Shopify-Shop-Api-Call-Limit` (e.g. `32/40`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallLimit {
    pub used: u32,
    pub max: u32,
}

impl CallLimit {
    fn parse(value: &str) -> Option<Self> {
        let (used, max) = value.trim().split_once('/')?;
        Some(Self {
            used: used.trim().parse().ok()?,
            max: max.trim().parse().ok()?,
        })
    }
}

/// A successful (2xx) Admin API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded JSON body; `Value::Null` when the body was empty.
    pub body: Value,
    pub pagination: Pagination,
    /// Parsed `Retry-After`, e.g. on a `202 Accepted` draft order calculation.
    pub retry_after: Option<Duration>,
    pub api_call_limit: Option<CallLimit>,
}

impl ApiResponse {
    /// Decode a raw response.
    ///
    /// # Errors
    ///
    /// - `InvokeError::Remote` for any non-2xx status, with the body verbatim
    /// - `InvokeError::Decode` for a 2xx body that is not JSON
    pub fn from_http(response: HttpResponse) -> Result<Self, InvokeError> {
        let status = response.status.as_u16();

        if !response.status.is_success() {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            tracing::warn!(status, body_len = body.len(), "Shopify returned non-success status");
            return Err(InvokeError::Remote { status, body });
        }

        let body = if response.body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&response.body).map_err(|source| InvokeError::Decode {
                status,
                source,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            })?
        };

        Ok(Self {
            status,
            body,
            pagination: parse_pagination(&response.headers),
            retry_after: parse_retry_after(&response.headers),
            api_call_limit: response
                .headers
                .get(CALL_LIMIT_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(CallLimit::parse),
        })
    }
}

fn parse_pagination(headers: &HeaderMap) -> Pagination {
    let mut pagination = Pagination::default();
    for value in headers.get_all(LINK) {
        if let Ok(value) = value.to_str() {
            parse_link_header(value, &mut pagination);
        }
    }
    pagination
}

/// Parse `<url>; rel="next", <url>; rel="previous"`.
///
/// Scans for `<...>` targets rather than splitting on commas, since cursor
/// URLs may carry comma-separated `fields` lists.
fn parse_link_header(value: &str, pagination: &mut Pagination) {
    let mut rest = value;
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            break;
        };
        let target = &after[..end];
        let tail = &after[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());

        for rel in tail[..params_end]
            .split(';')
            .filter_map(|param| param.trim().strip_prefix("rel="))
        {
            let rel = rel.trim().trim_end_matches(',').trim().trim_matches('"');
            for kind in rel.split_whitespace() {
                let link = || PageLink {
                    url: target.to_string(),
                    page_info: page_info(target),
                };
                match kind {
                    "next" => pagination.next = Some(link()),
                    "previous" | "prev" => pagination.previous = Some(link()),
                    _ => {}
                }
            }
        }

        rest = &tail[params_end..];
    }
}

fn page_info(target: &str) -> Option<String> {
    Url::parse(target).ok().and_then(|url| {
        url.query_pairs()
            .find(|(key, _)| key == "page_info")
            .map(|(_, value)| value.into_owned())
    })
}

/// `Retry-After` in (possibly fractional) seconds. HTTP-date values are not used by Shopify.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let raw = headers.get(RETRY_AFTER)?.to_str().ok()?;
    let seconds: f64 = raw.trim().parse().ok()?;
    Duration::try_from_secs_f64(seconds).ok()
}
