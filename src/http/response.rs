//! Response body and cookie extraction

use crate::error::{LoginError, Result};
use log::debug;

/// A cookie set by the server, reduced to its name and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Cookies from the `Set-Cookie` headers, in header order.
///
/// Attributes such as Path or Expires are parsed and dropped. Headers that
/// do not parse as a cookie are skipped.
pub fn cookies(response: &reqwest::Response) -> Vec<Cookie> {
    let cookies: Vec<Cookie> = response
        .cookies()
        .map(|cookie| Cookie::new(cookie.name(), unquote(cookie.value())))
        .collect();
    debug!("response set {} cookie(s)", cookies.len());
    cookies
}

/// Strip one pair of surrounding double quotes from a cookie value.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Drain the whole body. The response is consumed, which releases the
/// connection whether or not the read succeeds.
pub async fn read_body(response: reqwest::Response) -> Result<Vec<u8>> {
    let body = response.bytes().await.map_err(LoginError::Body)?;
    debug!("read {} byte body", body.len());
    Ok(body.to_vec())
}
