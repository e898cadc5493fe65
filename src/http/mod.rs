//! HTTP client module
//!
//! Builds the login request and sends it with a default reqwest client.

use crate::config::Config;
use crate::error::{LoginError, Result};
use log::debug;
use reqwest::{Client, ClientBuilder, Method};
use url::Url;

pub mod response;

/// HTTP client wrapper
pub struct HttpClient {
    client: Client,
    method: Method,
    url: Url,
}

impl HttpClient {
    /// Create a client for the configured request.
    ///
    /// The URL is validated here so a malformed endpoint fails before any
    /// connection is attempted. The reqwest client keeps its defaults: no
    /// timeout, default TLS and default redirect policy.
    pub fn new(config: &Config) -> Result<Self> {
        let url = Url::parse(&config.url)
            .map_err(|e| LoginError::InvalidUrl(format!("'{}': {}", config.url, e)))?;

        let client = ClientBuilder::new().build().map_err(LoginError::Client)?;

        Ok(Self {
            client,
            method: config.method.clone(),
            url,
        })
    }

    /// Send the request, with no body, and hand back the response unread
    pub async fn execute(&self) -> Result<reqwest::Response> {
        let request = self
            .client
            .request(self.method.clone(), self.url.clone())
            .build()
            .map_err(LoginError::Request)?;

        debug!("> {} {}", request.method(), redacted_target(request.url()));

        let response = self
            .client
            .execute(request)
            .await
            .map_err(LoginError::Send)?;

        debug!("< {:?} {}", response.version(), response.status());
        Ok(response)
    }
}

/// Host and path of the target, without the query string holding the credentials.
fn redacted_target(url: &Url) -> String {
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };
    format!("{}{}", host, url.path())
}
