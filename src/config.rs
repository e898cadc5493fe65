//! Configuration for the guest login request
//!
//! Everything here is fixed at compile time. There is no config file and no
//! environment override for the endpoint.

use reqwest::Method;

/// Guest login endpoint. The credentials travel in the query string.
pub const LOGIN_URL: &str =
    "http://127.0.0.1/core/loginguest?userid=bpictpw&password=Pointwest!2345678";

/// Request configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub method: Method,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: LOGIN_URL.to_string(),
            method: Method::POST,
        }
    }
}
