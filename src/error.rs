//! Error handling for guestlogin

use std::error::Error as _;
use thiserror::Error;

/// Main error type for the login request
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Failed to build request")]
    Request(#[source] reqwest::Error),

    #[error("Request failed")]
    Send(#[source] reqwest::Error),

    #[error("Failed to read response body")]
    Body(#[source] reqwest::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Failed to create async runtime")]
    Runtime(#[source] std::io::Error),
}

impl LoginError {
    /// The message followed by every underlying cause, joined with ": ".
    ///
    /// reqwest keeps the interesting part (refused connection, truncated
    /// body) in its source chain rather than its own message.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

/// Result type alias for guestlogin operations
pub type Result<T> = std::result::Result<T, LoginError>;
