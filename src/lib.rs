//! guestlogin - sends the guest login request and prints the response
//!
//! One POST to a fixed endpoint, then the response body and each cookie the
//! server set are written to stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod output;

pub use error::{LoginError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
