//! CLI entry point
//!
//! The program takes no options. It sends the login request once and prints
//! what came back.

use crate::config::Config;
use crate::error::{LoginError, Result};
use crate::http::{response, HttpClient};
use crate::logging;
use crate::output::OutputWriter;
use clap::Command;
use std::io::{self, Write};

/// Main entry point for the CLI application
pub fn run() {
    logging::init();

    let _matches = create_app().get_matches();

    let stdout = io::stdout();
    let mut writer = OutputWriter::new(stdout.lock());

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            writer.write_error(&LoginError::Runtime(e));
            return;
        }
    };

    rt.block_on(run_with_config(&Config::default(), &mut writer));
}

/// Send the configured request and print the body followed by the cookies.
///
/// Any failure is printed to the same writer and ends the run. The HTTP
/// status is never inspected, so error responses print like any other.
pub async fn run_with_config<W: Write>(config: &Config, writer: &mut OutputWriter<W>) {
    if let Err(e) = login(config, writer).await {
        log::debug!("login request failed: {:?}", e);
        writer.write_error(&e);
    }
}

async fn login<W: Write>(config: &Config, writer: &mut OutputWriter<W>) -> Result<()> {
    let client = HttpClient::new(config)?;
    let response = client.execute().await?;

    // Collected first: reading the body consumes the response.
    let cookies = response::cookies(&response);
    let body = response::read_body(response).await?;

    writer.write_body(&body)?;
    writer.write_cookies(&cookies)?;
    writer.flush()
}

/// Create the CLI application structure
fn create_app() -> Command {
    Command::new("guestlogin")
        .version(crate::VERSION)
        .about("Send the guest login request and print the response body and cookies")
}
