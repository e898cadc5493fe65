//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging on stderr. Warnings only unless `RUST_LOG` says otherwise,
/// so stdout carries nothing but the login output.
pub fn init() {
    let env = Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}
