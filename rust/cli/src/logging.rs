//! Tracing setup for the `afghound` binary.

use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber; `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber may already be installed when embedded in another process.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
