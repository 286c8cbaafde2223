use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// An unset or unparsable `RUST_LOG` falls back to `warn`. Calling this twice
/// is harmless; the second call keeps the first subscriber.
pub fn init_logging() {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| LevelFilter::WARN.to_string());
    let env_filter = EnvFilter::try_new(&rust_log)
        .unwrap_or_else(|_| EnvFilter::new(LevelFilter::WARN.to_string()));

    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
