use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over `log_level`; an unparsable level falls back to info.
pub fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
