use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is not set.
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "error"
    }
}

/// Install the console subscriber. Safe to call more than once.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level()));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}
