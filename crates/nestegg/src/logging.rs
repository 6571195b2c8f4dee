use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr, keeping stdout clean for report output.
///
/// The level applies to this binary; the core library stays at warn unless
/// `RUST_LOG` overrides the whole filter.
pub fn init_logging(level: &str) {
    let default_filter = format!("nestegg={level},nestegg_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();
}
