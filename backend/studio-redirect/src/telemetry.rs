use tracing_subscriber::EnvFilter;

/// Install the JSON log subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). Timestamps are left to
/// the Lambda log service.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();
}
