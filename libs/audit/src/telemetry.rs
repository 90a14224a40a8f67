use tracing_subscriber::{EnvFilter, filter};

/// Installs the global subscriber. `RUST_LOG` overrides the INFO default.
///
/// CloudWatch stamps each line on ingestion, so no timestamps here.
pub fn init() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter::LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .without_time()
        .with_env_filter(env_filter)
        .init();
}
