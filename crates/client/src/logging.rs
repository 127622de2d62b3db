//! Tracing subscriber setup.
use anyhow::Result;

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (at least `info`).
pub fn setup_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
