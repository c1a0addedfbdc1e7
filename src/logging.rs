//! Tracing subscriber setup.

use crate::error::{BenchVizError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber with the given filter
/// directive (e.g. `info` or `benchviz=debug`).
pub fn init_logging(level: &str) -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_new(level)
                .map_err(|e| BenchVizError::InvalidArgument(format!("invalid log level: {e}")))?,
        )
        .with_target(false)
        .try_init()
        .map_err(|_| BenchVizError::InvalidArgument("logging already initialized".into()))
}
