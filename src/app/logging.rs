use std::path::Path;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Route `tracing` output to a daily log file. The terminal belongs to the UI,
/// so nothing is written to stdout/stderr.
///
/// `RUST_LOG` wins over `level`. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn setup_tracing(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir).map_err(|source| Error::LogDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let (appender, guard) = non_blocking(daily(log_dir, "recipients.log"));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(appender),
        )
        .try_init();

    Ok(guard)
}
