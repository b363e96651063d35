use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Size at which the current log file is rolled over to `.old` (5 MB).
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

const LOG_FILE: &str = "growthcast.log";

/// Roll the log over when it grows past the cap, keeping one previous file.
fn roll_log_if_needed(data_dir: &Path) -> std::io::Result<()> {
    let log_path = data_dir.join(LOG_FILE);
    if !log_path.exists() {
        return Ok(());
    }
    if fs::metadata(&log_path)?.len() > MAX_LOG_SIZE {
        fs::rename(&log_path, log_path.with_extension("log.old"))?;
    }
    Ok(())
}

/// Initialize logging to `{data_dir}/growthcast.log`.
///
/// Stdout belongs to the TUI, so everything goes to the file. The level can
/// be overridden via `RUST_LOG`. The returned guard must be held for the
/// lifetime of the process; dropping it flushes buffered log lines.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    fs::create_dir_all(data_dir)?;

    if let Err(err) = roll_log_if_needed(data_dir) {
        eprintln!("Warning: failed to roll log file: {err}");
    }

    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = format!("growthcast={level},growthcast_api={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "growthcast logging initialized (log_path={})",
        data_dir.join(LOG_FILE).display()
    );
    Ok(guard)
}
