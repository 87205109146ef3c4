use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "UNDERSTAND_LOG";

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Full-screen UI: stderr would corrupt the display, so only a file sink is allowed.
    Tui,
    /// One-shot mode: falls back to stderr when `RUST_LOG` is set.
    Headless,
}

/// Initialize tracing.
///
/// Logging is disabled by default. Set `UNDERSTAND_LOG` to a file path to
/// enable it. Files are created as `{path}.{timestamp}.{pid}` so concurrent
/// instances do not clobber each other.
pub fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        if target == LogTarget::Headless && std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .init();
        }
        return;
    };

    let unique_path = unique_log_path(&log_path, std::process::id());

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str, pid: u32) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
