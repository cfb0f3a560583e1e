//! Geodex binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod index;
mod logic;
mod nav;
mod sources;
mod state;
mod theme;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct GeodexTimer;

impl tracing_subscriber::fmt::time::FormatTime for GeodexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    // Initialize tracing logger writing to ~/.config/geodex/logs/geodex.log
    {
        let mut log_path = crate::theme::logs_dir();
        log_path.push("geodex.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(GeodexTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::debug!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(GeodexTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    let cli = args::Cli::parse();
    if let Err(err) = app::run(cli).await {
        tracing::error!(error = ?err, "Application error");
    }
}
