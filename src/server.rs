//! Server initialization and startup logic for Showcase.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::{info, warn};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showcase_channel_web::{WebChannel, WebChannelConfig};
use showcase_config::{Config, LoggingConfig};
use showcase_core::{PageRenderer, Selection};

use crate::register::build_registry;

/// Initialize tracing with console and optional file output.
///
/// Console output goes to stderr so `render` can write the page to stdout.
/// Log files rotate daily under `logging.dir` (default ~/.showcase/logs).
/// If the log directory cannot be used, logging continues on the console
/// only and a warning is emitted.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = logging.log_dir();
    let (file_layer, file_error) = if logging.file {
        match open_log_file(&log_dir) {
            Ok(writer) => (Some(fmt::layer().with_writer(writer).with_ansi(false)), None),
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(true),
        )
        .with(file_layer)
        .try_init()?;

    if let Some(e) = file_error {
        warn!("File logging disabled, cannot write to {}: {}", log_dir.display(), e);
    }

    Ok(())
}

/// Open the daily rolling log file in `log_dir`, creating the directory.
fn open_log_file(log_dir: &Path) -> Result<NonBlocking, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("showcase")
        .filename_suffix("log")
        .max_log_files(14)
        .build(log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer alive for the program duration.
    static GUARD: OnceLock<WorkerGuard> = OnceLock::new();
    let _ = GUARD.set(guard);

    Ok(non_blocking)
}

/// Run the server in foreground.
pub(crate) async fn run_server(
    config: &Config,
    selected: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Showcase v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(build_registry(config)?);
    info!(
        "Project registry ready: {} project(s), default={}",
        registry.len(),
        registry.default_project()
    );

    match registry.resolve(selected.as_deref()) {
        Selection::Requested(id) => info!("Serving project: {}", id),
        Selection::Fallback(id) => match selected.as_deref() {
            Some(name) => info!("Serving default project: {} (configured '{}' not available)", id, name),
            None => info!("Serving default project: {}", id),
        },
    }

    let web_config = WebChannelConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let channel = WebChannel::new(web_config, PageRenderer::new(registry), selected);

    info!("Showcase ready:");
    info!("  GET  /          - page");
    info!("  GET  /health    - health check");
    info!("  GET  /api/info  - active project");

    channel.serve().await?;

    info!("Shutting down...");
    Ok(())
}
