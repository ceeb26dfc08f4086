//! # Showcase Channel - Web
//!
//! HTTP host for the Showcase page.
//!
//! This channel:
//! - Renders the selected project inside the page shell on `GET /`
//! - Resolves the configured project name on every request
//! - Exposes `/health` and `/api/info` for operators
//!
//! ## Usage
//!
//! ```ignore
//! use showcase_channel_web::{WebChannel, WebChannelConfig};
//!
//! let config = WebChannelConfig {
//!     host: "127.0.0.1".to_string(),
//!     port: 3000,
//! };
//! let channel = WebChannel::new(config, renderer, Some("projectTwo".to_string()));
//! channel.serve().await?;
//! ```

mod server;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

use showcase_core::{PageRenderer, RenderedPage, Selection};

pub use server::create_router;

/// Web channel errors.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Web channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebChannelConfig {
    /// Host to bind to (default: "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on (default: 3000).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for WebChannelConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// State shared across handlers.
pub struct WebChannelState {
    /// Page renderer over the project registry.
    pub renderer: PageRenderer,
    /// Configured project name, resolved on every request.
    pub selected: Option<String>,
    /// Server started flag.
    pub started: AtomicBool,
}

impl WebChannelState {
    pub fn new(renderer: PageRenderer, selected: Option<String>) -> Self {
        Self {
            renderer,
            selected,
            started: AtomicBool::new(false),
        }
    }

    /// Resolve the configured name without rendering.
    pub fn selection(&self) -> Selection {
        self.renderer.registry().resolve(self.selected.as_deref())
    }

    /// Render the page for the configured name.
    pub fn render(&self) -> RenderedPage {
        self.renderer.render(self.selected.as_deref())
    }
}

/// HTTP host for the composed page.
pub struct WebChannel {
    config: WebChannelConfig,
    state: Arc<WebChannelState>,
}

impl WebChannel {
    pub fn new(config: WebChannelConfig, renderer: PageRenderer, selected: Option<String>) -> Self {
        Self {
            config,
            state: Arc::new(WebChannelState::new(renderer, selected)),
        }
    }

    /// Get the channel's listen address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Get a reference to the shared state.
    pub fn state(&self) -> Arc<WebChannelState> {
        self.state.clone()
    }

    /// Check if the server is accepting requests.
    pub fn is_started(&self) -> bool {
        self.state.started.load(Ordering::SeqCst)
    }

    /// Bind the listener.
    ///
    /// The host may be an IP literal or a name such as `localhost`.
    pub async fn bind(&self) -> Result<TcpListener, WebError> {
        TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|source| WebError::Bind {
                addr: self.address(),
                source,
            })
    }

    /// Bind and serve until Ctrl-C.
    pub async fn serve(&self) -> Result<(), WebError> {
        let listener = self.bind().await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    pub async fn serve_on<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), WebError>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = create_router(self.state.clone());
        let local = listener.local_addr()?;

        info!("Web channel started at http://{}", local);
        self.state.started.store(true, Ordering::SeqCst);

        let result = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await;

        self.state.started.store(false, Ordering::SeqCst);
        if let Err(ref e) = result {
            error!("Web server error: {}", e);
        }
        result.map_err(WebError::from)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
