//! Canvas Editor - line editor client for a canvas rendering service
//!
//! Connects to a canvas server over TCP, sends it frames of draw commands,
//! and edits text in response to the key and mouse events it reports.
//!
//! # Usage
//!
//! ```bash
//! # Connect to the default server (127.0.0.1:5005)
//! canvas-editor
//!
//! # Custom server
//! canvas-editor --host 10.0.0.5 --port 6000
//!
//! # Narrower wrap and slower animations
//! canvas-editor --max-line-width 40 --tick-ms 100
//!
//! # Verbose logging
//! RUST_LOG=debug canvas-editor
//! ```
//!
//! # Environment Variables
//!
//! - `CANVAS_EDITOR_CONFIG`: Config file path
//! - `CANVAS_EDITOR_HOST`, `CANVAS_EDITOR_PORT`: Server address
//! - `CANVAS_EDITOR_MAX_LINE_WIDTH`: Auto-wrap threshold
//! - `CANVAS_EDITOR_TICK_MS`: Animation tick interval
//! - `CANVAS_EDITOR_CONNECT_TIMEOUT`: Connect timeout in milliseconds
//! - `RUST_LOG`: Log filter (overrides `--log-level`)
//!
//! # Signals
//!
//! - `SIGINT`: Disconnect and exit

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use editor_core::{
    config::{default_config_path, load_config_from_path, ConfigOverrides},
    run_session, CanvasTransport, EditorSession, RunOptions, TcpCanvasClient,
};

/// Canvas Editor - minimal text editor drawn by a remote canvas
#[derive(Parser, Debug)]
#[command(name = "canvas-editor")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Canvas server host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Canvas server port
    #[arg(short = 'p', long, value_name = "PORT")]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "CANVAS_EDITOR_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Characters per line before auto-wrap
    #[arg(short = 'w', long, value_name = "CHARS")]
    max_line_width: Option<usize>,

    /// Animation tick interval in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "CANVAS_EDITOR_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides::new();
        if let Some(ref host) = self.host {
            overrides = overrides.with_host(host.clone());
        }
        if let Some(port) = self.port {
            overrides = overrides.with_port(port);
        }
        if let Some(width) = self.max_line_width {
            overrides = overrides.with_max_line_width(width);
        }
        if let Some(ms) = self.tick_ms {
            overrides = overrides.with_tick_interval_ms(ms);
        }
        overrides
    }
}

/// Initialize logging with the specified level
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("canvas_editor={level},editor_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    info!("Canvas Editor starting");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.clone().or_else(default_config_path);
    let mut config = load_config_from_path(config_path)
        .context("Failed to load configuration")?;
    args.overrides().apply(&mut config);
    config
        .validate()
        .context("Invalid command-line overrides")?;

    info!(source = %config.source(), "Configuration loaded");

    let address = config.connection.address();
    let mut transport = TcpCanvasClient::new(address.clone(), config.connection.connect_timeout);
    transport
        .connect()
        .await
        .with_context(|| format!("Failed to connect to canvas server at {address}"))?;

    let session = EditorSession::new(&config);
    let session_id = session.id().clone();
    info!(session = %session_id, address = %address, "Connected");

    let options = RunOptions::from_config(&config);
    let outcome = tokio::select! {
        result = run_session(session, &mut transport, options) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    match outcome {
        Some(Ok(stats)) => {
            info!(
                events = stats.events_handled,
                ignored = stats.events_ignored,
                chars = stats.chars_inserted,
                frames = stats.frames_rendered,
                tick_frames = stats.tick_frames,
                animations = stats.animations_spawned,
                "Session finished"
            );
        }
        Some(Err(e)) => {
            warn!(error = %e, "Session ended with a transport error");
            transport.disconnect().await.ok();
            return Err(e).context("Canvas connection failed");
        }
        None => info!("Interrupted"),
    }

    transport.disconnect().await.ok();
    info!(session = %session_id, "Disconnected");
    Ok(())
}
