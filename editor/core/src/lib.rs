//! Editor Core - Headless editing engine for the canvas text editor
//!
//! This crate holds everything the editor does except process bootstrap.
//! The text lives here, along with the key handling, auto-wrap and
//! trigger-word sprites. It projects that state into draw commands and
//! speaks the line protocol to the canvas rendering service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  Canvas rendering service                     │
//! └───────────────▲───────────────────────────────┬──────────────┘
//!                 │ clear / rect / text           │ keydown / resize / mousedown
//! ┌───────────────┴───────────────────────────────▼──────────────┐
//! │  transport        TcpCanvasClient | InProcessTransport        │
//! │                   (LineDecoder, encode_batch, decode_event)   │
//! ├──────────────────────────────────────────────────────────────┤
//! │  runtime          run_session: select! over events + ticks    │
//! ├──────────────────────────────────────────────────────────────┤
//! │  session          EditorSession                               │
//! │   ┌──────────┐ ┌──────┐ ┌──────────┐ ┌───────────┐ ┌────────┐ │
//! │   │  KeyMap  │ │ wrap │ │ triggers │ │ animation │ │ render │ │
//! │   └──────────┘ └──────┘ └──────────┘ └───────────┘ └────────┘ │
//! │                 TextBuffer (lines + cursor)                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use editor_core::{load_config, run_session, EditorSession, RunOptions, TcpCanvasClient};
//! use editor_core::transport::CanvasTransport;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config()?;
//!     let mut transport = TcpCanvasClient::new(
//!         config.connection.address(),
//!         config.connection.connect_timeout,
//!     );
//!     transport.connect().await?;
//!
//!     let session = EditorSession::new(&config);
//!     let stats = run_session(session, &mut transport, RunOptions::from_config(&config)).await?;
//!     println!("{stats:?}");
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`protocol`]: Wire codec for draw commands and input events
//! - [`buffer`]: Lines of text and the cursor
//! - [`keymap`]: Key names to editing actions
//! - [`wrap`]: Auto-wrap of the line being typed
//! - [`triggers`]: Trigger words that summon sprites
//! - [`animation`]: Sprite motion and lifetime
//! - [`render`]: State to frame projection
//! - [`session`]: The input dispatcher that owns all state
//! - [`runtime`]: The serialized event/tick loop
//! - [`transport`]: TCP and in-process connections
//! - [`config`]: Layered configuration
//!
//! # No UI Dependencies
//!
//! Nothing here draws. Rendering is entirely the remote service's job.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod buffer;
pub mod config;
pub mod keymap;
pub mod protocol;
pub mod render;
pub mod runtime;
pub mod session;
pub mod transport;
pub mod triggers;
pub mod wrap;

// Re-exports for convenience
pub use animation::{Animation, AnimationEngine};
pub use buffer::{Cursor, TextBuffer};
pub use keymap::{KeyAction, KeyMap};
pub use protocol::{
    decode_event, encode_batch, CanvasEvent, DrawCommand, HexColor, LineDecoder, ProtocolError,
    MAX_LINE_LEN,
};
pub use runtime::{run_session, RunOptions};
pub use session::{EditorSession, SessionId, SessionStats};
pub use transport::{CanvasTransport, InProcessTransport, TcpCanvasClient, TransportError};
pub use triggers::{Trigger, TriggerTable, DEFAULT_TRIGGERS};

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, AnimationConfig, ConfigError,
    ConfigOverrides, ConfigSource, ConnectionConfig, EditorConfig, EditorToml, GridGeometry,
    Theme,
};
