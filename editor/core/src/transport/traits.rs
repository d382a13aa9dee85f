//! Transport Traits
//!
//! The editor only needs two things from a connection: a way to push a
//! frame of draw commands out, and a stream of decoded events coming in.

use async_trait::async_trait;
use thiserror::Error;

use crate::protocol::{CanvasEvent, DrawCommand};

/// Transport-level errors
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the canvas server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The peer went away
    #[error("Connection closed")]
    ConnectionClosed,

    /// A frame could not be handed to the writer
    #[error("Send failed: {0}")]
    SendFailed(String),

    /// Operation not valid in the current connection state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying socket error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connection to a canvas rendering service
#[async_trait]
pub trait CanvasTransport: Send {
    /// Open the connection
    async fn connect(&mut self) -> Result<(), TransportError>;

    /// Close the connection
    async fn disconnect(&mut self) -> Result<(), TransportError>;

    /// Send one frame; it is written to the peer as a single batch
    async fn send(&self, frame: Vec<DrawCommand>) -> Result<(), TransportError>;

    /// Wait for the next event
    ///
    /// Returns [`TransportError::ConnectionClosed`] once the peer is gone
    /// and every buffered event has been delivered.
    async fn recv(&mut self) -> Result<CanvasEvent, TransportError>;

    /// Take an already-buffered event without waiting
    fn try_recv(&mut self) -> Option<CanvasEvent>;

    /// Whether the connection is believed to be up
    fn is_connected(&self) -> bool;
}
