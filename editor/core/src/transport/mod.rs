//! Transport Layer
//!
//! Abstracts the connection to the canvas rendering service:
//! - `Tcp`: the real service, newline-delimited text records over TCP
//! - `InProcess`: channel pair for embedding and tests
//!
//! The run loop only sees [`CanvasTransport`]: frames go out, decoded
//! events come in. Record splitting and the text codec live below this
//! seam, so undecodable records never reach the session.

pub mod in_process;
pub mod tcp;
pub mod traits;

pub use in_process::InProcessTransport;
pub use tcp::TcpCanvasClient;
pub use traits::{CanvasTransport, TransportError};
