//! Canvas Drawing Protocol
//!
//! Newline-delimited ASCII records exchanged with the rendering service.
//!
//! # Wire Format
//!
//! ```text
//! editor -> canvas:   clear
//!                     rect,<x>,<y>,<width>,<height>,<colorHex>
//!                     text,<x>,<y>,<colorHex>,<text>
//!
//! canvas -> editor:   keydown,<keyName>
//!                     resize
//!                     mousedown,<x>,<y>
//! ```
//!
//! Fields are comma separated. Text payloads cannot carry commas, so the
//! encoder strips them. Incoming records that fail to decode are reported as
//! [`ProtocolError`] and are expected to be logged and skipped by the caller.

pub mod command;
pub mod event;
pub mod line;

pub use command::{encode_batch, DrawCommand, HexColor};
pub use event::{decode_event, CanvasEvent};
pub use line::{LineDecoder, MAX_LINE_LEN};

use thiserror::Error;

/// Errors produced while encoding or decoding protocol records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Event type is not one this client understands
    #[error("unknown event type: {0:?}")]
    UnknownEvent(String),

    /// A required field was absent or empty
    #[error("{event} event is missing field {field}")]
    MissingField {
        /// Event type the field belongs to
        event: &'static str,
        /// Name of the absent field
        field: &'static str,
    },

    /// A numeric field did not parse as an integer
    #[error("invalid {field} coordinate: {value:?}")]
    InvalidCoordinate {
        /// Name of the field
        field: &'static str,
        /// Raw text received
        value: String,
    },

    /// Pending data grew past the record size limit without a newline
    #[error("record of {len} bytes exceeds maximum {max}")]
    LineTooLong {
        /// Bytes buffered when the limit was hit
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// Color string is not of the form `#rrggbb`
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
