//! Record splitting for the byte stream
//!
//! Socket reads arrive as arbitrary chunks: several records in one read, or
//! one record split across reads. [`LineDecoder`] buffers the chunks and
//! yields complete records.

use super::ProtocolError;

/// Maximum size of a single pending record (64 KiB)
///
/// Guards against unbounded buffering when the peer never sends a newline.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Minimum buffer capacity for decoder
const MIN_BUFFER_CAPACITY: usize = 4096;

/// Decoder state machine for newline-delimited records
#[derive(Debug)]
pub struct LineDecoder {
    buffer: Vec<u8>,
    /// Position where we've consumed up to
    read_pos: usize,
    max_line_len: usize,
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDecoder {
    /// Create a decoder with the default record size limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_line_len(MAX_LINE_LEN)
    }

    /// Create a decoder with a custom record size limit
    #[must_use]
    pub fn with_max_line_len(max_line_len: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(MIN_BUFFER_CAPACITY),
            read_pos: 0,
            max_line_len,
        }
    }

    /// Append bytes to the buffer
    pub fn push(&mut self, data: &[u8]) {
        // Compact once everything is consumed or the dead prefix gets large
        let fully_consumed = self.read_pos == self.buffer.len();
        if self.read_pos > 0 && (fully_consumed || self.read_pos > MIN_BUFFER_CAPACITY) {
            self.buffer.drain(..self.read_pos);
            self.read_pos = 0;
        }
        self.buffer.extend_from_slice(data);
    }

    /// Bytes buffered but not yet returned
    #[must_use]
    pub fn available(&self) -> usize {
        self.buffer.len() - self.read_pos
    }

    /// Try to take the next complete, non-empty record
    ///
    /// Returns:
    /// - `Ok(Some(line))` when a full record is buffered
    /// - `Ok(None)` if more data is needed
    /// - `Err(ProtocolError::LineTooLong)` if the pending fragment exceeds the
    ///   limit; the fragment is discarded so decoding can resume
    pub fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        loop {
            let pending = &self.buffer[self.read_pos..];
            let Some(newline) = pending.iter().position(|&b| b == b'\n') else {
                if pending.len() > self.max_line_len {
                    let len = pending.len();
                    self.clear();
                    return Err(ProtocolError::LineTooLong {
                        len,
                        max: self.max_line_len,
                    });
                }
                return Ok(None);
            };

            let record = &pending[..newline];
            self.read_pos += newline + 1;

            if record.is_empty() || record == b"\r" {
                continue;
            }
            return Ok(Some(String::from_utf8_lossy(record).into_owned()));
        }
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.read_pos = 0;
    }
}
