//! TCP Client Transport
//!
//! Connects to the canvas server and runs two tasks over the split stream:
//! a reader that turns bytes into decoded events, and a writer that turns
//! each frame into one batched write.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::protocol::{decode_event, encode_batch, CanvasEvent, DrawCommand, LineDecoder};
use crate::transport::traits::{CanvasTransport, TransportError};

/// Client-side TCP transport to a canvas rendering service
pub struct TcpCanvasClient {
    /// `host:port` of the server
    address: String,
    connect_timeout: Duration,
    /// Decoded events from the reader task
    event_rx: Option<mpsc::Receiver<CanvasEvent>>,
    /// Frames for the writer task
    frame_tx: Option<mpsc::Sender<Vec<DrawCommand>>>,
    /// Reader task, aborted on disconnect
    reader: Option<JoinHandle<()>>,
    /// Cleared when either half of the socket goes away
    connected: Arc<AtomicBool>,
}

impl TcpCanvasClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `address` - `host:port` of the canvas server
    /// * `connect_timeout` - how long to wait for the TCP handshake
    pub fn new(address: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            address: address.into(),
            connect_timeout,
            event_rx: None,
            frame_tx: None,
            reader: None,
            connected: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl CanvasTransport for TcpCanvasClient {
    async fn connect(&mut self) -> Result<(), TransportError> {
        if self.connected.load(Ordering::SeqCst) {
            return Err(TransportError::InvalidState(
                "Already connected".to_string(),
            ));
        }

        let stream = tokio::time::timeout(self.connect_timeout, TcpStream::connect(&self.address))
            .await
            .map_err(|_| {
                TransportError::ConnectionFailed(format!(
                    "Timed out after {:?} connecting to {}",
                    self.connect_timeout, self.address
                ))
            })?
            .map_err(|e| {
                TransportError::ConnectionFailed(format!(
                    "Failed to connect to {}: {}",
                    self.address, e
                ))
            })?;
        stream.set_nodelay(true)?;

        let (mut read_half, mut write_half) = stream.into_split();

        let (event_tx, event_rx) = mpsc::channel::<CanvasEvent>(100);
        let (frame_tx, mut frame_rx) = mpsc::channel::<Vec<DrawCommand>>(100);

        let connected = Arc::clone(&self.connected);
        connected.store(true, Ordering::SeqCst);

        // Read task: stream -> event_tx
        let connected_read = Arc::clone(&connected);
        let reader = tokio::spawn(async move {
            let mut decoder = LineDecoder::new();
            let mut buf = [0u8; 4096];

            'read: loop {
                match read_half.read(&mut buf).await {
                    Ok(0) => {
                        tracing::debug!("Connection closed by canvas server");
                        break;
                    }
                    Ok(n) => {
                        decoder.push(&buf[..n]);

                        loop {
                            match decoder.next_line() {
                                Ok(Some(record)) => match decode_event(&record) {
                                    Ok(event) => {
                                        if event_tx.send(event).await.is_err() {
                                            tracing::debug!("Event receiver dropped");
                                            break 'read;
                                        }
                                    }
                                    Err(e) => {
                                        tracing::debug!(error = %e, record = %record, "Ignoring record");
                                    }
                                },
                                Ok(None) => break,
                                Err(e) => {
                                    tracing::warn!(error = %e, "Discarding oversized record");
                                }
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Read error");
                        break;
                    }
                }
            }

            connected_read.store(false, Ordering::SeqCst);
            tracing::info!("Disconnected from canvas server");
        });

        // Write task: frame_rx -> stream
        let connected_write = Arc::clone(&connected);
        tokio::spawn(async move {
            while let Some(frame) = frame_rx.recv().await {
                let data = encode_batch(&frame);
                if let Err(e) = write_half.write_all(&data).await {
                    tracing::warn!(error = %e, "Write error");
                    break;
                }
                tracing::trace!(commands = frame.len(), bytes = data.len(), "Frame written");
            }

            let _ = write_half.shutdown().await;
            connected_write.store(false, Ordering::SeqCst);
        });

        self.event_rx = Some(event_rx);
        self.frame_tx = Some(frame_tx);
        self.reader = Some(reader);

        tracing::info!(address = %self.address, "Connected to canvas server");

        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), TransportError> {
        self.connected.store(false, Ordering::SeqCst);
        if let Some(reader) = self.reader.take() {
            reader.abort();
            let _ = reader.await;
        }
        self.event_rx = None;
        // The writer drains what is queued, then shuts the socket down
        self.frame_tx = None;

        tracing::info!("Disconnected");
        Ok(())
    }

    /// Queue a frame for the writer task
    ///
    /// EOF from the server only ends the event stream, so frames are still
    /// accepted until the writer itself fails. After that, sends fail with
    /// `ConnectionClosed`.
    async fn send(&self, frame: Vec<DrawCommand>) -> Result<(), TransportError> {
        let Some(ref tx) = self.frame_tx else {
            return Err(TransportError::InvalidState("Not connected".to_string()));
        };

        tx.send(frame)
            .await
            .map_err(|_| TransportError::ConnectionClosed)
    }

    async fn recv(&mut self) -> Result<CanvasEvent, TransportError> {
        if let Some(ref mut rx) = self.event_rx {
            rx.recv().await.ok_or(TransportError::ConnectionClosed)
        } else {
            Err(TransportError::InvalidState("Not connected".to_string()))
        }
    }

    fn try_recv(&mut self) -> Option<CanvasEvent> {
        self.event_rx.as_mut()?.try_recv().ok()
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
