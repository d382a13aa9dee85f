//! In-Process Transport
//!
//! Channel-backed transport for driving a session without a socket, used by
//! embedders and by the run-loop tests.
//!
//! # Usage
//!
//! ```ignore
//! let (transport, event_tx, frame_rx) = InProcessTransport::new_pair();
//!
//! // Feed events through event_tx, observe frames on frame_rx
//! // Hand transport to run_session
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::protocol::{CanvasEvent, DrawCommand};

use super::traits::{CanvasTransport, TransportError};

/// In-process transport using tokio channels
pub struct InProcessTransport {
    /// Frames going to the fake canvas
    frame_tx: mpsc::Sender<Vec<DrawCommand>>,
    /// Events coming from the fake canvas
    event_rx: mpsc::Receiver<CanvasEvent>,
    connected: Arc<AtomicBool>,
}

impl InProcessTransport {
    /// Create a new in-process transport pair
    ///
    /// Returns:
    /// - `InProcessTransport`: give this to the session loop
    /// - `mpsc::Sender<CanvasEvent>`: inject events here; dropping it closes the connection
    /// - `mpsc::Receiver<Vec<DrawCommand>>`: frames sent by the session arrive here
    #[must_use]
    pub fn new_pair() -> (
        Self,
        mpsc::Sender<CanvasEvent>,
        mpsc::Receiver<Vec<DrawCommand>>,
    ) {
        Self::new_pair_with_capacity(100)
    }

    /// Create with custom channel capacity
    #[must_use]
    pub fn new_pair_with_capacity(
        capacity: usize,
    ) -> (
        Self,
        mpsc::Sender<CanvasEvent>,
        mpsc::Receiver<Vec<DrawCommand>>,
    ) {
        let (event_tx, event_rx) = mpsc::channel(capacity);
        let (frame_tx, frame_rx) = mpsc::channel(capacity);

        let transport = Self {
            frame_tx,
            event_rx,
            connected: Arc::new(AtomicBool::new(true)),
        };

        (transport, event_tx, frame_rx)
    }
}

#[async_trait]
impl CanvasTransport for InProcessTransport {
    async fn connect(&mut self) -> Result<(), TransportError> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), TransportError> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn send(&self, frame: Vec<DrawCommand>) -> Result<(), TransportError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(TransportError::InvalidState(
                "Transport not connected".to_string(),
            ));
        }

        self.frame_tx
            .send(frame)
            .await
            .map_err(|_| TransportError::SendFailed("Channel closed".to_string()))
    }

    async fn recv(&mut self) -> Result<CanvasEvent, TransportError> {
        self.event_rx
            .recv()
            .await
            .ok_or(TransportError::ConnectionClosed)
    }

    fn try_recv(&mut self) -> Option<CanvasEvent> {
        self.event_rx.try_recv().ok()
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_in_process_roundtrip() {
        let (mut transport, event_tx, mut frame_rx) = InProcessTransport::new_pair();

        assert_ok!(transport.send(vec![DrawCommand::Clear]).await);
        assert_eq!(frame_rx.recv().await.unwrap(), vec![DrawCommand::Clear]);

        event_tx.send(CanvasEvent::Resize).await.unwrap();
        assert_eq!(transport.recv().await.unwrap(), CanvasEvent::Resize);
    }

    #[tokio::test]
    async fn test_in_process_try_recv() {
        let (mut transport, event_tx, _frame_rx) = InProcessTransport::new_pair();

        assert!(transport.try_recv().is_none());

        event_tx
            .send(CanvasEvent::MouseDown { x: 1, y: 2 })
            .await
            .unwrap();
        assert_eq!(
            transport.try_recv(),
            Some(CanvasEvent::MouseDown { x: 1, y: 2 })
        );
    }

    #[tokio::test]
    async fn test_in_process_disconnect() {
        let (mut transport, _event_tx, _frame_rx) = InProcessTransport::new_pair();
        assert!(transport.is_connected());

        assert_ok!(transport.disconnect().await);
        assert!(!transport.is_connected());

        let result = transport.send(vec![DrawCommand::Clear]).await;
        assert!(matches!(result, Err(TransportError::InvalidState(_))));

        assert_ok!(transport.connect().await);
        assert!(transport.is_connected());
    }

    #[tokio::test]
    async fn test_dropped_sender_closes_connection() {
        let (mut transport, event_tx, _frame_rx) = InProcessTransport::new_pair();
        drop(event_tx);

        let err = assert_err!(transport.recv().await);
        assert!(matches!(err, TransportError::ConnectionClosed));
    }

    #[tokio::test]
    async fn test_dropped_receiver_fails_send() {
        let (transport, _event_tx, frame_rx) = InProcessTransport::new_pair();
        drop(frame_rx);

        let result = transport.send(vec![DrawCommand::Clear]).await;
        assert!(matches!(result, Err(TransportError::SendFailed(_))));
    }
}
