//! Session Run Loop
//!
//! Drives one [`EditorSession`] against one transport. Transport events and
//! animation ticks are merged in a single `select!` loop, so the session has
//! exactly one writer and needs no locking.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::Instrument;

use crate::config::EditorConfig;
use crate::protocol::DrawCommand;
use crate::session::{EditorSession, SessionStats};
use crate::transport::{CanvasTransport, TransportError};

/// Timing for the run loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Interval between animation ticks
    pub tick_interval: Duration,
    /// Wait before the first frame is sent
    pub initial_render_delay: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl RunOptions {
    /// Take the timing out of a loaded configuration
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            tick_interval: config.animation.tick_interval,
            initial_render_delay: config.connection.initial_render_delay,
        }
    }
}

/// Run a session until the connection closes
///
/// The first frame goes out after `initial_render_delay`. Events that
/// arrive earlier are still handled and rendered. Every decoded event sends
/// a frame; ticks send one only while something is animating. Missed ticks
/// are skipped rather than replayed in a burst.
///
/// Returns the session's counters when the peer closes the connection. Any
/// other transport failure is returned as an error.
pub async fn run_session<T>(
    session: EditorSession,
    transport: &mut T,
    options: RunOptions,
) -> Result<SessionStats, TransportError>
where
    T: CanvasTransport + ?Sized,
{
    let span = tracing::info_span!("session", id = %session.id());
    drive(session, transport, options).instrument(span).await
}

async fn drive<T>(
    mut session: EditorSession,
    transport: &mut T,
    options: RunOptions,
) -> Result<SessionStats, TransportError>
where
    T: CanvasTransport + ?Sized,
{
    let first_frame = tokio::time::sleep_until(Instant::now() + options.initial_render_delay);
    tokio::pin!(first_frame);
    let mut first_frame_sent = false;

    let mut ticker =
        tokio::time::interval_at(Instant::now() + options.tick_interval, options.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::debug!(
        tick_ms = options.tick_interval.as_millis(),
        delay_ms = options.initial_render_delay.as_millis(),
        "Session loop started"
    );

    loop {
        tokio::select! {
            biased;

            event = transport.recv() => match event {
                Ok(event) => {
                    tracing::trace!(kind = event.kind(), "Event received");
                    let frame = session.handle_event(event);
                    if !deliver(transport, frame).await? {
                        break;
                    }
                }
                Err(TransportError::ConnectionClosed) => {
                    tracing::info!("Canvas server closed the connection");
                    break;
                }
                Err(e) => return Err(e),
            },

            () = &mut first_frame, if !first_frame_sent => {
                first_frame_sent = true;
                let frame = session.render();
                if !deliver(transport, frame).await? {
                    break;
                }
            }

            _ = ticker.tick() => {
                if let Some(frame) = session.tick() {
                    if !deliver(transport, frame).await? {
                        break;
                    }
                }
            }
        }
    }

    let stats = session.stats();
    tracing::debug!(?stats, "Session loop finished");
    Ok(stats)
}

/// Send a frame; `Ok(false)` means the peer is gone and the loop should end
async fn deliver<T>(transport: &mut T, frame: Vec<DrawCommand>) -> Result<bool, TransportError>
where
    T: CanvasTransport + ?Sized,
{
    match transport.send(frame).await {
        Ok(()) => Ok(true),
        Err(TransportError::ConnectionClosed) => {
            tracing::info!("Canvas server closed the connection while sending");
            Ok(false)
        }
        Err(TransportError::SendFailed(reason)) if !transport.is_connected() => {
            tracing::info!(%reason, "Connection lost while sending");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
