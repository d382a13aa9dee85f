//! Editing Session
//!
//! [`EditorSession`] is the single owner of the document, cursor and
//! animations. It is the input dispatcher: every decoded event and every
//! timer tick goes through it, and each call that changes what is on screen
//! hands back a complete frame to send.
//!
//! # Event Flow
//!
//! ```text
//! keydown   -> KeyMap -> TextBuffer edit -> auto-wrap -> triggers -> frame
//! mousedown -> TextBuffer::map_point_to_cursor                    -> frame
//! resize    ->                                                       frame
//! tick      -> AnimationEngine::tick (idle: no frame)             -> frame
//! ```

use std::fmt;

use uuid::Uuid;

use crate::animation::AnimationEngine;
use crate::buffer::TextBuffer;
use crate::config::{EditorConfig, GridGeometry, Theme};
use crate::keymap::{KeyAction, KeyMap};
use crate::protocol::{decode_event, CanvasEvent, DrawCommand};
use crate::render;
use crate::triggers::TriggerTable;
use crate::wrap;

/// Unique identifier for an editing session
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new random session ID
    #[must_use]
    pub fn new() -> Self {
        Self(format!("session_{}", Uuid::new_v4().simple()))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Running counters for one session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Events dispatched (decoded successfully)
    pub events_handled: u64,
    /// Records dropped because they failed to decode
    pub events_ignored: u64,
    /// Characters inserted from key presses
    pub chars_inserted: u64,
    /// Frames produced by any path
    pub frames_rendered: u64,
    /// Frames produced by animation ticks
    pub tick_frames: u64,
    /// Sprites spawned by trigger words
    pub animations_spawned: u64,
}

/// The editor state and its dispatcher
#[derive(Debug)]
pub struct EditorSession {
    id: SessionId,
    buffer: TextBuffer,
    animations: AnimationEngine,
    keys: KeyMap,
    triggers: TriggerTable,
    grid: GridGeometry,
    theme: Theme,
    stats: SessionStats,
}

impl EditorSession {
    /// Create a session with an empty document
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_buffer(config, TextBuffer::new())
    }

    /// Create a session over an existing buffer
    #[must_use]
    pub fn with_buffer(config: &EditorConfig, buffer: TextBuffer) -> Self {
        Self {
            id: SessionId::new(),
            buffer,
            animations: AnimationEngine::new(config.animation, config.grid.canvas_width),
            keys: KeyMap::new(),
            triggers: TriggerTable::default(),
            grid: config.grid,
            theme: config.theme.clone(),
            stats: SessionStats::default(),
        }
    }

    /// This session's ID
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The document and cursor
    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The live animations
    #[must_use]
    pub fn animations(&self) -> &AnimationEngine {
        &self.animations
    }

    /// Counters so far
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Project the current state into a frame
    pub fn render(&mut self) -> Vec<DrawCommand> {
        self.stats.frames_rendered += 1;
        render::project(
            &self.buffer,
            self.animations.active(),
            &self.grid,
            &self.theme,
        )
    }

    /// Dispatch one event and return the frame to draw
    pub fn handle_event(&mut self, event: CanvasEvent) -> Vec<DrawCommand> {
        self.stats.events_handled += 1;
        match event {
            CanvasEvent::KeyDown { key } => self.handle_key(&key),
            CanvasEvent::Resize => {}
            CanvasEvent::MouseDown { x, y } => {
                if !self.buffer.map_point_to_cursor(x, y, &self.grid) {
                    tracing::trace!(x, y, "click outside document");
                }
            }
        }
        self.render()
    }

    /// Decode a raw record and dispatch it
    ///
    /// Records that fail to decode are logged and ignored; they produce no
    /// frame.
    pub fn handle_record(&mut self, record: &str) -> Option<Vec<DrawCommand>> {
        match decode_event(record) {
            Ok(event) => Some(self.handle_event(event)),
            Err(e) => {
                self.stats.events_ignored += 1;
                tracing::debug!(error = %e, record, "ignoring undecodable record");
                None
            }
        }
    }

    /// Advance animations by one tick
    ///
    /// Returns `None` when nothing is animating.
    pub fn tick(&mut self) -> Option<Vec<DrawCommand>> {
        if !self.animations.tick() {
            return None;
        }
        self.stats.tick_frames += 1;
        Some(self.render())
    }

    fn handle_key(&mut self, key: &str) {
        match self.keys.resolve(key) {
            KeyAction::Insert(ch) => {
                self.buffer.insert_char(ch);
                self.stats.chars_inserted += 1;
                wrap::wrap_current_line(&mut self.buffer, self.grid.max_line_width);
                self.spawn_triggered();
            }
            KeyAction::Newline => self.buffer.insert_newline(),
            KeyAction::Backspace => self.buffer.backspace(),
            KeyAction::MoveLeft => self.buffer.move_left(),
            KeyAction::MoveRight => self.buffer.move_right(),
            KeyAction::MoveUp => self.buffer.move_up(),
            KeyAction::MoveDown => self.buffer.move_down(),
            KeyAction::Ignored => tracing::trace!(key, "ignored key"),
        }
    }

    fn spawn_triggered(&mut self) {
        let line = self.buffer.cursor().line;
        for glyph in self.triggers.matches(self.buffer.current_line()) {
            if self.animations.spawn(glyph, line, &self.grid) {
                self.stats.animations_spawned += 1;
            }
        }
    }
}
