//! Animation Engine
//!
//! Owns the glyph sprites summoned by trigger words and advances them on
//! each tick. A sprite drifts right while bobbing on a sine wave and is
//! dropped once it leaves the canvas or its lifetime runs out. At most one
//! sprite per glyph is alive at a time.

use crate::config::{AnimationConfig, GridGeometry};

/// One live sprite
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    /// Glyph being drawn
    pub glyph: String,
    /// Horizontal position in pixels
    pub x: f64,
    /// Current vertical position in pixels
    pub y: f64,
    /// Vertical center of the bounce
    pub base_y: f64,
    /// Pixels advanced per tick
    pub velocity_x: f64,
    /// Bounce phase in radians
    pub bounce_phase: f64,
    /// Ticks left before removal
    pub remaining_ticks: i64,
}

impl Animation {
    /// Floored integer position for drawing
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn position(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Engine that manages sprite spawning and playback
#[derive(Clone, Debug)]
pub struct AnimationEngine {
    active: Vec<Animation>,
    config: AnimationConfig,
    canvas_width: f64,
}

impl AnimationEngine {
    /// Create an empty engine
    #[must_use]
    pub fn new(config: AnimationConfig, canvas_width: u32) -> Self {
        Self {
            active: Vec::new(),
            config,
            canvas_width: f64::from(canvas_width),
        }
    }

    /// Live sprites in spawn order
    #[must_use]
    pub fn active(&self) -> &[Animation] {
        &self.active
    }

    /// Whether anything is animating
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether a sprite for `glyph` is alive
    #[must_use]
    pub fn is_animating(&self, glyph: &str) -> bool {
        self.active.iter().any(|a| a.glyph == glyph)
    }

    /// Start a sprite one line above `cursor_line`
    ///
    /// Does nothing if `glyph` is already animating. Returns whether a
    /// sprite was created.
    pub fn spawn(&mut self, glyph: &str, cursor_line: usize, grid: &GridGeometry) -> bool {
        if self.is_animating(glyph) {
            return false;
        }

        let line = i64::try_from(cursor_line).unwrap_or(i64::MAX) - 1;
        #[allow(clippy::cast_precision_loss)]
        let base_y = (grid.text_top() + line * i64::from(grid.line_pitch)) as f64;

        self.active.push(Animation {
            glyph: glyph.to_string(),
            x: 0.0,
            y: base_y,
            base_y,
            velocity_x: self.config.velocity_x,
            bounce_phase: 0.0,
            remaining_ticks: i64::from(self.config.lifetime_ticks),
        });
        tracing::debug!(glyph, base_y, "spawned animation");
        true
    }

    /// Advance every sprite by one tick and drop the finished ones
    ///
    /// Returns `false` without touching anything when idle, so callers can
    /// skip the redraw.
    pub fn tick(&mut self) -> bool {
        if self.active.is_empty() {
            return false;
        }

        let amplitude = self.config.amplitude;
        let phase_step = self.config.phase_step;
        for anim in &mut self.active {
            anim.x += anim.velocity_x;
            anim.bounce_phase += phase_step;
            anim.y = anim.base_y + amplitude * anim.bounce_phase.sin();
            anim.remaining_ticks -= 1;
        }

        let canvas_width = self.canvas_width;
        let before = self.active.len();
        self.active
            .retain(|a| a.x <= canvas_width && a.remaining_ticks > 0);
        let finished = before - self.active.len();
        if finished > 0 {
            tracing::trace!(finished, live = self.active.len(), "animations finished");
        }
        true
    }
}
