//! Render Projector
//!
//! Pure projection from editor state to one frame of draw commands:
//!
//! ```text
//! clear
//! background rect (whole canvas)
//! header label
//! one text command per document line
//! one text command per live animation
//! cursor bar
//! ```
//!
//! The rendering service paints in command order, so the cursor and the
//! sprites land on top of the background and text.

use crate::animation::Animation;
use crate::buffer::TextBuffer;
use crate::config::{GridGeometry, Theme};
use crate::protocol::DrawCommand;

fn clamp_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Build the frame for the current state
#[must_use]
pub fn project(
    buffer: &TextBuffer,
    animations: &[Animation],
    grid: &GridGeometry,
    theme: &Theme,
) -> Vec<DrawCommand> {
    let mut frame = Vec::with_capacity(buffer.line_count() + animations.len() + 4);

    frame.push(DrawCommand::Clear);
    frame.push(DrawCommand::rect(
        0,
        0,
        grid.canvas_width,
        grid.canvas_height,
        &theme.background,
    ));

    let header_y = grid.header_height.saturating_sub(grid.char_height) / 2;
    frame.push(DrawCommand::text(
        clamp_i32(i64::from(grid.padding)),
        clamp_i32(i64::from(header_y)),
        &theme.header,
        theme.header_label.clone(),
    ));

    for (index, line) in buffer.lines().iter().enumerate() {
        let (x, y) = grid.cell_origin(index, 0);
        let text = if line.is_empty() { " " } else { line.as_str() };
        frame.push(DrawCommand::text(
            clamp_i32(x),
            clamp_i32(y),
            &theme.text,
            text,
        ));
    }

    for anim in animations {
        let (x, y) = anim.position();
        frame.push(DrawCommand::text(x, y, &theme.sprite, anim.glyph.clone()));
    }

    let cursor = buffer.cursor();
    let (x, y) = grid.cell_origin(cursor.line, cursor.col);
    frame.push(DrawCommand::rect(
        clamp_i32(x),
        clamp_i32(y),
        grid.cursor_width,
        grid.char_height,
        &theme.cursor,
    ));

    tracing::trace!(commands = frame.len(), "projected frame");
    frame
}
