//! Auto-wrap
//!
//! Keeps the line being typed under the width limit by moving its last
//! word onto a new line. A line with no interior space is left over-length:
//! long unbroken tokens are tolerated rather than hard-split.

use crate::buffer::TextBuffer;

/// Wrap the cursor's line if it has reached `max_width` characters
///
/// The split happens at the last space with index greater than zero. The
/// space itself is consumed, the text after it becomes the next line, and
/// the cursor moves to the end of that new line. Returns whether a split
/// happened.
pub fn wrap_current_line(buffer: &mut TextBuffer, max_width: usize) -> bool {
    let line = buffer.cursor().line;
    let text = buffer.current_line();
    if text.chars().count() < max_width {
        return false;
    }

    let split = text
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == ' ')
        .map(|(i, _)| i)
        .last();

    match split {
        Some(at) if at > 0 => {
            buffer.break_line_at(line, at);
            tracing::trace!(line, at, "auto-wrapped line");
            true
        }
        _ => false,
    }
}
