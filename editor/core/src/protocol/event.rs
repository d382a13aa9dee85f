//! Incoming canvas events

use super::ProtocolError;

/// An input event reported by the rendering service
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasEvent {
    /// A key was pressed
    KeyDown {
        /// Key name as reported by the canvas (`a`, `space`, `Return`, ...)
        key: String,
    },

    /// The canvas was resized; carries no dimensions
    Resize,

    /// A mouse button was pressed
    MouseDown {
        /// Horizontal pixel position
        x: i32,
        /// Vertical pixel position
        y: i32,
    },
}

impl CanvasEvent {
    /// Short name used in log fields
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::KeyDown { .. } => "keydown",
            Self::Resize => "resize",
            Self::MouseDown { .. } => "mousedown",
        }
    }
}

/// Decode one record (without its newline) into a [`CanvasEvent`]
///
/// For `keydown` everything after the first comma is the key name, so a
/// literal `,` key arrives intact.
///
/// # Errors
///
/// Returns a [`ProtocolError`] for unknown event types, missing fields, and
/// coordinates that are not integers. Callers skip such records.
pub fn decode_event(line: &str) -> Result<CanvasEvent, ProtocolError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (kind, rest) = match line.split_once(',') {
        Some((kind, rest)) => (kind, Some(rest)),
        None => (line, None),
    };

    match kind {
        "keydown" => match rest {
            Some(key) if !key.is_empty() => Ok(CanvasEvent::KeyDown {
                key: key.to_string(),
            }),
            _ => Err(ProtocolError::MissingField {
                event: "keydown",
                field: "key",
            }),
        },
        "resize" => Ok(CanvasEvent::Resize),
        "mousedown" => {
            let mut fields = rest.unwrap_or_default().split(',');
            let x = parse_coordinate(fields.next(), "x")?;
            let y = parse_coordinate(fields.next(), "y")?;
            Ok(CanvasEvent::MouseDown { x, y })
        }
        other => Err(ProtocolError::UnknownEvent(other.to_string())),
    }
}

fn parse_coordinate(field: Option<&str>, name: &'static str) -> Result<i32, ProtocolError> {
    let raw = field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ProtocolError::MissingField {
            event: "mousedown",
            field: name,
        })?;
    raw.parse().map_err(|_| ProtocolError::InvalidCoordinate {
        field: name,
        value: raw.to_string(),
    })
}
