//! Outgoing draw commands

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ProtocolError;

/// A color in `#rrggbb` form, validated on construction
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `#rrggbb` color string
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidColor` if the string is not exactly a
    /// `#` followed by six hex digits.
    pub fn parse(value: &str) -> Result<Self, ProtocolError> {
        let valid = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(ProtocolError::InvalidColor(value.to_string()))
        }
    }

    /// Build a color from its components
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// The color as sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One drawing instruction for the rendering service
///
/// Later commands paint over earlier ones, so a frame is an ordered
/// `Vec<DrawCommand>` starting with [`DrawCommand::Clear`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Wipe the whole canvas
    Clear,

    /// Filled rectangle
    Rect {
        /// Left edge in pixels
        x: i32,
        /// Top edge in pixels
        y: i32,
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
        /// Fill color
        color: HexColor,
    },

    /// Text run anchored at a pixel position
    Text {
        /// Left edge in pixels
        x: i32,
        /// Top edge in pixels
        y: i32,
        /// Text color
        color: HexColor,
        /// Text to draw
        text: String,
    },
}

impl DrawCommand {
    /// Convenience constructor for a text command
    pub fn text(x: i32, y: i32, color: &HexColor, text: impl Into<String>) -> Self {
        Self::Text {
            x,
            y,
            color: color.clone(),
            text: text.into(),
        }
    }

    /// Convenience constructor for a filled rectangle
    #[must_use]
    pub fn rect(x: i32, y: i32, width: u32, height: u32, color: &HexColor) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
            color: color.clone(),
        }
    }

    /// Encode as a single wire record, without the trailing newline
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Clear => "clear".to_string(),
            Self::Rect {
                x,
                y,
                width,
                height,
                color,
            } => format!("rect,{x},{y},{width},{height},{color}"),
            Self::Text { x, y, color, text } => {
                format!("text,{x},{y},{color},{}", sanitize_text(text))
            }
        }
    }
}

/// Strip characters that would corrupt record framing
fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ',' | '\n' | '\r'))
        .collect()
}

/// Encode a whole frame as newline-terminated records
///
/// Produces one buffer so a render pass becomes a single socket write.
#[must_use]
pub fn encode_batch(commands: &[DrawCommand]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(commands.len() * 32);
    for command in commands {
        buf.extend_from_slice(command.encode().as_bytes());
        buf.push(b'\n');
    }
    buf
}
