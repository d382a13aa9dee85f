//! Text Buffer
//!
//! Line-based document storage with a single cursor. The document always
//! holds at least one line, and the cursor always addresses a valid
//! position: `line < line_count()` and `col <= line_len(line)`. Columns
//! count characters, not bytes.
//!
//! Every operation is total. Moves past the document edges are no-ops.

use crate::config::GridGeometry;

/// Cursor position in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Zero-based line index
    pub line: usize,
    /// Zero-based character column; may equal the line length
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at `(line, col)`
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Byte offset of the `col`-th character, or the end of the string
fn byte_index(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map_or(s.len(), |(i, _)| i)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Ordered lines of text plus the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// An empty document: one empty line, cursor at the origin
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::default(),
        }
    }

    /// Build a buffer from existing lines, cursor at the origin
    ///
    /// Embedded newlines split into separate lines; an empty input yields
    /// a single empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = lines
            .into_iter()
            .flat_map(|l| {
                l.as_ref()
                    .split('\n')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        if out.is_empty() {
            out.push(String::new());
        }
        Self {
            lines: out,
            cursor: Cursor::default(),
        }
    }

    /// All lines in order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines; never zero
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at `index`, if it exists
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Length in characters of line `index` (0 if out of range)
    #[must_use]
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, |l| char_len(l))
    }

    /// The line the cursor is on
    #[must_use]
    pub fn current_line(&self) -> &str {
        &self.lines[self.cursor.line]
    }

    /// Current cursor position
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor, clamping into the valid range
    pub fn set_cursor(&mut self, cursor: Cursor) {
        let line = cursor.line.min(self.lines.len() - 1);
        let col = cursor.col.min(self.line_len(line));
        self.cursor = Cursor::new(line, col);
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Insert `ch` at the cursor and advance past it
    ///
    /// A `\n` is treated as [`insert_newline`](Self::insert_newline).
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.insert_newline();
            return;
        }
        let Cursor { line, col } = self.cursor;
        let text = &mut self.lines[line];
        let at = byte_index(text, col);
        text.insert(at, ch);
        self.cursor.col += 1;
    }

    /// Split the current line at the cursor; the cursor moves to the start
    /// of the new line
    pub fn insert_newline(&mut self) {
        let Cursor { line, col } = self.cursor;
        let text = &mut self.lines[line];
        let at = byte_index(text, col);
        let tail = text.split_off(at);
        self.lines.insert(line + 1, tail);
        self.cursor = Cursor::new(line + 1, 0);
    }

    /// Delete the character before the cursor, joining with the previous
    /// line at column 0. No-op at the document start.
    pub fn backspace(&mut self) {
        let Cursor { line, col } = self.cursor;
        if col > 0 {
            let text = &mut self.lines[line];
            let at = byte_index(text, col - 1);
            text.remove(at);
            self.cursor.col -= 1;
        } else if line > 0 {
            let removed = self.lines.remove(line);
            let prev = &mut self.lines[line - 1];
            let join_col = char_len(prev);
            prev.push_str(&removed);
            self.cursor = Cursor::new(line - 1, join_col);
        }
    }

    /// Break `line` at the character `at`, dropping that character and
    /// moving everything after it to a new following line. The cursor ends
    /// at the end of the new line.
    pub(crate) fn break_line_at(&mut self, line: usize, at: usize) {
        let text = &mut self.lines[line];
        let start = byte_index(text, at);
        let tail = text.split_off(start);
        let moved: String = tail.chars().skip(1).collect();
        let moved_len = char_len(&moved);
        self.lines.insert(line + 1, moved);
        self.cursor = Cursor::new(line + 1, moved_len);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// One character left, wrapping to the end of the previous line
    pub fn move_left(&mut self) {
        let Cursor { line, col } = self.cursor;
        if col > 0 {
            self.cursor.col -= 1;
        } else if line > 0 {
            self.cursor = Cursor::new(line - 1, self.line_len(line - 1));
        }
    }

    /// One character right, wrapping to the start of the next line
    pub fn move_right(&mut self) {
        let Cursor { line, col } = self.cursor;
        if col < self.line_len(line) {
            self.cursor.col += 1;
        } else if line + 1 < self.lines.len() {
            self.cursor = Cursor::new(line + 1, 0);
        }
    }

    /// One line up; the column is clamped and not remembered
    pub fn move_up(&mut self) {
        let Cursor { line, col } = self.cursor;
        if line > 0 {
            self.cursor = Cursor::new(line - 1, col.min(self.line_len(line - 1)));
        }
    }

    /// One line down; the column is clamped and not remembered
    pub fn move_down(&mut self) {
        let Cursor { line, col } = self.cursor;
        if line + 1 < self.lines.len() {
            self.cursor = Cursor::new(line + 1, col.min(self.line_len(line + 1)));
        }
    }

    /// Place the cursor under a pixel position
    ///
    /// Clicks on a row with no line are ignored. Columns past the end of
    /// the line clamp to its end; columns left of the text area clamp to 0.
    /// Returns whether the click landed on a line.
    pub fn map_point_to_cursor(&mut self, px: i32, py: i32, grid: &GridGeometry) -> bool {
        let (line, col) = grid.point_to_cell(px, py);
        let Ok(line) = usize::try_from(line) else {
            return false;
        };
        if line >= self.lines.len() {
            return false;
        }
        let col = usize::try_from(col.max(0)).unwrap_or(usize::MAX);
        self.cursor = Cursor::new(line, col.min(self.line_len(line)));
        true
    }

    /// Whether the cursor and document invariants currently hold
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        !self.lines.is_empty()
            && self.cursor.line < self.lines.len()
            && self.cursor.col <= self.line_len(self.cursor.line)
            && self.lines.iter().all(|l| !l.contains('\n'))
    }
}
