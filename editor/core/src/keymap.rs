//! Key name resolution
//!
//! The canvas reports keys by name (`a`, `space`, `period`, `BackSpace`).
//! [`KeyMap`] turns a name into the action the buffer should take.

/// What a key press means to the editor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character at the cursor
    Insert(char),
    /// Split the line at the cursor
    Newline,
    /// Delete before the cursor
    Backspace,
    /// Cursor left
    MoveLeft,
    /// Cursor right
    MoveRight,
    /// Cursor up
    MoveUp,
    /// Cursor down
    MoveDown,
    /// Key has no editing meaning (modifiers, function keys, ...)
    Ignored,
}

/// Named keys that stand for a literal character
const NAMED_CHARS: &[(&str, char)] = &[
    ("space", ' '),
    ("period", '.'),
    ("comma", ','),
    ("exclam", '!'),
    ("question", '?'),
    ("colon", ':'),
    ("semicolon", ';'),
    ("apostrophe", '\''),
    ("quotedbl", '"'),
    ("minus", '-'),
    ("underscore", '_'),
    ("plus", '+'),
    ("equal", '='),
    ("slash", '/'),
    ("backslash", '\\'),
    ("parenleft", '('),
    ("parenright", ')'),
    ("bracketleft", '['),
    ("bracketright", ']'),
    ("braceleft", '{'),
    ("braceright", '}'),
    ("less", '<'),
    ("greater", '>'),
    ("at", '@'),
    ("numbersign", '#'),
    ("dollar", '$'),
    ("percent", '%'),
    ("asciicircum", '^'),
    ("ampersand", '&'),
    ("asterisk", '*'),
    ("asciitilde", '~'),
    ("grave", '`'),
    ("bar", '|'),
];

/// Named keys that edit or navigate
const NAMED_ACTIONS: &[(&str, KeyAction)] = &[
    ("Return", KeyAction::Newline),
    ("BackSpace", KeyAction::Backspace),
    ("Left", KeyAction::MoveLeft),
    ("Right", KeyAction::MoveRight),
    ("Up", KeyAction::MoveUp),
    ("Down", KeyAction::MoveDown),
];

/// Immutable key-name lookup table
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyMap;

impl KeyMap {
    /// The standard key map
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve a key name to an action
    ///
    /// Named keys win over the single-character rule, so `space` inserts a
    /// blank rather than being ignored as a multi-character name.
    #[must_use]
    pub fn resolve(&self, key: &str) -> KeyAction {
        if let Some(&(_, ch)) = NAMED_CHARS.iter().find(|(name, _)| *name == key) {
            return KeyAction::Insert(ch);
        }
        if let Some(&(_, action)) = NAMED_ACTIONS.iter().find(|(name, _)| *name == key) {
            return action;
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => KeyAction::Insert(ch),
            _ => KeyAction::Ignored,
        }
    }
}
