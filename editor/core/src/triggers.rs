//! Trigger words
//!
//! Scans a line for keywords that summon an animated glyph. Matching is
//! case-insensitive substring matching, so "hotdog" triggers the dog and
//! "scatter" triggers the cat.

/// One row of the trigger table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    /// Lowercase words, any of which fires the trigger
    pub words: &'static [&'static str],
    /// Glyph to animate
    pub glyph: &'static str,
}

/// Built-in triggers, in scan order
pub const DEFAULT_TRIGGERS: &[Trigger] = &[
    Trigger {
        words: &["dog", "puppy", "pup"],
        glyph: "🐕",
    },
    Trigger {
        words: &["cat", "kitten", "kitty"],
        glyph: "🐈",
    },
    Trigger {
        words: &["fire", "flame"],
        glyph: "🔥",
    },
    Trigger {
        words: &["rocket", "launch"],
        glyph: "🚀",
    },
    Trigger {
        words: &["love", "heart"],
        glyph: "❤️",
    },
    Trigger {
        words: &["star"],
        glyph: "⭐",
    },
    Trigger {
        words: &["coffee"],
        glyph: "☕",
    },
    Trigger {
        words: &["pizza"],
        glyph: "🍕",
    },
    Trigger {
        words: &["rain", "storm"],
        glyph: "🌧️",
    },
    Trigger {
        words: &["music", "song"],
        glyph: "🎵",
    },
];

/// Immutable ordered trigger table
#[derive(Clone, Copy, Debug)]
pub struct TriggerTable {
    entries: &'static [Trigger],
}

impl Default for TriggerTable {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGERS)
    }
}

impl TriggerTable {
    /// Table over the given entries; words must be lowercase
    #[must_use]
    pub const fn new(entries: &'static [Trigger]) -> Self {
        Self { entries }
    }

    /// Glyphs whose words occur anywhere in `line`, in table order
    ///
    /// Each glyph appears at most once even if several of its words match.
    pub fn matches(&self, line: &str) -> impl Iterator<Item = &'static str> + '_ {
        let lowered = line.to_lowercase();
        self.entries
            .iter()
            .filter(move |t| t.words.iter().any(|w| lowered.contains(w)))
            .map(|t| t.glyph)
    }
}
