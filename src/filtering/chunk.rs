//! Short chunk filtering.
//!
//! The tail chunk of a document is often a few words long (a page number, a signature).
//! Those carry too few trigrams for identification and are dropped before reaching the identifier.
use super::Filter;

/// Chunks of this many codepoints or fewer are dropped.
pub const MIN_CHUNK_CHARS: usize = 100;

/// Keeps chunks strictly longer than a number of Unicode codepoints
/// ([MIN_CHUNK_CHARS] by default). Bytes are not what is counted.
pub struct Length {
    min_chars: usize,
}

impl Length {
    pub fn with_min_chars(min_chars: usize) -> Self {
        Self { min_chars }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Filter<&str> for Length {
    fn detect(&self, chunk: &str) -> bool {
        chunk.chars().nth(self.min_chars).is_some()
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::with_min_chars(MIN_CHUNK_CHARS)
    }
}
