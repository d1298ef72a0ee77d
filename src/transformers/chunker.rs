//! Splits text into chunks of a fixed number of words.
//!
//! Chunk boundaries only depend on word count: sentences and paragraphs are not taken into account.
//! Words are whitespace-separated, and joined back with a single space.
//!
//! Example with a size of 3:
//! ```text
//! "the  quick brown\nfox jumps"
//! ```
//!
//! will be split into
//!
//! ```text
//! "the quick brown"
//! "fox jumps"
//! ```
use std::num::NonZeroUsize;
use std::str::SplitWhitespace;

use itertools::Itertools;

/// Default number of words per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 200;

#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    size: NonZeroUsize,
}

impl Chunker {
    /// Use a custom chunk size.
    pub fn with_size(size: NonZeroUsize) -> Self {
        Self { size }
    }

    /// Get the chunker's size, in words.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Lazily split `text` into chunks.
    pub fn chunks<'a>(&self, text: &'a str) -> WordChunks<'a> {
        WordChunks {
            words: text.split_whitespace(),
            size: self.size.get(),
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Iterator over the chunks of a text. See [Chunker::chunks].
pub struct WordChunks<'a> {
    words: SplitWhitespace<'a>,
    size: usize,
}

impl<'a> Iterator for WordChunks<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.words.by_ref().take(self.size).join(" ");
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}
