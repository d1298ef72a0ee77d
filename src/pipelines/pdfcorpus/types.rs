use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::identifiers::Identification;
use crate::io::WriteOutcome;

/// A cleaned chunk along with the name of the file it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    title: String,
    chunk: String,
}

impl ChunkRecord {
    pub fn new(title: String, chunk: String) -> Self {
        Self { title, chunk }
    }

    /// Source file name.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chunk(&self) -> &str {
        &self.chunk
    }
}

/// What happened to a single chunk.
#[derive(Debug)]
pub enum ChunkOutcome {
    Kept(ChunkRecord),
    /// too short to be identified
    TooShort,
    /// language identification failed
    Unidentified(Error),
    /// identified as another language
    OtherLanguage(Identification),
    /// emptied by normalization
    Rejected,
}

/// Number of skipped chunks, by reason.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    pub too_short: usize,
    pub unidentified: usize,
    pub other_language: usize,
    pub rejected: usize,
}

impl Skipped {
    pub fn total(&self) -> usize {
        self.too_short + self.unidentified + self.other_language + self.rejected
    }
}

/// Run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub files_found: usize,
    pub files_processed: usize,
    pub chunks_created: usize,
    pub skipped: Skipped,
    pub outcome: WriteOutcome,
}
