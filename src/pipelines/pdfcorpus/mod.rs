/*! PDF to JSON corpus pipeline.

See [pipeline::PdfCorpus] for the processing steps.
!*/
mod pipeline;
mod types;

pub use pipeline::PdfCorpus;
pub use types::{ChunkOutcome, ChunkRecord, Skipped, Summary};
