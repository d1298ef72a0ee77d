/*!
# IO utilities

Corpus saving.

The corpus is held in memory for the whole run and written once, as a single JSON array,
by [writer::CorpusWriter].
!*/
pub mod writer;

pub use writer::{CorpusWriter, OverwritePolicy, WriteOutcome};
