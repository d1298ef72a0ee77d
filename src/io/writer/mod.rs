/*!
# Corpus writing

[CorpusWriter] serializes every [crate::pipelines::pdfcorpus::ChunkRecord] into a pretty-printed JSON array.

Existing files are never overwritten silently: the writer asks its [OverwritePolicy] first.
[Prompt] asks the user on the terminal, [AlwaysOverwrite] and [NeverOverwrite] answer without asking.
!*/
mod corpus_writer;
mod policy;

pub use corpus_writer::{CorpusWriter, WriteOutcome};
pub use policy::{ask, AlwaysOverwrite, NeverOverwrite, OverwritePolicy, Prompt};
