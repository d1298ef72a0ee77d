/*! Text transformers.

Transforms flattened document text into chunks, and chunks into cleaned chunks.

- [Chunker] splits text into fixed-size word chunks,
- [Normalizer] chains every cleaning step ([QuoteNormalizer], [AsciiFolder], [DividerRemover],
  [WhitespaceCollapser], [ShoutyWords], [OcrFixes]) and discards chunks with too many accented letters.
!*/
mod chunker;
mod normalizer;
mod ocr;
mod transform;

pub use chunker::{Chunker, WordChunks, DEFAULT_CHUNK_SIZE};
pub use normalizer::{
    AsciiFolder, DividerRemover, Normalizer, QuoteNormalizer, ShoutyWords, WhitespaceCollapser,
};
pub use ocr::OcrFixes;
pub use transform::Transform;
