/*! Filtering utilities

Filters operate on chunk level, and implement [filter::Filter]:
a filter is immutable and pure (2 successive equal inputs -> 2 equal outputs),
and returns `true` when the chunk should be kept.

- [chunk::Length] discards chunks that are too short to be worth identifying,
- [lang::LangFilter] keeps chunks identified as a target language,
- [accents::AccentDensity] discards chunks with too many accented characters.
! */
pub mod accents;
pub mod chunk;
mod filter;
pub mod lang;

pub use accents::AccentDensity;
pub use chunk::Length;
pub use filter::Filter;
pub use lang::{LangFilter, LangVerdict};
