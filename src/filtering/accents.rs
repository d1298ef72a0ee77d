//! Accented characters density filtering.
//!
//! OCR'd documents often mix English and French pages.
//! Chunks that slip through language identification
//! are caught here by counting French accented letters.
use super::Filter;

/// Accented letters that are counted.
pub const ACCENTS: [char; 13] = [
    'é', 'è', 'à', 'ù', 'ê', 'â', 'î', 'ô', 'û', 'ë', 'ï', 'ü', 'ç',
];

/// Returns `false` if the chunk holds more than 5 accented letters from [ACCENTS].
pub struct AccentDensity {
    max_accents: usize,
}

impl AccentDensity {
    /// number of accented letters in `chunk`.
    pub fn count(chunk: &str) -> usize {
        chunk.chars().filter(|c| ACCENTS.contains(c)).count()
    }
}

impl Default for AccentDensity {
    fn default() -> Self {
        Self { max_accents: 5 }
    }
}

impl Filter<&str> for AccentDensity {
    fn detect(&self, chunk: &str) -> bool {
        Self::count(chunk) <= self.max_accents
    }
}
