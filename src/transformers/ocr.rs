//! Known OCR misreads.
//!
//! Each entry is a whole-word pattern, matched case-sensitively,
//! along with its replacement.
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

lazy_static! {
    static ref OCR_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\bv/e\b").unwrap(), "we"),
        (Regex::new(r"\bwhic\.h\b").unwrap(), "which"),
        (Regex::new(r"\bcarp\b").unwrap(), "camp"),
        (Regex::new(r"\bIid a\b").unwrap(), "Lida"),
        (Regex::new(r"\bbods?\b").unwrap(), "beds"),
        (Regex::new(r"\bexpou- dituro\b").unwrap(), "expenditure"),
        (Regex::new(r"\bLiniater\b").unwrap(), "Minister"),
        // spacing varies
        (Regex::new(r"GE1\s*Ev\s*A").unwrap(), "Geneva"),
    ];
}

/// Applies every known correction, in order.
#[derive(Default)]
pub struct OcrFixes;

impl Transform for OcrFixes {
    fn transform_own(&self, text: String) -> String {
        OCR_PATTERNS
            .iter()
            .fold(text, |text, (pattern, replacement)| {
                pattern.replace_all(&text, *replacement).into_owned()
            })
    }
}
