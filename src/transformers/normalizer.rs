//! Chunk normalization.
//!
//! The [Normalizer] applies, in order:
//! 1. straight double quotes and apostrophes ([QuoteNormalizer]),
//! 1. replacement of non-ASCII runs by a space ([AsciiFolder]),
//! 1. removal of `--`/`==` divider lines ([DividerRemover]),
//! 1. whitespace collapsing ([WhitespaceCollapser]),
//! 1. capitalization of all-caps words ([ShoutyWords]),
//! 1. known OCR misreads fixing ([OcrFixes]),
//! 1. rejection of chunks with too many accented letters (see [AccentDensity]),
//! 1. trimming.
//!
//! Later steps rely on earlier ones: OCR patterns expect single spaces and capitalized words.
use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

use crate::filtering::{AccentDensity, Filter};

use super::{OcrFixes, Transform};

lazy_static! {
    static ref DOUBLE_QUOTES: Regex = Regex::new(r#"[“”"]"#).unwrap();
    static ref SINGLE_QUOTES: Regex = Regex::new(r"[‘’']").unwrap();
    static ref NON_ASCII: Regex = Regex::new(r"[^\x00-\x7F]+").unwrap();
    static ref DIVIDERS: Regex = Regex::new(r"[-=]{2,}").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SHOUTY: Regex = Regex::new(r"\b[A-Z]{2,}\b").unwrap();
}

/// Curly quotes to straight quotes.
#[derive(Default)]
pub struct QuoteNormalizer;

impl Transform for QuoteNormalizer {
    fn transform_own(&self, text: String) -> String {
        let text = DOUBLE_QUOTES.replace_all(&text, "\"");
        SINGLE_QUOTES.replace_all(&text, "'").into_owned()
    }
}

/// Each run of non-ASCII characters becomes a single space.
#[derive(Default)]
pub struct AsciiFolder;

impl Transform for AsciiFolder {
    fn transform_own(&self, text: String) -> String {
        NON_ASCII.replace_all(&text, " ").into_owned()
    }
}

/// Removes runs of 2 or more `-` or `=`.
#[derive(Default)]
pub struct DividerRemover;

impl Transform for DividerRemover {
    fn transform_own(&self, text: String) -> String {
        DIVIDERS.replace_all(&text, "").into_owned()
    }
}

#[derive(Default)]
pub struct WhitespaceCollapser;

impl Transform for WhitespaceCollapser {
    fn transform_own(&self, text: String) -> String {
        WHITESPACE.replace_all(&text, " ").into_owned()
    }
}

/// `GENEVA` -> `Geneva`
#[derive(Default)]
pub struct ShoutyWords;

impl Transform for ShoutyWords {
    fn transform_own(&self, text: String) -> String {
        SHOUTY
            .replace_all(&text, |caps: &Captures| {
                let word = &caps[0];
                // pattern only matches ASCII uppercase letters
                format!("{}{}", &word[..1], word[1..].to_ascii_lowercase())
            })
            .into_owned()
    }
}

/// Chains every cleaning step.
pub struct Normalizer {
    steps: Vec<Box<dyn Transform>>,
    accents: AccentDensity,
}

impl Normalizer {
    pub fn new(accents: AccentDensity) -> Self {
        Self {
            steps: vec![
                Box::new(QuoteNormalizer),
                Box::new(AsciiFolder),
                Box::new(DividerRemover),
                Box::new(WhitespaceCollapser),
                Box::new(ShoutyWords),
                Box::new(OcrFixes),
            ],
            accents,
        }
    }

    /// Clean `chunk`.
    ///
    /// Returns an empty string if `chunk` has too many accented letters.
    /// Those are counted on the raw chunk, since [AsciiFolder] removes all of them.
    pub fn normalize(&self, chunk: &str) -> String {
        if !self.accents.detect(chunk) {
            debug!(
                "rejecting chunk with {} accented letters",
                AccentDensity::count(chunk)
            );
            return String::new();
        }

        let text = self
            .steps
            .iter()
            .fold(chunk.to_string(), |text, step| step.transform_own(text));
        text.trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(AccentDensity::default())
    }
}
