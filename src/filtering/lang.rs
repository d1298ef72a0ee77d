//! Language filtering.
//!
//! Identification failures are not fatal: [LangFilter::check] returns them
//! so that callers can log and skip the chunk, while [Filter::detect] treats them as a rejection.
use log::warn;

use crate::error::Error;
use crate::identifiers::{Identification, Identifier, WhatLang};

use super::Filter;

/// Default target language.
pub const DEFAULT_LANG: &str = "en";

/// Result of a successful identification.
#[derive(Debug, Clone, PartialEq)]
pub enum LangVerdict {
    /// top identification is the target language
    Target(Identification),
    /// top identification is another language
    Other(Identification),
}

impl LangVerdict {
    pub fn is_target(&self) -> bool {
        matches!(self, LangVerdict::Target(_))
    }

    pub fn identification(&self) -> &Identification {
        match self {
            LangVerdict::Target(id) | LangVerdict::Other(id) => id,
        }
    }
}

/// Keeps chunks whose top identification is [LangFilter::target].
pub struct LangFilter<I: Identifier = WhatLang> {
    identifier: I,
    target: String,
}

impl<I: Identifier> LangFilter<I> {
    pub fn new(identifier: I, target: &str) -> Self {
        Self {
            identifier,
            target: target.to_string(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn identifier(&self) -> &I {
        &self.identifier
    }

    /// Identify `chunk` and compare its top language with the target.
    pub fn check(&self, chunk: &str) -> Result<LangVerdict, Error> {
        let id = self.identifier.identify(chunk)?;
        if id.is(&self.target) {
            Ok(LangVerdict::Target(id))
        } else {
            Ok(LangVerdict::Other(id))
        }
    }
}

impl<I: Identifier + Default> Default for LangFilter<I> {
    fn default() -> Self {
        Self::new(I::default(), DEFAULT_LANG)
    }
}

impl<I: Identifier + Default> Filter<&str> for LangFilter<I> {
    fn detect(&self, chunk: &str) -> bool {
        match self.check(chunk) {
            Ok(verdict) => verdict.is_target(),
            Err(e) => {
                warn!("skipping chunk: {e}");
                false
            }
        }
    }
}
