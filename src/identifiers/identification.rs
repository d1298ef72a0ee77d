use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

/// A language label along with the identifier confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    label: LanguageTag<String>,
    prob: f32,
}

impl Identification {
    pub fn new(label: LanguageTag<String>, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &LanguageTag<String> {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }

    /// `true` if the primary language subtag is `lang` (`en-GB` is `en`).
    pub fn is(&self, lang: &str) -> bool {
        self.label.primary_language().eq_ignore_ascii_case(lang)
    }
}
