//! Diabetes risk trigger vocabulary.
//!
//! The term list is fixed at compile time. Lowercased forms used for matching are built once,
//! on first use, and shared read-only by every request.

use std::sync::LazyLock;

/// Trigger terms in canonical order and spelling.
pub const TRIGGER_TERMS: [&str; 11] = [
    "Hemoglobin A1C",
    "Microalbumin",
    "Height",
    "Weight",
    "Smoker",
    "Abnormal",
    "Cholesterol",
    "Dizziness",
    "Relapse",
    "Reaction",
    "Antibodies",
];

static VOCABULARY: LazyLock<TriggerVocabulary> = LazyLock::new(|| TriggerVocabulary {
    terms: TRIGGER_TERMS
        .iter()
        .map(|term| TriggerTerm {
            canonical: term,
            folded: term.to_lowercase(),
        })
        .collect(),
});

/// One vocabulary entry with its case-folded matching form.
#[derive(Debug)]
pub struct TriggerTerm {
    canonical: &'static str,
    folded: String,
}

impl TriggerTerm {
    pub fn as_str(&self) -> &'static str {
        self.canonical
    }

    /// Lowercased form compared against lowercased note text.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// Immutable ordered set of trigger terms.
#[derive(Debug)]
pub struct TriggerVocabulary {
    terms: Vec<TriggerTerm>,
}

impl TriggerVocabulary {
    /// The process-wide vocabulary.
    pub fn global() -> &'static TriggerVocabulary {
        &VOCABULARY
    }

    pub fn terms(&self) -> &[TriggerTerm] {
        &self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_vocabulary_keeps_canonical_order() {
        let vocabulary = TriggerVocabulary::global();
        let terms: Vec<&str> = vocabulary.terms().iter().map(TriggerTerm::as_str).collect();
        assert_eq!(terms, TRIGGER_TERMS);
        assert_eq!(vocabulary.terms().len(), 11);
    }

    #[test]
    fn test_folded_forms_are_lowercase() {
        let vocabulary = TriggerVocabulary::global();
        assert_eq!(vocabulary.terms()[0].folded(), "hemoglobin a1c");
        assert!(vocabulary
            .terms()
            .iter()
            .all(|t| t.folded() == t.as_str().to_lowercase()));
    }
}
