//! Trigger scanning over clinical note text.
//!
//! Each note is scanned on its own. A term contributes at most one match per note, however often
//! it is repeated there, and a term found in several notes contributes once for each of them.
//! Matching is case-insensitive substring containment with no word-boundary check, so
//! `"Smokers"` and `"nonsmoker"` both match `Smoker`.

use crate::vocabulary::TriggerVocabulary;

/// A vocabulary term found in a specific note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerMatch {
    /// Position of the note in the scanned sequence.
    pub note_index: usize,
    pub term: &'static str,
}

/// Every (note, term) match found in one scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub matches: Vec<TriggerMatch>,
}

impl ScanReport {
    /// Number of (note, term) pairs with at least one match.
    pub fn trigger_count(&self) -> usize {
        self.matches.len()
    }

    /// Distinct terms found anywhere, in vocabulary order.
    pub fn distinct_terms(&self) -> Vec<&'static str> {
        let vocabulary = TriggerVocabulary::global();
        vocabulary
            .terms()
            .iter()
            .map(|t| t.as_str())
            .filter(|term| self.matches.iter().any(|m| m.term == *term))
            .collect()
    }
}

/// Scans notes against a trigger vocabulary.
#[derive(Clone, Copy, Debug)]
pub struct NoteTextScanner {
    vocabulary: &'static TriggerVocabulary,
}

impl Default for NoteTextScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteTextScanner {
    /// Scanner over the process-wide vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: TriggerVocabulary::global(),
        }
    }

    /// Report every (note, term) match.
    pub fn scan<S: AsRef<str>>(&self, notes: &[S]) -> ScanReport {
        let mut matches = Vec::new();

        for (note_index, note) in notes.iter().enumerate() {
            let folded = note.as_ref().to_lowercase();
            for term in self.vocabulary.terms() {
                if folded.contains(term.folded()) {
                    matches.push(TriggerMatch {
                        note_index,
                        term: term.as_str(),
                    });
                }
            }
        }

        tracing::debug!(
            notes = notes.len(),
            triggers = matches.len(),
            "scanned notes for trigger terms"
        );

        ScanReport { matches }
    }

    /// Count (note, term) pairs with at least one match.
    pub fn count_triggers<S: AsRef<str>>(&self, notes: &[S]) -> usize {
        self.scan(notes).trigger_count()
    }
}
