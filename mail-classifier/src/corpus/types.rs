//! Corpus types

use crate::classifier::Label;

/// One corpus row; `label` is `None` when the source label was missing or unmapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusRow {
    pub text: String,
    pub label: Option<Label>,
}

/// Ordered sequence of labelled rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledCorpus {
    rows: Vec<CorpusRow>,
}

impl LabeledCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(text, code)` pairs where codes other than 0 and 1 are unknown
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(text, code)| CorpusRow {
                text: text.into(),
                label: Label::from_code(code),
            })
            .collect()
    }

    pub fn push(&mut self, text: impl Into<String>, label: Option<Label>) {
        self.rows.push(CorpusRow {
            text: text.into(),
            label,
        });
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows carrying the given label
    pub fn count(&self, label: Label) -> usize {
        self.rows.iter().filter(|r| r.label == Some(label)).count()
    }

    /// Rows whose label is unknown
    pub fn unknown_count(&self) -> usize {
        self.rows.iter().filter(|r| r.label.is_none()).count()
    }

    /// Same texts with every known label flipped
    pub fn with_swapped_labels(&self) -> Self {
        self.rows
            .iter()
            .map(|r| CorpusRow {
                text: r.text.clone(),
                label: r.label.map(Label::flipped),
            })
            .collect()
    }
}

impl FromIterator<CorpusRow> for LabeledCorpus {
    fn from_iter<T: IntoIterator<Item = CorpusRow>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_maps_unknown() {
        let corpus = LabeledCorpus::from_pairs([("a", 1), ("b", 0), ("c", -1), ("d", 7)]);
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.count(Label::Positive), 1);
        assert_eq!(corpus.count(Label::Negative), 1);
        assert_eq!(corpus.unknown_count(), 2);
    }

    #[test]
    fn test_swapped_labels() {
        let corpus = LabeledCorpus::from_pairs([("a", 1), ("b", 0), ("c", -1)]);
        let swapped = corpus.with_swapped_labels();
        assert_eq!(swapped.rows()[0].label, Some(Label::Negative));
        assert_eq!(swapped.rows()[1].label, Some(Label::Positive));
        assert_eq!(swapped.rows()[2].label, None);
    }
}
