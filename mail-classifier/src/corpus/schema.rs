//! Corpus schemas
//!
//! A schema names the text and label columns of a CSV corpus, the raw label
//! values of each class, and the display names used in verdicts.

use serde::{Deserialize, Serialize};

use crate::classifier::{Label, Normalizer, DEFAULT_MIN_LENGTH};

/// Column layout and label semantics of a corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSchema {
    /// Detector name ("phishing", "spam")
    pub name: String,
    /// Column holding the message text
    pub text_column: String,
    /// Column holding the raw label
    pub label_column: String,
    /// Raw label values mapped to class 1
    pub positive_labels: Vec<String>,
    /// Raw label values mapped to class 0
    pub negative_labels: Vec<String>,
    /// Verdict shown for class 1
    pub positive_name: String,
    /// Verdict shown for class 0
    pub negative_name: String,
    /// Short-text threshold of the normalizer
    pub min_length: usize,
}

impl CorpusSchema {
    /// Phishing corpus (`Email Text`, `Email Type`)
    pub fn phishing() -> Self {
        Self {
            name: "phishing".to_string(),
            text_column: "Email Text".to_string(),
            label_column: "Email Type".to_string(),
            positive_labels: vec!["Phishing Email".to_string()],
            negative_labels: vec!["Safe Email".to_string()],
            positive_name: "Phishing".to_string(),
            negative_name: "Safe".to_string(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Spam corpus (`Message`, `Category`); no short-text discard
    pub fn spam() -> Self {
        Self {
            name: "spam".to_string(),
            text_column: "Message".to_string(),
            label_column: "Category".to_string(),
            positive_labels: vec!["spam".to_string(), "1".to_string()],
            negative_labels: vec!["ham".to_string(), "0".to_string()],
            positive_name: "Spam".to_string(),
            negative_name: "Ham".to_string(),
            min_length: 0,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Map a raw label value, case-insensitively; `None` if unrecognized
    pub fn map_label(&self, raw: &str) -> Option<Label> {
        let raw = raw.trim();
        if self.positive_labels.iter().any(|l| l.eq_ignore_ascii_case(raw)) {
            Some(Label::Positive)
        } else if self.negative_labels.iter().any(|l| l.eq_ignore_ascii_case(raw)) {
            Some(Label::Negative)
        } else {
            None
        }
    }

    /// Display name of a class
    pub fn label_name(&self, label: Label) -> &str {
        match label {
            Label::Positive => &self.positive_name,
            Label::Negative => &self.negative_name,
        }
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.min_length)
    }
}
