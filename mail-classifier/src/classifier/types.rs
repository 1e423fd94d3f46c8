//! Classifier types and data structures

use serde::{Deserialize, Serialize};

/// Binary decision emitted by a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Class 1 (phishing, spam)
    Positive,
    /// Class 0 (safe, ham)
    Negative,
}

impl Label {
    /// Map a numeric class code; anything other than 0 or 1 is unknown
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Label::Positive),
            0 => Some(Label::Negative),
            _ => None,
        }
    }

    /// Numeric class code (1 or 0)
    pub fn code(self) -> u8 {
        match self {
            Label::Positive => 1,
            Label::Negative => 0,
        }
    }

    /// The opposite class
    pub fn flipped(self) -> Self {
        match self {
            Label::Positive => Label::Negative,
            Label::Negative => Label::Positive,
        }
    }
}

/// Class priors estimated from row frequencies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassPriors {
    /// P(class 1)
    pub positive: f64,
    /// P(class 0)
    pub negative: f64,
}

impl ClassPriors {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
        }
    }
}

/// Training summary of a model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStats {
    /// Rows labelled class 1
    pub positive_rows: usize,
    /// Rows labelled class 0
    pub negative_rows: usize,
    /// Rows kept with an unknown label
    pub unknown_rows: usize,
    /// Number of distinct tokens
    pub vocab_size: usize,
    /// Class priors
    pub priors: ClassPriors,
    /// Tokens observed in class 1 rows
    pub positive_words: u64,
    /// Tokens observed in class 0 rows
    pub negative_words: u64,
}
