//! Probability estimation
//!
//! Computes Laplace-smoothed per-class word likelihoods and class priors
//! from normalized, labelled rows.

use std::collections::HashMap;

use super::normalizer::tokens;
use super::types::{ClassPriors, Label};
use super::vocabulary::Vocabulary;
use crate::error::{ClassifierError, Result};

/// Smoothed word likelihoods for one class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassWordProbabilities {
    probabilities: HashMap<String, f64>,
    fallback: f64,
}

impl ClassWordProbabilities {
    /// Probability of a vocabulary token, `None` outside the vocabulary
    pub fn get(&self, token: &str) -> Option<f64> {
        self.probabilities.get(token).copied()
    }

    /// Probability of any token, using the fallback outside the vocabulary
    pub fn probability(&self, token: &str) -> f64 {
        self.get(token).unwrap_or(self.fallback)
    }

    /// `1 / (total_class_words + vocab_size)`
    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(t, p)| (t.as_str(), *p))
    }
}

/// Raw token frequencies of one class
#[derive(Debug, Clone, Default)]
struct ClassCounts {
    word_counts: HashMap<String, u64>,
    total_words: u64,
    rows: usize,
}

impl ClassCounts {
    fn observe(&mut self, normalized: &str) {
        self.rows += 1;
        for token in tokens(normalized) {
            *self.word_counts.entry(token.to_string()).or_insert(0) += 1;
            self.total_words += 1;
        }
    }

    fn smooth(&self, vocabulary: &Vocabulary) -> ClassWordProbabilities {
        let denominator = (self.total_words + vocabulary.len() as u64) as f64;

        let probabilities = vocabulary
            .iter()
            .map(|token| {
                let count = self.word_counts.get(token).copied().unwrap_or(0);
                (token.to_string(), (count + 1) as f64 / denominator)
            })
            .collect();

        ClassWordProbabilities {
            probabilities,
            fallback: 1.0 / denominator,
        }
    }
}

/// Everything the estimator derives from a corpus
#[derive(Debug, Clone)]
pub struct ClassStatistics {
    pub positive: ClassWordProbabilities,
    pub negative: ClassWordProbabilities,
    pub priors: ClassPriors,
    pub positive_words: u64,
    pub negative_words: u64,
    pub positive_rows: usize,
    pub negative_rows: usize,
    pub unknown_rows: usize,
}

/// Estimate class statistics over `(normalized_text, label)` rows.
///
/// Rows with an unknown label are excluded from the class partitions but
/// still count towards the prior denominator.
pub fn estimate<'a, I>(rows: I, vocabulary: &Vocabulary) -> Result<ClassStatistics>
where
    I: IntoIterator<Item = (&'a str, Option<Label>)>,
{
    if vocabulary.is_empty() {
        return Err(ClassifierError::InsufficientData(
            "vocabulary is empty".to_string(),
        ));
    }

    let mut positive = ClassCounts::default();
    let mut negative = ClassCounts::default();
    let mut unknown_rows = 0usize;

    for (text, label) in rows {
        match label {
            Some(Label::Positive) => positive.observe(text),
            Some(Label::Negative) => negative.observe(text),
            None => unknown_rows += 1,
        }
    }

    if positive.rows == 0 || negative.rows == 0 {
        return Err(ClassifierError::InsufficientData(format!(
            "both classes need at least one row (class 1: {}, class 0: {})",
            positive.rows, negative.rows
        )));
    }

    let total_rows = (positive.rows + negative.rows + unknown_rows) as f64;
    let priors = ClassPriors {
        positive: positive.rows as f64 / total_rows,
        negative: negative.rows as f64 / total_rows,
    };

    Ok(ClassStatistics {
        positive: positive.smooth(vocabulary),
        negative: negative.smooth(vocabulary),
        priors,
        positive_words: positive.total_words,
        negative_words: negative.total_words,
        positive_rows: positive.rows,
        negative_rows: negative.rows,
        unknown_rows,
    })
}
