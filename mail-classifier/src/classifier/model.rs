//! Trained Naive Bayes model
//!
//! A `TrainedModel` is built once from a corpus and is read-only afterwards.
//! Prediction is multinomial Naive Bayes evaluated in log-space.

use tracing::info;

use super::estimator::{estimate, ClassWordProbabilities};
use super::normalizer::{tokens, Normalizer};
use super::types::{ClassPriors, Label, ModelStats};
use super::vocabulary::Vocabulary;
use crate::corpus::LabeledCorpus;
use crate::error::Result;

/// Immutable trained parameters
#[derive(Debug, Clone)]
pub struct TrainedModel {
    normalizer: Normalizer,
    vocabulary: Vocabulary,
    positive: ClassWordProbabilities,
    negative: ClassWordProbabilities,
    priors: ClassPriors,
    stats: ModelStats,
}

impl TrainedModel {
    /// Train in one pass over the corpus
    pub fn train(corpus: &LabeledCorpus, normalizer: Normalizer) -> Result<Self> {
        let normalized: Vec<String> = corpus
            .rows()
            .iter()
            .map(|row| normalizer.normalize(row.text.as_str()))
            .collect();

        let vocabulary = Vocabulary::build(&normalized);
        let rows = normalized
            .iter()
            .zip(corpus.rows())
            .map(|(text, row)| (text.as_str(), row.label));
        let estimated = estimate(rows, &vocabulary)?;

        let stats = ModelStats {
            positive_rows: estimated.positive_rows,
            negative_rows: estimated.negative_rows,
            unknown_rows: estimated.unknown_rows,
            vocab_size: vocabulary.len(),
            priors: estimated.priors,
            positive_words: estimated.positive_words,
            negative_words: estimated.negative_words,
        };

        info!(
            "Trained model: {} class-1 rows, {} class-0 rows, vocabulary of {} tokens",
            stats.positive_rows, stats.negative_rows, stats.vocab_size
        );

        Ok(Self {
            normalizer,
            vocabulary,
            positive: estimated.positive,
            negative: estimated.negative,
            priors: estimated.priors,
            stats,
        })
    }

    /// Log-space scores `(class 1, class 0)` of a raw message
    pub(crate) fn log_scores(&self, raw_text: &str) -> (f64, f64) {
        let normalized = self.normalizer.normalize(raw_text);

        let mut positive = self.priors.positive.ln();
        let mut negative = self.priors.negative.ln();

        for token in tokens(&normalized) {
            positive += self.positive.probability(token).ln();
            negative += self.negative.probability(token).ln();
        }

        (positive, negative)
    }

    /// Class 1 only when its score is strictly greater; ties go to class 0
    pub fn predict(&self, raw_text: &str) -> Label {
        let (positive, negative) = self.log_scores(raw_text);
        if positive > negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn priors(&self) -> ClassPriors {
        self.priors
    }

    /// Word likelihoods of a class
    pub fn probabilities(&self, label: Label) -> &ClassWordProbabilities {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Tokens observed in rows of a class
    pub fn total_words(&self, label: Label) -> u64 {
        match label {
            Label::Positive => self.stats.positive_words,
            Label::Negative => self.stats.negative_words,
        }
    }

    pub fn stats(&self) -> &ModelStats {
        &self.stats
    }
}
