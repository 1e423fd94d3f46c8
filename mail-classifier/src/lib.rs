//! mail-classifier: Naive Bayes phishing and spam detection
//!
//! Classifies short email texts (subjects or bodies) as phishing-vs-safe and
//! spam-vs-ham with a bag-of-words Naive Bayes model trained from labelled
//! CSV corpora.
//!
//! # Features
//!
//! - **Normalization**: ASCII-letter filtering, lower-casing, whitespace
//!   collapsing and a configurable short-text threshold
//! - **Training**: Laplace-smoothed word likelihoods and class priors in one pass
//! - **Prediction**: log-space scoring with a deterministic tie-break to class 0
//! - **Detectors**: phishing and spam instances of one generic classifier
//!
//! # Example
//!
//! ```
//! use mail_classifier::classifier::{Label, NaiveBayesTextClassifier};
//! use mail_classifier::corpus::LabeledCorpus;
//!
//! # fn main() -> mail_classifier::Result<()> {
//! let corpus = LabeledCorpus::from_pairs([
//!     ("win free money now", 1),
//!     ("meeting notes attached", 0),
//! ]);
//!
//! let classifier = NaiveBayesTextClassifier::spam().trained(&corpus)?;
//! assert_eq!(classifier.predict("win free money now")?, Label::Positive);
//! assert_eq!(classifier.verdict("meeting notes attached")?, "Ham");
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: Normalizer, vocabulary, estimator and model
//! - [`corpus`]: CSV corpus loading and schemas
//! - [`detector`]: Phishing + spam scanning of messages
//! - [`message`]: Subject/body extraction from raw messages
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod detector;
pub mod error;
pub mod message;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClassifierError, Result};
