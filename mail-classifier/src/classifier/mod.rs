//! Naive Bayes text classification
//!
//! Normalization, vocabulary construction, Laplace-smoothed probability
//! estimation and log-space prediction over a bag of words.

pub mod estimator;
pub mod model;
pub mod naive_bayes;
pub mod normalizer;
pub mod types;
pub mod vocabulary;

pub use estimator::{estimate, ClassStatistics, ClassWordProbabilities};
pub use model::TrainedModel;
pub use naive_bayes::NaiveBayesTextClassifier;
pub use normalizer::{Normalizer, DEFAULT_MIN_LENGTH};
pub use types::*;
pub use vocabulary::Vocabulary;
