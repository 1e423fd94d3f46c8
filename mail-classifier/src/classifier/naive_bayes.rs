//! Generic Naive Bayes text classifier
//!
//! One classifier per corpus schema. It starts untrained; training swaps in
//! a freshly built `TrainedModel` and never mutates an existing one.

use std::sync::Arc;
use tracing::info;

use super::model::TrainedModel;
use super::types::Label;
use crate::corpus::{CorpusSchema, LabeledCorpus};
use crate::error::{ClassifierError, Result};

#[derive(Debug, Clone)]
enum ModelState {
    Untrained,
    Trained(Arc<TrainedModel>),
}

/// Naive Bayes bag-of-words classifier parameterized by a corpus schema
#[derive(Debug, Clone)]
pub struct NaiveBayesTextClassifier {
    schema: CorpusSchema,
    state: ModelState,
}

impl NaiveBayesTextClassifier {
    /// Create an untrained classifier
    pub fn new(schema: CorpusSchema) -> Self {
        Self {
            schema,
            state: ModelState::Untrained,
        }
    }

    /// Untrained phishing-vs-safe classifier
    pub fn phishing() -> Self {
        Self::new(CorpusSchema::phishing())
    }

    /// Untrained spam-vs-ham classifier
    pub fn spam() -> Self {
        Self::new(CorpusSchema::spam())
    }

    pub fn schema(&self) -> &CorpusSchema {
        &self.schema
    }

    pub fn is_trained(&self) -> bool {
        matches!(self.state, ModelState::Trained(_))
    }

    /// Train on a corpus, replacing any previous model
    pub fn train(&mut self, corpus: &LabeledCorpus) -> Result<Arc<TrainedModel>> {
        info!("Training {} classifier on {} rows", self.schema.name, corpus.len());

        let model = Arc::new(TrainedModel::train(corpus, self.schema.normalizer())?);
        self.state = ModelState::Trained(Arc::clone(&model));
        Ok(model)
    }

    /// Train and return the classifier in one step
    pub fn trained(mut self, corpus: &LabeledCorpus) -> Result<Self> {
        self.train(corpus)?;
        Ok(self)
    }

    /// The trained model
    pub fn model(&self) -> Result<&Arc<TrainedModel>> {
        match &self.state {
            ModelState::Trained(model) => Ok(model),
            ModelState::Untrained => Err(ClassifierError::ModelNotTrained),
        }
    }

    /// Classify a raw message
    pub fn predict(&self, raw_text: &str) -> Result<Label> {
        Ok(self.model()?.predict(raw_text))
    }

    /// Classify a raw message and return the schema's verdict name
    pub fn verdict(&self, raw_text: &str) -> Result<&str> {
        let label = self.predict(raw_text)?;
        Ok(self.schema.label_name(label))
    }
}
