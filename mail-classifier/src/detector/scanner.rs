//! Message scanner
//!
//! Holds one trained phishing classifier and one trained spam classifier.
//! The two share no state, so they are trained concurrently.

use std::path::PathBuf;
use tracing::info;

use super::types::{MessageVerdict, ScanReport};
use crate::classifier::NaiveBayesTextClassifier;
use crate::config::Config;
use crate::corpus::{load_corpus, CorpusSchema};
use crate::error::{ClassifierError, Result};
use crate::message::MessageSource;

/// Classifies messages with both detectors
#[derive(Debug, Clone)]
pub struct MessageScanner {
    phishing: NaiveBayesTextClassifier,
    spam: NaiveBayesTextClassifier,
    max_messages: usize,
}

impl MessageScanner {
    /// Both classifiers must already be trained
    pub fn new(
        phishing: NaiveBayesTextClassifier,
        spam: NaiveBayesTextClassifier,
        max_messages: usize,
    ) -> Result<Self> {
        if !phishing.is_trained() || !spam.is_trained() {
            return Err(ClassifierError::ModelNotTrained);
        }

        Ok(Self {
            phishing,
            spam,
            max_messages,
        })
    }

    pub fn phishing(&self) -> &NaiveBayesTextClassifier {
        &self.phishing
    }

    pub fn spam(&self) -> &NaiveBayesTextClassifier {
        &self.spam
    }

    /// Classify one piece of text
    pub fn classify(&self, text: &str) -> Result<MessageVerdict> {
        self.verdict("-", text)
    }

    fn verdict(&self, id: &str, text: &str) -> Result<MessageVerdict> {
        let phishing = self.phishing.predict(text)?;
        let spam = self.spam.predict(text)?;

        Ok(MessageVerdict {
            id: id.to_string(),
            subject: text.to_string(),
            phishing,
            phishing_label: self.phishing.schema().label_name(phishing).to_string(),
            spam,
            spam_label: self.spam.schema().label_name(spam).to_string(),
        })
    }

    /// Classify the last `max_messages` messages
    pub fn scan(&self, messages: &[MessageSource]) -> Result<ScanReport> {
        let skipped = messages.len().saturating_sub(self.max_messages);

        let verdicts = messages[skipped..]
            .iter()
            .map(|m| self.verdict(&m.id, m.text()))
            .collect::<Result<Vec<_>>>()?;

        let report = ScanReport {
            scanned_at: chrono::Utc::now(),
            skipped,
            verdicts,
        };

        info!(
            "Scanned {} messages: {} phishing, {} spam",
            report.verdicts.len(),
            report.phishing_count(),
            report.spam_count()
        );

        Ok(report)
    }
}

fn train_blocking(schema: CorpusSchema, path: PathBuf) -> Result<NaiveBayesTextClassifier> {
    let corpus = load_corpus(&path, &schema)?;
    NaiveBayesTextClassifier::new(schema).trained(&corpus)
}

/// Load both corpora and train both detectors in parallel
pub async fn train_detectors(config: &Config) -> Result<MessageScanner> {
    let phishing = tokio::task::spawn_blocking({
        let schema = config.phishing_schema();
        let path = config.phishing.corpus_path.clone();
        move || train_blocking(schema, path)
    });

    let spam = tokio::task::spawn_blocking({
        let schema = config.spam_schema();
        let path = config.spam.corpus_path.clone();
        move || train_blocking(schema, path)
    });

    let (phishing, spam) = tokio::try_join!(phishing, spam)?;

    MessageScanner::new(phishing?, spam?, config.scan.max_messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Label;
    use crate::corpus::LabeledCorpus;

    fn scanner(max_messages: usize) -> MessageScanner {
        let phishing = NaiveBayesTextClassifier::phishing()
            .trained(&LabeledCorpus::from_pairs([
                ("verify your bank account password", 1),
                ("your account has been suspended", 1),
                ("team offsite schedule attached", 0),
            ]))
            .unwrap();
        let spam = NaiveBayesTextClassifier::spam()
            .trained(&LabeledCorpus::from_pairs([
                ("win cash prizes now", 1),
                ("see you at lunch", 0),
                ("call me when you land", 0),
            ]))
            .unwrap();

        MessageScanner::new(phishing, spam, max_messages).unwrap()
    }

    fn message(id: &str, subject: &str) -> MessageSource {
        MessageSource {
            id: id.to_string(),
            subject: subject.to_string(),
            body: None,
        }
    }

    #[test]
    fn test_requires_trained_classifiers() {
        let err = MessageScanner::new(
            NaiveBayesTextClassifier::phishing(),
            NaiveBayesTextClassifier::spam(),
            25,
        )
        .unwrap_err();
        assert!(matches!(err, ClassifierError::ModelNotTrained));
    }

    #[test]
    fn test_classify_labels() {
        let verdict = scanner(25).classify("Verify your bank password").unwrap();
        assert_eq!(verdict.phishing, Label::Positive);
        assert_eq!(verdict.phishing_label, "Phishing");

        let verdict = scanner(25).classify("see you at lunch").unwrap();
        assert_eq!(verdict.phishing_label, "Safe");
        assert_eq!(verdict.spam_label, "Ham");

        let verdict = scanner(25).classify("win cash now").unwrap();
        assert_eq!(verdict.spam_label, "Spam");
    }

    #[test]
    fn test_scan_keeps_most_recent() {
        let messages: Vec<MessageSource> = (0..5)
            .map(|i| message(&format!("{}.eml", i), "team offsite schedule"))
            .collect();

        let report = scanner(3).scan(&messages).unwrap();
        assert_eq!(report.skipped, 2);
        let ids: Vec<&str> = report.verdicts.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2.eml", "3.eml", "4.eml"]);
        assert_eq!(report.phishing_count(), 0);
    }
}
