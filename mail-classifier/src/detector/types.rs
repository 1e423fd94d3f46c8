//! Detection result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Label;

/// Verdicts of both detectors for one message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageVerdict {
    /// Message identifier
    pub id: String,
    /// Text that was classified
    pub subject: String,
    /// Phishing detector decision
    pub phishing: Label,
    /// "Phishing" or "Safe"
    pub phishing_label: String,
    /// Spam detector decision
    pub spam: Label,
    /// "Spam" or "Ham"
    pub spam_label: String,
}

impl MessageVerdict {
    pub fn is_phishing(&self) -> bool {
        self.phishing == Label::Positive
    }

    pub fn is_spam(&self) -> bool {
        self.spam == Label::Positive
    }
}

/// Result of scanning a batch of messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// When the scan ran
    pub scanned_at: DateTime<Utc>,
    /// Messages left out by the batch limit
    pub skipped: usize,
    /// One verdict per classified message, oldest first
    pub verdicts: Vec<MessageVerdict>,
}

impl ScanReport {
    pub fn phishing_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_phishing()).count()
    }

    pub fn spam_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_spam()).count()
    }
}
