//! Phishing and spam detection
//!
//! Runs the phishing and spam classifiers side by side on messages.

pub mod scanner;
pub mod types;

pub use scanner::{train_detectors, MessageScanner};
pub use types::{MessageVerdict, ScanReport};
