//! Message sources
//!
//! Extracts the text handed to the classifiers from raw RFC 5322 messages,
//! either single `.eml` files or Maildir folders.

use mail_parser::MessageParser;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ClassifierError, Result};

/// Decoded text of one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSource {
    /// Where the message came from (file name, or "-")
    pub id: String,
    /// Decoded subject, empty when absent
    pub subject: String,
    /// First text body part
    pub body: Option<String>,
}

impl MessageSource {
    /// Parse a raw message
    pub fn from_rfc822(id: impl Into<String>, raw: &[u8]) -> Result<Self> {
        let id = id.into();
        let parsed = MessageParser::default()
            .parse(raw)
            .ok_or_else(|| ClassifierError::MessageParse(format!("{}: not an RFC 5322 message", id)))?;

        let subject = parsed.subject().unwrap_or("").to_string();
        let body = parsed.body_text(0).map(|b| b.to_string());

        Ok(Self { id, subject, body })
    }

    /// Read and parse a message file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read(path)?;
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self::from_rfc822(id, &raw)
    }

    /// Subject when present, otherwise the text body
    pub fn text(&self) -> &str {
        if self.subject.trim().is_empty() {
            self.body.as_deref().unwrap_or("")
        } else {
            &self.subject
        }
    }
}

/// Collect message files from paths; directories are read as Maildir folders
pub fn collect_message_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        for subdir in &["cur", "new", "."] {
            let mail_dir = path.join(subdir);
            if !mail_dir.is_dir() {
                continue;
            }

            let mut entries: Vec<PathBuf> = std::fs::read_dir(&mail_dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            files.extend(entries);
        }
    }

    debug!("Collected {} message files", files.len());
    Ok(files)
}

/// Parse every file, skipping the ones that fail
pub fn load_messages(paths: &[PathBuf]) -> Result<Vec<MessageSource>> {
    let mut messages = Vec::new();

    for path in collect_message_paths(paths)? {
        match MessageSource::from_file(&path) {
            Ok(message) => messages.push(message),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    Ok(messages)
}
