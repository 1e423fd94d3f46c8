//! Text normalization
//!
//! Turns arbitrary message text into a lower-case string of ASCII words
//! separated by single spaces. Tokens are the whitespace-separated words of
//! the normalized string.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Normalized texts shorter than this are treated as contentless
pub const DEFAULT_MIN_LENGTH: usize = 10;

/// Deterministic string normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalizer {
    min_length: usize,
}

impl Normalizer {
    /// Create a normalizer with the given short-text threshold
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Short-text threshold in characters
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Normalize any displayable value
    pub fn normalize<T: Display + ?Sized>(&self, text: &T) -> String {
        let text = text.to_string();
        let letters = strip_non_letters(&text).to_ascii_lowercase();
        let collapsed = collapse_whitespace(&letters);
        let kept = discard_short(collapsed, self.min_length);
        strip_supplementary(&kept)
    }

    /// Normalize and split into owned tokens
    pub fn tokenize<T: Display + ?Sized>(&self, text: &T) -> Vec<String> {
        tokens(&self.normalize(text)).map(str::to_string).collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

/// Split an already normalized string into tokens
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Keep only ASCII letters and whitespace
pub fn strip_non_letters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Collapse whitespace runs into a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace texts below `min_length` characters with the empty string
pub fn discard_short(text: String, min_length: usize) -> String {
    if text.chars().count() >= min_length {
        text
    } else {
        String::new()
    }
}

/// Remove characters outside the Basic Multilingual Plane (emoji and similar)
pub fn strip_supplementary(text: &str) -> String {
    text.chars().filter(|c| (*c as u32) < 0x10000).collect()
}
