//! Vocabulary construction

use std::collections::HashSet;

use super::normalizer::tokens;

/// Set of normalized tokens seen anywhere in a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: HashSet<String>,
}

impl Vocabulary {
    /// Build the union of tokens over normalized messages, regardless of label
    pub fn build<I, S>(normalized_messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = HashSet::new();
        for message in normalized_messages {
            for token in tokens(message.as_ref()) {
                if !vocabulary.contains(token) {
                    vocabulary.insert(token.to_string());
                }
            }
        }

        Self { tokens: vocabulary }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// `vocab_size`
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
