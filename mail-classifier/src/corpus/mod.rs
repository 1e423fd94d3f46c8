//! Labelled training corpora
//!
//! Loads CSV corpora into `(text, label)` rows according to a schema.

pub mod loader;
pub mod schema;
pub mod types;

pub use loader::{load_corpus, load_corpus_from_reader};
pub use schema::CorpusSchema;
pub use types::{CorpusRow, LabeledCorpus};
