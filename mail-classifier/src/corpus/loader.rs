//! CSV corpus loading

use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use super::schema::CorpusSchema;
use super::types::LabeledCorpus;
use crate::error::{ClassifierError, Result};

/// Load a corpus from a CSV file (TSV when the extension is `.tsv`)
pub fn load_corpus<P: AsRef<Path>>(path: P, schema: &CorpusSchema) -> Result<LabeledCorpus> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_tsv = path.extension().map(|e| e == "tsv").unwrap_or(false);
    let delimiter = if is_tsv { b'\t' } else { b',' };

    info!("Loading {} corpus from {}", schema.name, path.display());
    load_corpus_from_reader(BufReader::new(file), delimiter, schema)
}

/// Load a corpus from any reader.
///
/// Malformed rows (unparseable, or without a text field) are skipped.
/// Rows with a missing or unrecognized label are kept with an unknown label.
pub fn load_corpus_from_reader<R: Read>(
    reader: R,
    delimiter: u8,
    schema: &CorpusSchema,
) -> Result<LabeledCorpus> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.byte_headers()?.clone();
    let text_idx = column_index(&headers, &schema.text_column)
        .ok_or_else(|| ClassifierError::MissingColumn(schema.text_column.clone()))?;
    let label_idx = column_index(&headers, &schema.label_column)
        .ok_or_else(|| ClassifierError::MissingColumn(schema.label_column.clone()))?;

    let mut corpus = LabeledCorpus::new();
    let mut skipped = 0usize;

    for (line, result) in rdr.byte_records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("Skipping malformed row {}: {}", line + 1, e);
                skipped += 1;
                continue;
            }
        };

        let Some(text) = record.get(text_idx) else {
            debug!("Skipping row {} without a text field", line + 1);
            skipped += 1;
            continue;
        };

        let label = record
            .get(label_idx)
            .and_then(|raw| schema.map_label(&String::from_utf8_lossy(raw)));

        corpus.push(String::from_utf8_lossy(text).into_owned(), label);
    }

    let unknown = corpus.unknown_count();
    if unknown > 0 {
        warn!(
            "{} corpus: {} rows with unknown labels excluded from training classes",
            schema.name, unknown
        );
    }

    info!(
        "{} corpus loaded: {} rows ({} skipped)",
        schema.name,
        corpus.len(),
        skipped
    );

    Ok(corpus)
}

/// Position of a header, matched case-insensitively after trimming
fn column_index(headers: &ByteRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| String::from_utf8_lossy(h).trim().eq_ignore_ascii_case(name))
}
