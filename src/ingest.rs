// src/ingest.rs
//
// Bulk CSV upload. Deliberately does NOT parse the CSV: the whole file
// text lands in the bulk textarea verbatim, exactly as a paste would.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    // Same banner text as a validation failure.
    #[error("Please upload a CSV file")]
    NotCsv,
    #[error("Could not read {name}: {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },
}

/// A file the user handed us: display name + raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestedFile {
    pub name: String,
    pub text: String,
}

/// Extension gate. Desktop file handles carry no media type, so the
/// case-insensitive `.csv` check stands in for "text/csv or *.csv".
/// A bare `.csv` counts as a match.
pub fn is_csv_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".csv")
}

/// Read a user-selected URLs file. Rejects non-CSV names before touching
/// the filesystem; on success returns the full text, untouched.
pub fn read_urls_file(path: &Path) -> Result<IngestedFile, IngestError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !is_csv_name(&name) {
        logd!("Ingest: rejected non-CSV '{}'", name);
        return Err(IngestError::NotCsv);
    }

    let text = fs::read_to_string(path).map_err(|source| {
        loge!("Ingest: read failed '{}': {}", name, source);
        IngestError::Read { name: name.clone(), source }
    })?;

    logf!("Ingest: OK '{}' ({} bytes)", name, text.len());
    Ok(IngestedFile { name, text })
}
