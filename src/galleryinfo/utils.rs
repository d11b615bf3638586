//! Small filesystem and text helpers shared by the reader and the record.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use encoding_rs::Encoding;
use log::warn;

use super::types::error::{GalleryInfoError, Result};

/// Parse a header timestamp such as `2023-05-01 13:45`.
///
/// `field` names the header label in the error.
pub fn parse_timestamp(field: &'static str, value: &str, format: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).map_err(|source| {
        GalleryInfoError::TimestampFormat {
            field,
            value: value.to_string(),
            source,
        }
    })
}

/// Resolve a WHATWG encoding label, falling back to UTF-8.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    Encoding::for_label(label.trim().as_bytes()).unwrap_or_else(|| {
        warn!("Unknown encoding label '{}', using UTF-8", label);
        encoding_rs::UTF_8
    })
}

/// Convert `\r\n` and bare `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Names of every entry directly inside `dir`, unfiltered and unsorted.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    fs::read_dir(dir)?
        .map(|entry| -> Result<String> {
            Ok(entry?.file_name().to_string_lossy().into_owned())
        })
        .collect()
}

/// Number of regular files directly inside `dir`. Subdirectories are skipped.
pub fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        if entry?.path().is_file() {
            count += 1;
        }
    }
    Ok(count)
}
