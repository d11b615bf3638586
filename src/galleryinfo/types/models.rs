//! Core data structures produced by the parser.
//!
//! - [`TagPair`]: one `(category, value)` classification label
//! - [`GalleryFields`]: the header and comment values read from a sidecar
//! - [`GalleryRecord`]: the assembled per-folder record

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Local, NaiveDateTime};
use log::debug;

use super::error::Result;
use crate::galleryinfo::utils;

/// A single tag from the `Tags` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagPair {
    pub category: String,
    pub value: String,
}

impl TagPair {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.value)
    }
}

impl<C: Into<String>, V: Into<String>> From<(C, V)> for TagPair {
    fn from((category, value): (C, V)) -> Self {
        Self::new(category, value)
    }
}

/// Every value the sidecar contributes to a record.
///
/// Only obtainable through the field extractor, which refuses to produce one
/// unless all four required header labels were seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryFields {
    pub title: String,
    pub upload_time: NaiveDateTime,
    pub comment: String,
    pub upload_account: String,
    pub download_time: NaiveDateTime,
    pub tags: Vec<TagPair>,
}

/// Metadata for one downloaded gallery folder.
///
/// Built once per folder by [`parse_galleryinfo`](crate::parse_galleryinfo).
/// Everything is fixed at construction except the page count, which is
/// computed on first request and then frozen.
#[derive(Debug)]
pub struct GalleryRecord {
    folder: PathBuf,
    name: String,
    gid: u64,
    files: Vec<String>,
    modified_time: DateTime<Local>,
    fields: GalleryFields,
    /// Empty until [`GalleryRecord::pages`] first runs.
    pages: OnceLock<usize>,
}

impl GalleryRecord {
    pub(crate) fn new(
        folder: PathBuf,
        gid: u64,
        files: Vec<String>,
        modified_time: DateTime<Local>,
        fields: GalleryFields,
    ) -> Self {
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            folder,
            name,
            gid,
            files,
            modified_time,
            fields,
            pages: OnceLock::new(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Basename of the gallery folder.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gid(&self) -> u64 {
        self.gid
    }

    /// Directory listing taken at parse time, sidecar included.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Modification time of the sidecar file.
    pub fn modified_time(&self) -> DateTime<Local> {
        self.modified_time
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn upload_time(&self) -> NaiveDateTime {
        self.fields.upload_time
    }

    /// Uploader's comment block; empty when the sidecar has none.
    pub fn comment(&self) -> &str {
        &self.fields.comment
    }

    pub fn upload_account(&self) -> &str {
        &self.fields.upload_account
    }

    pub fn download_time(&self) -> NaiveDateTime {
        self.fields.download_time
    }

    pub fn tags(&self) -> &[TagPair] {
        &self.fields.tags
    }

    pub fn fields(&self) -> &GalleryFields {
        &self.fields
    }

    /// Number of pages in the gallery.
    ///
    /// The first call counts the regular files in the folder, minus the
    /// sidecar. The result is cached: later calls return the same number
    /// even if the folder has changed since.
    ///
    /// # Errors
    /// Returns an I/O error if the folder cannot be listed on the first call.
    pub fn pages(&self) -> Result<usize> {
        if let Some(pages) = self.pages.get() {
            return Ok(*pages);
        }
        let count = utils::count_files(&self.folder)?.saturating_sub(1);
        debug!("Counted {} pages in {}", count, self.folder.display());
        Ok(*self.pages.get_or_init(|| count))
    }
}

impl fmt::Display for GalleryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<String> = self.fields.tags.iter().map(ToString::to_string).collect();
        write!(
            f,
            "GalleryRecord(name={}, gid={}, files={:?}, modified_time={}, title={}, \
             upload_time={}, comment={:?}, upload_account={}, download_time={}, tags=[{}])",
            self.name,
            self.gid,
            self.files,
            self.modified_time,
            self.fields.title,
            self.fields.upload_time,
            self.fields.comment,
            self.fields.upload_account,
            self.fields.download_time,
            tags.join(", "),
        )
    }
}
