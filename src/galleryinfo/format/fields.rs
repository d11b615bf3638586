//! Line scanner that turns sidecar text into [`GalleryFields`].
//!
//! # Layout
//! ```text
//! Title:       ...          ┐
//! Upload Time: 2023-05-01   │ header: `Key: Value` lines
//! Uploaded By: ...          │
//! Downloaded:  ...          │
//! Tags:        a:1, b:2     ┘
//! Uploader's Comments:      ← marker, switches to comment mode
//! free text ...             ← comment block
//! Downloaded from E-Hentai Galleries by the Hentai@Home Downloader <3   ← sentinel
//! ```

use chrono::NaiveDateTime;
use log::{debug, trace};

use super::tags::parse_tags;
use crate::galleryinfo::types::config::ParserConfig;
use crate::galleryinfo::types::error::{GalleryInfoError, Result};
use crate::galleryinfo::types::models::{GalleryFields, TagPair};
use crate::galleryinfo::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Header,
    Comment,
}

/// Header labels the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderKey {
    Tags,
    Title,
    UploadTime,
    UploadedBy,
    Downloaded,
}

impl HeaderKey {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Tags" => Some(Self::Tags),
            "Title" => Some(Self::Title),
            "Upload Time" => Some(Self::UploadTime),
            "Uploaded By" => Some(Self::UploadedBy),
            "Downloaded" => Some(Self::Downloaded),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Tags => "Tags",
            Self::Title => "Title",
            Self::UploadTime => "Upload Time",
            Self::UploadedBy => "Uploaded By",
            Self::Downloaded => "Downloaded",
        }
    }
}

/// Header values seen so far. Later lines overwrite earlier ones.
#[derive(Debug, Default)]
struct PartialFields {
    title: Option<String>,
    upload_time: Option<NaiveDateTime>,
    upload_account: Option<String>,
    download_time: Option<NaiveDateTime>,
    tags: Option<Vec<TagPair>>,
}

impl PartialFields {
    fn set(&mut self, key: HeaderKey, value: &str, config: &ParserConfig) -> Result<()> {
        match key {
            HeaderKey::Tags => self.tags = Some(parse_tags(value, &config.default_category)),
            HeaderKey::Title => self.title = Some(value.to_string()),
            HeaderKey::UploadTime => {
                self.upload_time = Some(utils::parse_timestamp(
                    key.label(),
                    value,
                    &config.timestamp_format,
                )?)
            }
            HeaderKey::UploadedBy => self.upload_account = Some(value.to_string()),
            HeaderKey::Downloaded => {
                self.download_time = Some(utils::parse_timestamp(
                    key.label(),
                    value,
                    &config.timestamp_format,
                )?)
            }
        }
        Ok(())
    }

    /// Fails on the first required label that never appeared.
    fn finish(self, comment: String) -> Result<GalleryFields> {
        Ok(GalleryFields {
            title: self
                .title
                .ok_or(GalleryInfoError::MissingField(HeaderKey::Title.label()))?,
            upload_time: self
                .upload_time
                .ok_or(GalleryInfoError::MissingField(HeaderKey::UploadTime.label()))?,
            upload_account: self
                .upload_account
                .ok_or(GalleryInfoError::MissingField(HeaderKey::UploadedBy.label()))?,
            download_time: self
                .download_time
                .ok_or(GalleryInfoError::MissingField(HeaderKey::Downloaded.label()))?,
            tags: self.tags.unwrap_or_default(),
            comment,
        })
    }
}

/// Run the scanner over already split lines.
///
/// In header mode, `Key: Value` lines are dispatched on `Key`; unknown keys
/// and lines without `:` are skipped. The first line containing the comment
/// marker switches to comment mode, where lines are trimmed and collected
/// until the sentinel line or the end of input.
///
/// # Errors
/// - [`GalleryInfoError::TimestampFormat`] for a malformed `Upload Time` or `Downloaded`
/// - [`GalleryInfoError::MissingField`] if a required label never appeared
pub fn extract_lines<'a, I>(lines: I, config: &ParserConfig) -> Result<GalleryFields>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = ScanState::Header;
    let mut partial = PartialFields::default();
    let mut comment_lines: Vec<&str> = Vec::new();

    for line in lines {
        match state {
            ScanState::Header => {
                if line.contains(config.comment_marker.as_str()) {
                    debug!("Comment marker found, switching to comment block");
                    state = ScanState::Comment;
                    continue;
                }
                let Some((key, value)) = line.split_once(':') else {
                    continue;
                };
                let (key, value) = (key.trim(), value.trim());
                match HeaderKey::from_label(key) {
                    Some(header_key) => {
                        trace!("Header {:?} = {:?}", header_key, value);
                        partial.set(header_key, value, config)?;
                    }
                    None => trace!("Ignoring unknown header '{}'", key),
                }
            }
            ScanState::Comment => {
                if line == config.sentinel {
                    debug!("Sentinel line reached, {} comment lines", comment_lines.len());
                    break;
                }
                comment_lines.push(line.trim());
            }
        }
    }

    let comment = comment_lines.join("\n").trim_matches('\n').to_string();
    partial.finish(comment)
}

/// Run the scanner over the full text of a sidecar file.
///
/// Line endings are normalised to `\n` and surrounding blank lines are
/// dropped before scanning.
pub fn extract_fields(text: &str, config: &ParserConfig) -> Result<GalleryFields> {
    let text = utils::normalize_newlines(text);
    extract_lines(text.trim_matches('\n').split('\n'), config)
}
