//! Parser configuration.
//!
//! The sidecar vocabulary is fixed in practice, but every literal the parser
//! matches against lives here so callers can read sidecars written by
//! variant downloaders without forking the state machine.

use encoding_rs::Encoding;

use crate::galleryinfo::utils;

/// Name of the sidecar file inside each gallery folder.
pub const SIDECAR_FILE_NAME: &str = "galleryinfo.txt";

/// Header line that opens the free-text comment block.
pub const COMMENT_MARKER: &str = "Uploader's Comments";

/// Line that terminates the comment block.
pub const SENTINEL_LINE: &str =
    "Downloaded from E-Hentai Galleries by the Hentai@Home Downloader <3";

/// `chrono` format string for `Upload Time` and `Downloaded`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Category assigned to tags that carry none.
pub const DEFAULT_TAG_CATEGORY: &str = "untagged";

/// Settings consumed by [`parse_galleryinfo_with`](crate::parse_galleryinfo_with)
/// and [`extract_fields`](crate::extract_fields).
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub sidecar_name: String,
    pub comment_marker: String,
    pub sentinel: String,
    pub timestamp_format: String,
    pub default_category: String,
    pub encoding: &'static Encoding,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            sidecar_name: SIDECAR_FILE_NAME.to_string(),
            comment_marker: COMMENT_MARKER.to_string(),
            sentinel: SENTINEL_LINE.to_string(),
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
            default_category: DEFAULT_TAG_CATEGORY.to_string(),
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl ParserConfig {
    pub fn with_sidecar_name(mut self, name: impl Into<String>) -> Self {
        self.sidecar_name = name.into();
        self
    }

    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Selects the sidecar encoding by WHATWG label (`"utf-8"`, `"gbk"`, ...).
    ///
    /// Unknown labels fall back to UTF-8.
    pub fn with_encoding_label(self, label: &str) -> Self {
        self.with_encoding(utils::parse_encoding(label))
    }
}
