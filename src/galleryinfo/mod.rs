//! Core gallery metadata reader module

pub mod format;
pub mod reader;
pub mod types;
pub mod utils;

pub use format::fields::{extract_fields, extract_lines};
pub use format::gid::parse_gid;
pub use format::tags::parse_tags;
pub use reader::{parse_galleryinfo, parse_galleryinfo_with};
pub use types::config::ParserConfig;
pub use types::error::{GalleryInfoError, Result};
pub use types::models::{GalleryFields, GalleryRecord, TagPair};
