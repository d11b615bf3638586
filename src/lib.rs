//! # galleryinfo-parser
//!
//! A reader for the `galleryinfo.txt` sidecar that the Hentai@Home
//! downloader writes next to every gallery folder.
//!
//! ```no_run
//! let record = galleryinfo_parser::parse_galleryinfo("downloads/Some Title [12345]")?;
//! println!("{} ({} pages)", record.title(), record.pages()?);
//! # Ok::<(), galleryinfo_parser::GalleryInfoError>(())
//! ```
pub mod galleryinfo;

// Re-export the main types for convenience
pub use galleryinfo::{
    extract_fields,
    extract_lines,
    parse_galleryinfo,
    parse_galleryinfo_with,
    parse_gid,
    parse_tags,
    types::config,
    GalleryFields,
    GalleryInfoError,
    GalleryRecord,
    ParserConfig,
    Result,
    TagPair,
};
