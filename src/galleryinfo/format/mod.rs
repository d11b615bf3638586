//! Text parsing layer for gallery folders and their sidecar files.
//!
//! # Module Organization
//!
//! - [`gid`]: derives the gallery id from a folder name
//! - [`fields`]: header/comment state machine over sidecar lines
//! - [`tags`]: splits the `Tags` header into `(category, value)` pairs
//!
//! Nothing here touches the filesystem; see [`reader`](super::reader).

pub mod fields;
pub mod gid;
pub mod tags;
