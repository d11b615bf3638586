//! Gallery id extraction from folder names.
//!
//! Two folder naming conventions are accepted:
//! - `<title> [<gid>]`, e.g. `Some Title [12345]`
//! - a bare `<gid>`, e.g. `12345`

use std::path::Path;

use log::trace;

use crate::galleryinfo::types::error::{GalleryInfoError, Result};

/// Derive the numeric gallery id from a folder path.
///
/// Only the basename is examined. When it contains both `[` and `]`, the id
/// is the text after the last `[` with the closing `]` removed; any earlier
/// bracket groups belong to the title. Otherwise the whole basename must be
/// the id.
///
/// # Errors
/// [`GalleryInfoError::InvalidIdentifier`] if the candidate text is not an
/// unsigned integer.
pub fn parse_gid(folder: impl AsRef<Path>) -> Result<u64> {
    let folder = folder.as_ref();
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let candidate = if name.contains('[') && name.contains(']') {
        name.rsplit('[').next().unwrap_or_default().replace(']', "")
    } else {
        name.clone()
    };

    let gid = candidate
        .trim()
        .parse::<u64>()
        .map_err(|_| GalleryInfoError::InvalidIdentifier { name: name.clone() })?;
    trace!("Folder '{}' -> gid {}", name, gid);
    Ok(gid)
}
