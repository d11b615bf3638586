use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Local};
use log::{debug, info};

use super::format::{fields, gid};
use super::types::config::ParserConfig;
use super::types::error::{GalleryInfoError, Result};
use super::types::models::GalleryRecord;
use super::utils;

/// Parse the sidecar of a gallery folder with the default settings.
///
/// # Errors
/// Returns an error if:
/// - The folder name carries no gallery id
/// - `galleryinfo.txt` is missing or not valid UTF-8
/// - A timestamp header is malformed
/// - A required header label is missing
/// - The folder cannot be listed
pub fn parse_galleryinfo(folder: impl AsRef<Path>) -> Result<GalleryRecord> {
    parse_galleryinfo_with(folder, &ParserConfig::default())
}

/// Parse the sidecar of a gallery folder.
///
/// Reads the sidecar once, lists the folder once, and assembles the record.
/// Nothing is returned unless every step succeeds.
pub fn parse_galleryinfo_with(
    folder: impl AsRef<Path>,
    config: &ParserConfig,
) -> Result<GalleryRecord> {
    let folder = folder.as_ref();
    info!("Opening gallery folder: {}", folder.display());

    let sidecar = folder.join(&config.sidecar_name);
    let (text, modified_time) = read_sidecar(&sidecar, config)?;

    let gid = gid::parse_gid(folder)?;
    let files = utils::list_file_names(folder)?;
    let fields = fields::extract_fields(&text, config)?;

    info!(
        "Gallery {} parsed: '{}', {} files, {} tags",
        gid,
        fields.title,
        files.len(),
        fields.tags.len()
    );
    Ok(GalleryRecord::new(
        folder.to_path_buf(),
        gid,
        files,
        modified_time,
        fields,
    ))
}

/// Read and decode the sidecar, returning its text and modification time.
fn read_sidecar(path: &Path, config: &ParserConfig) -> Result<(String, DateTime<Local>)> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GalleryInfoError::FileNotFound(path.to_path_buf()),
        _ => GalleryInfoError::Io(e),
    })?;
    let modified_time = DateTime::<Local>::from(fs::metadata(path)?.modified()?);
    debug!(
        "Read {} bytes from {} (modified {})",
        bytes.len(),
        path.display(),
        modified_time
    );

    let text = config
        .encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| GalleryInfoError::DecodeError {
            path: path.to_path_buf(),
            encoding: config.encoding.name(),
        })?;
    Ok((text.into_owned(), modified_time))
}
