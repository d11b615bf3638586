use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use galleryinfo_parser::{
    config::SENTINEL_LINE, parse_galleryinfo, parse_galleryinfo_with, GalleryInfoError,
    ParserConfig, TagPair,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SIDECAR: &str = "galleryinfo.txt";

fn sidecar_text(title: &str, comment: &[&str]) -> String {
    let mut text = format!(
        "\n\nTitle:       {title}\n\
         Upload Time: 2021-11-30 08:15\n\
         Uploaded By: uploader_name\n\
         Downloaded:  2022-02-03 21:09\n\
         Tags:        language:english, artist:someone, :lone, plain\n\
         \n\
         Uploader's Comments:\n\n"
    );
    for line in comment {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str(SENTINEL_LINE);
    text.push_str("\n\n");
    text
}

/// Create `<root>/<name>` holding a sidecar and `pages` image files.
fn make_gallery(root: &TempDir, name: &str, sidecar: &[u8], pages: usize) -> PathBuf {
    let folder = root.path().join(name);
    fs::create_dir(&folder).expect("create gallery folder");
    fs::write(folder.join(SIDECAR), sidecar).expect("write sidecar");
    for i in 1..=pages {
        fs::write(folder.join(format!("{:03}.jpg", i)), b"img").expect("write page");
    }
    folder
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .expect("valid date")
}

fn sorted_listing(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(folder)
        .expect("read gallery folder")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn record_reproduces_sidecar_values() {
    let root = TempDir::new().expect("tempdir");
    let text = sidecar_text("A Title: With Colon", &["  first line  ", "", "second line"]);
    let folder = make_gallery(&root, "A Title [2468]", text.as_bytes(), 3);

    let record = parse_galleryinfo(&folder).expect("parse gallery");

    assert_eq!(record.folder(), folder.as_path());
    assert_eq!(record.name(), "A Title [2468]");
    assert_eq!(record.gid(), 2468);
    assert_eq!(record.title(), "A Title: With Colon");
    assert_eq!(record.upload_time(), at(2021, 11, 30, 8, 15));
    assert_eq!(record.upload_account(), "uploader_name");
    assert_eq!(record.download_time(), at(2022, 2, 3, 21, 9));
    assert_eq!(record.comment(), "first line\n\nsecond line");
    assert_eq!(
        record.tags(),
        &[
            TagPair::new("language", "english"),
            TagPair::new("artist", "someone"),
            TagPair::new("untagged", "lone"),
            TagPair::new("untagged", "plain"),
        ]
    );

    let mut files = record.files().to_vec();
    files.sort();
    assert_eq!(files, sorted_listing(&folder), "listing should include every entry");
    assert!(files.iter().any(|f| f == SIDECAR), "listing should include the sidecar");

    let mtime: DateTime<Local> = fs::metadata(folder.join(SIDECAR))
        .and_then(|m| m.modified())
        .expect("sidecar mtime")
        .into();
    assert_eq!(record.modified_time(), mtime);
}

#[test]
fn bare_numeric_folder_name_is_the_gid() {
    let root = TempDir::new().expect("tempdir");
    let folder = make_gallery(&root, "777", sidecar_text("T", &[]).as_bytes(), 0);
    let record = parse_galleryinfo(&folder).expect("parse gallery");
    assert_eq!(record.gid(), 777);
    assert_eq!(record.comment(), "");
}

#[test]
fn pages_count_is_cached() {
    let root = TempDir::new().expect("tempdir");
    let folder = make_gallery(&root, "Pages [1]", sidecar_text("T", &[]).as_bytes(), 4);
    let record = parse_galleryinfo(&folder).expect("parse gallery");

    assert_eq!(record.pages().expect("pages"), 4);

    fs::write(folder.join("005.jpg"), b"img").expect("write extra page");
    assert_eq!(
        record.pages().expect("pages"),
        4,
        "page count must not change after the first read"
    );
}

#[test]
fn pages_skip_subdirectories() {
    let root = TempDir::new().expect("tempdir");
    let folder = make_gallery(&root, "Nested [2]", sidecar_text("T", &[]).as_bytes(), 2);
    fs::create_dir(folder.join("extras")).expect("create subdir");

    let record = parse_galleryinfo(&folder).expect("parse gallery");
    assert_eq!(record.pages().expect("pages"), 2);
    assert_eq!(record.files().len(), 4, "listing is unfiltered");
}

#[test]
fn missing_sidecar_is_file_not_found() {
    let root = TempDir::new().expect("tempdir");
    let folder = root.path().join("Empty [3]");
    fs::create_dir(&folder).expect("create gallery folder");

    match parse_galleryinfo(&folder) {
        Err(GalleryInfoError::FileNotFound(path)) => assert_eq!(path, folder.join(SIDECAR)),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn invalid_utf8_is_decode_error() {
    let root = TempDir::new().expect("tempdir");
    let mut bytes = sidecar_text("T", &[]).into_bytes();
    bytes.extend_from_slice(&[0xff, 0xfe, 0xfd]);
    let folder = make_gallery(&root, "Bad [4]", &bytes, 0);

    match parse_galleryinfo(&folder) {
        Err(GalleryInfoError::DecodeError { encoding, .. }) => assert_eq!(encoding, "UTF-8"),
        other => panic!("expected DecodeError, got {:?}", other),
    }
}

#[test]
fn missing_title_is_missing_field() {
    let root = TempDir::new().expect("tempdir");
    let text: String = sidecar_text("T", &["c"])
        .lines()
        .filter(|l| !l.starts_with("Title:"))
        .map(|l| format!("{l}\n"))
        .collect();
    let folder = make_gallery(&root, "NoTitle [5]", text.as_bytes(), 1);

    match parse_galleryinfo(&folder) {
        Err(GalleryInfoError::MissingField("Title")) => {}
        other => panic!("expected MissingField(Title), got {:?}", other),
    }
}

#[test]
fn unresolvable_folder_name_fails() {
    let root = TempDir::new().expect("tempdir");
    let folder = make_gallery(&root, "Foo [abc]", sidecar_text("T", &[]).as_bytes(), 1);

    match parse_galleryinfo(&folder) {
        Err(GalleryInfoError::InvalidIdentifier { name }) => assert_eq!(name, "Foo [abc]"),
        other => panic!("expected InvalidIdentifier, got {:?}", other),
    }
}

#[test]
fn configured_sidecar_name_and_encoding_are_used() {
    let root = TempDir::new().expect("tempdir");
    let folder = root.path().join("Legacy [6]");
    fs::create_dir(&folder).expect("create gallery folder");

    let text = sidecar_text("Caf\u{e9}", &["d\u{e9}j\u{e0} vu"]);
    let (encoded, _, had_errors) = encoding_rs::WINDOWS_1252.encode(&text);
    assert!(!had_errors);
    fs::write(folder.join("info.txt"), &encoded).expect("write sidecar");

    let config = ParserConfig::default()
        .with_sidecar_name("info.txt")
        .with_encoding_label("windows-1252");
    let record = parse_galleryinfo_with(&folder, &config).expect("parse gallery");
    assert_eq!(record.title(), "Caf\u{e9}");
    assert_eq!(record.comment(), "d\u{e9}j\u{e0} vu");
}

#[test]
fn display_summarises_record() {
    let root = TempDir::new().expect("tempdir");
    let folder = make_gallery(&root, "Shown [8]", sidecar_text("Shown", &[]).as_bytes(), 0);
    let record = parse_galleryinfo(&folder).expect("parse gallery");

    let shown = record.to_string();
    assert!(shown.starts_with("GalleryRecord(name=Shown [8], gid=8,"), "{}", shown);
    assert!(shown.contains("tags=[language:english, artist:someone"), "{}", shown);
}
