use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::fs;
use std::path::Path;

pub struct Dirs {
    pub temp: TempDir,
    pub source: ChildPath,
    pub photos: ChildPath,
    pub videos: ChildPath,
}

pub fn setup_dirs() -> Dirs {
    let temp = TempDir::new().unwrap();
    let source = temp.child("source");
    source.create_dir_all().unwrap();
    let photos = temp.child("out/photos");
    let videos = temp.child("out/videos");
    Dirs {
        temp,
        source,
        photos,
        videos,
    }
}

/// Importer command pointed at the fixture directories.
pub fn importer(dirs: &Dirs) -> Command {
    let mut cmd = Command::cargo_bin("photo-importer").unwrap();
    cmd.arg("--source")
        .arg(dirs.source.path())
        .arg("--photo-path")
        .arg(dirs.photos.path())
        .arg("--video-path")
        .arg(dirs.videos.path());
    cmd
}

/// Write a minimal JPEG whose only metadata is an EXIF DateTimeOriginal tag.
///
/// `date_time` must be in EXIF form, e.g. `2023:06:15 10:20:30`.
pub fn write_exif_jpeg(path: &Path, date_time: &str) {
    assert_eq!(date_time.len(), 19, "EXIF timestamps are 19 characters");

    // Little-endian TIFF: header, IFD0 with an ExifIFD pointer, then an Exif
    // IFD holding DateTimeOriginal, then the string itself.
    let mut tiff: Vec<u8> = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());

    let exif_ifd_offset: u32 = 8 + 18;
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x8769, 4, 1, exif_ifd_offset);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    let string_offset: u32 = exif_ifd_offset + 18;
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x9003, 2, 20, string_offset);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(date_time.as_bytes());
    tiff.push(0);

    let mut app1: Vec<u8> = b"Exif\0\0".to_vec();
    app1.extend_from_slice(&tiff);

    let mut jpeg: Vec<u8> = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((app1.len() + 2) as u16).to_be_bytes());
    jpeg.extend_from_slice(&app1);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, jpeg).unwrap();
}

fn push_entry(buf: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: u32) {
    buf.extend_from_slice(&tag.to_le_bytes());
    buf.extend_from_slice(&kind.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());
    buf.extend_from_slice(&value.to_le_bytes());
}
