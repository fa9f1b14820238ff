mod common;

use common::{IsoBuilder, temp_medium, to_raw_bin, to_raw_bin_mode2};
use iso_cab::adapter::{ArchiveIo, DirEntry};
use iso_cab::medium::MediumError;
use iso_cab::{Backing, Iso9660Fs, IsoCabIo};
use std::path::Path;

fn fixture() -> Vec<u8> {
    let mut builder = IsoBuilder::new();
    builder
        .add_dir("DISK1")
        .add_file(None, "SETUP.EXE;1", b"MZ")
        .add_file(Some("DISK1"), "DATA1.CAB;1", &[0x42; 3000]);
    builder.build()
}

fn listing(path: &Path, dir: &str) -> Vec<DirEntry> {
    let backing = Backing::select(path).unwrap();
    let mut io = IsoCabIo::new(Iso9660Fs::open(backing).unwrap());

    let mut handle = io.opendir(dir).unwrap();
    let mut entries = vec![];
    while let Some(entry) = io.readdir(&mut handle) {
        entries.push(entry.clone());
    }
    io.closedir(handle).unwrap();
    entries
}

#[test]
fn plain_image_selects_image_backing() {
    let medium = temp_medium(&fixture());
    let backing = Backing::select(medium.path()).unwrap();

    assert!(!backing.is_device());
    assert_eq!(backing.to_string(), "ISO 9660 detected the driver");
}

#[test]
fn raw_image_selects_device_backing() {
    let medium = temp_medium(&to_raw_bin(&fixture()));
    let backing = Backing::select(medium.path()).unwrap();

    assert!(backing.is_device());
    assert_eq!(backing.to_string(), "CD-ROM detected the driver: raw BIN (Mode 1/2352)");
}

#[test]
fn both_backings_list_the_same_entries() {
    let image = temp_medium(&fixture());
    let raw = temp_medium(&to_raw_bin(&fixture()));

    for dir in ["/", "/DISK1"] {
        let from_image = listing(image.path(), dir);
        assert!(!from_image.is_empty());
        assert_eq!(from_image, listing(raw.path(), dir));
    }
}

#[test]
fn mode2_image_lists_and_reads_like_the_iso() {
    let image = temp_medium(&fixture());
    let raw = temp_medium(&to_raw_bin_mode2(&fixture()));

    for dir in ["/", "/DISK1"] {
        assert_eq!(listing(image.path(), dir), listing(raw.path(), dir));
    }

    let backing = Backing::select(raw.path()).unwrap();
    assert_eq!(
        backing.to_string(),
        "CD-ROM detected the driver: raw BIN (Mode 2 Form 1/2352)"
    );
    let mut io = IsoCabIo::new(Iso9660Fs::open(backing).unwrap());
    let mut file = io.open("/DISK1/DATA1.CAB", "rb").unwrap();
    let mut buf = vec![0; 2048];
    assert_eq!(io.read(&mut file, &mut buf, 2048, 1).unwrap(), 2048);
    assert_eq!(buf, vec![0x42; 2048]);
    io.close(file).unwrap();
}

#[test]
fn garbage_is_unsupported() {
    let medium = temp_medium(&[0x5A; 64 * 1024]);
    let err = Backing::select(medium.path()).unwrap_err();
    assert!(matches!(err, MediumError::UnsupportedMedium(_)));
}

#[test]
fn missing_path_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let err = Backing::select(&dir.path().join("nothing.iso")).unwrap_err();
    assert!(matches!(err, MediumError::UnsupportedMedium(_)));
}
