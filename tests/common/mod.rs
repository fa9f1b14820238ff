//! Common test utilities: ISO9660, raw BIN and cabinet fixture builders.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const SECTOR: usize = 2048;
pub const RAW_SECTOR: usize = 2352;

const SYNC: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

struct FixtureFile {
    dir: Option<String>,
    name: String,
    content: Vec<u8>,
    lsn: Option<u32>,
    flags: u8,
}

/// Builds small ISO9660 images: a root directory, optional one-level subdirectories and
/// files placed in either.
pub struct IsoBuilder {
    dirs: Vec<String>,
    files: Vec<FixtureFile>,
    system_id: String,
    volume_id: String,
    volume_set_id: String,
    publisher_id: String,
    preparer_id: String,
    application_id: String,
}

pub const ROOT_LSN: u32 = 18;

impl IsoBuilder {
    pub fn new() -> Self {
        Self {
            dirs: vec![],
            files: vec![],
            system_id: "LINUX".to_string(),
            volume_id: "TEST_VOLUME".to_string(),
            volume_set_id: "TEST_SET".to_string(),
            publisher_id: "ACME PUBLISHING".to_string(),
            preparer_id: "ACME PREPARER".to_string(),
            application_id: "ISOCAB TESTS".to_string(),
        }
    }

    pub fn volume_id(mut self, id: &str) -> Self {
        self.volume_id = id.to_string();
        self
    }

    pub fn add_dir(&mut self, name: &str) -> &mut Self {
        self.dirs.push(name.to_string());
        self
    }

    /// Adds a file to the root directory (`dir == None`) or to a subdirectory.
    pub fn add_file(&mut self, dir: Option<&str>, name: &str, content: &[u8]) -> &mut Self {
        self.push(dir, name, content, None, 0)
    }

    /// Adds a root file whose extent starts at a fixed sector.
    pub fn add_file_at(&mut self, name: &str, lsn: u32, content: &[u8]) -> &mut Self {
        self.push(None, name, content, Some(lsn), 0)
    }

    /// Adds a root entry flagged as an associated file.
    pub fn add_associated(&mut self, name: &str, content: &[u8]) -> &mut Self {
        self.push(None, name, content, None, 0x04)
    }

    fn push(&mut self, dir: Option<&str>, name: &str, content: &[u8], lsn: Option<u32>, flags: u8) -> &mut Self {
        self.files.push(FixtureFile {
            dir: dir.map(str::to_string),
            name: name.to_string(),
            content: content.to_vec(),
            lsn,
            flags,
        });
        self
    }

    /// Returns the image bytes (2048-byte sectors).
    pub fn build(&self) -> Vec<u8> {
        // 16 = PVD, 17 = terminator, 18 = root, then one sector per subdirectory.
        let dir_lsns: Vec<u32> = (0..self.dirs.len() as u32).map(|i| ROOT_LSN + 1 + i).collect();
        let mut next_lsn = ROOT_LSN + 1 + self.dirs.len() as u32;

        let mut file_lsns = vec![];
        for file in &self.files {
            let lsn = file.lsn.unwrap_or(next_lsn);
            let end = lsn + file.content.len().div_ceil(SECTOR).max(1) as u32;
            next_lsn = next_lsn.max(end);
            file_lsns.push(lsn);
        }

        let mut data = vec![0u8; (next_lsn as usize + 1) * SECTOR];

        self.write_pvd(&mut data, next_lsn + 1);

        let term = 17 * SECTOR;
        data[term] = 255;
        data[term + 1..term + 6].copy_from_slice(b"CD001");
        data[term + 6] = 1;

        // Root directory
        let mut off = ROOT_LSN as usize * SECTOR;
        write_record(&mut data, &mut off, ROOT_LSN, SECTOR as u32, 0x02, &[0]);
        write_record(&mut data, &mut off, ROOT_LSN, SECTOR as u32, 0x02, &[1]);
        for (name, lsn) in self.dirs.iter().zip(&dir_lsns) {
            write_record(&mut data, &mut off, *lsn, SECTOR as u32, 0x02, name.as_bytes());
        }
        for (file, lsn) in self.files.iter().zip(&file_lsns) {
            if file.dir.is_none() {
                write_record(&mut data, &mut off, *lsn, file.content.len() as u32, file.flags, file.name.as_bytes());
            }
        }

        // Subdirectories
        for (name, dir_lsn) in self.dirs.iter().zip(&dir_lsns) {
            let mut off = *dir_lsn as usize * SECTOR;
            write_record(&mut data, &mut off, *dir_lsn, SECTOR as u32, 0x02, &[0]);
            write_record(&mut data, &mut off, ROOT_LSN, SECTOR as u32, 0x02, &[1]);
            for (file, lsn) in self.files.iter().zip(&file_lsns) {
                if file.dir.as_deref() == Some(name.as_str()) {
                    write_record(&mut data, &mut off, *lsn, file.content.len() as u32, file.flags, file.name.as_bytes());
                }
            }
        }

        for (file, lsn) in self.files.iter().zip(&file_lsns) {
            let start = *lsn as usize * SECTOR;
            data[start..start + file.content.len()].copy_from_slice(&file.content);
        }

        data
    }

    fn write_pvd(&self, data: &mut [u8], volume_size: u32) {
        let pvd = 16 * SECTOR;
        data[pvd] = 1;
        data[pvd + 1..pvd + 6].copy_from_slice(b"CD001");
        data[pvd + 6] = 1;
        write_padded(&mut data[pvd + 8..pvd + 40], &self.system_id);
        write_padded(&mut data[pvd + 40..pvd + 72], &self.volume_id);
        write_both_u32(&mut data[pvd + 80..], volume_size);
        write_both_u16(&mut data[pvd + 120..], 1);
        write_both_u16(&mut data[pvd + 124..], 1);
        write_both_u16(&mut data[pvd + 128..], SECTOR as u16);

        let mut off = pvd + 156;
        write_record(data, &mut off, ROOT_LSN, SECTOR as u32, 0x02, &[0]);

        write_padded(&mut data[pvd + 190..pvd + 318], &self.volume_set_id);
        write_padded(&mut data[pvd + 318..pvd + 446], &self.publisher_id);
        write_padded(&mut data[pvd + 446..pvd + 574], &self.preparer_id);
        write_padded(&mut data[pvd + 574..pvd + 702], &self.application_id);
    }
}

fn write_padded(dst: &mut [u8], value: &str) {
    dst.fill(b' ');
    dst[..value.len()].copy_from_slice(value.as_bytes());
}

fn write_both_u32(dst: &mut [u8], value: u32) {
    dst[0..4].copy_from_slice(&value.to_le_bytes());
    dst[4..8].copy_from_slice(&value.to_be_bytes());
}

fn write_both_u16(dst: &mut [u8], value: u16) {
    dst[0..2].copy_from_slice(&value.to_le_bytes());
    dst[2..4].copy_from_slice(&value.to_be_bytes());
}

fn write_record(data: &mut [u8], offset: &mut usize, lsn: u32, size: u32, flags: u8, name: &[u8]) {
    let mut len = 33 + name.len();
    len += len % 2;

    let start = *offset;
    data[start] = len as u8;
    write_both_u32(&mut data[start + 2..], lsn);
    write_both_u32(&mut data[start + 10..], size);
    data[start + 25] = flags;
    write_both_u16(&mut data[start + 28..], 1);
    data[start + 32] = name.len() as u8;
    data[start + 33..start + 33 + name.len()].copy_from_slice(name);

    *offset += len;
}

/// Wraps every 2048-byte sector of `iso` into a raw Mode 1 sector.
pub fn to_raw_bin(iso: &[u8]) -> Vec<u8> {
    to_raw_frames(iso, 1, 16)
}

/// Wraps every 2048-byte sector of `iso` into a raw Mode 2 Form 1 sector.
pub fn to_raw_bin_mode2(iso: &[u8]) -> Vec<u8> {
    to_raw_frames(iso, 2, 24)
}

fn to_raw_frames(iso: &[u8], mode: u8, data_offset: usize) -> Vec<u8> {
    let mut raw = Vec::with_capacity(iso.len() / SECTOR * RAW_SECTOR);
    for sector in iso.chunks(SECTOR) {
        let mut frame = vec![0u8; RAW_SECTOR];
        frame[..12].copy_from_slice(&SYNC);
        frame[15] = mode;
        frame[data_offset..data_offset + sector.len()].copy_from_slice(sector);
        // EDC/ECC area, never part of the user data.
        frame[data_offset + SECTOR..].fill(0xEE);
        raw.extend(frame);
    }
    raw
}

/// Writes `bytes` into a temporary file kept alive by the returned handle.
pub fn temp_medium(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write medium");
    file.flush().expect("flush medium");
    file
}

/// Bytes whose value depends on their position, so misplaced reads are visible.
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed).wrapping_add((i / SECTOR) as u8))
        .collect()
}

/// Builds an InstallShield header listing `components`, all chained from one table slot.
pub fn cabinet_header(components: &[&str]) -> Vec<u8> {
    const DESCRIPTOR: usize = 0x200;
    const COMPONENT_TABLE: usize = 0x3e + 4 * 71;
    const LISTS: usize = 0x300;
    const COMPONENTS: usize = 0x500;
    const NAMES: usize = 0x800;
    const DESCRIPTOR_SIZE: usize = 0x1000;

    let mut data = vec![0u8; DESCRIPTOR + DESCRIPTOR_SIZE];
    data[0..4].copy_from_slice(b"ISc(");
    data[4..8].copy_from_slice(&0x0100_600Cu32.to_le_bytes());
    data[12..16].copy_from_slice(&(DESCRIPTOR as u32).to_le_bytes());
    data[16..20].copy_from_slice(&(DESCRIPTOR_SIZE as u32).to_le_bytes());

    let desc = &mut data[DESCRIPTOR..];
    if !components.is_empty() {
        desc[COMPONENT_TABLE..COMPONENT_TABLE + 4].copy_from_slice(&(LISTS as u32).to_le_bytes());
    }
    for (i, name) in components.iter().enumerate() {
        let list = LISTS + i * 12;
        let component = COMPONENTS + i * 16;
        let name_off = NAMES + i * 64;
        let next = if i + 1 < components.len() { list + 12 } else { 0 };

        desc[list..list + 4].copy_from_slice(&(name_off as u32).to_le_bytes());
        desc[list + 4..list + 8].copy_from_slice(&(component as u32).to_le_bytes());
        desc[list + 8..list + 12].copy_from_slice(&(next as u32).to_le_bytes());
        desc[component..component + 4].copy_from_slice(&(name_off as u32).to_le_bytes());
        desc[name_off..name_off + name.len()].copy_from_slice(name.as_bytes());
    }

    data
}
