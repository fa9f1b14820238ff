//! ISO9660 directory record structure and parsing.
//!
//! A directory record describes one file or subdirectory. Records are variable-length
//! (33 fixed bytes followed by the file identifier) and never cross a sector boundary.

use binread::{BinRead, BinReaderExt};
use getset::Getters;
use std::io;

use super::entry::{EntryKind, EntryStat};
use super::volume_error::VolumeError;

/// Directory record.
///
/// Both-endian fields are read from their little-endian half.
#[derive(BinRead, Debug, Clone, Getters)]
#[br(little)]
pub struct DirRecord {
    /// Length of the directory record
    #[get = "pub"]
    length: u8,
    /// Extended attribute record length
    _ext_attr_length: u8,
    /// First sector of the extent
    #[get = "pub"]
    extent_lba: u32,
    #[br(big)]
    _extent_lba_be: u32,
    /// Size of the extent in bytes
    #[get = "pub"]
    data_length: u32,
    #[br(big)]
    _data_length_be: u32,
    /// Recording date and time
    _recording_date: [u8; 7],
    /// File flags
    #[get = "pub"]
    flags: u8,
    /// File unit size for interleaved files
    _file_unit_size: u8,
    /// Interleave gap size
    _interleave_gap: u8,
    /// Volume sequence number
    _volume_sequence: u16,
    #[br(big)]
    _volume_sequence_be: u16,
    /// Length of the file identifier
    name_len: u8,
    /// File identifier
    #[br(count = name_len as usize)]
    name: Vec<u8>,
}

impl DirRecord {
    /// Size of the fixed part of a record.
    pub const FIXED_LENGTH: usize = 33;

    const FLAG_ASSOCIATED: u8 = 0x04;
    const FLAG_DIRECTORY: u8 = 0x02;

    /// Creates a directory record from a byte slice.
    pub fn from_slice(buf: &[u8]) -> Result<Self, VolumeError> {
        let mut reader = io::Cursor::new(buf);
        reader.read_le().map_err(VolumeError::from)
    }

    pub fn is_dir(&self) -> bool {
        self.flags & Self::FLAG_DIRECTORY != 0
    }

    /// Checks whether this is the `.` or `..` record of a directory.
    pub fn is_self_or_parent(&self) -> bool {
        self.name == [0] || self.name == [1]
    }

    /// Returns the raw file identifier as a string.
    pub fn raw_name(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    pub fn kind(&self) -> EntryKind {
        if self.is_dir() {
            EntryKind::Directory
        } else if self.flags & Self::FLAG_ASSOCIATED != 0 {
            EntryKind::Unknown
        } else {
            EntryKind::File
        }
    }

    /// Builds the entry metadata for this record.
    pub fn to_stat(&self) -> EntryStat {
        EntryStat::new(
            self.raw_name(),
            self.extent_lba,
            self.data_length,
            self.kind(),
        )
    }
}
