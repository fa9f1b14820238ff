//! File handle over a volume entry.
//!
//! A file handle owns the metadata of its entry and a cursor. Bytes are always fetched
//! through the injected [`BlockReader`], in whole-extent reads anchored at the start of
//! the entry.

use getset::Getters;
use std::fmt;

use super::adapter_error::AdapterError;
use crate::traits::BlockReader;
use crate::volume::EntryStat;

/// Origin of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Absolute position (`SEEK_SET`).
    Start,
    /// Relative to the cursor (`SEEK_CUR`).
    Current,
    /// Relative to the end of the entry (`SEEK_END`).
    End,
}

impl TryFrom<i32> for Whence {
    type Error = AdapterError;

    /// Maps the C `SEEK_SET`, `SEEK_CUR` and `SEEK_END` values.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Whence::Start),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            other => Err(AdapterError::InvalidSeekWhence(other)),
        }
    }
}

/// Flags parsed from an `fopen`-style mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileMode(u8);

impl FileMode {
    pub const BINARY: u8 = 1 << 0;
    pub const READ: u8 = 1 << 1;
    pub const WRITE: u8 = 1 << 2;
    /// Shares its bit with `WRITE`.
    pub const AMEND: u8 = 1 << 2;

    /// Parses the `b`, `r`, `w` and `a` characters of `modes`; others are ignored.
    pub fn parse(modes: &str) -> Self {
        let mut bits = 0;
        for (c, flag) in [
            ('b', Self::BINARY),
            ('r', Self::READ),
            ('w', Self::WRITE),
            ('a', Self::AMEND),
        ] {
            if modes.contains(c) {
                bits |= flag;
            }
        }
        FileMode(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, flag: u8) -> bool {
        self.0 & flag == flag
    }
}

/// An open volume entry.
#[derive(Debug, Getters)]
pub struct IsoFile {
    /// Metadata of the entry, owned until the handle is closed.
    #[get = "pub"]
    stat: EntryStat,
    #[get = "pub"]
    mode: FileMode,
    current_offset: i64,
}

impl IsoFile {
    /// Opens a handle on `stat` with the cursor at 0.
    pub fn open(stat: EntryStat, modes: &str) -> Self {
        IsoFile {
            stat,
            mode: FileMode::parse(modes),
            current_offset: 0,
        }
    }

    /// Moves the cursor.
    ///
    /// An `End` seek places the cursor `offset` bytes before the end of the entry.
    /// The cursor is not clamped to the entry. A position that does not fit an `i64`
    /// is rejected and leaves the cursor unchanged.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), AdapterError> {
        let position = match whence {
            Whence::Start => Some(offset),
            Whence::Current => self.current_offset.checked_add(offset),
            Whence::End => i64::from(*self.stat.size()).checked_sub(offset),
        };

        self.current_offset = position.ok_or(AdapterError::SeekOverflow { offset, whence })?;
        Ok(())
    }

    pub fn tell(&self) -> i64 {
        self.current_offset
    }

    /// Reads `element_size * count` bytes into `buf` and advances the cursor by as much.
    ///
    /// The read always starts at the first byte of the entry, whatever the cursor.
    /// On failure nothing is copied and the cursor does not move.
    pub fn read<R: BlockReader + ?Sized>(
        &mut self,
        reader: &mut R,
        buf: &mut [u8],
        element_size: usize,
        count: usize,
    ) -> Result<usize, AdapterError> {
        let needed = element_size
            .checked_mul(count)
            .filter(|n| *n <= buf.len() && u32::try_from(*n).is_ok())
            .ok_or(AdapterError::BufferTooSmall {
                needed: element_size.saturating_mul(count),
                available: buf.len(),
            })?;

        let advanced = self
            .current_offset
            .checked_add(needed as i64)
            .ok_or(AdapterError::SeekOverflow {
                offset: needed as i64,
                whence: Whence::Current,
            })?;

        let data = reader.read_block(*self.stat.lsn(), needed as u32)?;
        buf[..data.len()].copy_from_slice(&data);
        self.current_offset = advanced;

        Ok(data.len())
    }

    /// Writing is not supported on a read-only medium.
    pub fn write(&mut self, _buf: &[u8], _element_size: usize, _count: usize) -> Result<usize, AdapterError> {
        Err(AdapterError::UnsupportedOperation("write"))
    }

    /// Releases the handle and the entry metadata it owns.
    pub fn close(self) {}
}

impl fmt::Display for IsoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.stat, self.current_offset)
    }
}
