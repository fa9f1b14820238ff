//! ISO9660 volume structure and operations.
//!
//! This module implements the functions the adapter needs from a volume, including:
//! - Locating and reading the Primary Volume Descriptor
//! - Listing directory entries
//! - Resolving a path to its entry metadata

use log::{debug, trace};

use super::dir_record::DirRecord;
use super::entry::EntryStat;
use super::pvd::PrimaryVolumeDescriptor;
use super::volume_error::VolumeError;
use crate::constants::{ISO_IDENTIFIER, PVD_SECTOR, SECTOR_SIZE};
use crate::traits::BlockReader;
use crate::utils::sectors_for;

/// Type code of the volume descriptor set terminator.
const SET_TERMINATOR: u8 = 0xFF;

/// Upper bound on the number of descriptors scanned before giving up.
const MAX_DESCRIPTORS: u32 = 64;

/// A read-only ISO9660 volume on top of a block reader.
pub struct Iso9660Fs<R: BlockReader> {
    reader: R,
    root: EntryStat,
}

impl<R: BlockReader> Iso9660Fs<R> {
    /// Mounts the volume held by `reader`.
    ///
    /// # Errors
    /// - Returns `VolumeError::NoPrimaryDescriptor` if the descriptor set has no PVD
    /// - Returns `VolumeError::MediumError` if the descriptors cannot be read
    pub fn open(mut reader: R) -> Result<Self, VolumeError> {
        let pvd = read_pvd_from(&mut reader)?;
        let record = pvd.root_record();
        let root = EntryStat::new(
            "/",
            *record.extent_lba(),
            *record.data_length(),
            record.kind(),
        );
        debug!("Root directory at LSN {} ({} bytes)", root.lsn(), root.size());

        Ok(Iso9660Fs { reader, root })
    }

    /// Reads the Primary Volume Descriptor again from the medium.
    pub fn read_pvd(&mut self) -> Result<PrimaryVolumeDescriptor, VolumeError> {
        read_pvd_from(&mut self.reader)
    }

    /// Resolves `path` to the metadata of its entry.
    ///
    /// # Errors
    /// - `VolumeError::NotFound` if a component does not exist or crosses a file
    pub fn stat(&mut self, path: &str) -> Result<EntryStat, VolumeError> {
        let mut current = self.root.clone();

        for component in path.split('/').filter(|c| !c.is_empty() && *c != ".") {
            if !current.is_dir() {
                return Err(VolumeError::NotFound(path.to_string()));
            }

            current = self
                .list_extent(&current)?
                .into_iter()
                .find(|entry| entry.matches(component))
                .ok_or_else(|| VolumeError::NotFound(path.to_string()))?;
        }

        trace!("stat({path}) -> {current}");
        Ok(current)
    }

    /// Lists the entries of the directory at `path`, in on-disc order.
    ///
    /// The `.` and `..` records are not part of the listing.
    pub fn readdir(&mut self, path: &str) -> Result<Vec<EntryStat>, VolumeError> {
        let dir = self.stat(path)?;
        if !dir.is_dir() {
            return Err(VolumeError::NotADirectory(path.to_string()));
        }

        self.list_extent(&dir)
    }

    fn list_extent(&mut self, dir: &EntryStat) -> Result<Vec<EntryStat>, VolumeError> {
        let sectors = sectors_for(*dir.size() as usize) as u32;
        let buf = self.reader.read_sectors(*dir.lsn(), sectors)?;
        let mut entries = vec![];

        for sector in buf.chunks(SECTOR_SIZE) {
            let mut off = 0;
            while off < sector.len() {
                let len = usize::from(sector[off]);
                // Records never cross a sector: a zero length pads to the next one.
                if len == 0 {
                    break;
                }
                if len <= DirRecord::FIXED_LENGTH || off + len > sector.len() {
                    return Err(VolumeError::InvalidDirectoryRecord(*dir.lsn()));
                }

                let record = DirRecord::from_slice(&sector[off..off + len])?;
                if !record.is_self_or_parent() {
                    entries.push(record.to_stat());
                }
                off += len;
            }
        }

        Ok(entries)
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }
}

/// Scans the volume descriptor set for the Primary Volume Descriptor.
fn read_pvd_from<R: BlockReader>(reader: &mut R) -> Result<PrimaryVolumeDescriptor, VolumeError> {
    for sector in PVD_SECTOR..PVD_SECTOR + MAX_DESCRIPTORS {
        let buf = reader.read_sectors(sector, 1)?;

        if buf[1..6] != ISO_IDENTIFIER {
            return Err(VolumeError::InvalidIdentifier(
                String::from_utf8_lossy(&buf[1..6]).into_owned(),
                sector,
            ));
        }

        match buf[0] {
            PrimaryVolumeDescriptor::TYPE_CODE => {
                return PrimaryVolumeDescriptor::from_slice(&buf, sector);
            }
            SET_TERMINATOR => break,
            other => trace!("Skipping volume descriptor of type {other} at sector {sector}"),
        }
    }

    Err(VolumeError::NoPrimaryDescriptor)
}
