//! Live device backing.
//!
//! A path is treated as a device when it is a block or character device node exposing
//! 2048-byte sectors, or when it is a raw CD image (BIN) whose sectors are 2352 bytes long.
//! Driver detection happens once, when the device is opened.

use getset::Getters;
use log::{debug, trace};
use std::fmt;
use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use super::medium_error::MediumError;
use crate::constants::{
    ISO_IDENTIFIER, MODE1_DATA_OFFSET, MODE2_FORM1_DATA_OFFSET, PVD_SECTOR, RAW_SECTOR_SIZE,
    RAW_SYNC_PATTERN, SECTOR_SIZE,
};
use crate::traits::BlockReader;
use crate::utils;

/// The driver detected for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceDriver {
    /// A device node addressed in 2048-byte sectors.
    BlockDevice,
    /// A raw CD image; user data starts `data_offset` bytes into every 2352-byte sector.
    RawImage { data_offset: usize },
}

impl fmt::Display for DeviceDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceDriver::BlockDevice => write!(f, "block device"),
            DeviceDriver::RawImage {
                data_offset: MODE1_DATA_OFFSET,
            } => write!(f, "raw BIN (Mode 1/2352)"),
            DeviceDriver::RawImage { .. } => write!(f, "raw BIN (Mode 2 Form 1/2352)"),
        }
    }
}

/// A medium opened through device-driver auto-detection.
#[derive(Debug, Getters)]
pub struct DeviceReader {
    file: File,
    /// The path the device was opened from.
    #[get = "pub"]
    path: PathBuf,
    /// The detected driver.
    #[get = "pub"]
    driver: DeviceDriver,
}

impl DeviceReader {
    /// Opens `path` as a device, detecting the matching driver.
    ///
    /// # Errors
    /// - `MediumError::Io` if the path cannot be opened
    /// - `MediumError::NotADevice` if no driver recognises the medium
    pub fn open(path: &Path) -> Result<Self, MediumError> {
        let mut file = File::open(path)?;
        let metadata = fs::metadata(path)?;

        let driver = if is_device_node(&metadata) {
            DeviceDriver::BlockDevice
        } else {
            detect_raw_image(&mut file).ok_or_else(|| MediumError::NotADevice(path.to_path_buf()))?
        };
        debug!("{} opened with driver {driver}", path.display());

        Ok(DeviceReader {
            file,
            path: path.to_path_buf(),
            driver,
        })
    }
}

impl BlockReader for DeviceReader {
    fn read_sectors(&mut self, lsn: u32, count: u32) -> Result<Vec<u8>, MediumError> {
        trace!("device read of {count} sector(s) at LSN {lsn}");
        match self.driver {
            DeviceDriver::BlockDevice => Ok(utils::read_sectors(
                &mut self.file,
                lsn.into(),
                count as usize,
                SECTOR_SIZE,
            )?),
            DeviceDriver::RawImage { data_offset } => {
                let mut buf = Vec::with_capacity(count as usize * SECTOR_SIZE);
                let mut sector = vec![0; SECTOR_SIZE];
                for i in 0..u64::from(count) {
                    let offset = (u64::from(lsn) + i) * RAW_SECTOR_SIZE as u64 + data_offset as u64;
                    self.file.seek(SeekFrom::Start(offset))?;
                    self.file.read_exact(&mut sector)?;
                    buf.extend_from_slice(&sector);
                }
                Ok(buf)
            }
        }
    }

    /// Reads the whole sectors covered by `size`, then completes a partial tail from a
    /// second single-sector read.
    ///
    /// The tail read is anchored at `lsn` itself, not at the sector following the whole
    /// ones, so for sizes above one sector the tail bytes repeat the start of the extent.
    fn read_block(&mut self, lsn: u32, size: u32) -> Result<Vec<u8>, MediumError> {
        let whole = size / SECTOR_SIZE as u32;
        let remainder = (size % SECTOR_SIZE as u32) as usize;

        let mut buf = self.read_sectors(lsn, whole)?;
        if remainder > 0 {
            let extra = self.read_sectors(lsn, 1)?;
            buf.extend_from_slice(&extra[..remainder]);
        }

        Ok(buf)
    }
}

#[cfg(unix)]
fn is_device_node(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;

    let file_type = metadata.file_type();
    file_type.is_block_device() || file_type.is_char_device()
}

#[cfg(not(unix))]
fn is_device_node(_metadata: &fs::Metadata) -> bool {
    false
}

/// Looks for a raw 2352-byte sector holding a volume descriptor at sector 16.
///
/// Returns the driver to use, or `None` if the medium is not a raw CD image.
fn detect_raw_image<T: Read + Seek>(reader: &mut T) -> Option<DeviceDriver> {
    let mut header = [0u8; MODE2_FORM1_DATA_OFFSET + 6];
    let offset = u64::from(PVD_SECTOR) * RAW_SECTOR_SIZE as u64;
    let read = utils::read_up_to(reader, offset, &mut header).ok()?;
    if read < header.len() || header[..12] != RAW_SYNC_PATTERN {
        return None;
    }

    let data_offset = match header[15] {
        1 => MODE1_DATA_OFFSET,
        2 => MODE2_FORM1_DATA_OFFSET,
        _ => return None,
    };

    if header[data_offset + 1..data_offset + 6] != ISO_IDENTIFIER {
        return None;
    }

    Some(DeviceDriver::RawImage { data_offset })
}
