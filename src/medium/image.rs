//! Plain ISO9660 image file backing (2048 bytes per sector, no sector headers).

use getset::Getters;
use log::{debug, trace};
use std::fs::File;
use std::path::{Path, PathBuf};

use super::medium_error::MediumError;
use crate::constants::{ISO_IDENTIFIER, PVD_SECTOR, SECTOR_SIZE};
use crate::traits::BlockReader;
use crate::utils;

/// An ISO9660 image opened as a plain file.
#[derive(Debug, Getters)]
pub struct ImageReader {
    file: File,
    /// The path of the image file.
    #[get = "pub"]
    path: PathBuf,
}

impl ImageReader {
    /// Opens `path` as an ISO9660 image.
    ///
    /// # Errors
    /// - `MediumError::Io` if the file cannot be opened
    /// - `MediumError::NotAnImage` if sector 16 does not hold a volume descriptor
    pub fn open(path: &Path) -> Result<Self, MediumError> {
        let mut file = File::open(path)?;

        let mut header = [0u8; 6];
        let read = utils::read_up_to(
            &mut file,
            u64::from(PVD_SECTOR) * SECTOR_SIZE as u64,
            &mut header,
        )?;
        if read < header.len() || header[1..6] != ISO_IDENTIFIER {
            return Err(MediumError::NotAnImage(path.to_path_buf()));
        }
        debug!("{} opened as an ISO9660 image", path.display());

        Ok(ImageReader {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Reads `count` sectors from `lsn` in one call, failing unless all bytes come back.
    fn seek_read(&mut self, lsn: u32, count: u32) -> Result<Vec<u8>, MediumError> {
        let expected = count as usize * SECTOR_SIZE;
        let mut buf = vec![0; expected];
        let actual = utils::read_up_to(
            &mut self.file,
            u64::from(lsn) * SECTOR_SIZE as u64,
            &mut buf,
        )?;

        if actual != expected {
            return Err(MediumError::ShortRead {
                lsn,
                expected,
                actual,
            });
        }

        Ok(buf)
    }
}

impl BlockReader for ImageReader {
    fn read_sectors(&mut self, lsn: u32, count: u32) -> Result<Vec<u8>, MediumError> {
        trace!("image read of {count} sector(s) at LSN {lsn}");
        self.seek_read(lsn, count)
    }

    /// Reads the rounded-up sector count into a temporary buffer and keeps the first
    /// `size` bytes.
    fn read_block(&mut self, lsn: u32, size: u32) -> Result<Vec<u8>, MediumError> {
        let blocks = utils::sectors_for(size as usize) as u32;
        let mut buf = self.seek_read(lsn, blocks)?;
        buf.truncate(size as usize);
        Ok(buf)
    }
}
