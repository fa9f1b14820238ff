//! Backing selection.
//!
//! The medium path is probed as a device first and as a plain image second; the first
//! interpretation that succeeds is kept for the rest of the run.

use log::{debug, info};
use std::fmt;
use std::path::Path;

use super::device::DeviceReader;
use super::image::ImageReader;
use super::medium_error::MediumError;
use crate::traits::BlockReader;

/// The medium backing a volume.
#[derive(Debug)]
pub enum Backing {
    /// A live device or raw CD image.
    Device(DeviceReader),
    /// A plain ISO9660 image file.
    ImageFile(ImageReader),
}

impl Backing {
    /// Selects the backing for `path`.
    ///
    /// # Returns
    /// - `Ok(Backing::Device)` if device auto-detection recognises the medium
    /// - `Ok(Backing::ImageFile)` if the path is a plain ISO9660 image
    /// - `Err(MediumError::UnsupportedMedium)` if both interpretations fail
    pub fn select(path: &Path) -> Result<Self, MediumError> {
        match DeviceReader::open(path) {
            Ok(device) => {
                info!("{} opened as a device", path.display());
                return Ok(Backing::Device(device));
            }
            Err(err) => debug!("Device probe failed: {err}"),
        }

        match ImageReader::open(path) {
            Ok(image) => {
                info!("{} opened as an image file", path.display());
                Ok(Backing::ImageFile(image))
            }
            Err(err) => {
                debug!("Image probe failed: {err}");
                Err(MediumError::UnsupportedMedium(path.to_path_buf()))
            }
        }
    }

    /// Returns `true` for the device backing.
    pub fn is_device(&self) -> bool {
        matches!(self, Backing::Device(_))
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backing::Device(device) => write!(f, "CD-ROM detected the driver: {}", device.driver()),
            Backing::ImageFile(_) => write!(f, "ISO 9660 detected the driver"),
        }
    }
}

impl BlockReader for Backing {
    fn read_sectors(&mut self, lsn: u32, count: u32) -> Result<Vec<u8>, MediumError> {
        match self {
            Backing::Device(device) => device.read_sectors(lsn, count),
            Backing::ImageFile(image) => image.read_sectors(lsn, count),
        }
    }

    fn read_block(&mut self, lsn: u32, size: u32) -> Result<Vec<u8>, MediumError> {
        match self {
            Backing::Device(device) => device.read_block(lsn, size),
            Backing::ImageFile(image) => image.read_block(lsn, size),
        }
    }
}
