//! Error types for backing medium operations.
//!
//! This module provides error handling for opening a medium (device or image file)
//! and reading sectors from it.

use std::io;
use std::path::PathBuf;
use thiserror;

/// Represents errors that can occur while accessing a backing medium.
#[derive(thiserror::Error, Debug)]
pub enum MediumError {
    /// Wraps an I/O error that occurred during medium operations.
    #[error("I/O error: {0}")]
    Io(io::Error),
    /// Fewer bytes than requested were returned by the medium.
    #[error("Short read at LSN {lsn}: expected {expected} bytes, got {actual}")]
    ShortRead {
        lsn: u32,
        expected: usize,
        actual: usize,
    },
    /// The path is neither a device node nor a raw CD image.
    #[error("{} is not a CD-ROM device or raw CD image", .0.display())]
    NotADevice(PathBuf),
    /// The path does not hold an ISO9660 volume descriptor.
    #[error("{} is not an ISO9660 image", .0.display())]
    NotAnImage(PathBuf),
    /// Neither the device nor the image interpretation of the path succeeded.
    #[error("Could not open {} as a CD-ROM device or ISO9660 image", .0.display())]
    UnsupportedMedium(PathBuf),
}

/// Converts standard I/O errors into MediumError.
impl From<io::Error> for MediumError {
    fn from(err: io::Error) -> Self {
        MediumError::Io(err)
    }
}
