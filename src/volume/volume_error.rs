//! Error types for ISO9660 volume parsing and lookup.

use thiserror::Error;

use crate::medium::MediumError;

/// Errors that can occur while reading volume structures.
#[derive(Error, Debug)]
pub enum VolumeError {
    /// The backing medium failed to deliver the requested sectors.
    #[error("Medium error: {0}")]
    MediumError(MediumError),

    /// Parsing error occured during structure initialization
    #[error("BinRead Error: `{0}`")]
    BinReadError(binread::Error),

    /// The descriptor set ended before a primary volume descriptor was found.
    #[error("No primary volume descriptor found")]
    NoPrimaryDescriptor,

    /// A volume descriptor does not carry the `CD001` standard identifier.
    #[error("Invalid standard identifier `{0}` in volume descriptor at sector {1}")]
    InvalidIdentifier(String, u32),

    /// Only 2048-byte logical blocks are supported.
    #[error("Unsupported logical block size: `{0}`. Expected 2048")]
    InvalidBlockSize(u16),

    /// A directory record is truncated or overruns its sector.
    #[error("Invalid directory record in extent at LSN {0}")]
    InvalidDirectoryRecord(u32),

    /// No entry matches the path.
    #[error("`{0}` not found")]
    NotFound(String),

    /// The path names a file where a directory is required.
    #[error("`{0}` is not a directory")]
    NotADirectory(String),
}

/// Converts medium errors into VolumeError.
impl From<MediumError> for VolumeError {
    fn from(err: MediumError) -> Self {
        VolumeError::MediumError(err)
    }
}

/// Converts BinRead errors into VolumeError.
impl From<binread::Error> for VolumeError {
    fn from(err: binread::Error) -> Self {
        VolumeError::BinReadError(err)
    }
}
