//! Error types for cabinet header reading.

use thiserror::Error;

use crate::adapter::AdapterError;

/// Errors that can occur while listing the components of a cabinet.
#[derive(Error, Debug)]
pub enum CabinetError {
    /// A callback of the I/O contract failed.
    #[error("I/O callback failed: {0}")]
    AdapterError(AdapterError),

    /// Neither a `.hdr` companion nor the cabinet itself exists.
    #[error("No header file found for `{0}`")]
    HeaderNotFound(String),

    /// The file does not start with the `ISc(` signature.
    #[error("Invalid cabinet signature")]
    InvalidSignature,

    /// Fewer bytes than the file size were returned.
    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// The end-of-file position reported by `tell` is not a valid size.
    #[error("Invalid file size: {0}")]
    InvalidSize(i64),

    /// An offset points outside of the header data.
    #[error("Offset 0x{0:X} is outside of the header data")]
    Truncated(usize),

    /// An offset list loops or is unreasonably long.
    #[error("Corrupt component offset list in slot {0}")]
    CorruptOffsetList(usize),

    /// Parsing error occured during structure initialization
    #[error("BinRead Error: `{0}`")]
    BinReadError(binread::Error),
}

/// Converts adapter errors into CabinetError.
impl From<AdapterError> for CabinetError {
    fn from(err: AdapterError) -> Self {
        CabinetError::AdapterError(err)
    }
}

/// Converts BinRead errors into CabinetError, singling out a bad signature.
impl From<binread::Error> for CabinetError {
    fn from(err: binread::Error) -> Self {
        match err {
            binread::Error::BadMagic { .. } => CabinetError::InvalidSignature,
            other => CabinetError::BinReadError(other),
        }
    }
}
