//! Error types for the byte-stream adapter.
//!
//! Every failure below the command-line driver is reported through one of these variants;
//! none of them is retried.

use thiserror::Error;

use super::file::Whence;
use crate::medium::MediumError;
use crate::volume::VolumeError;

/// Errors returned by the file and directory callbacks.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// No volume entry matches the requested path.
    #[error("Could not find `{0}`")]
    EntryNotFound(String),

    /// The backing medium failed to deliver the requested bytes.
    #[error("Sector read failure: {0}")]
    SectorReadFailure(MediumError),

    /// The seek origin is not one of the start, current or end markers.
    #[error("Invalid seek origin: `{0}`")]
    InvalidSeekWhence(i32),

    /// The requested position does not fit the cursor.
    #[error("Seek overflow: offset {offset} from {whence:?}")]
    SeekOverflow { offset: i64, whence: Whence },

    /// The operation is not supported on a read-only medium.
    #[error("Unsupported operation: `{0}`")]
    UnsupportedOperation(&'static str),

    /// The caller's buffer cannot hold the requested element count.
    #[error("Buffer too small: {needed} bytes requested, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    /// The volume structures could not be read.
    #[error("Volume error: {0}")]
    VolumeError(VolumeError),
}

impl AdapterError {
    /// Classifies a volume error raised while resolving `name`.
    pub(crate) fn from_lookup(name: &str, err: VolumeError) -> Self {
        match err {
            VolumeError::NotFound(_) | VolumeError::NotADirectory(_) => {
                AdapterError::EntryNotFound(name.to_string())
            }
            VolumeError::MediumError(err) => AdapterError::SectorReadFailure(err),
            other => AdapterError::VolumeError(other),
        }
    }
}

/// Converts medium errors into AdapterError.
impl From<MediumError> for AdapterError {
    fn from(err: MediumError) -> Self {
        AdapterError::SectorReadFailure(err)
    }
}
