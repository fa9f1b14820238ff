//! Declaration of traits reused across the code.

use crate::medium::MediumError;

/// Implementation of the LayoutDisplay trait.
/// It is used to render a report of a given structure such as a volume descriptor or a listing.
pub trait LayoutDisplay {
    fn display_layout(&self, indent: u8) -> Result<String, std::fmt::Error>;
}

/// Sector-addressed access to a backing medium.
///
/// Both methods are all-or-nothing: on failure no partial data is returned.
pub trait BlockReader {
    /// Reads `count` whole 2048-byte sectors starting at `lsn`.
    fn read_sectors(&mut self, lsn: u32, count: u32) -> Result<Vec<u8>, MediumError>;

    /// Reads exactly `size` bytes of the extent starting at `lsn`.
    fn read_block(&mut self, lsn: u32, size: u32) -> Result<Vec<u8>, MediumError>;
}

impl<T: BlockReader + ?Sized> BlockReader for Box<T> {
    fn read_sectors(&mut self, lsn: u32, count: u32) -> Result<Vec<u8>, MediumError> {
        (**self).read_sectors(lsn, count)
    }

    fn read_block(&mut self, lsn: u32, size: u32) -> Result<Vec<u8>, MediumError> {
        (**self).read_block(lsn, size)
    }
}
