//! The I/O callback contract consumed by the archive reader, and its implementation on
//! top of an ISO9660 volume.

use log::debug;

use super::adapter_error::AdapterError;
use super::dir::{DirEntry, IsoDir};
use super::file::{IsoFile, Whence};
use crate::traits::BlockReader;
use crate::volume::Iso9660Fs;

/// Byte-stream callbacks an archive reader uses to reach its files.
///
/// Handles are owned values: `close` and `closedir` consume them, so each handle is
/// released exactly once.
pub trait ArchiveIo {
    type File;
    type Dir;

    fn open(&mut self, name: &str, modes: &str) -> Result<Self::File, AdapterError>;

    fn seek(&mut self, file: &mut Self::File, offset: i64, whence: Whence) -> Result<(), AdapterError>;

    fn tell(&mut self, file: &Self::File) -> i64;

    /// Reads `count` elements of `element_size` bytes into `buf`.
    fn read(
        &mut self,
        file: &mut Self::File,
        buf: &mut [u8],
        element_size: usize,
        count: usize,
    ) -> Result<usize, AdapterError>;

    fn write(
        &mut self,
        file: &mut Self::File,
        buf: &[u8],
        element_size: usize,
        count: usize,
    ) -> Result<usize, AdapterError>;

    fn close(&mut self, file: Self::File) -> Result<(), AdapterError>;

    fn opendir(&mut self, name: &str) -> Result<Self::Dir, AdapterError>;

    /// Returns the next entry, or `None` at the end of the listing.
    fn readdir<'d>(&mut self, dir: &'d mut Self::Dir) -> Option<&'d DirEntry>;

    fn closedir(&mut self, dir: Self::Dir) -> Result<(), AdapterError>;
}

/// Callbacks bound to one mounted volume.
///
/// The same implementation serves every backing; only the injected block reader differs.
pub struct IsoCabIo<R: BlockReader> {
    volume: Iso9660Fs<R>,
}

impl<R: BlockReader> IsoCabIo<R> {
    pub fn new(volume: Iso9660Fs<R>) -> Self {
        IsoCabIo { volume }
    }

    pub fn volume_mut(&mut self) -> &mut Iso9660Fs<R> {
        &mut self.volume
    }
}

impl<R: BlockReader> ArchiveIo for IsoCabIo<R> {
    type File = IsoFile;
    type Dir = IsoDir;

    fn open(&mut self, name: &str, modes: &str) -> Result<IsoFile, AdapterError> {
        debug!("open({name:?}, {modes:?}) has been called");
        let stat = self
            .volume
            .stat(name)
            .map_err(|err| AdapterError::from_lookup(name, err))?;

        Ok(IsoFile::open(stat, modes))
    }

    fn seek(&mut self, file: &mut IsoFile, offset: i64, whence: Whence) -> Result<(), AdapterError> {
        debug!("seek({offset}, {whence:?}) has been called");
        file.seek(offset, whence)
    }

    fn tell(&mut self, file: &IsoFile) -> i64 {
        debug!("tell() has been called");
        file.tell()
    }

    fn read(
        &mut self,
        file: &mut IsoFile,
        buf: &mut [u8],
        element_size: usize,
        count: usize,
    ) -> Result<usize, AdapterError> {
        debug!("read({element_size}, {count}) has been called");
        file.read(self.volume.reader_mut(), buf, element_size, count)
    }

    fn write(
        &mut self,
        file: &mut IsoFile,
        buf: &[u8],
        element_size: usize,
        count: usize,
    ) -> Result<usize, AdapterError> {
        debug!("write({element_size}, {count}) has been called");
        file.write(buf, element_size, count)
    }

    fn close(&mut self, file: IsoFile) -> Result<(), AdapterError> {
        debug!("close({}) has been called", file.stat().name());
        file.close();
        Ok(())
    }

    fn opendir(&mut self, name: &str) -> Result<IsoDir, AdapterError> {
        debug!("opendir({name:?}) has been called");
        let name = if name.is_empty() { "/" } else { name };
        let entries = self
            .volume
            .readdir(name)
            .map_err(|err| AdapterError::from_lookup(name, err))?;

        Ok(IsoDir::open(name, entries))
    }

    fn readdir<'d>(&mut self, dir: &'d mut IsoDir) -> Option<&'d DirEntry> {
        debug!("readdir({}) has been called", dir.path());
        dir.read()
    }

    fn closedir(&mut self, dir: IsoDir) -> Result<(), AdapterError> {
        debug!("closedir({}) has been called", dir.path());
        dir.close();
        Ok(())
    }
}
