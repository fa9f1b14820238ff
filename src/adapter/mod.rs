//! Byte-stream adapter: file and directory handles exposed through the archive reader's
//! callback contract.

pub mod adapter_error;
pub mod dir;
pub mod file;
pub mod io;

pub use adapter_error::AdapterError;
pub use dir::{DirEntry, EntryType, IsoDir};
pub use file::{FileMode, IsoFile, Whence};
pub use io::{ArchiveIo, IsoCabIo};
