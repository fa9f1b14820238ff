//! Directory handle over a snapshot of a volume directory.

use getset::Getters;

use crate::volume::{EntryKind, EntryStat};

/// Type of a translated directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Regular,
    Directory,
    Unknown,
}

impl From<EntryKind> for EntryType {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::File => EntryType::Regular,
            EntryKind::Directory => EntryType::Directory,
            EntryKind::Unknown => EntryType::Unknown,
        }
    }
}

/// A directory entry as seen by the archive reader.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct DirEntry {
    /// Inode-like identifier: the first sector of the entry.
    #[get = "pub"]
    ino: u32,
    /// Position of the entry, also its first sector.
    #[get = "pub"]
    offset: u32,
    /// Size of the entry in bytes.
    #[get = "pub"]
    record_length: u32,
    #[get = "pub"]
    entry_type: EntryType,
    /// Translated, displayable name.
    #[get = "pub"]
    name: String,
}

impl From<&EntryStat> for DirEntry {
    fn from(stat: &EntryStat) -> Self {
        DirEntry {
            ino: *stat.lsn(),
            offset: *stat.lsn(),
            record_length: *stat.size(),
            entry_type: (*stat.kind()).into(),
            name: stat.display_name(),
        }
    }
}

/// An open directory.
///
/// The listing is taken once at open time and walked with a forward-only cursor.
#[derive(Debug, Getters)]
pub struct IsoDir {
    /// Path the directory was opened with.
    #[get = "pub"]
    path: String,
    entries: Vec<EntryStat>,
    cursor: usize,
    current: Option<DirEntry>,
}

impl IsoDir {
    pub fn open(path: &str, entries: Vec<EntryStat>) -> Self {
        IsoDir {
            path: path.to_string(),
            entries,
            cursor: 0,
            current: None,
        }
    }

    /// Translates the entry under the cursor and advances it.
    ///
    /// Returns `None` once every entry has been returned. The returned entry lives in the
    /// handle and is replaced by the next call.
    pub fn read(&mut self) -> Option<&DirEntry> {
        let stat = self.entries.get(self.cursor)?;
        self.cursor += 1;
        self.current = Some(DirEntry::from(stat));
        self.current.as_ref()
    }

    /// Checks whether the snapshot holds no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Releases the snapshot and every entry it holds.
    pub fn close(self) {}
}
