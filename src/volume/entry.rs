//! Volume entries and ISO9660 name handling.

use getset::Getters;
use std::fmt;

/// The kind of a volume entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Unknown,
}

/// Metadata of one volume entry, as recorded in its directory record.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EntryStat {
    /// Raw ISO9660 name, e.g. `DATA1.CAB;1`.
    #[get = "pub"]
    name: String,
    /// Logical sector number of the first sector of the extent.
    #[get = "pub"]
    lsn: u32,
    /// Size of the extent in bytes.
    #[get = "pub"]
    size: u32,
    #[get = "pub"]
    kind: EntryKind,
}

impl EntryStat {
    pub fn new(name: impl Into<String>, lsn: u32, size: u32, kind: EntryKind) -> Self {
        EntryStat {
            name: name.into(),
            lsn,
            size,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns the name translated for display (see [`translate_name`]).
    pub fn display_name(&self) -> String {
        translate_name(&self.name)
    }

    /// Checks whether a path component designates this entry.
    ///
    /// The comparison ignores ASCII case, the `;version` suffix and a trailing dot.
    pub fn matches(&self, component: &str) -> bool {
        strip_version(&self.name).eq_ignore_ascii_case(strip_version(component))
    }
}

impl fmt::Display for EntryStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" LSN {} {}B", self.display_name(), self.lsn, self.size)
    }
}

/// Translates a raw ISO9660 name into a displayable one.
///
/// The name is lower-cased, a trailing `;1` version (and a dot right before it) is dropped
/// and any other `;` becomes a `.`.
pub fn translate_name(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(len);

    for (i, c) in chars.iter().enumerate() {
        if *c == ';' && i + 2 == len && chars[i + 1] == '1' {
            break;
        }
        if *c == '.' && i + 3 == len && chars[i + 1] == ';' && chars[i + 2] == '1' {
            break;
        }
        if *c == ';' {
            out.push('.');
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }

    out
}

/// Strips the version suffix from a name (e.g., "FILE.TXT;1" -> "FILE.TXT").
/// Also removes a trailing dot (e.g., "FILE.;1" -> "FILE").
pub fn strip_version(name: &str) -> &str {
    let base = name.split(';').next().unwrap_or(name);
    base.strip_suffix('.').unwrap_or(base)
}
