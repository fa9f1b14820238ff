//! Directory listing report.

use std::fmt::Write;

use crate::traits::LayoutDisplay;
use crate::volume::EntryStat;

/// A directory listing ready to be printed, one entry per line:
/// `<d|-> [LSN <n>] <size> <dir><name>`.
pub struct Listing<'a> {
    dir: &'a str,
    entries: &'a [EntryStat],
}

impl<'a> Listing<'a> {
    pub fn new(dir: &'a str, entries: &'a [EntryStat]) -> Self {
        Listing { dir, entries }
    }
}

impl LayoutDisplay for Listing<'_> {
    fn display_layout(&self, indent: u8) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let indent = " ".repeat(indent.into());
        let prefix = if self.dir.ends_with('/') {
            self.dir.to_string()
        } else {
            format!("{}/", self.dir)
        };

        for entry in self.entries {
            writeln!(
                out,
                "{indent}{} [LSN {:6}] {:8} {}{}",
                if entry.is_dir() { "d" } else { "-" },
                entry.lsn(),
                entry.size(),
                prefix,
                entry.display_name()
            )?;
        }

        Ok(out)
    }
}
