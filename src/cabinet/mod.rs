//! InstallShield cabinet component listing.
//!
//! The cabinet is reached only through the [`ArchiveIo`] callbacks: the header file is
//! located with `opendir`/`readdir` and loaded whole with `open`/`seek`/`tell`/`read`.

pub mod cabinet_error;
pub mod header;

use getset::Getters;
use log::{debug, info};

use crate::adapter::{ArchiveIo, Whence};
pub use cabinet_error::CabinetError;
pub use header::CommonHeader;

/// The components listed by a cabinet header.
#[derive(Debug, Getters)]
pub struct Cabinet {
    /// Path of the file the header was read from.
    #[get = "pub"]
    header_path: String,
    #[get = "pub"]
    version: u32,
    components: Vec<String>,
}

impl Cabinet {
    /// Opens the cabinet `name` and reads its component table.
    ///
    /// A `<stem>.hdr` companion in the same directory is preferred over the cabinet itself;
    /// names are matched case-insensitively.
    pub fn open<I: ArchiveIo>(io: &mut I, name: &str) -> Result<Self, CabinetError> {
        let header_path = find_header(io, name)?;
        debug!("Reading cabinet header from {header_path}");

        let data = load(io, &header_path)?;
        let header = CommonHeader::from_slice(&data)?;
        let components = header.component_names(&data)?;
        info!(
            "{header_path}: version 0x{:08X}, {} component(s)",
            header.version(),
            components.len()
        );

        Ok(Cabinet {
            header_path,
            version: *header.version(),
            components,
        })
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component_name(&self, index: usize) -> Option<&str> {
        self.components.get(index).map(String::as_str)
    }

    pub fn component_names(&self) -> &[String] {
        &self.components
    }
}

/// Looks for the header file of `name` in its directory.
fn find_header<I: ArchiveIo>(io: &mut I, name: &str) -> Result<String, CabinetError> {
    let (dir, base) = name.rsplit_once('/').unwrap_or(("", name));
    let stem = base.rsplit_once('.').map_or(base, |(stem, _)| stem);
    let candidates = [format!("{stem}.hdr"), base.to_string()];

    let mut handle = io.opendir(dir)?;
    let mut listing = vec![];
    while let Some(entry) = io.readdir(&mut handle) {
        listing.push(entry.name().clone());
    }
    io.closedir(handle)?;

    candidates
        .iter()
        .find_map(|candidate| {
            listing
                .iter()
                .find(|entry| entry.eq_ignore_ascii_case(candidate))
        })
        .map(|found| format!("{dir}/{found}"))
        .ok_or_else(|| CabinetError::HeaderNotFound(name.to_string()))
}

/// Loads a whole file through the callbacks, closing it on every path.
fn load<I: ArchiveIo>(io: &mut I, path: &str) -> Result<Vec<u8>, CabinetError> {
    let mut file = io.open(path, "rb")?;
    let result = read_whole(io, &mut file);
    io.close(file)?;
    result
}

fn read_whole<I: ArchiveIo>(io: &mut I, file: &mut I::File) -> Result<Vec<u8>, CabinetError> {
    io.seek(file, 0, Whence::End)?;
    let end = io.tell(file);
    let size = usize::try_from(end).map_err(|_| CabinetError::InvalidSize(end))?;
    io.seek(file, 0, Whence::Start)?;

    let mut buf = vec![0; size];
    let read = io.read(file, &mut buf, 1, size)?;
    if read != size {
        return Err(CabinetError::ShortRead {
            expected: size,
            actual: read,
        });
    }

    Ok(buf)
}
