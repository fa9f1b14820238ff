//! InstallShield cabinet header structures.
//!
//! Only what is needed to enumerate components is parsed: the common header and the
//! component offset table of the cabinet descriptor.

use binread::{BinRead, BinReaderExt};
use getset::Getters;
use std::io;

use super::cabinet_error::CabinetError;
use crate::utils::{c_str_at, u32_at};

/// Number of component offset list heads in the cabinet descriptor.
pub const MAX_COMPONENT_COUNT: usize = 71;

/// Number of file group offset list heads in the cabinet descriptor.
pub const MAX_FILE_GROUP_COUNT: usize = 71;

/// Offset of the file group table within the cabinet descriptor.
const FILE_GROUP_OFFSETS: usize = 0x3e;

/// Offset of the component table within the cabinet descriptor.
pub const COMPONENT_OFFSETS: usize = FILE_GROUP_OFFSETS + 4 * MAX_FILE_GROUP_COUNT;

/// Longest offset list followed before the list is considered corrupt.
const MAX_LIST_LENGTH: usize = 4096;

/// Header found at the start of every cabinet and header file, after the `ISc(` signature.
#[derive(BinRead, Debug, Getters)]
#[br(little, magic = 0x2863_5349u32)]
pub struct CommonHeader {
    #[get = "pub"]
    version: u32,
    _volume_info: u32,
    /// Offset of the cabinet descriptor from the start of the file
    #[get = "pub"]
    cab_descriptor_offset: u32,
    #[get = "pub"]
    cab_descriptor_size: u32,
}

impl CommonHeader {
    pub fn from_slice(buf: &[u8]) -> Result<Self, CabinetError> {
        let mut reader = io::Cursor::new(buf);
        reader.read_le().map_err(CabinetError::from)
    }

    /// Walks the component table and returns the component names in table order.
    ///
    /// Every offset in the table is relative to the cabinet descriptor.
    pub fn component_names(&self, data: &[u8]) -> Result<Vec<String>, CabinetError> {
        if self.cab_descriptor_size == 0 {
            return Ok(vec![]);
        }

        let base = self.cab_descriptor_offset as usize;
        let descriptor = data.get(base..).ok_or(CabinetError::Truncated(base))?;
        let at = |offset: usize| {
            u32_at(descriptor, offset).ok_or(CabinetError::Truncated(base + offset))
        };

        let mut names = vec![];
        for slot in 0..MAX_COMPONENT_COUNT {
            let mut next = at(COMPONENT_OFFSETS + slot * 4)?;
            let mut length = 0;

            // Each list node is { name_offset, descriptor_offset, next_offset }.
            while next != 0 {
                length += 1;
                if length > MAX_LIST_LENGTH {
                    return Err(CabinetError::CorruptOffsetList(slot));
                }

                let node = next as usize;
                let component = at(node + 4)? as usize;
                next = at(node + 8)?;

                let name_offset = at(component)? as usize;
                let name = c_str_at(descriptor, name_offset)
                    .ok_or(CabinetError::Truncated(base + name_offset))?;
                names.push(name);
            }
        }

        Ok(names)
    }
}
