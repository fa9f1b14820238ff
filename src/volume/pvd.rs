//! Primary Volume Descriptor structure.
//!
//! This module implements:
//! - Primary Volume Descriptor (PVD) parsing and validation
//! - Access to the identifiers printed in the volume report

use binread::{BinRead, BinReaderExt};
use getset::Getters;
use std::fmt::Write;
use std::io;

use super::dir_record::DirRecord;
use super::volume_error::VolumeError;
use crate::constants::{ISO_IDENTIFIER, SECTOR_SIZE};
use crate::traits::LayoutDisplay;
use crate::utils::padded_str;

/// Primary Volume Descriptor, found at or after sector 16 with type code 1.
///
/// Only the leading part of the descriptor, up to the application identifier, is parsed.
#[derive(BinRead, Debug, Getters)]
#[br(little)]
pub struct PrimaryVolumeDescriptor {
    /// Type code (1 for primary)
    type_code: u8,
    /// Standard identifier "CD001"
    identifier: [u8; 5],
    /// Descriptor version (1)
    _version: u8,
    _unused1: u8,
    /// System identifier (a-characters)
    system_id: [u8; 32],
    /// Volume identifier (d-characters)
    volume_id: [u8; 32],
    _unused2: [u8; 8],
    /// Number of logical blocks in the volume
    _volume_space_size: u32,
    #[br(big)]
    _volume_space_size_be: u32,
    _unused3: [u8; 32],
    _volume_set_size: u16,
    #[br(big)]
    _volume_set_size_be: u16,
    _volume_sequence_number: u16,
    #[br(big)]
    _volume_sequence_number_be: u16,
    /// Logical block size (2048 on every supported volume)
    logical_block_size: u16,
    #[br(big)]
    _logical_block_size_be: u16,
    _path_table_size: u32,
    #[br(big)]
    _path_table_size_be: u32,
    _type_l_path_table: u32,
    _opt_type_l_path_table: u32,
    _type_m_path_table: u32,
    _opt_type_m_path_table: u32,
    /// Directory record of the root directory
    #[get = "pub"]
    root_record: DirRecord,
    /// Volume set identifier
    #[br(count = 128)]
    volume_set_id: Vec<u8>,
    /// Publisher identifier
    #[br(count = 128)]
    publisher_id: Vec<u8>,
    /// Data preparer identifier
    #[br(count = 128)]
    preparer_id: Vec<u8>,
    /// Application identifier
    #[br(count = 128)]
    application_id: Vec<u8>,
}

impl PrimaryVolumeDescriptor {
    /// The type code of a primary volume descriptor.
    pub const TYPE_CODE: u8 = 1;

    /// Parses and validates a descriptor from the sector read at `sector`.
    ///
    /// # Errors
    /// - `VolumeError::BinReadError` if the sector is too short
    /// - `VolumeError::InvalidIdentifier` if the standard identifier is not `CD001`
    /// - `VolumeError::InvalidBlockSize` if the logical block size is not 2048
    pub fn from_slice(buf: &[u8], sector: u32) -> Result<Self, VolumeError> {
        let mut reader = io::Cursor::new(buf);
        let pvd: PrimaryVolumeDescriptor = reader.read_le()?;

        pvd.validate(sector)
    }

    fn validate(self, sector: u32) -> Result<Self, VolumeError> {
        if self.identifier != ISO_IDENTIFIER {
            return Err(VolumeError::InvalidIdentifier(
                String::from_utf8_lossy(&self.identifier).into_owned(),
                sector,
            ));
        }

        if self.type_code != Self::TYPE_CODE {
            return Err(VolumeError::NoPrimaryDescriptor);
        }

        if usize::from(self.logical_block_size) != SECTOR_SIZE {
            return Err(VolumeError::InvalidBlockSize(self.logical_block_size));
        }

        Ok(self)
    }

    pub fn system_id(&self) -> String {
        padded_str(&self.system_id)
    }

    pub fn volume_id(&self) -> String {
        padded_str(&self.volume_id)
    }

    pub fn volume_set_id(&self) -> String {
        padded_str(&self.volume_set_id)
    }

    pub fn publisher_id(&self) -> String {
        padded_str(&self.publisher_id)
    }

    pub fn preparer_id(&self) -> String {
        padded_str(&self.preparer_id)
    }

    pub fn application_id(&self) -> String {
        padded_str(&self.application_id)
    }
}

/// Renders the identifiers of the volume, one per line.
impl LayoutDisplay for PrimaryVolumeDescriptor {
    fn display_layout(&self, indent: u8) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let indent = " ".repeat(indent.into());

        writeln!(out, "{indent}Application: {}", self.application_id())?;
        writeln!(out, "{indent}Preparer: {}", self.preparer_id())?;
        writeln!(out, "{indent}Publisher: {}", self.publisher_id())?;
        writeln!(out, "{indent}System: {}", self.system_id())?;
        writeln!(out, "{indent}Volume: {}", self.volume_id())?;
        writeln!(out, "{indent}Volume Set: {}", self.volume_set_id())?;

        Ok(out)
    }
}
