/// The size in bytes of a logical ISO9660 sector.
pub const SECTOR_SIZE: usize = 2048;

/// The size in bytes of a raw CD sector (sync + header + user data + EDC/ECC).
pub const RAW_SECTOR_SIZE: usize = 2352;

/// The sector holding the first volume descriptor.
pub const PVD_SECTOR: u32 = 16;

/// Standard identifier found in every volume descriptor.
pub const ISO_IDENTIFIER: [u8; 5] = *b"CD001";

/// Sync pattern starting every raw CD sector.
pub const RAW_SYNC_PATTERN: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Offset of the user data in a Mode 1 raw sector (12 sync + 4 header).
pub const MODE1_DATA_OFFSET: usize = 16;

/// Offset of the user data in a Mode 2 Form 1 raw sector (12 sync + 4 header + 8 subheader).
pub const MODE2_FORM1_DATA_OFFSET: usize = 24;
