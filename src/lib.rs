//!
//! iso-cab: A library and CLI for reading InstallShield cabinets stored on ISO9660 media.
//!
//! This crate provides tools for:
//! - Opening a CD-ROM device, a raw CD image or a plain ISO9660 image through one block reader
//! - Reading the volume descriptor and directory records of an ISO9660 volume
//! - Exposing volume entries through a byte-stream open/seek/tell/read/close and
//!   opendir/readdir/closedir callback contract
//! - Listing the components of a cabinet through that contract
//!
//! # Re-exports
//! - [`Backing`]: Device or image file backing, chosen by probing the medium path
//! - [`Iso9660Fs`]: Read-only ISO9660 volume
//! - [`IsoCabIo`]: Callback contract implementation bound to a volume

pub mod adapter;
pub mod cabinet;
pub mod constants;
pub mod medium;
pub mod report;
pub mod traits;
pub mod utils;
pub mod volume;

/// Callback contract implementation (see [`adapter::io::IsoCabIo`]).
pub use crate::adapter::IsoCabIo;
/// Medium backing selection (see [`medium::backing::Backing`]).
pub use crate::medium::Backing;
/// Read-only ISO9660 volume (see [`volume::fs::Iso9660Fs`]).
pub use crate::volume::Iso9660Fs;
