//! Read-only ISO9660 volume access: descriptors, directory records and path lookup.

pub mod dir_record;
pub mod entry;
pub mod fs;
pub mod pvd;
pub mod volume_error;

pub use entry::{EntryKind, EntryStat, translate_name};
pub use fs::Iso9660Fs;
pub use pvd::PrimaryVolumeDescriptor;
pub use volume_error::VolumeError;
