//! Backing media: live devices, raw CD images and plain ISO9660 image files.

pub mod backing;
pub mod device;
pub mod image;
pub mod medium_error;

pub use backing::Backing;
pub use device::{DeviceDriver, DeviceReader};
pub use image::ImageReader;
pub use medium_error::MediumError;
