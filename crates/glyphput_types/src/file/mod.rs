//! File type support for `glyphput-rs` project.

mod error;

pub mod bmp;

// Re-export unified error type
pub use error::BmpError;

// Re-export main file types
pub use bmp::{File as BmpFile, FileHeader as BmpFileHeader, InfoHeader as BmpInfoHeader};
