//! This crate provides core data types and file format support for the `glyphput-rs` project.
//!
//! # File Formats
//!
//! - **BMP**: legacy bitmap container holding the pre-rendered 32-bpp glyph atlas
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use glyphput_types::prelude::*;
//!
//! let atlas = BmpFile::open("system_font.bmp")?;
//! assert_eq!(atlas.bit_count(), 32);
//! # Ok::<(), BmpError>(())
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use glyphput_types::file::BmpFile;
//!
//! let atlas = BmpFile::open("system_font.bmp");
//! ```

pub mod file;

/// `use glyphput_types::prelude::*;` to import commonly used items.
pub mod prelude;
