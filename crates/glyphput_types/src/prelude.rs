//! Prelude module for `glyphput_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use glyphput_types::prelude::*;
//!
//! let atlas = BmpFile::open("system_font.bmp")?;
//! println!("{}", atlas.info_header());
//! # Ok::<(), BmpError>(())
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// BMP atlas types
	BmpError,
	BmpFile,
	BmpFileHeader,
	BmpInfoHeader,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
