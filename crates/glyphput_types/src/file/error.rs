//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when parsing or manipulating BMP atlas files
#[derive(Debug, Error)]
pub enum BmpError {
	/// Not enough data to parse
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Invalid magic number
	#[error("Invalid magic number: {0:02X?}")]
	InvalidMagic([u8; 2]),

	/// Unusable image dimensions
	#[error("Invalid dimensions: {width}x{height} pixels")]
	InvalidDimensions {
		/// Width read from the info header
		width: i32,
		/// Height read from the info header
		height: i32,
	},

	/// Unsupported bit depth; the glyph atlas must be 32 bits per pixel
	#[error("Unsupported bit count: {0} (expected 32)")]
	UnsupportedBitCount(u16),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
