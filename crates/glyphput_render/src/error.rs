//! Error types for font construction.

use thiserror::Error;

/// Errors that can occur when creating a bitmap font
///
/// All rendering-time conditions (unknown characters, malformed byte
/// strings) degrade to blank output instead of failing; only construction
/// can return an error, and a failed construction retains no state.
#[derive(Debug, Error)]
pub enum FontError {
	/// Atlas bitmap is not a usable 32-bpp image
	#[error(transparent)]
	Atlas(#[from] glyphput_types::file::BmpError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
