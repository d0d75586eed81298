//! Character-code to atlas-offset resolution.
//!
//! The atlas is a uniform grid of 31×37 glyph cells, 16 cells per row-band,
//! stored bottom-up. The supported character codes form a handful of
//! contiguous blocks, and the atlas image was authored with irregular
//! section boundaries, so each block carries its own row-band anchor. The
//! anchor table is the single point of truth tying code space to atlas
//! geometry: it is data, not derivation, and a different atlas image needs a
//! different table.
//!
//! For a code inside a block, the cell offset is computed as:
//!
//! ```text
//! anchor_offset = row_band * anchor + 16
//! index         = code - first
//! offset        = anchor_offset
//!                 - row_band * (index / 16)
//!                 - (16 - index % 16) * cell_stride
//! ```
//!
//! where `row_band` is one band of cells in bytes
//! (`atlas_width * 37 * 4`) and `cell_stride` is one cell's contribution to
//! a pixel row (`31 * 4`).

use serde::{Deserialize, Serialize};

use crate::font::constants::{ANCHOR_BYTE_MARGIN, CELL_STRIDE, CELLS_PER_LINE};

/// Code of the single-byte (half-width) space character
pub const HALF_WIDTH_SPACE: u32 = 0x0020;

/// Code of the double-byte (full-width) space character
pub const FULL_WIDTH_SPACE: u32 = 0x8140;

/// A contiguous block of character codes mapped onto a contiguous run of
/// glyph cells.
///
/// `anchor` is the row-band index of the block's first cell, counted from
/// the bottom of the atlas. Entries are atlas-specific configuration and can
/// be loaded from JSON for a custom atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeRange {
	/// First character code of the block (inclusive)
	pub first: u32,

	/// Last character code of the block (inclusive)
	pub last: u32,

	/// Row-band index of the block's first cell, from the bottom of the atlas
	pub anchor: u32,
}

impl CodeRange {
	/// Creates a code range entry.
	pub const fn new(first: u32, last: u32, anchor: u32) -> Self {
		Self {
			first,
			last,
			anchor,
		}
	}

	/// Returns true if `code` falls inside this range.
	pub fn contains(&self, code: u32) -> bool {
		code >= self.first && code <= self.last
	}
}

/// Piecewise mapping from character codes to glyph cell offsets.
///
/// Resolution scans the table in order and the first entry containing the
/// code wins, so table order is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharMap {
	ranges: Vec<CodeRange>,
}

impl CharMap {
	/// Creates a map from an externally supplied range table.
	pub fn new(ranges: Vec<CodeRange>) -> Self {
		Self {
			ranges,
		}
	}

	/// Returns the table for the stock atlas image.
	///
	/// Anchor values were measured against that image and hold for no other.
	pub fn stock() -> Self {
		Self::new(vec![
			CodeRange::new(0x0020, 0x00DF, 328),
			CodeRange::new(0x00A0, 0x00DF, 320),
			CodeRange::new(0x8140, 0x84BF, 316),
			CodeRange::new(0x8740, 0x879F, 284),
			CodeRange::new(0x8890, 0x987F, 254),
		])
	}

	/// Returns the range table.
	pub fn ranges(&self) -> &[CodeRange] {
		&self.ranges
	}

	/// Resolves a character code to a byte offset into the atlas pixel
	/// buffer, or `None` for blanks.
	///
	/// `row_band` is one band of cells in bytes
	/// (`atlas_width * cell_height * bytes_per_pixel`) and `pixel_len` is
	/// the length of the atlas pixel buffer.
	///
	/// `None` covers the two reserved space codes, codes outside every
	/// range, and cells whose pixel span would fall outside the atlas —
	/// callers render all of them as pure advance with no pixels drawn.
	pub fn resolve(&self, code: u32, row_band: usize, pixel_len: usize) -> Option<usize> {
		if code == HALF_WIDTH_SPACE || code == FULL_WIDTH_SPACE {
			return None;
		}

		let entry = self.ranges.iter().find(|range| range.contains(code))?;

		let anchor_offset =
			row_band.checked_mul(entry.anchor as usize)?.checked_add(ANCHOR_BYTE_MARGIN)?;
		let index = (code - entry.first) as usize;
		let line = index / CELLS_PER_LINE;
		let slot = index % CELLS_PER_LINE;

		let offset = anchor_offset
			.checked_sub(row_band.checked_mul(line)?)?
			.checked_sub((CELLS_PER_LINE - slot) * CELL_STRIDE)?;

		// Compositing reads up to one row-band plus one cell stride past the
		// cell origin (bottom-up addressing starts at the row above the cell)
		if offset.checked_add(row_band + CELL_STRIDE)? > pixel_len {
			return None;
		}

		Some(offset)
	}
}

impl Default for CharMap {
	fn default() -> Self {
		Self::stock()
	}
}
