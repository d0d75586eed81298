//! Benchmark helper utilities for glyphput-rs
//!
//! This module generates synthetic atlas bitmaps so the benchmarks run
//! without the original game asset. The generated atlas covers printable
//! ASCII with fully inked cells, which is the worst case for the compositor
//! (every pixel of every cell gets blended).

use glyphput_render::charmap::{CharMap, CodeRange};
use glyphput_render::font::constants;
use glyphput_types::file::bmp::{FileHeader, InfoHeader, constants as bmp};

/// Number of cell bands in the generated atlas
pub const BANDS: usize = 8;

/// Width of the generated atlas in pixels
pub const ATLAS_WIDTH: usize = constants::CELLS_PER_LINE * constants::CELL_WIDTH;

/// Height of the generated atlas in pixels
pub const ATLAS_HEIGHT: usize = BANDS * constants::CELL_HEIGHT;

/// Returns the range table matching [`generate_test_atlas`].
///
/// Codes `0x20..=0x7F` map onto six cell lines below the anchor band.
pub fn test_charmap() -> CharMap {
	CharMap::new(vec![CodeRange::new(0x0020, 0x007F, 6)])
}

/// Generates a synthetic 32-bpp atlas bitmap with every mapped cell fully
/// inked at full alpha.
pub fn generate_test_atlas() -> Vec<u8> {
	let row_band = ATLAS_WIDTH * constants::CELL_HEIGHT * constants::BYTES_PER_PIXEL;
	let pixel_len = ATLAS_WIDTH * ATLAS_HEIGHT * constants::BYTES_PER_PIXEL;
	let total = bmp::PIXEL_DATA_OFFSET + pixel_len;

	let mut data = Vec::with_capacity(total);
	data.extend_from_slice(&FileHeader::new(total as u32).to_bytes());
	data.extend_from_slice(&InfoHeader::new(ATLAS_WIDTH as i32, ATLAS_HEIGHT as i32).to_bytes());
	data.resize(total, 0);

	let map = test_charmap();
	for code in 0x0021..=0x007F {
		let Some(offset) = map.resolve(code, row_band, pixel_len) else {
			continue;
		};
		for py in 0..constants::CELL_HEIGHT {
			for px in 0..constants::CELL_WIDTH {
				let src = bmp::PIXEL_DATA_OFFSET
					+ offset
					+ constants::BYTES_PER_PIXEL
						* (ATLAS_WIDTH * (constants::CELL_HEIGHT - py) + px);
				data[src..src + 4].copy_from_slice(&[255, 0, 0, 0]);
			}
		}
	}

	data
}
