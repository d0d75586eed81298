//! Bitmap-atlas font rendering.
//!
//! [`BitmapFont`] owns the parsed atlas, the code-range table, the current
//! foreground color, and the destination surface, and drives the
//! resolve → measure → composite pipeline once per character.
//!
//! The atlas stores rows bottom-up, so a glyph's screen row `py` reads atlas
//! row `37 - py` relative to the cell origin. Compositing mixes the cell's
//! alpha with the foreground color; the inverse alpha is folded back into
//! each channel so low-alpha edge pixels bleed toward white instead of
//! dropping out, which keeps the anti-aliasing baked into the atlas.

use std::path::Path;

use glyphput_types::file::BmpFile;

use crate::charmap::CharMap;
use crate::codec::{self, SjisCodes};
use crate::error::FontError;
use crate::surface::{Color, DrawSurface};

use constants::{BLANK_ADVANCE, BYTES_PER_PIXEL, CELL_HEIGHT, CELL_WIDTH};

/// Glyph cell constants shared by every slot in the atlas.
pub mod constants {
	/// Glyph cell width in pixels
	pub const CELL_WIDTH: usize = 31;

	/// Glyph cell height in pixels
	pub const CELL_HEIGHT: usize = 37;

	/// Bytes per atlas pixel, stored as [alpha, red, green, blue]
	pub const BYTES_PER_PIXEL: usize = 4;

	/// Number of glyph cells per atlas row-band
	pub const CELLS_PER_LINE: usize = 16;

	/// Byte offset from a row-band boundary to its first cell
	pub const ANCHOR_BYTE_MARGIN: usize = 16;

	/// One glyph cell's contribution to a pixel row, in bytes
	pub const CELL_STRIDE: usize = CELL_WIDTH * BYTES_PER_PIXEL;

	/// Horizontal advance of blank glyphs: a quarter cell
	pub const BLANK_ADVANCE: u32 = CELL_WIDTH as u32 / 4;
}

/// Glyph-atlas font bound to a destination surface.
///
/// Single-threaded and fully synchronous: every draw call completes all of
/// its pixel writes before returning. The atlas is immutable once
/// constructed; the foreground color and the surface are the only mutable
/// state.
#[derive(Debug)]
pub struct BitmapFont<S> {
	atlas: BmpFile,
	charmap: CharMap,
	/// One band of glyph cells in bytes (atlas width × cell height × 4)
	row_band: usize,
	color: Color,
	surface: S,
}

impl<S: DrawSurface> BitmapFont<S> {
	/// Creates a font from an atlas bitmap on disk, taking ownership of the
	/// destination surface.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is not a usable
	/// 32-bpp bitmap. Nothing is retained on failure.
	pub fn create(path: impl AsRef<Path>, surface: S) -> Result<Self, FontError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data, surface)
	}

	/// Creates a font from atlas bytes already in memory, using the stock
	/// code-range table.
	pub fn from_bytes(data: &[u8], surface: S) -> Result<Self, FontError> {
		Self::with_charmap(data, CharMap::stock(), surface)
	}

	/// Creates a font from atlas bytes and an externally supplied
	/// code-range table.
	pub fn with_charmap(data: &[u8], charmap: CharMap, surface: S) -> Result<Self, FontError> {
		let atlas = BmpFile::from_bytes(data)?;
		let row_band = atlas.width() as usize * CELL_HEIGHT * BYTES_PER_PIXEL;

		Ok(Self {
			atlas,
			charmap,
			row_band,
			color: Color::BLACK,
			surface,
		})
	}

	/// Sets the foreground color for subsequent draws.
	pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
		self.color = Color::new(r, g, b);
	}

	/// Returns the current foreground color.
	pub fn color(&self) -> Color {
		self.color
	}

	/// Returns the parsed atlas bitmap.
	pub fn atlas(&self) -> &BmpFile {
		&self.atlas
	}

	/// Returns the code-range table in use.
	pub fn charmap(&self) -> &CharMap {
		&self.charmap
	}

	/// Returns a reference to the destination surface.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Returns a mutable reference to the destination surface.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// Consumes the font, returning the destination surface.
	pub fn into_surface(self) -> S {
		self.surface
	}

	/// Fills the entire surface with the given color.
	pub fn clear(&mut self, r: u8, g: u8, b: u8) {
		self.surface.clear(Color::new(r, g, b));
	}

	/// Draws one glyph by its Shift-JIS character code and returns the
	/// horizontal advance.
	///
	/// Spaces and codes outside the range table draw nothing and advance a
	/// quarter cell. For everything else the advance is the distance from
	/// the cell origin to the right edge of the glyph's ink.
	pub fn draw_sjis_char(&mut self, x: i32, y: i32, code: u32) -> u32 {
		let pixel_len = self.atlas.pixels().len();
		let Some(offset) = self.charmap.resolve(code, self.row_band, pixel_len) else {
			return BLANK_ADVANCE;
		};

		let (min_x, max_x) = self.ink_bounds(offset);

		let atlas_width = self.atlas.width() as usize;
		let pixels = self.atlas.pixels();
		for py in 0..CELL_HEIGHT {
			// Only the span that actually carries ink is composited
			for px in min_x..max_x {
				// Flip: the atlas stores rows bottom-up
				let src = offset + BYTES_PER_PIXEL * (atlas_width * (CELL_HEIGHT - py) + px);
				let alpha = pixels[src];
				if alpha == 0 {
					continue;
				}

				let out = blend(self.color, alpha, pixels[src + 1], pixels[src + 2], pixels[src + 3]);
				self.surface.set_pixel(x + px as i32, y + py as i32, out);
			}
		}

		max_x as u32
	}

	/// Draws a Shift-JIS byte string, advancing the cursor by each glyph's
	/// measured width.
	///
	/// Stops at a NUL byte or at the end of the slice.
	pub fn draw_sjis_string(&mut self, x: i32, y: i32, text: &[u8]) {
		let mut pos_x = x;
		for code in SjisCodes::new(text) {
			pos_x += self.draw_sjis_char(pos_x, y, code) as i32;
		}
	}

	/// Draws one character, converting it to the Shift-JIS code space
	/// first, and returns the horizontal advance.
	///
	/// Characters with no Shift-JIS mapping render as blanks.
	pub fn draw_char(&mut self, x: i32, y: i32, ch: char) -> u32 {
		match codec::sjis_code(ch) {
			Some(code) => self.draw_sjis_char(x, y, code),
			None => BLANK_ADVANCE,
		}
	}

	/// Draws a string, advancing the cursor by each glyph's measured width.
	pub fn draw_string(&mut self, x: i32, y: i32, text: &str) {
		let mut pos_x = x;
		for ch in text.chars() {
			pos_x += self.draw_char(pos_x, y, ch) as i32;
		}
	}

	/// Draws a UTF-16 string, converting each unit independently.
	///
	/// Stops at a NUL unit or at the end of the slice.
	pub fn draw_utf16_string(&mut self, x: i32, y: i32, units: &[u16]) {
		let mut pos_x = x;
		for &unit in units {
			if unit == 0 {
				break;
			}
			let advance = match codec::utf16_code(unit) {
				Some(code) => self.draw_sjis_char(pos_x, y, code),
				None => BLANK_ADVANCE,
			};
			pos_x += advance as i32;
		}
	}

	/// Scans a glyph cell for its tight horizontal ink bounds
	/// `(min_x, max_x)`, upper bound exclusive.
	///
	/// A cell with no ink at all keeps the full-cell default `(0, 31)`.
	fn ink_bounds(&self, offset: usize) -> (usize, usize) {
		let atlas_width = self.atlas.width() as usize;
		let pixels = self.atlas.pixels();

		let mut min = CELL_WIDTH;
		let mut max = 0;
		for py in 0..CELL_HEIGHT {
			for px in 0..CELL_WIDTH {
				let src = offset + BYTES_PER_PIXEL * (atlas_width * (CELL_HEIGHT - py) + px);
				if pixels[src] == 0 {
					continue;
				}
				min = min.min(px);
				max = max.max(px);
			}
		}

		if min > max {
			(0, CELL_WIDTH)
		} else {
			(min, max + 1)
		}
	}
}

/// Mixes one atlas pixel with the foreground color.
fn blend(foreground: Color, alpha: u8, red: u8, green: u8, blue: u8) -> Color {
	let luma = (u32::from(red) + u32::from(green) + u32::from(blue)) / 3;
	let inv_alpha = 255 - u32::from(alpha);

	// factor never exceeds (255 - luma - inv_alpha) / 255, so each channel
	// sum stays within u8 range
	let factor = (1.0 - (luma + inv_alpha) as f32 / 255.0).clamp(0.0, 1.0);
	let channel = |c: u8| (f32::from(c) * factor) as u8 + inv_alpha as u8;

	Color::new(channel(foreground.r), channel(foreground.g), channel(foreground.b))
}
