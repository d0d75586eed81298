//! End-to-end rendering tests against a synthetic in-memory atlas.

use glyphput_rs::prelude::*;
use glyphput_types::file::bmp::{FileHeader, InfoHeader, constants as bmp};

const ATLAS_WIDTH: usize = constants::CELLS_PER_LINE * constants::CELL_WIDTH;
const ATLAS_HEIGHT: usize = 4 * constants::CELL_HEIGHT;
const ROW_BAND: usize = ATLAS_WIDTH * constants::CELL_HEIGHT * constants::BYTES_PER_PIXEL;
const PIXEL_LEN: usize = ATLAS_WIDTH * ATLAS_HEIGHT * constants::BYTES_PER_PIXEL;

/// Table covering printable ASCII on two cell lines below the anchor.
fn test_map() -> CharMap {
	CharMap::new(vec![CodeRange::new(0x0040, 0x005F, 2)])
}

/// Builds an all-transparent 32-bpp atlas bitmap.
fn blank_atlas() -> Vec<u8> {
	let total = bmp::PIXEL_DATA_OFFSET + PIXEL_LEN;
	let mut data = Vec::with_capacity(total);
	data.extend_from_slice(&FileHeader::new(total as u32).to_bytes());
	data.extend_from_slice(&InfoHeader::new(ATLAS_WIDTH as i32, ATLAS_HEIGHT as i32).to_bytes());
	data.resize(total, 0);
	data
}

/// Fills the whole cell of `code` with opaque black ink.
fn fill_cell(data: &mut [u8], map: &CharMap, code: u32) {
	let offset = map.resolve(code, ROW_BAND, PIXEL_LEN).unwrap();
	for py in 0..constants::CELL_HEIGHT {
		for px in 0..constants::CELL_WIDTH {
			let src = bmp::PIXEL_DATA_OFFSET
				+ offset
				+ constants::BYTES_PER_PIXEL * (ATLAS_WIDTH * (constants::CELL_HEIGHT - py) + px);
			data[src..src + 4].copy_from_slice(&[255, 0, 0, 0]);
		}
	}
}

#[test_log::test]
fn test_load_and_draw() {
	let map = test_map();
	let mut data = blank_atlas();
	fill_cell(&mut data, &map, 0x41);

	let mut font =
		BitmapFont::with_charmap(&data, map, FrameBuffer::new(64, 48)).expect("usable atlas");
	font.set_color(255, 0, 0);
	let advance = font.draw_char(0, 0, 'A');

	// A fully inked cell spans the whole cell width
	assert_eq!(advance, constants::CELL_WIDTH as u32);
	assert_eq!(font.surface().pixel(0, 0), Some(Color::new(255, 0, 0)));
	assert_eq!(
		font.surface().pixel(constants::CELL_WIDTH as u32 - 1, 0),
		Some(Color::new(255, 0, 0)),
	);
	// One past the cell is untouched
	assert_eq!(
		font.surface().pixel(constants::CELL_WIDTH as u32, 0),
		Some(Color::WHITE),
	);
}

#[test_log::test]
fn test_string_cursor_advances_per_glyph() {
	let map = test_map();
	let mut data = blank_atlas();
	fill_cell(&mut data, &map, 0x41);
	fill_cell(&mut data, &map, 0x42);

	let mut by_string =
		BitmapFont::with_charmap(&data, map.clone(), FrameBuffer::new(96, 48)).unwrap();
	by_string.draw_string(10, 10, "AB");

	let mut by_char = BitmapFont::with_charmap(&data, map, FrameBuffer::new(96, 48)).unwrap();
	let mut cursor = 10;
	cursor += by_char.draw_char(cursor, 10, 'A') as i32;
	by_char.draw_char(cursor, 10, 'B');

	assert_eq!(by_string.surface(), by_char.surface());
}

#[test_log::test]
fn test_spaces_only_advance() {
	let data = blank_atlas();
	let mut font =
		BitmapFont::with_charmap(&data, test_map(), FrameBuffer::new(64, 48)).unwrap();
	let before = font.surface().clone();

	// Half-width and full-width space both draw nothing
	assert_eq!(font.draw_sjis_char(0, 0, 0x0020), 7);
	assert_eq!(font.draw_sjis_char(0, 0, 0x8140), 7);
	font.draw_string(0, 0, " 　");

	assert_eq!(font.surface(), &before);
}

#[test_log::test]
fn test_malformed_sjis_stops_safely() {
	let map = test_map();
	let mut data = blank_atlas();
	fill_cell(&mut data, &map, 0x41);

	let mut font = BitmapFont::with_charmap(&data, map, FrameBuffer::new(64, 48)).unwrap();
	// Trailing lead byte must not be read past
	font.draw_sjis_string(0, 0, &[0x41, 0x82]);
	font.draw_sjis_string(0, 0, &[0x82]);
}

#[test_log::test]
fn test_24bpp_atlas_is_rejected() {
	let mut data = blank_atlas();
	data[28..30].copy_from_slice(&24u16.to_le_bytes());

	let result = BitmapFont::from_bytes(&data, FrameBuffer::new(8, 8));
	assert!(matches!(
		result,
		Err(FontError::Atlas(BmpError::UnsupportedBitCount(24))),
	));
}

#[test_log::test]
fn test_clear_fills_surface() {
	let data = blank_atlas();
	let mut font =
		BitmapFont::with_charmap(&data, test_map(), FrameBuffer::new(16, 16)).unwrap();

	font.clear(9, 8, 7);
	assert_eq!(font.surface().pixel(0, 0), Some(Color::new(9, 8, 7)));
	assert_eq!(font.surface().pixel(15, 15), Some(Color::new(9, 8, 7)));
}
