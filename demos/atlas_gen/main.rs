//! Atlas Generator Utility
//!
//! Synthesizes a valid 32-bpp glyph atlas bitmap plus a matching JSON
//! code-range table, so the render tooling can be exercised without the
//! original game asset. Generated glyphs are simple procedural patterns
//! (a framed box with code-dependent stripes), inked at full alpha with
//! softened edges.
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate atlas.bmp and table.json covering printable ASCII
//! cargo run --example atlas_gen -- -o atlas.bmp -t table.json
//!
//! # Render with the generated pair
//! cargo run --example font_utils -- render atlas.bmp "Hello" -t table.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use glyphput_rs::prelude::*;
use glyphput_types::file::bmp::{FileHeader, InfoHeader, constants as bmp};
use std::fs;
use std::path::PathBuf;

/// First generated character code (space)
const FIRST_CODE: u32 = 0x0020;

/// Last generated character code
const LAST_CODE: u32 = 0x007F;

#[derive(Parser)]
#[command(name = "atlas_gen")]
#[command(author = "glyphput-rs project")]
#[command(version = "1.0")]
#[command(about = "Generates a synthetic glyph atlas and its code-range table", long_about = None)]
struct Cli {
	/// Output atlas bitmap path
	#[arg(short, long, value_name = "OUTPUT_BMP", default_value = "atlas.bmp")]
	output: PathBuf,

	/// Output JSON table path
	#[arg(short, long, value_name = "OUTPUT_JSON", default_value = "table.json")]
	table: PathBuf,
}

/// Draws one procedural glyph into the atlas pixel buffer.
fn draw_glyph(pixels: &mut [u8], atlas_width: usize, offset: usize, code: u32) {
	let width = constants::CELL_WIDTH;
	let height = constants::CELL_HEIGHT;

	// Ink width varies with the code so trimming has something to measure
	let ink_width = 8 + (code as usize % 16);

	for py in 0..height {
		for px in 0..ink_width.min(width) {
			let edge = py == 2 || py == height - 3 || px == 0 || px == ink_width - 1;
			let stripe = (px + py + code as usize) % 3 == 0;
			if !edge && !stripe {
				continue;
			}

			// Softened edges exercise the alpha blend path
			let alpha = if edge { 160 } else { 255 };
			let src = offset
				+ constants::BYTES_PER_PIXEL * (atlas_width * (constants::CELL_HEIGHT - py) + px);
			pixels[src..src + 4].copy_from_slice(&[alpha, 0, 0, 0]);
		}
	}
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let cell_lines = ((LAST_CODE - FIRST_CODE) as usize) / constants::CELLS_PER_LINE + 1;
	// One band per cell line, plus one spare band above the anchor and one
	// spare pixel row for the anchor byte margin
	let bands = cell_lines + 1;
	let anchor = cell_lines as u32;

	let atlas_width = constants::CELLS_PER_LINE * constants::CELL_WIDTH;
	let atlas_height = bands * constants::CELL_HEIGHT + 1;
	let row_band = atlas_width * constants::CELL_HEIGHT * constants::BYTES_PER_PIXEL;
	let pixel_len = atlas_width * atlas_height * constants::BYTES_PER_PIXEL;

	let ranges = vec![CodeRange::new(FIRST_CODE, LAST_CODE, anchor)];
	let map = CharMap::new(ranges.clone());

	log::info!(
		"Generating {}x{} atlas covering 0x{FIRST_CODE:04X}-0x{LAST_CODE:04X}",
		atlas_width,
		atlas_height,
	);

	let mut pixels = vec![0u8; pixel_len];
	let mut generated = 0usize;
	for code in FIRST_CODE..=LAST_CODE {
		let Some(offset) = map.resolve(code, row_band, pixel_len) else {
			continue;
		};
		draw_glyph(&mut pixels, atlas_width, offset, code);
		generated += 1;
	}

	let total = bmp::PIXEL_DATA_OFFSET + pixel_len;
	let mut data = Vec::with_capacity(total);
	data.extend_from_slice(&FileHeader::new(total as u32).to_bytes());
	data.extend_from_slice(&InfoHeader::new(atlas_width as i32, atlas_height as i32).to_bytes());
	data.extend_from_slice(&pixels);

	fs::write(&cli.output, &data)
		.with_context(|| format!("Failed to write atlas: {}", cli.output.display()))?;
	println!("✓ Atlas saved: {} ({} glyphs)", cli.output.display(), generated);

	let json = serde_json::to_string_pretty(&ranges)?;
	fs::write(&cli.table, json)
		.with_context(|| format!("Failed to write table: {}", cli.table.display()))?;
	println!("✓ Table saved: {}", cli.table.display());

	// Sanity check: the generated pair must load
	BitmapFont::with_charmap(&data, map, FrameBuffer::new(8, 8))
		.context("Generated atlas failed to load")?;

	Ok(())
}
