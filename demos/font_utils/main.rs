//! Font CLI Utility
//!
//! A command-line tool for inspecting glyph atlases and rendering text with
//! them.
//!
//! # Features
//!
//! - **info**: Display atlas information (dimensions, bit depth, code ranges)
//! - **render**: Render UTF-8 text to a PNG image using the atlas
//!
//! # Atlas Format
//!
//! The atlas is a 32-bpp bitmap holding a grid of 31×37 glyph cells indexed
//! by Shift-JIS character codes:
//! - Single-byte characters (0x00-0x7F): ASCII
//! - Single-byte characters (0xA1-0xDF): Half-width katakana
//! - Double-byte characters: Japanese hiragana, katakana, kanji
//!
//! # Usage Examples
//!
//! ```bash
//! # Display atlas information
//! cargo run --example font_utils -- info SYSTEM_FONT.BMP
//!
//! # Render text with the stock code-range table
//! cargo run --example font_utils -- render SYSTEM_FONT.BMP "Hello World" -o hello.png
//!
//! # Render with a custom table and colors
//! cargo run --example font_utils -- render atlas.bmp "ABC" -t table.json --color 32,32,160
//! ```

use clap::{Parser, Subcommand};
use glyphput_rs::prelude::*;
use image::RgbImage;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "font_utils")]
#[command(author = "glyphput-rs project")]
#[command(version = "1.0")]
#[command(about = "Glyph atlas utility - inspect atlases and render text", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display atlas information
	Info {
		/// Input atlas bitmap path
		#[arg(value_name = "INPUT_BMP")]
		input: PathBuf,
	},

	/// Render text to a PNG image
	Render {
		/// Input atlas bitmap path
		#[arg(value_name = "INPUT_BMP")]
		input: PathBuf,

		/// Text to render (UTF-8 string)
		#[arg(value_name = "TEXT")]
		text: String,

		/// Output PNG file path
		#[arg(short, long, value_name = "OUTPUT_PNG", default_value = "text_render.png")]
		output: PathBuf,

		/// Code-range table as JSON (defaults to the stock table)
		#[arg(short, long, value_name = "TABLE_JSON")]
		table: Option<PathBuf>,

		/// Foreground color as R,G,B
		#[arg(long, default_value = "0,0,0")]
		color: String,

		/// Background color as R,G,B
		#[arg(long, default_value = "255,255,255")]
		background: String,

		/// Padding around the text in pixels
		#[arg(long, default_value = "4")]
		padding: u32,
	},
}

/// Parses an "R,G,B" triple.
fn parse_color(value: &str) -> Result<Color, String> {
	let channels: Vec<&str> = value.split(',').collect();
	if channels.len() != 3 {
		return Err(format!("Invalid color '{value}': expected R,G,B"));
	}

	let mut parsed = [0u8; 3];
	for (slot, channel) in parsed.iter_mut().zip(&channels) {
		*slot = channel
			.trim()
			.parse()
			.map_err(|e| format!("Invalid color '{value}': {e}"))?;
	}

	Ok(Color::new(parsed[0], parsed[1], parsed[2]))
}

/// Loads a code-range table from JSON, or the stock table.
fn load_charmap(table: Option<&PathBuf>) -> Result<CharMap, String> {
	let Some(path) = table else {
		return Ok(CharMap::stock());
	};

	let json =
		fs::read_to_string(path).map_err(|e| format!("Failed to read table file: {e}"))?;
	let ranges: Vec<CodeRange> =
		serde_json::from_str(&json).map_err(|e| format!("Failed to parse table file: {e}"))?;

	Ok(CharMap::new(ranges))
}

/// Handles the 'info' command
fn handle_info(input: &PathBuf) -> Result<(), String> {
	log::info!("Loading atlas: {}", input.display());

	let atlas = BmpFile::open(input).map_err(|e| format!("Failed to load atlas: {e}"))?;

	println!("\n=== Atlas Information ===");
	println!("File: {}", input.display());
	println!("{}", atlas.file_header());
	println!("{}", atlas.info_header());
	println!(
		"Cell grid: {}x{} pixels per cell, {} cells per row-band",
		constants::CELL_WIDTH,
		constants::CELL_HEIGHT,
		constants::CELLS_PER_LINE,
	);

	println!("\n=== Stock Code Ranges ===");
	for range in CharMap::stock().ranges() {
		println!(
			"0x{:04X} - 0x{:04X} anchored at band {}",
			range.first, range.last, range.anchor,
		);
	}

	Ok(())
}

/// Handles the 'render' command
fn handle_render(
	input: &PathBuf,
	text: &str,
	output: &PathBuf,
	table: Option<&PathBuf>,
	color: &str,
	background: &str,
	padding: u32,
) -> Result<(), String> {
	let foreground = parse_color(color)?;
	let background = parse_color(background)?;
	let charmap = load_charmap(table)?;

	log::info!("Loading atlas: {}", input.display());
	let data = fs::read(input).map_err(|e| format!("Failed to read atlas: {e}"))?;

	// Worst case one full cell per character
	let width = padding * 2 + text.chars().count() as u32 * constants::CELL_WIDTH as u32;
	let height = padding * 2 + constants::CELL_HEIGHT as u32;

	let mut font = BitmapFont::with_charmap(&data, charmap, FrameBuffer::new(width, height))
		.map_err(|e| format!("Failed to load font: {e}"))?;

	font.clear(background.r, background.g, background.b);
	font.set_color(foreground.r, foreground.g, foreground.b);
	font.draw_string(padding as i32, padding as i32, text);

	log::info!("Rendering {} character(s) to {}", text.chars().count(), output.display());

	let surface = font.into_surface();
	let image = RgbImage::from_raw(surface.width(), surface.height(), surface.into_vec())
		.ok_or("Rendered surface has an unexpected size")?;
	image.save(output).map_err(|e| format!("Failed to save image: {e}"))?;

	println!("✓ Image saved: {}", output.display());

	Ok(())
}

fn main() {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let result = match cli.command {
		Commands::Info {
			input,
		} => handle_info(&input),
		Commands::Render {
			input,
			text,
			output,
			table,
			color,
			background,
			padding,
		} => handle_render(
			&input,
			&text,
			&output,
			table.as_ref(),
			&color,
			&background,
			padding,
		),
	};

	if let Err(e) = result {
		eprintln!("Error: {e}");
		std::process::exit(1);
	}
}
