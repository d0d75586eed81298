#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `glyphput-rs` revives the bitmap-font text renderer of an old game and
//! brings it to modern platforms using Rust.
//!
//! Text is drawn by slicing fixed-size glyph cells out of one pre-rendered
//! 32-bpp bitmap atlas and compositing them onto a caller-supplied surface,
//! with mixed single-byte and double-byte (Shift-JIS) text support.
//!
//! ```no_run
//! use glyphput_rs::prelude::*;
//!
//! let mut font = BitmapFont::create("system_font.bmp", FrameBuffer::new(640, 480))?;
//! font.set_color(32, 32, 160);
//! font.draw_string(16, 16, "こんにちは");
//! # Ok::<(), FontError>(())
//! ```

// Re-export the member crates for convenience
pub use glyphput_render;
pub use glyphput_types;

// Re-export commonly used types at crate root
pub use glyphput_render::{
	BitmapFont, CharMap, CodeRange, Color, DrawSurface, FontError, FrameBuffer, SjisCodes,
};
pub use glyphput_types::file::{BmpError, BmpFile};

/// `use glyphput_rs::prelude::*;` to import commonly used items.
pub mod prelude {
	#[doc(inline)]
	pub use glyphput_render::prelude::*;

	#[doc(inline)]
	pub use glyphput_types::prelude::*;
}
