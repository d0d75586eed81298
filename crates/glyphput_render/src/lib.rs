//! Glyph-atlas text rendering for the `glyphput-rs` project.
//!
//! Text is drawn by slicing fixed-size glyph cells out of a single
//! pre-rendered 32-bpp bitmap atlas and compositing them onto a destination
//! surface. Rendering one character runs a three-stage pipeline:
//!
//! 1. **resolve** — map the character code to a byte offset inside the atlas
//!    through a piecewise table of code ranges ([`charmap`])
//! 2. **measure** — trim the glyph cell to its tight horizontal ink bounds
//! 3. **composite** — blend the cell's pixels with the current foreground
//!    color and write them to the surface, flipping the atlas's bottom-up
//!    rows ([`font`])
//!
//! String entry points walk Shift-JIS byte strings or wide text ([`codec`])
//! and advance a horizontal cursor by each glyph's measured width.
//!
//! # Examples
//!
//! ```no_run
//! use glyphput_render::{BitmapFont, FrameBuffer};
//!
//! let surface = FrameBuffer::new(640, 480);
//! let mut font = BitmapFont::create("system_font.bmp", surface)?;
//! font.set_color(32, 32, 160);
//! font.draw_string(16, 16, "こんにちは");
//! # Ok::<(), glyphput_render::FontError>(())
//! ```

mod error;

pub mod charmap;
pub mod codec;
pub mod font;
pub mod surface;

pub use charmap::{CharMap, CodeRange};
pub use codec::SjisCodes;
pub use error::FontError;
pub use font::BitmapFont;
pub use surface::{Color, DrawSurface, FrameBuffer};

/// `use glyphput_render::prelude::*;` to import commonly used items.
pub mod prelude;
