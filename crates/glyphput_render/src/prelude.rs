//! Prelude module for `glyphput_render`.
//!
//! This module provides a convenient way to import commonly used types and constants.
//!
//! # Examples
//!
//! ```no_run
//! use glyphput_render::prelude::*;
//!
//! let mut font = BitmapFont::create("system_font.bmp", FrameBuffer::new(640, 480))?;
//! font.draw_sjis_string(8, 8, b"ABC");
//! # Ok::<(), FontError>(())
//! ```

#[doc(inline)]
pub use crate::charmap::{CharMap, CodeRange};

#[doc(inline)]
pub use crate::codec::{SjisCodes, is_lead_byte, sjis_code, utf16_code};

#[doc(inline)]
pub use crate::error::FontError;

#[doc(inline)]
pub use crate::font::{BitmapFont, constants};

#[doc(inline)]
pub use crate::surface::{Color, DrawSurface, FrameBuffer};
