//! Rendering module for symbols.
//!
//! Turns shape descriptors into pixels on a [`Canvas`] and writes the result
//! as PNG.

mod canvas;
mod picture;
mod png;
mod text;

pub use canvas::{Canvas, CanvasGuard};
pub use picture::{
    captioned_canvas, draw_shape, draw_shapes, render_picture, Picture, CAPTION, CAPTION_SIZE,
};
pub use png::{to_rgba_image, write_png};
pub use text::{Typeface, BOLD_TTF};
