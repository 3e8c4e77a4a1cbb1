//! symbols - Random symbol picture generator
//!
//! Draws randomly placed, coloured and styled rectangles, circles, ellipses
//! and lines on a fixed canvas, captions it and saves it as PNG.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{Result, SymbolsError};
pub use generate::{FixedSampler, RandomSampler, Sampler, ShapeGenerator};
pub use render::{
    captioned_canvas, draw_shape, draw_shapes, render_picture, Canvas, CanvasGuard, Picture, Typeface,
};
pub use types::{
    kind_for_index, mode_for_index, Colour, Geometry, PaintMode, PaletteCycler, ShapeDescriptor,
    ShapeKind,
};
