//! The symbols picture: caption plus generated shapes.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::generate::{Sampler, ShapeGenerator, PICTURE_HEIGHT, PICTURE_WIDTH};
use crate::types::{from_channels, Geometry, PaintMode, PaletteCycler, ShapeDescriptor};

use super::{Canvas, Typeface};

/// Caption drawn near the bottom edge.
pub const CAPTION: &str = "Unknown Miró or Random Symbols?";

/// Caption size in pixels.
pub const CAPTION_SIZE: f32 = 16.0;

/// Caption colour on the 0–255 scale.
const CAPTION_CHANNELS: (f32, f32, f32) = (127.0, 0.0, 127.0);

/// Distance from the bottom edge to the caption's centre line.
const CAPTION_OFFSET: f32 = 30.0;

/// A finished canvas and the shapes drawn on it, in drawing order.
pub struct Picture {
    pub canvas: Canvas,
    pub shapes: Vec<ShapeDescriptor>,
}

impl Picture {
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.canvas.save_png(path)
    }
}

/// Draw the caption and `config.count` shapes.
///
/// The sampler is used as-is; reseeding is the caller's decision.
pub fn render_picture(config: &Config, sampler: &mut dyn Sampler) -> Result<Picture> {
    let mut canvas = captioned_canvas()?;
    let shapes = draw_shapes(&mut canvas, config.count, sampler);
    Ok(Picture { canvas, shapes })
}

/// A blank picture-sized canvas with the caption drawn.
///
/// Fails before anything is drawn if the canvas or the typeface cannot be
/// created.
pub fn captioned_canvas() -> Result<Canvas> {
    let mut canvas = Canvas::new(PICTURE_WIDTH, PICTURE_HEIGHT)?;

    canvas.set_font_face(Typeface::bold(CAPTION_SIZE)?);
    let (r, g, b) = CAPTION_CHANNELS;
    canvas.set_colour(from_channels(r, g, b));
    canvas.draw_string_anchored(
        CAPTION,
        canvas.width() as f32 / 2.0,
        canvas.height() as f32 - CAPTION_OFFSET,
        0.5,
        0.5,
    )?;

    Ok(canvas)
}

/// Generate and draw `count` shapes, each under its own saved state.
pub fn draw_shapes(
    canvas: &mut Canvas,
    count: usize,
    sampler: &mut dyn Sampler,
) -> Vec<ShapeDescriptor> {
    let mut generator = ShapeGenerator::new(PaletteCycler::new(), sampler)
        .with_size(canvas.width(), canvas.height());
    let mut shapes = Vec::with_capacity(count);

    for index in 0..count {
        let mut canvas = canvas.save();
        let shape = generator.describe(index);
        draw_shape(&mut canvas, &shape);
        shapes.push(shape);
    }

    shapes
}

/// Issue the canvas calls for one descriptor.
///
/// Rotation is applied to the canvas transform, so callers wrap this in
/// [`Canvas::save`].
pub fn draw_shape(canvas: &mut Canvas, shape: &ShapeDescriptor) {
    canvas.set_colour(shape.colour);
    canvas.set_line_width(shape.line_width);

    match shape.geometry {
        Geometry::Rectangle { x, y, w, h } => canvas.draw_rectangle(x, y, w, h),
        Geometry::Circle { x, y, radius } => canvas.draw_circle(x, y, radius),
        Geometry::Ellipse {
            x,
            y,
            rx,
            ry,
            rotation,
        } => {
            canvas.rotate_about(rotation, x, y);
            canvas.draw_ellipse(x, y, rx, ry);
        }
        Geometry::Line { x1, y1, x2, y2 } => canvas.draw_line(x1, y1, x2, y2),
    }

    match shape.mode {
        PaintMode::Fill => canvas.fill(),
        PaintMode::Stroke => canvas.stroke(),
    }
}
