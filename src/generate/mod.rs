//! Shape generation.
//!
//! [`ShapeGenerator`] turns object indices into [`ShapeDescriptor`]s. It owns
//! the palette cursor and borrows a [`Sampler`] for every random parameter,
//! so the whole sequence is reproducible from the sampler's seed.

mod sampler;

pub use sampler::{clock_seed, FixedSampler, RandomSampler, Sampler, DEFAULT_SEED};

use crate::types::{
    from_channels, kind_for_index, mode_for_index, Geometry, PaintMode, PaletteCycler,
    ShapeDescriptor, ShapeKind,
};

/// Picture width in pixels.
pub const PICTURE_WIDTH: u32 = 900;

/// Picture height in pixels.
pub const PICTURE_HEIGHT: u32 = 600;

/// Longest sampled edge, also the margin kept from the canvas borders.
pub const MAX_EDGE: f32 = 50.0;

/// Derives one descriptor per object index.
pub struct ShapeGenerator<'a> {
    palette: PaletteCycler,
    sampler: &'a mut dyn Sampler,
    width: f32,
    height: f32,
}

impl<'a> ShapeGenerator<'a> {
    /// Create a generator for the standard picture size.
    pub fn new(palette: PaletteCycler, sampler: &'a mut dyn Sampler) -> Self {
        Self {
            palette,
            sampler,
            width: PICTURE_WIDTH as f32,
            height: PICTURE_HEIGHT as f32,
        }
    }

    /// Sample anchors for a different canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width as f32;
        self.height = height as f32;
        self
    }

    /// The palette cursor as it stands.
    pub fn palette(&self) -> &PaletteCycler {
        &self.palette
    }

    /// Describe the object at `index`.
    ///
    /// Draw order is fixed: three palette channels, line width, anchor,
    /// width and height, then the kind-specific extra (circle alpha, ellipse
    /// rotation or line end point).
    pub fn describe(&mut self, index: usize) -> ShapeDescriptor {
        let r = self.palette.next_channel();
        let g = self.palette.next_channel();
        let b = self.palette.next_channel();
        let mut colour = from_channels(r, g, b);

        let line_width = self.sampler.uniform(2.0, 5.0);
        let (x, y) = self.anchor();
        let w = self.sampler.uniform(5.0, MAX_EDGE);
        let h = self.sampler.uniform(5.0, MAX_EDGE);

        let geometry = match kind_for_index(index) {
            ShapeKind::Rectangle => Geometry::Rectangle { x, y, w, h },
            ShapeKind::Circle => {
                colour.alpha = self.sampler.uniform(1.0, 9.0) / 10.0;
                Geometry::Circle { x, y, radius: w }
            }
            ShapeKind::Ellipse => Geometry::Ellipse {
                x,
                y,
                rx: w,
                ry: h,
                rotation: self.sampler.uniform(0.0, 45.0),
            },
            ShapeKind::Line => {
                let (x2, y2) = self.anchor();
                // Lines are never filled.
                return ShapeDescriptor {
                    index,
                    geometry: Geometry::Line { x1: x, y1: y, x2, y2 },
                    colour,
                    line_width,
                    mode: PaintMode::Stroke,
                };
            }
        };

        ShapeDescriptor {
            index,
            geometry,
            colour,
            line_width,
            mode: mode_for_index(index),
        }
    }

    /// Describe objects `0..count` in order.
    pub fn describe_all(&mut self, count: usize) -> Vec<ShapeDescriptor> {
        (0..count).map(|index| self.describe(index)).collect()
    }

    fn anchor(&mut self) -> (f32, f32) {
        self.sampler.point(MAX_EDGE, self.width, self.height)
    }
}
