//! Embedded typeface and glyph outlines.
//!
//! Glyphs are laid out left to right by horizontal advance and turned into a
//! single tiny-skia path, so text fills like any other shape.

use std::fmt;

use tiny_skia::{Path, PathBuilder};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::error::{Result, SymbolsError};

/// The bold face compiled into the binary.
pub static BOLD_TTF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

/// A parsed face at a fixed pixel size.
#[derive(Clone)]
pub struct Typeface {
    face: Face<'static>,
    size: f32,
}

impl Typeface {
    /// Parse a TrueType/OpenType face.
    pub fn parse(data: &'static [u8], size: f32) -> Result<Self> {
        let face = Face::parse(data, 0).map_err(|e| SymbolsError::Font {
            message: format!("Failed to parse typeface: {}", e),
            help: Some("The embedded font data may be corrupt".to_string()),
        })?;
        Ok(Self { face, size })
    }

    /// The embedded bold face.
    pub fn bold(size: f32) -> Result<Self> {
        Self::parse(BOLD_TTF, size)
    }

    /// Distance between baselines: ascender, descender and line gap.
    pub fn line_height(&self) -> f32 {
        let units = self.face.ascender() as f32 - self.face.descender() as f32
            + self.face.line_gap() as f32;
        units * self.scale()
    }

    /// Total horizontal advance of `text`.
    pub fn advance_width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.advance(self.glyph(c))).sum()
    }

    /// Outline of `text` with its baseline starting at `(x, y)`.
    ///
    /// Returns `None` when no glyph has an outline, e.g. for whitespace.
    pub fn outline(&self, text: &str, x: f32, y: f32) -> Option<Path> {
        let mut pen = GlyphPen {
            builder: PathBuilder::new(),
            origin_x: x,
            origin_y: y,
            scale: self.scale(),
        };

        for c in text.chars() {
            let glyph = self.glyph(c);
            self.face.outline_glyph(glyph, &mut pen);
            pen.origin_x += self.advance(glyph);
        }

        pen.builder.finish()
    }

    fn scale(&self) -> f32 {
        self.size / self.face.units_per_em() as f32
    }

    // Unmapped characters fall back to .notdef.
    fn glyph(&self, c: char) -> GlyphId {
        self.face.glyph_index(c).unwrap_or(GlyphId(0))
    }

    fn advance(&self, glyph: GlyphId) -> f32 {
        self.face.glyph_hor_advance(glyph).unwrap_or(0) as f32 * self.scale()
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typeface")
            .field("size", &self.size)
            .field("units_per_em", &self.face.units_per_em())
            .finish()
    }
}

/// Maps font units (y up) onto canvas pixels (y down).
struct GlyphPen {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPen {
    fn x(&self, x: f32) -> f32 {
        self.origin_x + x * self.scale
    }

    fn y(&self, y: f32) -> f32 {
        self.origin_y - y * self.scale
    }
}

impl OutlineBuilder for GlyphPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = (self.x(x), self.y(y));
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = (self.x(x), self.y(y));
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1, x, y) = (self.x(x1), self.y(y1), self.x(x), self.y(y));
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = (self.x(x1), self.y(y1));
        let (x2, y2) = (self.x(x2), self.y(y2));
        let (x, y) = (self.x(x), self.y(y));
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
