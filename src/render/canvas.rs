//! Drawing surface over a tiny-skia pixmap.
//!
//! The canvas keeps one pending path. Shape primitives append to it, already
//! transformed by the transform active when they were added, and `fill` or
//! `stroke` paints it with the current colour and clears it.
//!
//! Paint state (colour, line width, transform, font face) is saved with
//! [`Canvas::save`], which returns a guard that restores the state when it is
//! dropped.

use std::ops::{Deref, DerefMut};
use std::path::Path as FsPath;
use std::rc::Rc;

use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, PathSegment, Pixmap, Rect, Stroke,
    Transform,
};

use crate::error::{Result, SymbolsError};
use crate::types::{to_skia, Colour};

use super::png::write_png;
use super::Typeface;

/// Saved and restored as a unit.
#[derive(Debug, Clone)]
struct PaintState {
    colour: Colour,
    line_width: f32,
    transform: Transform,
    face: Option<Rc<Typeface>>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            colour: Colour::new(0.0, 0.0, 0.0, 1.0),
            line_width: 1.0,
            transform: Transform::identity(),
            face: None,
        }
    }
}

/// A fixed-size RGBA drawing surface, transparent when created.
pub struct Canvas {
    pixmap: Pixmap,
    path: PathBuilder,
    state: PaintState,
    stack: Vec<PaintState>,
}

impl Canvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| SymbolsError::Canvas {
            message: format!("Cannot allocate a {}x{} canvas", width, height),
            help: Some("Both dimensions must be non-zero and fit in memory".to_string()),
        })?;

        Ok(Self {
            pixmap,
            path: PathBuilder::new(),
            state: PaintState::default(),
            stack: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The underlying premultiplied pixels.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only bounds-checks the flat index.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    // -- Paint state --

    pub fn set_colour(&mut self, colour: Colour) {
        self.state.colour = colour;
    }

    /// Set an opaque colour, channels in [0, 1].
    pub fn set_rgb(&mut self, r: f32, g: f32, b: f32) {
        self.set_rgba(r, g, b, 1.0);
    }

    /// Set a colour with alpha, channels in [0, 1].
    pub fn set_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.state.colour = Colour::new(r, g, b, a);
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    pub fn line_width(&self) -> f32 {
        self.state.line_width
    }

    /// Rotate subsequent drawing by `degrees` about `(x, y)`.
    pub fn rotate_about(&mut self, degrees: f32, x: f32, y: f32) {
        self.state.transform = self
            .state
            .transform
            .pre_concat(Transform::from_rotate_at(degrees, x, y));
    }

    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    pub fn set_font_face(&mut self, face: Typeface) {
        self.state.face = Some(Rc::new(face));
    }

    /// Push the paint state; it is restored when the guard drops.
    pub fn save(&mut self) -> CanvasGuard<'_> {
        self.stack.push(self.state.clone());
        CanvasGuard { canvas: self }
    }

    /// Number of saved states not yet restored.
    pub fn state_depth(&self) -> usize {
        self.stack.len()
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    // -- Path primitives --

    /// Rectangle with its top-left corner at `(x, y)`.
    pub fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) {
        if let Some(rect) = Rect::from_xywh(x, y, w, h) {
            self.append(Some(PathBuilder::from_rect(rect)));
        }
    }

    pub fn draw_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.append(PathBuilder::from_circle(x, y, radius));
    }

    /// Ellipse centred at `(x, y)` with radii `rx` and `ry`.
    pub fn draw_ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32) {
        if let Some(rect) = Rect::from_xywh(x - rx, y - ry, rx * 2.0, ry * 2.0) {
            self.append(PathBuilder::from_oval(rect));
        }
    }

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let mut builder = PathBuilder::new();
        builder.move_to(x1, y1);
        builder.line_to(x2, y2);
        self.append(builder.finish());
    }

    fn append(&mut self, path: Option<Path>) {
        let Some(path) = path.and_then(|p| p.transform(self.state.transform)) else {
            return;
        };

        for segment in path.segments() {
            match segment {
                PathSegment::MoveTo(p) => self.path.move_to(p.x, p.y),
                PathSegment::LineTo(p) => self.path.line_to(p.x, p.y),
                PathSegment::QuadTo(p1, p) => self.path.quad_to(p1.x, p1.y, p.x, p.y),
                PathSegment::CubicTo(p1, p2, p) => {
                    self.path.cubic_to(p1.x, p1.y, p2.x, p2.y, p.x, p.y)
                }
                PathSegment::Close => self.path.close(),
            }
        }
    }

    fn take_path(&mut self) -> Option<Path> {
        std::mem::replace(&mut self.path, PathBuilder::new()).finish()
    }

    // -- Painting --

    /// Fill the pending path and clear it.
    pub fn fill(&mut self) {
        if let Some(path) = self.take_path() {
            let paint = self.paint();
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Stroke the pending path with the current line width and clear it.
    pub fn stroke(&mut self) {
        if let Some(path) = self.take_path() {
            let paint = self.paint();
            let stroke = Stroke {
                width: self.state.line_width,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Fill `text` positioned relative to `(x, y)`.
    ///
    /// `ax` and `ay` are normalized anchors: `(0, 0)` puts the baseline start
    /// at the point, `(0.5, 0.5)` centres the text on it.
    pub fn draw_string_anchored(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        ax: f32,
        ay: f32,
    ) -> Result<()> {
        let face = self.state.face.clone().ok_or_else(|| SymbolsError::Canvas {
            message: "No font face set".to_string(),
            help: Some("Call set_font_face before drawing text".to_string()),
        })?;

        let x = x - ax * face.advance_width(text);
        let y = y + ay * face.line_height();

        if let Some(path) = face.outline(text, x, y) {
            let paint = self.paint();
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, self.state.transform, None);
        }

        Ok(())
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_skia(self.state.colour));
        paint.anti_alias = true;
        paint
    }

    // -- Output --

    /// Encode the canvas as PNG at `path`.
    pub fn save_png(&self, path: &FsPath) -> Result<()> {
        write_png(&self.pixmap, path)
    }

    /// Number of pixels with any coverage.
    #[cfg(test)]
    pub(crate) fn painted_pixels(&self) -> usize {
        self.pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }
}

/// Restores the canvas paint state on drop.
pub struct CanvasGuard<'c> {
    canvas: &'c mut Canvas,
}

impl Deref for CanvasGuard<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        &*self.canvas
    }
}

impl DerefMut for CanvasGuard<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        &mut *self.canvas
    }
}

impl Drop for CanvasGuard<'_> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
