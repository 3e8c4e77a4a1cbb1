//! Shape descriptors and the index-driven style policy.
//!
//! Each object index maps to a shape kind through `index % 7` and to a paint
//! mode through `index % 5`. Lines ignore the paint mode and always stroke.

use serde::Serialize;

use super::Colour;

/// The primitive a descriptor draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Ellipse,
    Line,
}

/// Whether a shape's interior is filled or its outline stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    Fill,
    Stroke,
}

/// Shape kind for an object index.
pub fn kind_for_index(index: usize) -> ShapeKind {
    match index % 7 {
        0 | 3 => ShapeKind::Rectangle,
        1 | 5 => ShapeKind::Circle,
        2 | 4 => ShapeKind::Ellipse,
        _ => ShapeKind::Line,
    }
}

/// Paint mode for an object index, before the line override.
pub fn mode_for_index(index: usize) -> PaintMode {
    match index % 5 {
        0 | 3 => PaintMode::Fill,
        _ => PaintMode::Stroke,
    }
}

/// Resolved geometry of one object, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    /// Axis-aligned rectangle with its top-left corner at `(x, y)`.
    Rectangle { x: f32, y: f32, w: f32, h: f32 },

    /// Circle centred at `(x, y)`.
    Circle { x: f32, y: f32, radius: f32 },

    /// Ellipse centred at `(x, y)`, rotated about its centre by `rotation`
    /// degrees.
    Ellipse {
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
    },

    /// Segment from `(x1, y1)` to `(x2, y2)`.
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Ellipse { .. } => ShapeKind::Ellipse,
            Geometry::Line { .. } => ShapeKind::Line,
        }
    }

    /// The sampled anchor point: top-left, centre or start point.
    pub fn anchor(&self) -> (f32, f32) {
        match *self {
            Geometry::Rectangle { x, y, .. }
            | Geometry::Circle { x, y, .. }
            | Geometry::Ellipse { x, y, .. } => (x, y),
            Geometry::Line { x1, y1, .. } => (x1, y1),
        }
    }
}

/// Fully resolved parameters for one drawn object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeDescriptor {
    /// Object index the descriptor was derived from.
    pub index: usize,

    #[serde(flatten)]
    pub geometry: Geometry,

    pub colour: Colour,

    pub line_width: f32,

    pub mode: PaintMode,
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn anchor(&self) -> (f32, f32) {
        self.geometry.anchor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_cycle() {
        let kinds: Vec<_> = (0..7).map(kind_for_index).collect();
        assert_eq!(
            kinds,
            vec![
                ShapeKind::Rectangle,
                ShapeKind::Circle,
                ShapeKind::Ellipse,
                ShapeKind::Rectangle,
                ShapeKind::Ellipse,
                ShapeKind::Circle,
                ShapeKind::Line,
            ]
        );
    }

    #[test]
    fn test_mode_cycle() {
        let modes: Vec<_> = (0..5).map(mode_for_index).collect();
        assert_eq!(
            modes,
            vec![
                PaintMode::Fill,
                PaintMode::Stroke,
                PaintMode::Stroke,
                PaintMode::Fill,
                PaintMode::Stroke,
            ]
        );
    }

    #[test]
    fn test_policy_depends_only_on_residue() {
        for i in 0..500 {
            assert_eq!(kind_for_index(i), kind_for_index(i + 7 * 13));
            assert_eq!(mode_for_index(i), mode_for_index(i + 5 * 11));
        }
    }

    #[test]
    fn test_geometry_kind_and_anchor() {
        let line = Geometry::Line {
            x1: 60.0,
            y1: 70.0,
            x2: 300.0,
            y2: 400.0,
        };
        assert_eq!(line.kind(), ShapeKind::Line);
        assert_eq!(line.anchor(), (60.0, 70.0));

        let ellipse = Geometry::Ellipse {
            x: 10.0,
            y: 20.0,
            rx: 5.0,
            ry: 6.0,
            rotation: 30.0,
        };
        assert_eq!(ellipse.kind(), ShapeKind::Ellipse);
        assert_eq!(ellipse.anchor(), (10.0, 20.0));
    }

    #[test]
    fn test_descriptor_serializes_flat() {
        let descriptor = ShapeDescriptor {
            index: 0,
            geometry: Geometry::Circle {
                x: 100.0,
                y: 200.0,
                radius: 10.0,
            },
            colour: Colour::new(1.0, 0.5, 0.25, 0.5),
            line_width: 3.0,
            mode: PaintMode::Stroke,
        };

        let json = serde_json::to_value(descriptor).unwrap();
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["mode"], "stroke");
        assert_eq!(json["radius"], 10.0);
        assert_eq!(json["colour"]["alpha"], 0.5);
    }
}
