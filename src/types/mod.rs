//! Core domain types for symbols.
//!
//! - `Colour` - straight-alpha paint colours
//! - `PaletteCycler` - the cycling channel stream
//! - `ShapeDescriptor` - one resolved object and the style policy behind it

mod colour;
mod palette;
mod shape;

pub use self::colour::{from_channels, to_skia, Colour, CHANNEL_MAX};
pub use self::palette::{PaletteCycler, SYMBOL_PALETTE};
pub use self::shape::{kind_for_index, mode_for_index, Geometry, PaintMode, ShapeDescriptor, ShapeKind};
