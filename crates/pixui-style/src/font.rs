#![forbid(unsafe_code)]

//! Font descriptors.
//!
//! A [`Font`] is an opaque handle from the widget's point of view: layout
//! only reads the line height directly, everything else is interpreted by
//! the text-measurement collaborator. The `advance` field is the nominal
//! single-cell advance a monospace shaper uses; proportional shapers are
//! free to ignore it.

use pixui_core::geometry::Coord;

/// A font descriptor shared by styles via `Rc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Height of one rendered text line in pixels.
    pub line_height: Coord,
    /// Nominal advance width of a single-cell glyph in pixels.
    pub advance: Coord,
}

impl Font {
    /// Create a font descriptor.
    #[inline]
    pub const fn new(line_height: Coord, advance: Coord) -> Self {
        Self {
            line_height,
            advance,
        }
    }
}

impl Default for Font {
    /// A 16 px line with 8 px glyph advance.
    fn default() -> Self {
        Font::new(16, 8)
    }
}
