#![forbid(unsafe_code)]

//! The text-measurement collaborator interface.

use bitflags::bitflags;
use pixui_core::geometry::{Coord, Size};
use pixui_style::Font;

use crate::wrap::{line_px, wrap_px};

bitflags! {
    /// Formatting flags shared by text measurement and text drawing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextFlags: u8 {
        /// Ignore the width limit: never wrap, only break on newlines.
        const EXPAND = 0b0000_0001;
        /// Center lines horizontally within the draw area.
        const CENTER = 0b0000_0010;
        /// Align lines to the right edge of the draw area.
        const RIGHT  = 0b0000_0100;
    }
}

/// Measures the rendered size of word-wrapped text.
///
/// This is the seam between widgets and the text engine: layout asks for
/// sizes here and trusts the drawing surface to produce the same geometry
/// when it later paints the same string with the same parameters.
pub trait TextMeasure {
    /// Rendered size of `text` wrapped to `max_width` pixels.
    ///
    /// `letter_space` is added between adjacent glyphs, `line_space`
    /// between adjacent lines. The returned height is always at least one
    /// line height.
    fn text_size(
        &self,
        text: &str,
        font: &Font,
        letter_space: Coord,
        line_space: Coord,
        max_width: Coord,
        flags: TextFlags,
    ) -> Size;
}

/// Deterministic monospace shaper.
///
/// Every single-cell grapheme advances by `font.advance`; wide graphemes
/// advance by twice that. Useful for tests, headless tools, and embedders
/// without a font engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoShaper;

impl MonoShaper {
    /// Create a monospace shaper.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl TextMeasure for MonoShaper {
    fn text_size(
        &self,
        text: &str,
        font: &Font,
        letter_space: Coord,
        line_space: Coord,
        max_width: Coord,
        flags: TextFlags,
    ) -> Size {
        let lines: Vec<String> = if flags.contains(TextFlags::EXPAND) {
            text.split('\n').map(str::to_string).collect()
        } else {
            wrap_px(text, font, letter_space, max_width)
        };

        let width = lines
            .iter()
            .map(|line| line_px(line, font, letter_space))
            .max()
            .unwrap_or(0);

        // Both branches yield at least one line.
        let count = lines.len() as Coord;
        let height = font.line_height * count + line_space * (count - 1);

        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::{MonoShaper, TextFlags, TextMeasure};
    use pixui_core::geometry::Size;
    use pixui_style::Font;

    fn font() -> Font {
        Font::new(10, 5)
    }

    #[test]
    fn single_line_size() {
        let size = MonoShaper.text_size("Hello", &font(), 0, 0, 500, TextFlags::empty());
        assert_eq!(size, Size::new(25, 10));
    }

    #[test]
    fn empty_text_is_one_line_high() {
        let size = MonoShaper.text_size("", &font(), 0, 0, 100, TextFlags::empty());
        assert_eq!(size, Size::new(0, 10));
    }

    #[test]
    fn wrapping_stacks_lines_with_line_space() {
        // 50 px fits 10 glyphs; wraps to ["Hello", "world foo", "bar"]
        let size = MonoShaper.text_size("Hello world foo bar", &font(), 0, 3, 50, TextFlags::empty());
        assert_eq!(size.height, 3 * 10 + 2 * 3);
        // Widest line is "world foo" (9 glyphs)
        assert_eq!(size.width, 45);
    }

    #[test]
    fn expand_ignores_width_limit() {
        let size = MonoShaper.text_size("Hello world foo bar", &font(), 0, 0, 50, TextFlags::EXPAND);
        assert_eq!(size.height, 10);
        assert_eq!(size.width, 19 * 5);
    }

    #[test]
    fn expand_still_breaks_on_newlines() {
        let size = MonoShaper.text_size("ab\ncd", &font(), 0, 0, 5, TextFlags::EXPAND);
        assert_eq!(size.height, 20);
    }

    #[test]
    fn alignment_flags_do_not_change_size() {
        let text = "Hello world foo bar";
        let plain = MonoShaper.text_size(text, &font(), 0, 0, 50, TextFlags::empty());
        let center = MonoShaper.text_size(text, &font(), 0, 0, 50, TextFlags::CENTER);
        let right = MonoShaper.text_size(text, &font(), 0, 0, 50, TextFlags::RIGHT);
        assert_eq!(plain, center);
        assert_eq!(plain, right);
    }

    #[test]
    fn letter_space_widens_lines() {
        let tight = MonoShaper.text_size("abc", &font(), 0, 0, 500, TextFlags::empty());
        let loose = MonoShaper.text_size("abc", &font(), 2, 0, 500, TextFlags::empty());
        assert_eq!(loose.width, tight.width + 4);
    }
}
