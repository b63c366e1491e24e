#![forbid(unsafe_code)]

//! The style record consumed by widgets and drawing primitives.

use std::rc::Rc;

use pixui_core::geometry::{Coord, Padding};

use crate::color::Color;
use crate::font::Font;

/// Background/body properties of a styled box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyStyle {
    /// Fill color of the body rectangle.
    pub main_color: Color,
    /// Inner padding between the body edge and its content.
    pub padding: Padding,
}

/// Text properties of a styled box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font used for measurement and drawing.
    pub font: Rc<Font>,
    /// Extra pixels between adjacent letters.
    pub letter_space: Coord,
    /// Extra pixels between adjacent wrapped lines.
    pub line_space: Coord,
}

/// A complete widget style.
///
/// Styles are shared, not owned: widgets hold `Rc<Style>` references and a
/// single style instance may back many widgets at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub body: BodyStyle,
    pub text: TextStyle,
}

impl Style {
    /// White body, modest padding. The default cell style.
    pub fn plain() -> Self {
        Style {
            body: BodyStyle {
                main_color: Color::WHITE,
                padding: Padding::new(4, 4),
            },
            text: TextStyle {
                color: Color::BLACK,
                font: Rc::new(Font::default()),
                letter_space: 0,
                line_space: 2,
            },
        }
    }

    /// Like [`Style::plain`] but with a tinted body. The default
    /// background style.
    pub fn plain_color() -> Self {
        let mut style = Style::plain();
        style.body.main_color = Color::SILVER;
        style
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::Style;
    use pixui_core::geometry::Padding;
    use std::rc::Rc;

    #[test]
    fn plain_presets_differ_only_in_body_color() {
        let plain = Style::plain();
        let colored = Style::plain_color();
        assert_ne!(plain.body.main_color, colored.body.main_color);
        assert_eq!(plain.body.padding, colored.body.padding);
        assert_eq!(plain.text, colored.text);
    }

    #[test]
    fn plain_has_nonzero_padding() {
        assert_ne!(Style::plain().body.padding, Padding::default());
    }

    #[test]
    fn styles_share_font_via_rc() {
        let style = Style::plain();
        let other = style.clone();
        assert!(Rc::ptr_eq(&style.text.font, &other.text.font));
    }
}
