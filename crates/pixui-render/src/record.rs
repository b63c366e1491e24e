#![forbid(unsafe_code)]

//! A recording surface for headless rendering.

use pixui_core::geometry::Rect;
use pixui_style::{Color, Style};
use pixui_text::TextFlags;

use crate::surface::Surface;

/// One recorded draw call.
///
/// Commands keep the pre-clip area and the mask separately so tests can
/// assert on both the requested geometry and the effective clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        area: Rect,
        mask: Rect,
        color: Color,
    },
    Text {
        area: Rect,
        mask: Rect,
        text: String,
        flags: TextFlags,
    },
}

impl DrawCommand {
    /// The part of the command's area that survives clipping.
    pub fn visible(&self) -> Rect {
        match self {
            DrawCommand::FillRect { area, mask, .. } | DrawCommand::Text { area, mask, .. } => {
                area.intersection(mask)
            }
        }
    }
}

/// A [`Surface`] that records every draw call instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, in emission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded rectangle fills, in emission order.
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }

    /// Recorded text draws, in emission order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, area: Rect, mask: Rect, style: &Style) {
        self.commands.push(DrawCommand::FillRect {
            area,
            mask,
            color: style.body.main_color,
        });
    }

    fn draw_text(&mut self, area: Rect, mask: Rect, _style: &Style, text: &str, flags: TextFlags) {
        self.commands.push(DrawCommand::Text {
            area,
            mask,
            text: text.to_string(),
            flags,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, RecordingSurface};
    use crate::surface::Surface;
    use pixui_core::geometry::Rect;
    use pixui_style::Style;
    use pixui_text::TextFlags;

    #[test]
    fn records_in_emission_order() {
        let style = Style::plain();
        let mask = Rect::new(0, 0, 100, 100);
        let mut surface = RecordingSurface::new();

        surface.fill_rect(Rect::new(0, 0, 10, 10), mask, &style);
        surface.draw_text(Rect::new(2, 2, 6, 6), mask, &style, "hi", TextFlags::empty());

        assert_eq!(surface.commands().len(), 2);
        assert!(matches!(surface.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(surface.commands()[1], DrawCommand::Text { .. }));
        assert_eq!(surface.fills().count(), 1);
        assert_eq!(surface.texts().count(), 1);
    }

    #[test]
    fn fill_captures_body_color() {
        let style = Style::plain_color();
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0, 0, 10, 10), Rect::new(0, 0, 10, 10), &style);

        match &surface.commands()[0] {
            DrawCommand::FillRect { color, .. } => assert_eq!(*color, style.body.main_color),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn visible_is_area_clipped_by_mask() {
        let style = Style::plain();
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0, 0, 10, 10), Rect::new(5, 5, 20, 20), &style);

        assert_eq!(surface.commands()[0].visible(), Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn clear_discards_commands() {
        let style = Style::plain();
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0, 0, 1, 1), Rect::new(0, 0, 1, 1), &style);
        surface.clear();
        assert!(surface.commands().is_empty());
    }
}
