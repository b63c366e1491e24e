#![forbid(unsafe_code)]

//! The widget seam: draw phases, the `Widget` trait, and the concrete
//! base every widget composes.
//!
//! The base is composed, not inherited: a widget embeds a [`WidgetBase`]
//! and calls [`WidgetBase::draw`] explicitly at the start of its own main
//! draw phase. There is no cached "ancestor" dispatch table.

use std::rc::Rc;

use pixui_core::geometry::{Coord, Rect, Size};
use pixui_render::Surface;
use pixui_style::Style;

/// The three passes the host paint loop runs over a widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// Only ask whether the widget fully covers the masked area.
    CoverCheck,
    /// Paint the widget itself.
    Main,
    /// Paint after all children (reserved for overlays).
    Post,
}

/// A renderable component positioned in pixel coordinates.
pub trait Widget {
    /// The widget's outer bounds.
    fn coords(&self) -> Rect;

    /// Run one draw phase against a surface, clipped to `mask`.
    ///
    /// For [`DrawPhase::CoverCheck`] the return value reports full
    /// opacity coverage of the masked area; for the paint phases it is
    /// always `true`.
    fn draw(&self, surface: &mut dyn Surface, mask: Rect, phase: DrawPhase) -> bool;
}

/// The concrete base block widgets compose: bounds, a background style
/// slot, and the invalidation flag the host redraw loop polls.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    coords: Rect,
    style: Rc<Style>,
    needs_redraw: bool,
}

impl WidgetBase {
    /// Create a base at the origin with zero size.
    pub fn new(style: Rc<Style>) -> Self {
        Self {
            coords: Rect::default(),
            style,
            needs_redraw: true,
        }
    }

    /// Outer bounds.
    pub fn coords(&self) -> Rect {
        self.coords
    }

    /// Outer size.
    pub fn size(&self) -> Size {
        self.coords.size()
    }

    /// Move the widget; marks it for redraw.
    pub fn set_pos(&mut self, x: Coord, y: Coord) {
        self.coords.x = x;
        self.coords.y = y;
        self.invalidate();
    }

    /// Resize the widget; marks it for redraw.
    pub fn set_size(&mut self, size: Size) {
        self.coords.width = size.width;
        self.coords.height = size.height;
        self.invalidate();
    }

    /// The background style reference.
    pub fn style(&self) -> &Rc<Style> {
        &self.style
    }

    /// Swap the background style reference; marks for redraw.
    pub fn set_style(&mut self, style: Rc<Style>) {
        self.style = style;
        self.invalidate();
    }

    /// Mark the widget as needing a repaint.
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Consume the pending-redraw flag. The host loop calls this once per
    /// frame to decide whether to repaint.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// The base's own draw: fill the bounds with the background style.
    pub fn draw(&self, surface: &mut dyn Surface, mask: Rect) {
        surface.fill_rect(self.coords, mask, &self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::WidgetBase;
    use pixui_core::geometry::{Rect, Size};
    use pixui_render::{DrawCommand, RecordingSurface};
    use pixui_style::Style;
    use std::rc::Rc;

    #[test]
    fn new_base_is_dirty_and_empty() {
        let mut base = WidgetBase::new(Rc::new(Style::plain()));
        assert_eq!(base.coords(), Rect::default());
        assert!(base.take_redraw());
        assert!(!base.take_redraw());
    }

    #[test]
    fn set_pos_and_size_invalidate() {
        let mut base = WidgetBase::new(Rc::new(Style::plain()));
        base.take_redraw();

        base.set_pos(10, 20);
        assert!(base.take_redraw());

        base.set_size(Size::new(30, 40));
        assert!(base.take_redraw());
        assert_eq!(base.coords(), Rect::new(10, 20, 30, 40));
    }

    #[test]
    fn style_swap_keeps_sharing() {
        let shared = Rc::new(Style::plain_color());
        let mut base = WidgetBase::new(Rc::new(Style::plain()));
        base.set_style(Rc::clone(&shared));
        assert!(Rc::ptr_eq(base.style(), &shared));
        // Two owners: the test and the base. The base never frees it alone.
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    fn base_draw_fills_own_bounds() {
        let mut base = WidgetBase::new(Rc::new(Style::plain_color()));
        base.set_pos(5, 5);
        base.set_size(Size::new(20, 10));

        let mut surface = RecordingSurface::new();
        base.draw(&mut surface, Rect::new(0, 0, 100, 100));

        match &surface.commands()[0] {
            DrawCommand::FillRect { area, .. } => assert_eq!(*area, Rect::new(5, 5, 20, 10)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
