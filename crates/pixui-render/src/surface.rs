#![forbid(unsafe_code)]

//! The drawing-primitives collaborator interface.

use pixui_core::geometry::Rect;
use pixui_style::Style;
use pixui_text::TextFlags;

/// A drawing target for widgets.
///
/// Every call carries both the target `area` and the clip `mask`;
/// implementations must not touch pixels outside `area.intersection(&mask)`.
pub trait Surface {
    /// Fill a rectangle with the style's body color, clipped to the mask.
    fn fill_rect(&mut self, area: Rect, mask: Rect, style: &Style);

    /// Draw word-wrapped text into `area`, clipped to the mask.
    ///
    /// The style supplies font, colors, and spacing; `flags` carry the
    /// horizontal alignment and wrap behavior. Text layout inside the area
    /// is owned by the implementation and must agree with the
    /// `TextMeasure` collaborator the widget used for sizing.
    fn draw_text(&mut self, area: Rect, mask: Rect, style: &Style, text: &str, flags: TextFlags);
}
