#![forbid(unsafe_code)]

//! pixui public facade crate.
//!
//! Re-exports the common types from the internal crates so applications
//! can depend on `pixui` alone.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use pixui::{DrawPhase, MonoShaper, RecordingSurface, Rect, Table, Widget};
//!
//! let mut table = Table::new(Rc::new(MonoShaper));
//! table.set_row_count(2);
//! table.set_column_count(2);
//! table.set_cell_value(0, 0, "Hello");
//! table.set_cell_value(0, 1, "World");
//!
//! let mut surface = RecordingSurface::new();
//! table.draw(&mut surface, Rect::new(0, 0, 1000, 1000), DrawPhase::Main);
//! assert!(!surface.commands().is_empty());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use pixui_core::geometry::{Coord, Padding, Point, Rect, Size};

// --- Style re-exports ------------------------------------------------------

pub use pixui_style::{BodyStyle, Color, Font, Style, TextStyle};

// --- Text re-exports -------------------------------------------------------

pub use pixui_text::{MonoShaper, TextFlags, TextMeasure};

// --- Render re-exports -----------------------------------------------------

pub use pixui_render::{DrawCommand, RecordingSurface, Surface};

// --- Widget re-exports -----------------------------------------------------

pub use pixui_widgets::{
    CellAlign, CellFormat, CellStore, DrawPhase, MergeSpan, StyleSlot, Table, Widget, WidgetBase,
    COL_MAX, DEFAULT_COL_WIDTH,
};

/// Commonly used imports for applications.
pub mod prelude {
    pub use crate::{
        CellAlign, Coord, DrawPhase, MonoShaper, Padding, Rect, Size, Style, StyleSlot, Surface,
        Table, TextFlags, TextMeasure, Widget,
    };
}
