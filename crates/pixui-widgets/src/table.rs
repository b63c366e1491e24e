#![forbid(unsafe_code)]

//! The table widget.
//!
//! A table is a grid of text cells with per-cell alignment and
//! right-merge, per-column widths, and automatic row heights from wrapped
//! text measurement. The widget resizes itself to its content: any
//! mutation that can change geometry recomputes the outer size through
//! [`crate::layout`] and invalidates the base; alignment-only changes
//! just invalidate.

use std::rc::Rc;

use pixui_core::geometry::{Coord, Rect, Size};
use pixui_render::Surface;
use pixui_style::Style;
use pixui_text::{TextFlags, TextMeasure};
use tracing::trace;

use crate::cell::{CellAlign, CellStore};
use crate::layout;
use crate::widget::{DrawPhase, Widget, WidgetBase};

/// The two style slots a table exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSlot {
    /// The outer body painted by the base widget.
    Background,
    /// The per-cell body and text style.
    Cell,
}

/// A variable-size grid of text cells.
pub struct Table {
    base: WidgetBase,
    store: CellStore,
    cell_style: Rc<Style>,
    measure: Rc<dyn TextMeasure>,
}

impl Table {
    /// Create an empty table: zero rows and columns, default column
    /// widths, plain default styles.
    ///
    /// The text-measurement collaborator is injected here and shared for
    /// the widget's lifetime.
    pub fn new(measure: Rc<dyn TextMeasure>) -> Self {
        trace!("table create started");
        let mut table = Self {
            base: WidgetBase::new(Rc::new(Style::plain_color())),
            store: CellStore::new(),
            cell_style: Rc::new(Style::plain()),
            measure,
        };
        table.refresh_size();
        trace!("table created");
        table
    }

    /// Create a table with the same shape as `other`: row/column counts,
    /// column widths, style references, and measurer are copied; the cell
    /// store is allocated to match the counts but starts empty.
    pub fn from_template(other: &Table) -> Self {
        let mut table = Self {
            base: WidgetBase::new(Rc::clone(other.base.style())),
            store: CellStore::from_template(&other.store),
            cell_style: Rc::clone(&other.cell_style),
            measure: Rc::clone(&other.measure),
        };
        table.refresh_size();
        table
    }

    // --- Setters ---

    /// Set a cell's text. Out-of-range indices are a logged no-op.
    pub fn set_cell_value(&mut self, row: usize, col: usize, text: &str) {
        if self.store.set_value(row, col, text) {
            self.refresh_size();
        }
    }

    /// Set the number of rows.
    pub fn set_row_count(&mut self, rows: usize) {
        self.store.set_row_count(rows);
        self.refresh_size();
    }

    /// Set the number of columns. Counts at or above
    /// [`crate::cell::COL_MAX`] are a logged no-op.
    pub fn set_column_count(&mut self, cols: usize) {
        if self.store.set_column_count(cols) {
            self.refresh_size();
        }
    }

    /// Set a column slot's width. Out-of-range slots are a logged no-op.
    pub fn set_column_width(&mut self, col: usize, width: Coord) {
        if self.store.set_column_width(col, width) {
            self.refresh_size();
        }
    }

    /// Set a cell's horizontal text alignment.
    ///
    /// Alignment never affects geometry, so this only schedules a
    /// repaint, never a relayout.
    pub fn set_cell_align(&mut self, row: usize, col: usize, align: CellAlign) {
        if self.store.set_align(row, col, align) {
            self.base.invalidate();
        }
    }

    /// Merge a cell with its right neighbor (or clear the merge). The
    /// neighbor's value is hidden while merged.
    pub fn set_cell_merge_right(&mut self, row: usize, col: usize, merge: bool) {
        if self.store.set_merge_right(row, col, merge) {
            self.refresh_size();
        }
    }

    /// Replace one of the table's style references.
    ///
    /// The styles are shared, never owned: dropping the table only drops
    /// its reference.
    pub fn set_style(&mut self, slot: StyleSlot, style: Rc<Style>) {
        match slot {
            StyleSlot::Background => {
                self.base.set_style(style);
                self.refresh_size();
            }
            StyleSlot::Cell => {
                self.cell_style = style;
                self.base.invalidate();
            }
        }
    }

    /// Move the table.
    pub fn set_pos(&mut self, x: Coord, y: Coord) {
        self.base.set_pos(x, y);
    }

    // --- Getters ---

    /// A cell's text, `""` when missing or out of range.
    pub fn cell_value(&self, row: usize, col: usize) -> &str {
        self.store.value(row, col)
    }

    /// Current number of rows.
    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }

    /// Current number of columns.
    pub fn column_count(&self) -> usize {
        self.store.column_count()
    }

    /// A column slot's width, 0 when out of range.
    pub fn column_width(&self, col: usize) -> Coord {
        self.store.column_width(col)
    }

    /// A cell's alignment, `Left` when missing or out of range.
    pub fn cell_align(&self, row: usize, col: usize) -> CellAlign {
        self.store.align(row, col)
    }

    /// A cell's right-merge flag, `false` when missing or out of range.
    pub fn cell_merge_right(&self, row: usize, col: usize) -> bool {
        self.store.merge_right(row, col)
    }

    /// One of the table's style references.
    pub fn style(&self, slot: StyleSlot) -> Rc<Style> {
        match slot {
            StyleSlot::Background => Rc::clone(self.base.style()),
            StyleSlot::Cell => Rc::clone(&self.cell_style),
        }
    }

    /// Outer size.
    pub fn size(&self) -> Size {
        self.base.size()
    }

    /// Consume the pending-redraw flag (polled by the host paint loop).
    pub fn take_redraw(&mut self) -> bool {
        self.base.take_redraw()
    }

    /// Recompute the outer size from the layout engine and invalidate.
    fn refresh_size(&mut self) {
        let size = layout::table_size(
            &self.store,
            self.base.style(),
            &self.cell_style,
            &*self.measure,
        );
        self.base.set_size(size);
    }

    /// The main draw pass: base background first, then per-cell
    /// backgrounds and text, walking spans with the same routine the
    /// height pass uses.
    fn draw_main(&self, surface: &mut dyn Surface, mask: Rect) {
        self.base.draw(surface, mask);

        let bg = self.base.style();
        let coords = self.base.coords();
        let cell_padding = self.cell_style.body.padding;

        let mut y = coords.y + bg.body.padding.ver;
        for row in 0..self.store.row_count() {
            let h_row = layout::row_height(&self.store, &self.cell_style, &*self.measure, row);

            let mut x = coords.x + bg.body.padding.hor;
            let mut col = 0;
            while col < self.store.column_count() {
                let span = layout::merge_span(&self.store, row, col);
                let cell_area = Rect::new(x, y, span.width, h_row);

                surface.fill_rect(cell_area, mask, &self.cell_style);

                if let Some(cell) = self.store.cell(row, col) {
                    let text_area = cell_area.inset(cell_padding);
                    let flags = match cell.format().align {
                        CellAlign::Left => TextFlags::empty(),
                        CellAlign::Center => TextFlags::CENTER,
                        CellAlign::Right => TextFlags::RIGHT,
                    };
                    surface.draw_text(text_area, mask, &self.cell_style, cell.text(), flags);
                }

                x += span.width;
                col += span.len;
            }
            y += h_row;
        }
    }
}

impl Widget for Table {
    fn coords(&self) -> Rect {
        self.base.coords()
    }

    fn draw(&self, surface: &mut dyn Surface, mask: Rect, phase: DrawPhase) -> bool {
        match phase {
            // A table never claims to fully cover the masked area.
            DrawPhase::CoverCheck => false,
            DrawPhase::Main => {
                self.draw_main(surface, mask);
                true
            }
            DrawPhase::Post => true,
        }
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("base", &self.base)
            .field("store", &self.store)
            .field("cell_style", &self.cell_style)
            .finish_non_exhaustive()
    }
}
