#![forbid(unsafe_code)]

//! Merge-aware geometry: the single source of truth consumed by both
//! size refresh and rendering.

use pixui_core::geometry::{Coord, Size};
use pixui_style::Style;
use pixui_text::{TextFlags, TextMeasure};

use crate::cell::CellStore;

/// A resolved merge span: the run of columns a cell visually occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSpan {
    /// Total width of the spanned columns.
    pub width: Coord,
    /// Number of columns consumed, starting at the span's first column.
    /// Always at least 1.
    pub len: usize,
}

/// Resolve the merge span starting at `(row, col)`.
///
/// The span grows while the cell under the cursor exists, has its
/// right-merge flag set, and is not in the last column. An empty cell or
/// a clear flag stops the chain; the last column always stops it. Both
/// the height pass and the renderer use this one routine, so the two can
/// never disagree on spans.
pub fn merge_span(store: &CellStore, row: usize, col: usize) -> MergeSpan {
    let mut width = store.column_width(col);
    let mut len = 1;

    loop {
        // The cell whose merge flag could extend the span.
        let probe = col + len - 1;
        if probe + 1 >= store.column_count() {
            break;
        }
        match store.cell(row, probe) {
            Some(cell) if cell.format().merge_right => {
                width += store.column_width(probe + 1);
                len += 1;
            }
            _ => break,
        }
    }

    MergeSpan { width, len }
}

/// Compute a row's height.
///
/// Each non-empty cell is measured at its merged width minus horizontal
/// cell padding; the row takes the maximum, floored at the font's line
/// height, plus vertical cell padding on both sides. Columns consumed by
/// a span are visited once, at the span's start.
pub fn row_height(
    store: &CellStore,
    cell_style: &Style,
    measure: &dyn TextMeasure,
    row: usize,
) -> Coord {
    let font = &cell_style.text.font;
    let mut h_max = font.line_height;

    let mut col = 0;
    while col < store.column_count() {
        let span = merge_span(store, row, col);

        if let Some(cell) = store.cell(row, col) {
            let max_width = (span.width - 2 * cell_style.body.padding.hor).max(0);
            let text_size = measure.text_size(
                cell.text(),
                font,
                cell_style.text.letter_space,
                cell_style.text.line_space,
                max_width,
                TextFlags::empty(),
            );
            h_max = h_max.max(text_size.height);
        }

        col += span.len;
    }

    h_max + 2 * cell_style.body.padding.ver
}

/// Compute the table's outer size: all column widths plus horizontal
/// background padding, all row heights plus vertical background padding.
pub fn table_size(
    store: &CellStore,
    bg_style: &Style,
    cell_style: &Style,
    measure: &dyn TextMeasure,
) -> Size {
    let mut width: Coord = 0;
    for col in 0..store.column_count() {
        width += store.column_width(col);
    }

    let mut height: Coord = 0;
    for row in 0..store.row_count() {
        height += row_height(store, cell_style, measure, row);
    }

    Size::new(
        width + 2 * bg_style.body.padding.hor,
        height + 2 * bg_style.body.padding.ver,
    )
}
