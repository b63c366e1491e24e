#![forbid(unsafe_code)]

//! Packed per-cell storage.
//!
//! Each written cell is one heap allocation: byte 0 holds the packed
//! format (alignment + right-merge), the remaining bytes are the UTF-8
//! text. Cells never written stay `None` and read back as empty text with
//! default formatting. The store is addressed linearly by
//! `row * column_count + col`.

use pixui_core::geometry::Coord;
use tracing::warn;

/// Upper bound on column slots. The column count must stay below this.
pub const COL_MAX: usize = 12;

/// Width every column slot starts with.
pub const DEFAULT_COL_WIDTH: Coord = 100;

/// Horizontal alignment of a cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-cell format: alignment plus the right-merge flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFormat {
    pub align: CellAlign,
    pub merge_right: bool,
}

impl CellFormat {
    const ALIGN_MASK: u8 = 0b0000_0011;
    const MERGE_RIGHT: u8 = 0b0000_0100;

    /// Pack into the format byte. Inverse of [`CellFormat::from_byte`].
    pub fn to_byte(self) -> u8 {
        let align = match self.align {
            CellAlign::Left => 0,
            CellAlign::Center => 1,
            CellAlign::Right => 2,
        };
        align | if self.merge_right { Self::MERGE_RIGHT } else { 0 }
    }

    /// Unpack from the format byte.
    ///
    /// Unknown alignment encodings and stray high bits decode to the
    /// defaults, so decoding any byte, re-encoding, and decoding again
    /// always yields the same value.
    pub fn from_byte(byte: u8) -> Self {
        let align = match byte & Self::ALIGN_MASK {
            1 => CellAlign::Center,
            2 => CellAlign::Right,
            _ => CellAlign::Left,
        };
        CellFormat {
            align,
            merge_right: byte & Self::MERGE_RIGHT != 0,
        }
    }
}

/// One written cell: format byte followed by UTF-8 text, in a single
/// allocation sized exactly to the content.
#[derive(Debug, Clone)]
pub struct CellBuf(Box<[u8]>);

impl CellBuf {
    fn new(format: CellFormat, text: &str) -> Self {
        let mut buf = Vec::with_capacity(1 + text.len());
        buf.push(format.to_byte());
        buf.extend_from_slice(text.as_bytes());
        CellBuf(buf.into_boxed_slice())
    }

    /// The cell's format.
    pub fn format(&self) -> CellFormat {
        CellFormat::from_byte(self.0[0])
    }

    fn set_format(&mut self, format: CellFormat) {
        self.0[0] = format.to_byte();
    }

    /// The cell's text payload.
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.0[1..]).unwrap_or("")
    }
}

/// The table's cell arena: counts, column widths, and the flat cell
/// buffer.
///
/// All mutating accessors report whether they changed anything, so the
/// widget layer can skip geometry refreshes for rejected operations.
/// Out-of-range indices are logged no-ops on write and documented
/// defaults on read; they never panic.
#[derive(Debug, Clone)]
pub struct CellStore {
    cells: Vec<Option<CellBuf>>,
    row_count: usize,
    column_count: usize,
    col_widths: [Coord; COL_MAX],
}

impl CellStore {
    /// An empty store: zero rows, zero columns, default column widths.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            row_count: 0,
            column_count: 0,
            col_widths: [DEFAULT_COL_WIDTH; COL_MAX],
        }
    }

    /// A store with the same counts and column widths as `other` but with
    /// every cell empty. Cell content is deliberately not copied.
    pub fn from_template(other: &CellStore) -> Self {
        let mut store = Self::new();
        store.col_widths = other.col_widths;
        store.set_row_count(other.row_count);
        store.set_column_count(other.column_count);
        store
    }

    /// Current number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Current number of columns.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of allocated cell slots (`rows * cols`).
    pub fn slot_count(&self) -> usize {
        self.cells.len()
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.row_count && col < self.column_count
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.column_count + col
    }

    /// Reallocate the backing store after a count change.
    ///
    /// Destructive by contract: surviving slots keep their linear
    /// position, but a column-count change re-addresses every (row, col)
    /// pair, so content is not meaningfully preserved. A zero count on
    /// either axis releases all storage.
    fn realloc(&mut self) {
        if self.row_count > 0 && self.column_count > 0 {
            self.cells.resize(self.row_count * self.column_count, None);
        } else {
            self.cells = Vec::new();
        }
    }

    /// Set the number of rows.
    pub fn set_row_count(&mut self, rows: usize) {
        self.row_count = rows;
        self.realloc();
    }

    /// Set the number of columns. Counts at or above [`COL_MAX`] are
    /// rejected with a warning; returns whether the store changed.
    pub fn set_column_count(&mut self, cols: usize) -> bool {
        if cols >= COL_MAX {
            warn!(cols, max = COL_MAX, "set_column_count: too many columns");
            return false;
        }
        self.column_count = cols;
        self.realloc();
        true
    }

    /// Replace a cell's text, keeping its format. Returns whether the
    /// store changed.
    pub fn set_value(&mut self, row: usize, col: usize, text: &str) -> bool {
        if !self.in_bounds(row, col) {
            warn!(row, col, "set_value: invalid row or column");
            return false;
        }
        let idx = self.index(row, col);
        let format = self.cells[idx]
            .as_ref()
            .map(|cell| cell.format())
            .unwrap_or_default();
        self.cells[idx] = Some(CellBuf::new(format, text));
        true
    }

    /// Set a cell's horizontal alignment, materializing an empty cell if
    /// needed. Returns whether the store changed.
    pub fn set_align(&mut self, row: usize, col: usize, align: CellAlign) -> bool {
        self.update_format(row, col, "set_align", |format| format.align = align)
    }

    /// Set a cell's right-merge flag, materializing an empty cell if
    /// needed. Returns whether the store changed.
    pub fn set_merge_right(&mut self, row: usize, col: usize, merge: bool) -> bool {
        self.update_format(row, col, "set_merge_right", |format| {
            format.merge_right = merge;
        })
    }

    fn update_format(
        &mut self,
        row: usize,
        col: usize,
        op: &'static str,
        change: impl FnOnce(&mut CellFormat),
    ) -> bool {
        if !self.in_bounds(row, col) {
            warn!(row, col, "{op}: invalid row or column");
            return false;
        }
        let idx = self.index(row, col);
        let cell = self.cells[idx].get_or_insert_with(|| CellBuf::new(CellFormat::default(), ""));
        let mut format = cell.format();
        change(&mut format);
        cell.set_format(format);
        true
    }

    /// A cell's text, or `""` for missing cells and out-of-range indices.
    pub fn value(&self, row: usize, col: usize) -> &str {
        if !self.in_bounds(row, col) {
            warn!(row, col, "value: invalid row or column");
            return "";
        }
        match self.cell(row, col) {
            Some(cell) => cell.text(),
            None => "",
        }
    }

    /// A cell's alignment, or `Left` for missing cells and out-of-range
    /// indices.
    pub fn align(&self, row: usize, col: usize) -> CellAlign {
        if !self.in_bounds(row, col) {
            warn!(row, col, "align: invalid row or column");
            return CellAlign::default();
        }
        self.cell(row, col)
            .map(|cell| cell.format().align)
            .unwrap_or_default()
    }

    /// A cell's right-merge flag, or `false` for missing cells and
    /// out-of-range indices.
    pub fn merge_right(&self, row: usize, col: usize) -> bool {
        if !self.in_bounds(row, col) {
            warn!(row, col, "merge_right: invalid row or column");
            return false;
        }
        self.cell(row, col)
            .map(|cell| cell.format().merge_right)
            .unwrap_or_default()
    }

    /// Direct cell access for layout and rendering. Unlike the public
    /// getters this stays silent on out-of-range indices: the geometry
    /// passes probe bounds legitimately.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellBuf> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[self.index(row, col)].as_ref()
    }

    /// Set a column slot's width. Slots at or above [`COL_MAX`] are
    /// rejected with a warning; returns whether the store changed.
    ///
    /// Widths are kept for all slots independent of the current column
    /// count, so they survive a temporary count reduction.
    pub fn set_column_width(&mut self, col: usize, width: Coord) -> bool {
        if col >= COL_MAX {
            warn!(col, max = COL_MAX, "set_column_width: column id out of range");
            return false;
        }
        self.col_widths[col] = width;
        true
    }

    /// A column slot's width, or 0 for slots at or above [`COL_MAX`].
    pub fn column_width(&self, col: usize) -> Coord {
        if col >= COL_MAX {
            warn!(col, max = COL_MAX, "column_width: column id out of range");
            return 0;
        }
        self.col_widths[col]
    }
}

impl Default for CellStore {
    fn default() -> Self {
        Self::new()
    }
}
