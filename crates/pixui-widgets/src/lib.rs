#![forbid(unsafe_code)]

//! Table widget for pixui.
//!
//! The toolkit is single-threaded and cooperative: every operation runs to
//! completion on the caller's thread, there are no suspension points, and
//! shared styles are `Rc`-counted rather than locked. The table widget
//! itself is three layers glued together by [`table::Table`]:
//!
//! - [`cell`] — the packed per-cell storage and format-byte codec,
//! - [`layout`] — merge-span resolution, row heights, and total size,
//! - the renderer in [`table`], which re-reads the same layout engine so
//!   painting and measurement can never disagree on geometry.

pub mod cell;
pub mod layout;
pub mod table;
pub mod widget;

pub use cell::{CellAlign, CellFormat, CellStore, COL_MAX, DEFAULT_COL_WIDTH};
pub use layout::MergeSpan;
pub use table::{StyleSlot, Table};
pub use widget::{DrawPhase, Widget, WidgetBase};
