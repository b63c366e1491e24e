#![forbid(unsafe_code)]

//! Core geometry types for pixui.
//!
//! Everything here works in pixel coordinates ([`geometry::Coord`]).
//! The toolkit is single-threaded by design: widgets, styles, and
//! collaborators are shared within one UI thread and carry no internal
//! synchronization.

pub mod geometry;

pub use geometry::{Coord, Padding, Point, Rect, Size};
