#![forbid(unsafe_code)]

//! Shared style records for pixui widgets.
//!
//! Styles are plain data: widgets hold them behind `Rc` and never mutate
//! or free a style they did not create. One style object may be shared by
//! any number of widgets; the reference count manages its lifetime.

pub mod color;
pub mod font;
pub mod style;

pub use color::Color;
pub use font::Font;
pub use style::{BodyStyle, Style, TextStyle};
