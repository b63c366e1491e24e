#![forbid(unsafe_code)]

//! Text measurement for pixui.
//!
//! Widgets never shape text themselves; they ask a [`TextMeasure`]
//! collaborator for the wrapped size of a string and hand the string to the
//! drawing surface untouched. [`MonoShaper`] is the in-tree deterministic
//! implementation: monospace advance times display width, greedy word wrap.
//! Embedders with a real font engine supply their own `TextMeasure`.

pub mod measure;
pub mod wrap;

pub use measure::{MonoShaper, TextFlags, TextMeasure};
pub use wrap::{line_px, wrap_px};
