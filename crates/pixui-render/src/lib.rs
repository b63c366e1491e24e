#![forbid(unsafe_code)]

//! Drawing primitives for pixui.
//!
//! Widgets do not rasterize anything themselves: they emit rectangle fills
//! and text draws against a [`Surface`], always paired with a clip mask.
//! A real backend (framebuffer, canvas, display driver) implements
//! [`Surface`]; [`RecordingSurface`] captures the calls for headless tests
//! and tooling.

pub mod record;
pub mod surface;

pub use record::{DrawCommand, RecordingSurface};
pub use surface::Surface;
