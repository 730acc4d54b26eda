//! Core types for connector rendering
//!
//! Geometry primitives, the host document snapshot, the flowchart scope
//! extracted from it, the drawing surface and SVG output.

mod document;
mod error;
mod flowchart;
pub mod logging;
mod surface;
pub mod svg;
mod types;

pub use document::*;
pub use error::*;
pub use flowchart::*;
pub use logging::*;
pub use surface::*;
pub use types::*;
