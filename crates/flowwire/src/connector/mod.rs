//! Connector pass
//!
//! One configurable component replaces the per-orientation copies: the
//! [`ConnectorStyle`](crate::core::ConnectorStyle) in [`RenderConfig`] picks
//! which box edges are joined and whether the path is straight or
//! right-angled.

mod guard;
mod renderer;
pub mod routing;

pub use guard::*;
pub use renderer::*;
