//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic gradient declarations and layer fills
//! - keep deterministic paint order (layer index, back-to-front)
//! - hand everything to a [`RenderSurface`] in declaration-then-paint order

mod cmd;
mod list;
mod surface;

pub use cmd::LayerCmd;
pub use list::DrawList;
pub use surface::RenderSurface;
