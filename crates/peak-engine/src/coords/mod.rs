//! Coordinate types for the normalized drawing space.
//!
//! Canonical space:
//! - fixed square, 100 × 100 units by default
//! - origin top-left
//! - +X right, +Y down
//!
//! Surfaces map this space onto physical pixels (stretch-to-fill).

mod space;
mod vec2;

pub use space::CoordSpace;
pub use vec2::Vec2;
