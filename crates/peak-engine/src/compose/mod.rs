//! Composition driver: layers + gradients in, ordered draw list out.

mod driver;
mod error;

pub use driver::{Composer, ReferencePolicy};
pub use error::ComposeError;
