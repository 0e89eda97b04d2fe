//! Output renderers.
//!
//! Each renderer implements the [`Renderer`](crate::traits::Renderer) trait.

pub mod bazel;

// Kotlin (with Bazel BUILD files)
pub mod kotlin;

pub use kotlin::{KotlinRenderer, kotlin_string};
