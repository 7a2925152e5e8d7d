//! Pointer, scroll and frame driven decorations.
//!
//! The math lives in plain functions and small state structs so it can be
//! tested off the browser. Components own the listeners.

pub mod accordion;
pub mod cursor;
pub mod parallax;
pub mod particles;
#[cfg(feature = "hydrate")]
pub mod raf;
pub mod tilt;

pub use accordion::toggle_faq;
pub use cursor::CursorState;
pub use particles::{ParticleField, ParticleSettings};
pub use tilt::Tilt;
