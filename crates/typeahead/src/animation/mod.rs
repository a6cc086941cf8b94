//! Animation support for panel movement.
//!
//! The panel never jumps between geometries: moves are applied through a
//! short, cancelable transition so keyboard-height changes mid-edit do not
//! visually pop.

mod easing;
mod transition;

pub use easing::{Easing, ease};
pub use transition::GeometryTransition;
