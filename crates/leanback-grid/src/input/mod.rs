//! Input handling in front of the navigation pipeline.
//!
//! - [`translate_key`] maps winit keyboard events to [`GridInput`].
//! - [`InputThrottle`] rate-limits vertical repeats.

mod keyboard;
mod throttle;

pub use keyboard::{translate_key, GridInput, KeyInput};
pub use throttle::{InputThrottle, DEFAULT_THROTTLE_WINDOW};
