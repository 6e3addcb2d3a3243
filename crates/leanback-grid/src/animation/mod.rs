//! Animation support for the grid viewport.
//!
//! This module provides easing functions and the cancellable
//! [`ScrollAnimation`] task the scroll coordinator drives once per frame.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Example
//!
//! ```
//! use leanback_grid::animation::{ease, Easing};
//!
//! let eased = ease(Easing::EaseInOut, 0.5);
//! assert_eq!(eased, 0.5);
//! ```

mod easing;
mod scroll_animation;

pub use easing::{ease, lerp_eased, Easing};
pub use scroll_animation::{ScrollAnimation, ScrollProgress};
