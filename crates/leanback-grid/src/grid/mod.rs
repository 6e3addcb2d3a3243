//! Grid coordinates and directional navigation.
//!
//! - [`CoordinateMapper`] converts between cells, linear indices and
//!   absolute rows.
//! - [`compute_neighbor`] resolves a directional move to a [`Neighbor`].
//!
//! Both are pure and allocation-free; they are safe to call on every key
//! press.

mod mapper;
mod navigation;

pub use mapper::CoordinateMapper;
pub use navigation::{compute_neighbor, Neighbor};
