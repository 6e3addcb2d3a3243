//! Viewport scrolling.
//!
//! [`RowLayout`] models the rendered height of every absolute row and
//! [`ScrollCoordinator`] animates the viewport over it as focus moves.

mod coordinator;
mod row_layout;

pub use coordinator::ScrollCoordinator;
pub use row_layout::RowLayout;
