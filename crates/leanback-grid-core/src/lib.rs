//! Core primitives for Leanback Grid.
//!
//! This crate provides the reactive building blocks the grid engine is wired
//! with:
//!
//! - **Signal/Slot System**: Type-safe notifications from the engine to its host
//! - **Property System**: Change-detecting state cells
//! - **Logging**: `tracing` targets and span names shared by every subsystem
//!
//! # Example
//!
//! ```
//! use leanback_grid_core::{Property, Signal};
//!
//! struct FocusedRow {
//!     row: Property<usize>,
//!     row_changed: Signal<usize>,
//! }
//!
//! impl FocusedRow {
//!     fn move_to(&self, row: usize) {
//!         if self.row.set(row) {
//!             self.row_changed.emit(row);
//!         }
//!     }
//! }
//!
//! let focused = FocusedRow { row: Property::new(0), row_changed: Signal::new() };
//! focused.row_changed.connect(|row| println!("row {row} focused"));
//! focused.move_to(2);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::PerfSpan;
pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(Property<usize>: Send, Sync);
