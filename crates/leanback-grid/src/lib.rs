//! Leanback Grid - focus navigation and viewport scrolling for TV launchers.
//!
//! A leanback home screen shows categories of tiles ("Apps", "Games") in a
//! fixed number of columns and is driven by a remote control with four
//! directions and an OK button. This crate computes where focus goes for
//! every key press and keeps an animated viewport on the focused row.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use leanback_grid::prelude::*;
//!
//! let items: Vec<Item> = (0..12)
//!     .map(|i| Item::new(format!("org.example.app{i}"), format!("App {i}")))
//!     .collect();
//! let mut engine = GridEngine::new(
//!     vec![Category::new("Apps", items)],
//!     GridLayout::default(),
//!     ViewportGeometry::new(1920.0, 1080.0),
//! )?;
//!
//! engine.leave_grid.connect(|_| println!("focus the header"));
//! let now = Instant::now();
//! engine.request_initial_focus(now);
//!
//! assert_eq!(engine.on_directional_input(Direction::Right, now), InputOutcome::Moved(FocusCell::new(0, 0, 1)));
//! assert_eq!(engine.on_activate().as_str(), "org.example.app1");
//! # Ok::<(), GridError>(())
//! ```
//!
//! # Modules
//!
//! - [`grid`]: coordinate arithmetic and the neighbor resolver
//! - [`scroll`]: row extents and the scroll coordinator
//! - [`animation`]: easing curves and the cancellable scroll animation
//! - [`input`]: key translation and the vertical throttle
//! - [`focus`]: per-tile focus handles
//! - [`catalog`]: snapshot channel and apps/games categorization

pub use leanback_grid_core::*;

pub mod animation;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod focus;
pub mod grid;
pub mod input;
pub mod layout;
pub mod model;
pub mod prelude;
pub mod scroll;

pub use engine::{GridEngine, InputOutcome};
pub use error::{GridError, Result};
pub use focus::{FocusArena, TileHandle};
pub use layout::{GridLayout, ViewportGeometry};
pub use model::{Category, CategorySizes, Direction, FocusCell, Item, ItemId};

static_assertions::assert_impl_all!(GridEngine: Send, Sync);
static_assertions::assert_impl_all!(catalog::CatalogPublisher: Send, Sync, Clone);
static_assertions::assert_impl_all!(catalog::CatalogFeed: Send);
