//! Prelude module for Leanback Grid.
//!
//! ```ignore
//! use leanback_grid::prelude::*;
//! ```

// ============================================================================
// Engine
// ============================================================================

pub use crate::engine::{GridEngine, InputOutcome};
pub use crate::error::GridError;

// ============================================================================
// Model and Layout
// ============================================================================

pub use crate::layout::{GridLayout, ViewportGeometry};
pub use crate::model::{Category, Direction, FocusCell, Item, ItemId};

// ============================================================================
// Input and Catalog
// ============================================================================

pub use crate::catalog::{CatalogFeed, CatalogPublisher};
pub use crate::focus::TileHandle;
pub use crate::input::{GridInput, KeyInput};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use leanback_grid_core::{ConnectionId, Property, Signal};
