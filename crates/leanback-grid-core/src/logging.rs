//! Logging facilities for the grid engine.
//!
//! Everything is instrumented with the `tracing` crate. To see logs, install
//! a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("leanback_grid::scroll=debug,leanback_grid::navigation=trace")
//!     .init();
//! ```
//!
//! The constants below are the stable targets and span names used by the
//! engine, so hosts can filter by subsystem.

/// Span names used throughout the grid engine.
pub mod span_names {
    /// Catalog snapshot replacement.
    pub const CATALOG_REPLACE: &str = "leanback_grid::catalog_replace";
    /// Directional input handling.
    pub const INPUT: &str = "leanback_grid::input";
    /// Scroll animation frame.
    pub const SCROLL_FRAME: &str = "leanback_grid::scroll_frame";
}

/// Target names for log filtering.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "leanback_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "leanback_grid_core::signal";
    /// Neighbor resolution target.
    pub const NAVIGATION: &str = "leanback_grid::navigation";
    /// Scroll coordination and animation target.
    pub const SCROLL: &str = "leanback_grid::scroll";
    /// Input throttling and key translation target.
    pub const INPUT: &str = "leanback_grid::input";
    /// Catalog feed target.
    pub const CATALOG: &str = "leanback_grid::catalog";
    /// Engine aggregate target.
    pub const ENGINE: &str = "leanback_grid::engine";
}

/// A performance span guard.
///
/// Enters an `info`-level span under the `leanback_grid::perf` target for as
/// long as the guard lives.
///
/// ```
/// use leanback_grid_core::logging::{span_names, PerfSpan};
///
/// let _span = PerfSpan::new(span_names::CATALOG_REPLACE);
/// ```
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "leanback_grid::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan").finish_non_exhaustive()
    }
}
