//! The grid engine aggregate.
//!
//! [`GridEngine`] owns the category snapshot, the focused cell and the
//! scroll state, and runs every input through one pipeline:
//!
//! ```text
//! key event -> translate_key -> InputThrottle -> compute_neighbor
//!           -> focus update -> ScrollCoordinator -> tick() per frame
//! ```
//!
//! Hosts observe the engine through its public signals and drive it from
//! their event loop:
//!
//! ```
//! use std::time::Instant;
//! use leanback_grid::{Category, Direction, GridEngine, GridLayout, InputOutcome, Item};
//!
//! let apps = Category::new("Apps", (0..7).map(|i| Item::new(format!("app.{i}"), "App")).collect::<Vec<_>>());
//! let mut engine = GridEngine::new(vec![apps], GridLayout::default(), Default::default())?;
//! engine.item_activated.connect(|id| println!("launch {id}"));
//!
//! engine.request_initial_focus(Instant::now());
//! let outcome = engine.on_directional_input(Direction::Down, Instant::now());
//! assert!(matches!(outcome, InputOutcome::Moved(_)));
//! while engine.tick(Instant::now()) {}
//! # Ok::<(), leanback_grid::GridError>(())
//! ```

use std::time::Instant;

use leanback_grid_core::logging::{span_names, targets};
use leanback_grid_core::{PerfSpan, Property, ReadOnlyProperty, Signal};

use crate::catalog::CatalogFeed;
use crate::error::{GridError, Result};
use crate::focus::{FocusArena, TileHandle};
use crate::grid::{compute_neighbor, CoordinateMapper, Neighbor};
use crate::input::{translate_key, GridInput, InputThrottle, KeyInput};
use crate::layout::{GridLayout, ViewportGeometry};
use crate::model::{Category, CategorySizes, Direction, FocusCell, ItemId};
use crate::scroll::{RowLayout, ScrollCoordinator};

/// What an input did to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Swallowed by the vertical throttle.
    Throttled,
    /// Grid edge; focus stayed put.
    Unchanged,
    /// Focus left the grid upwards; `leave_grid` was emitted.
    LeftGrid,
    /// Focus moved to this cell.
    Moved(FocusCell),
    /// The focused item was activated.
    Activated(ItemId),
}

/// Focus and scroll state of one category grid.
pub struct GridEngine {
    layout: GridLayout,
    viewport: ViewportGeometry,
    categories: Vec<Category>,
    sizes: CategorySizes,
    arena: FocusArena,
    focus: Property<FocusCell>,
    throttle: InputThrottle,
    scroll: ScrollCoordinator,

    /// Emitted with the new cell whenever focus moves inside the grid.
    pub focus_changed: Signal<FocusCell>,
    /// Emitted with the tile the host should give platform focus to.
    pub focus_requested: Signal<TileHandle>,
    /// Emitted when focus leaves the grid through its top edge.
    pub leave_grid: Signal<()>,
    /// Emitted with the identity of an activated item.
    pub item_activated: Signal<ItemId>,
    /// Emitted whenever the viewport offset changes.
    pub viewport_offset_changed: Signal<f32>,
}

impl GridEngine {
    /// Create an engine over `categories`.
    ///
    /// Fails on an invalid layout, an empty category list or an empty
    /// category. Focus starts at the first cell; call
    /// [`request_initial_focus`](Self::request_initial_focus) once the host
    /// has created its tiles.
    pub fn new(
        categories: Vec<Category>,
        layout: GridLayout,
        viewport: ViewportGeometry,
    ) -> Result<Self> {
        layout.validate()?;
        validate_categories(&categories)?;

        let sizes = CategorySizes::from_categories(&categories);
        let arena = FocusArena::from_categories(&categories, layout.columns);
        let rows = RowLayout::new(&sizes, &layout, viewport);
        let scroll = ScrollCoordinator::new(rows, layout.scroll_duration(), layout.scroll_easing);
        let throttle = InputThrottle::new(layout.throttle_window());

        tracing::debug!(
            target: targets::ENGINE,
            categories = categories.len(),
            items = arena.len(),
            columns = layout.columns,
            "grid engine created"
        );

        Ok(Self {
            layout,
            viewport,
            categories,
            sizes,
            arena,
            focus: Property::new(FocusCell::ORIGIN),
            throttle,
            scroll,
            focus_changed: Signal::new(),
            focus_requested: Signal::new(),
            leave_grid: Signal::new(),
            item_activated: Signal::new(),
            viewport_offset_changed: Signal::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The layout the engine was built with.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The current viewport geometry.
    pub fn viewport(&self) -> ViewportGeometry {
        self.viewport
    }

    /// The current category snapshot.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Item counts of the current snapshot.
    pub fn category_sizes(&self) -> &CategorySizes {
        &self.sizes
    }

    /// The focused cell.
    pub fn focused_cell(&self) -> FocusCell {
        self.focus.get()
    }

    /// Read-only view of the focus state, for hosts that poll it.
    pub fn focus(&self) -> ReadOnlyProperty<'_, FocusCell> {
        self.focus.read_only()
    }

    /// Identity of the focused item.
    pub fn focused_item(&self) -> &ItemId {
        let (category, index) = self.focus.with(|cell| {
            (cell.category, self.mapper().local_linear_index(cell.row, cell.column))
        });
        self.categories[category].items()[index].id()
    }

    /// Absolute row of the focused cell.
    pub fn focused_absolute_row(&self) -> usize {
        self.focus
            .with(|cell| self.mapper().absolute_row(cell.category, cell.row))
    }

    /// Current viewport offset.
    pub fn viewport_offset(&self) -> f32 {
        self.scroll.viewport_offset()
    }

    /// Whether the viewport is pinned to the content end.
    pub fn is_anchored_at_end(&self) -> bool {
        self.scroll.is_anchored_at_end()
    }

    /// Whether a scroll animation is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Row extents of the current snapshot.
    pub fn rows(&self) -> &RowLayout {
        self.scroll.rows()
    }

    /// Focus handle of the tile at `cell`, if the cell exists.
    pub fn tile_handle(&self, cell: FocusCell) -> Option<TileHandle> {
        let mapper = self.mapper();
        if !mapper.contains(cell) {
            return None;
        }
        self.arena.handle_at(mapper.absolute_linear_index(cell))
    }

    /// Whether `handle` belongs to the current snapshot.
    pub fn is_tile_live(&self, handle: TileHandle) -> bool {
        self.arena.is_live(handle)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Put focus on the first cell and ask the host to focus its tile.
    ///
    /// The viewport scrolls back to the top from wherever it was.
    pub fn request_initial_focus(&mut self, now: Instant) -> Option<TileHandle> {
        self.set_focus(FocusCell::ORIGIN);
        let before = self.scroll.viewport_offset();
        self.scroll.return_to_top(now);
        self.notify_offset(before);
        let handle = self.tile_handle(FocusCell::ORIGIN)?;
        tracing::debug!(target: targets::ENGINE, "initial focus requested");
        self.focus_requested.emit(handle);
        Some(handle)
    }

    /// Handle a directional move at `now`.
    pub fn on_directional_input(&mut self, direction: Direction, now: Instant) -> InputOutcome {
        let _span =
            tracing::trace_span!(target: targets::INPUT, "input", operation = span_names::INPUT)
                .entered();

        if !self.throttle.accept(direction, now) {
            return InputOutcome::Throttled;
        }

        let current = self.focus.get();
        match compute_neighbor(&self.sizes, self.layout.columns, current, direction) {
            Neighbor::SelfLoop => InputOutcome::Unchanged,
            Neighbor::Escape => {
                tracing::debug!(target: targets::ENGINE, "focus leaving grid");
                self.leave_grid.emit(());
                InputOutcome::LeftGrid
            }
            Neighbor::Cell(cell) => {
                self.move_focus(cell, now);
                InputOutcome::Moved(cell)
            }
        }
    }

    /// Activate the focused item and return its identity.
    ///
    /// Activation is never throttled.
    pub fn on_activate(&self) -> ItemId {
        let id = self.focused_item().clone();
        tracing::debug!(target: targets::ENGINE, item = %id, "item activated");
        self.item_activated.emit(id.clone());
        id
    }

    /// Handle a translated grid input.
    pub fn handle_input(&mut self, input: GridInput, now: Instant) -> InputOutcome {
        match input {
            GridInput::Move(direction) => self.on_directional_input(direction, now),
            GridInput::Activate => InputOutcome::Activated(self.on_activate()),
        }
    }

    /// Handle a keyboard event.
    ///
    /// Returns `None` if the key means nothing to the grid.
    pub fn handle_key(&mut self, key: &KeyInput, now: Instant) -> Option<InputOutcome> {
        let input = translate_key(key)?;
        Some(self.handle_input(input, now))
    }

    /// Advance the scroll animation to `now`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.scroll.viewport_offset();
        let running = self.scroll.tick(now);
        self.notify_offset(before);
        running
    }

    // =========================================================================
    // Snapshots and geometry
    // =========================================================================

    /// Swap in a new category snapshot.
    ///
    /// Focus follows the focused item if it is still present, otherwise it is
    /// clamped to the nearest existing cell. The host gets a fresh
    /// `focus_requested` because every tile handle is reissued. On error the
    /// current snapshot stays in place.
    pub fn replace_categories(&mut self, categories: Vec<Category>) -> Result<()> {
        let _perf = PerfSpan::new(span_names::CATALOG_REPLACE);
        validate_categories(&categories)?;

        let previous_item = self.focused_item().clone();
        let previous_cell = self.focus.get();
        let before = self.scroll.viewport_offset();

        self.sizes = CategorySizes::from_categories(&categories);
        self.categories = categories;
        self.arena.rebuild(&self.categories, self.layout.columns);

        let cell = self
            .arena
            .find_item(&previous_item)
            .unwrap_or_else(|| self.mapper().clamp(previous_cell));
        let row = self.mapper().absolute_row(cell.category, cell.row);
        let rows = RowLayout::new(&self.sizes, &self.layout, self.viewport);
        self.scroll.reset(row, rows);

        tracing::info!(
            target: targets::CATALOG,
            categories = self.categories.len(),
            items = self.arena.len(),
            %cell,
            "categories replaced"
        );

        self.set_focus(cell);
        if let Some(handle) = self.tile_handle(cell) {
            self.focus_requested.emit(handle);
        }
        self.notify_offset(before);
        Ok(())
    }

    /// Apply the newest snapshot waiting in `feed`, if any.
    ///
    /// Returns `true` if a snapshot was applied. A snapshot the engine
    /// cannot show (no categories, or an empty one) is dropped with a
    /// warning and the current snapshot stays.
    pub fn sync_catalog(&mut self, feed: &CatalogFeed) -> bool {
        let Some(categories) = feed.latest() else {
            return false;
        };
        match self.replace_categories(categories) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(target: targets::CATALOG, %error, "rejected catalog snapshot");
                false
            }
        }
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, viewport: ViewportGeometry) {
        if viewport == self.viewport {
            return;
        }
        let before = self.scroll.viewport_offset();
        self.viewport = viewport;
        let rows = RowLayout::new(&self.sizes, &self.layout, viewport);
        let row = self.focused_absolute_row();
        self.scroll.reset(row, rows);
        tracing::debug!(
            target: targets::ENGINE,
            width = viewport.width,
            height = viewport.height,
            "viewport resized"
        );
        self.notify_offset(before);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn mapper(&self) -> CoordinateMapper<'_> {
        CoordinateMapper::new(&self.sizes, self.layout.columns)
    }

    fn move_focus(&mut self, cell: FocusCell, now: Instant) {
        let row = self.mapper().absolute_row(cell.category, cell.row);
        self.set_focus(cell);
        if let Some(handle) = self.tile_handle(cell) {
            self.focus_requested.emit(handle);
        }
        self.scroll.on_focus_row_changed(row, now);
    }

    fn set_focus(&self, cell: FocusCell) {
        if let Some(previous) = self.focus.replace(cell) {
            tracing::trace!(target: targets::ENGINE, from = %previous, to = %cell, "focus changed");
            self.focus_changed.emit(cell);
        }
    }

    fn notify_offset(&self, before: f32) {
        let after = self.scroll.viewport_offset();
        if after != before {
            self.viewport_offset_changed.emit(after);
        }
    }
}

impl std::fmt::Debug for GridEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEngine")
            .field("sizes", &self.sizes)
            .field("focus", &self.focus.get())
            .field("viewport_offset", &self.scroll.viewport_offset())
            .field("anchored_at_end", &self.scroll.is_anchored_at_end())
            .finish_non_exhaustive()
    }
}

fn validate_categories(categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        return Err(GridError::NoCategories);
    }
    if let Some((index, category)) = categories.iter().enumerate().find(|(_, c)| c.is_empty()) {
        return Err(GridError::empty_category(index, category.label()));
    }
    Ok(())
}
