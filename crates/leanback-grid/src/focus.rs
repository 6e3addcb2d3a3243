//! Per-tile focus handles.
//!
//! The host gives every rendered tile a platform focus target. The engine
//! refers to those targets through [`TileHandle`]s issued by a [`FocusArena`]:
//! one handle per item, addressed by the item's absolute linear index.
//!
//! # Lifetime
//!
//! The arena is rebuilt wholesale whenever the categories are replaced. A
//! rebuild invalidates every handle issued before it, so a host holding on
//! to a handle from an older snapshot can detect it with
//! [`FocusArena::is_live`] instead of focusing the wrong tile.

use slotmap::{new_key_type, SlotMap};

use crate::grid::CoordinateMapper;
use crate::model::{Category, FocusCell, ItemId};

new_key_type! {
    /// Arena key of one tile.
    pub struct TileKey;
}

/// Handle to the focus target of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileHandle {
    key: TileKey,
    index: usize,
    cell: FocusCell,
}

impl TileHandle {
    /// Arena key.
    #[inline]
    pub fn key(&self) -> TileKey {
        self.key
    }

    /// Absolute linear index of the tile.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell the tile was laid out at when the handle was issued.
    #[inline]
    pub fn cell(&self) -> FocusCell {
        self.cell
    }
}

#[derive(Debug, Clone)]
struct TileSlot {
    item: ItemId,
    handle: TileHandle,
}

/// Index-addressed tile handles for one category snapshot.
#[derive(Debug, Default)]
pub struct FocusArena {
    tiles: SlotMap<TileKey, TileSlot>,
    by_index: Vec<TileKey>,
}

impl FocusArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena holding one handle per item of `categories`.
    pub fn from_categories(categories: &[Category], columns: usize) -> Self {
        let mut arena = Self::new();
        arena.rebuild(categories, columns);
        arena
    }

    /// Drop every handle and issue fresh ones for `categories`.
    pub fn rebuild(&mut self, categories: &[Category], columns: usize) {
        self.tiles.clear();
        self.by_index.clear();

        let sizes: Vec<usize> = categories.iter().map(Category::len).collect();
        let mapper = CoordinateMapper::new(&sizes, columns);
        self.by_index.reserve(mapper.total_items());

        for (category_index, category) in categories.iter().enumerate() {
            for (local, item) in category.items().iter().enumerate() {
                let cell = mapper.cell_at(category_index, local);
                let index = self.by_index.len();
                let key = self.tiles.insert_with_key(|key| TileSlot {
                    item: item.id().clone(),
                    handle: TileHandle { key, index, cell },
                });
                self.by_index.push(key);
            }
        }
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    /// Whether the arena holds no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// Handle of the tile at an absolute linear index.
    pub fn handle_at(&self, index: usize) -> Option<TileHandle> {
        let key = self.by_index.get(index)?;
        self.tiles.get(*key).map(|slot| slot.handle)
    }

    /// Whether `handle` was issued by the current snapshot.
    pub fn is_live(&self, handle: TileHandle) -> bool {
        self.tiles.contains_key(handle.key)
    }

    /// Item behind a live handle.
    pub fn item(&self, handle: TileHandle) -> Option<&ItemId> {
        self.tiles.get(handle.key).map(|slot| &slot.item)
    }

    /// Cell of the first tile showing `item`.
    pub fn find_item(&self, item: &ItemId) -> Option<FocusCell> {
        self.by_index
            .iter()
            .filter_map(|key| self.tiles.get(*key))
            .find(|slot| &slot.item == item)
            .map(|slot| slot.handle.cell)
    }
}
