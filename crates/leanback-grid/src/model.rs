//! Content model consumed by the grid.
//!
//! Categories are immutable snapshots: a catalog refresh builds a new
//! `Vec<Category>` and hands it to the engine as a whole. Items are shared
//! through an `Arc<[Item]>`, so cloning a snapshot never copies the items.

use std::fmt;
use std::sync::Arc;

/// Stable identity of a content item, e.g. an application package name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Arc<str>);

impl ItemId {
    /// Create an identity from any string.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// An opaque content unit shown as one tile.
///
/// The engine only looks at [`Item::id`]; the label and game flag are carried
/// for the host and for catalog categorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    label: String,
    is_game: bool,
}

impl Item {
    /// Create an item with the given identity and display label.
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_game: false,
        }
    }

    /// Mark the item as a game.
    pub fn with_game(mut self, is_game: bool) -> Self {
        self.is_game = is_game;
        self
    }

    /// The stable identity.
    #[inline]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// The display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the item declared itself a game.
    #[inline]
    pub fn is_game(&self) -> bool {
        self.is_game
    }
}

/// A labelled, ordered group of items rendered as one block of grid rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    label: String,
    items: Arc<[Item]>,
}

impl Category {
    /// Create a category. Emptiness is checked when the category list is
    /// handed to the engine.
    pub fn new(label: impl Into<String>, items: impl Into<Vec<Item>>) -> Self {
        let items: Vec<Item> = items.into();
        Self {
            label: label.into(),
            items: items.into(),
        }
    }

    /// The category heading.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The items in display order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the category has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Item counts per category, in category order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySizes(Vec<usize>);

impl CategorySizes {
    /// Derive sizes from a category list.
    pub fn from_categories(categories: &[Category]) -> Self {
        Self(categories.iter().map(Category::len).collect())
    }

    /// The sizes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for CategorySizes {
    fn from(sizes: Vec<usize>) -> Self {
        Self(sizes)
    }
}

impl std::ops::Deref for CategorySizes {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// A focus position, relative to its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FocusCell {
    /// Index of the category.
    pub category: usize,
    /// Row within the category.
    pub row: usize,
    /// Column within the row.
    pub column: usize,
}

impl FocusCell {
    /// Create a cell.
    pub const fn new(category: usize, row: usize, column: usize) -> Self {
        Self {
            category,
            row,
            column,
        }
    }

    /// The first cell of the grid.
    pub const ORIGIN: FocusCell = FocusCell::new(0, 0, 0);
}

impl fmt::Display for FocusCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.category, self.row, self.column)
    }
}

/// One of the four remote-control directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous row.
    Up,
    /// Towards the next row.
    Down,
    /// Towards the previous column.
    Left,
    /// Towards the next column.
    Right,
}

impl Direction {
    /// Whether this direction moves between rows.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_snapshot_clone_shares_items() {
        let category = Category::new("Apps", vec![Item::new("a", "A"), Item::new("b", "B")]);
        let copy = category.clone();
        assert_eq!(copy.len(), 2);
        assert!(std::ptr::eq(category.items().as_ptr(), copy.items().as_ptr()));
    }

    #[test]
    fn test_category_sizes() {
        let categories = vec![
            Category::new("Apps", vec![Item::new("a", "A"); 7]),
            Category::new("Games", vec![Item::new("g", "G").with_game(true); 3]),
        ];
        let sizes = CategorySizes::from_categories(&categories);
        assert_eq!(sizes.as_slice(), &[7, 3]);
        assert_eq!(sizes.len(), 2);
    }

    #[test]
    fn test_direction_classes() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    #[test]
    fn test_item_id_display() {
        let id = ItemId::from("org.example.tv");
        assert_eq!(id.to_string(), "org.example.tv");
        assert_eq!(id.as_str(), "org.example.tv");
    }
}
