//! Index arithmetic between grid coordinates.
//!
//! Three index spaces are in play:
//!
//! - **Cell**: `(category, row, column)`, category-relative.
//! - **Local linear index**: position of an item inside its category,
//!   `row * columns + column`.
//! - **Absolute row**: rows of all categories stacked into one list. Category
//!   headings take no slot.
//!
//! Every method panics with an index error on an out-of-range category;
//! such indices can only come from a bug in the caller.

use crate::model::FocusCell;

/// Stateless coordinate conversions over a category-size list.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    sizes: &'a [usize],
    columns: usize,
}

impl<'a> CoordinateMapper<'a> {
    /// Create a mapper over `sizes` laid out in `columns` columns.
    pub fn new(sizes: &'a [usize], columns: usize) -> Self {
        debug_assert!(columns > 0, "grid needs at least one column");
        Self { sizes, columns }
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of categories.
    #[inline]
    pub fn category_count(&self) -> usize {
        self.sizes.len()
    }

    /// Number of items in a category.
    #[inline]
    pub fn category_size(&self, category: usize) -> usize {
        self.sizes[category]
    }

    /// Rows occupied by a category: `ceil(size / columns)`.
    #[inline]
    pub fn rows_in_category(&self, category: usize) -> usize {
        self.sizes[category].div_ceil(self.columns)
    }

    /// Items on the last row of a category, between 1 and `columns`.
    #[inline]
    pub fn items_in_last_row(&self, category: usize) -> usize {
        match self.sizes[category] % self.columns {
            0 => self.columns,
            rest => rest,
        }
    }

    /// Items on the first row of a category.
    #[inline]
    pub fn items_in_first_row(&self, category: usize) -> usize {
        self.sizes[category].min(self.columns)
    }

    /// Items on a given row of a category. Only the last row can be short.
    pub fn items_in_row(&self, category: usize, row: usize) -> usize {
        let rows = self.rows_in_category(category);
        assert!(
            row < rows,
            "row {row} out of range for category {category} with {rows} rows"
        );
        if row + 1 == rows {
            self.items_in_last_row(category)
        } else {
            self.columns
        }
    }

    /// Position of a cell inside its category.
    #[inline]
    pub fn local_linear_index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Row index across all categories.
    pub fn absolute_row(&self, category: usize, row: usize) -> usize {
        assert!(
            category < self.sizes.len(),
            "category {category} out of range for {} categories",
            self.sizes.len()
        );
        (0..category)
            .map(|c| self.rows_in_category(c))
            .sum::<usize>()
            + row
    }

    /// Item index across all categories, in traversal order.
    pub fn absolute_linear_index(&self, cell: FocusCell) -> usize {
        self.sizes[..cell.category].iter().sum::<usize>()
            + self.local_linear_index(cell.row, cell.column)
    }

    /// Total rows of all categories.
    pub fn total_absolute_rows(&self) -> usize {
        (0..self.sizes.len()).map(|c| self.rows_in_category(c)).sum()
    }

    /// Total items of all categories.
    pub fn total_items(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Inverse of [`absolute_row`](Self::absolute_row).
    ///
    /// Returns `None` past the last row.
    pub fn locate_absolute_row(&self, absolute_row: usize) -> Option<(usize, usize)> {
        let mut remaining = absolute_row;
        for category in 0..self.sizes.len() {
            let rows = self.rows_in_category(category);
            if remaining < rows {
                return Some((category, remaining));
            }
            remaining -= rows;
        }
        None
    }

    /// Cell of the item at `index` inside `category`.
    pub fn cell_at(&self, category: usize, index: usize) -> FocusCell {
        FocusCell::new(category, index / self.columns, index % self.columns)
    }

    /// Whether a cell addresses an existing item.
    pub fn contains(&self, cell: FocusCell) -> bool {
        cell.category < self.sizes.len()
            && cell.column < self.columns
            && self.local_linear_index(cell.row, cell.column) < self.sizes[cell.category]
    }

    /// Nearest existing cell to `cell`.
    ///
    /// The category is clamped first, then the row, then the column, so a
    /// focus on a vanished row lands on the last row of the same column.
    /// Categories must all be non-empty.
    pub fn clamp(&self, cell: FocusCell) -> FocusCell {
        let category = cell.category.min(self.sizes.len() - 1);
        let row = cell.row.min(self.rows_in_category(category) - 1);
        let column = cell.column.min(self.items_in_row(category, row) - 1);
        FocusCell::new(category, row, column)
    }
}
