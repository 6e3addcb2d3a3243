//! Directional neighbor resolution.
//!
//! [`compute_neighbor`] is a pure function over coordinates: given the
//! category sizes, the column count, a cell and a direction it returns the
//! next cell, [`Neighbor::SelfLoop`] at a grid edge, or [`Neighbor::Escape`]
//! when focus should leave the grid upwards.
//!
//! # Rules
//!
//! | Direction | Inside the category        | At the edge                                         |
//! |-----------|----------------------------|-----------------------------------------------------|
//! | Left      | previous column            | self-loop at column 0                               |
//! | Right     | next column                | self-loop at the last item of the row               |
//! | Up        | same column, previous row  | previous category's last row, else escape           |
//! | Down      | same column, next row      | next category's first row, else self-loop           |
//!
//! Whenever the target row is shorter than the source column, the column is
//! clamped to the last item of the target row. No direction wraps.

use crate::grid::CoordinateMapper;
use crate::model::{Direction, FocusCell};
use leanback_grid_core::logging::targets;

/// Outcome of a directional move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Focus moves to this cell.
    Cell(FocusCell),
    /// Grid edge: focus stays where it is.
    SelfLoop,
    /// Focus leaves the grid (e.g. to a header above it).
    Escape,
}

impl Neighbor {
    /// The target cell, if focus moves.
    pub fn cell(self) -> Option<FocusCell> {
        match self {
            Neighbor::Cell(cell) => Some(cell),
            Neighbor::SelfLoop | Neighbor::Escape => None,
        }
    }
}

/// Compute where focus goes from `cell` in `direction`.
///
/// # Panics
///
/// Panics if `cell` does not address an existing item of `sizes`.
pub fn compute_neighbor(
    sizes: &[usize],
    columns: usize,
    cell: FocusCell,
    direction: Direction,
) -> Neighbor {
    let mapper = CoordinateMapper::new(sizes, columns);
    assert!(
        mapper.contains(cell),
        "focus cell {cell} is outside the grid {sizes:?} with {columns} columns"
    );

    let FocusCell {
        category,
        row,
        column,
    } = cell;
    let last_row = mapper.rows_in_category(category) - 1;

    let neighbor = match direction {
        Direction::Left => {
            if column > 0 {
                Neighbor::Cell(FocusCell::new(category, row, column - 1))
            } else {
                Neighbor::SelfLoop
            }
        }
        Direction::Right => {
            if column + 1 >= mapper.items_in_row(category, row) {
                Neighbor::SelfLoop
            } else {
                Neighbor::Cell(FocusCell::new(category, row, column + 1))
            }
        }
        Direction::Up => {
            if row > 0 {
                Neighbor::Cell(FocusCell::new(category, row - 1, column))
            } else if category > 0 {
                let previous = category - 1;
                let target_row = mapper.rows_in_category(previous) - 1;
                let target_column = column.min(mapper.items_in_last_row(previous) - 1);
                Neighbor::Cell(FocusCell::new(previous, target_row, target_column))
            } else {
                Neighbor::Escape
            }
        }
        Direction::Down => {
            if row < last_row {
                let target_column = column.min(mapper.items_in_row(category, row + 1) - 1);
                Neighbor::Cell(FocusCell::new(category, row + 1, target_column))
            } else if category + 1 < mapper.category_count() {
                let next = category + 1;
                let target_column = column.min(mapper.items_in_first_row(next) - 1);
                Neighbor::Cell(FocusCell::new(next, 0, target_column))
            } else {
                Neighbor::SelfLoop
            }
        }
    };

    tracing::trace!(target: targets::NAVIGATION, %cell, ?direction, ?neighbor, "resolved neighbor");
    neighbor
}
