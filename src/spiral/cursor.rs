use crate::error::{GridError, Result};
use crate::grid::dimensions::{Dimensions, GridId};
use crate::grid::grid_access::Index2D;
use log::trace;

/// A position in the spiral ("snail") traversal of a [crate::grid::grid_map::Grid].
///
/// The traversal starts at the top-left corner and sweeps each ring clockwise (top edge,
/// right edge, bottom edge, left edge) before moving into the next inner ring.
///
/// A [SpiralCursor] is a plain value. It remembers the [GridId] and [Dimensions] of its grid,
/// the ring (`layer`) it is on, its `row` and `column`, and its `step`: the rank of the
/// position in traversal order. `step == rows * columns` is the end sentinel, which parks
/// on the last visited cell and is never dereferenced.
#[derive(Clone, Copy, Debug)]
pub struct SpiralCursor {
    grid: GridId,
    dimensions: Dimensions,
    layer: usize,
    row: usize,
    column: usize,
    step: usize,
}

impl SpiralCursor {
    pub(crate) fn begin(grid: GridId, dimensions: Dimensions) -> Self {
        Self {
            grid,
            dimensions,
            layer: 0,
            row: 0,
            column: 0,
            step: 0,
        }
    }

    pub(crate) fn end(grid: GridId, dimensions: Dimensions) -> Self {
        let mut cursor = Self::begin(grid, dimensions);
        while !cursor.is_end() {
            cursor.advance();
        }

        trace!(
            "End of {} spiral parks at ({}, {}) on layer {}",
            dimensions,
            cursor.row,
            cursor.column,
            cursor.layer
        );

        cursor
    }

    pub fn grid_id(&self) -> GridId {
        self.grid
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The ring the cursor is on, `0` being the outermost.
    pub fn layer(&self) -> usize {
        self.layer
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Index2D {
        Index2D::new(self.row, self.column)
    }

    /// The rank of this position in spiral order.
    pub fn step(&self) -> usize {
        self.step
    }

    fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_begin(&self) -> bool {
        self.step == 0
    }

    pub fn is_end(&self) -> bool {
        self.step == self.len()
    }

    pub(crate) fn out_of_bounds(&self) -> GridError {
        GridError::CursorOutOfBounds {
            step: self.step,
            len: self.len(),
        }
    }

    /// Moves to the next position in spiral order.
    /// Fails with [GridError::CursorOutOfBounds] at the end sentinel.
    pub fn step_forward(&mut self) -> Result<()> {
        if self.is_end() {
            return Err(self.out_of_bounds());
        }
        self.advance();
        Ok(())
    }

    /// Moves to the previous position in spiral order.
    /// Fails with [GridError::CursorOutOfBounds] at the first position.
    pub fn step_backward(&mut self) -> Result<()> {
        if self.is_begin() {
            return Err(self.out_of_bounds());
        }
        self.retreat();
        Ok(())
    }

    /// A copy of this cursor moved one step forward.
    pub fn next(&self) -> Result<Self> {
        let mut cursor = *self;
        cursor.step_forward()?;
        Ok(cursor)
    }

    /// A copy of this cursor moved one step backward.
    pub fn prev(&self) -> Result<Self> {
        let mut cursor = *self;
        cursor.step_backward()?;
        Ok(cursor)
    }

    fn advance(&mut self) {
        // The last cell steps into the sentinel without moving.
        if self.step + 1 < self.len() {
            self.advance_position();
        }
        self.step += 1;
    }

    fn retreat(&mut self) {
        if !self.is_end() {
            self.retreat_position();
        }
        self.step -= 1;
    }

    /// Index of the last row and column of the current ring.
    fn ring_bounds(&self) -> (usize, usize) {
        (
            self.dimensions.rows() - 1 - self.layer,
            self.dimensions.columns() - 1 - self.layer,
        )
    }

    fn advance_position(&mut self) {
        let k = self.layer;
        let (last_row, last_column) = self.ring_bounds();

        if self.column == last_column && self.row != last_row {
            // Right edge, heading down.
            self.row += 1;
        } else if self.column == k && self.row == k + 1 {
            // Left edge is done, enter the next ring.
            self.layer += 1;
            self.column += 1;
        } else if self.column == k && self.row != k {
            // Left edge, heading up.
            self.row -= 1;
        } else if self.column != last_column && self.row == k {
            // Top edge, heading right.
            self.column += 1;
        } else if self.row == last_row && self.column != k {
            // Bottom edge, heading left.
            self.column -= 1;
        } else {
            unreachable!("no spiral transition forward from {:?}", self);
        }
    }

    fn retreat_position(&mut self) {
        let k = self.layer;
        let (last_row, last_column) = self.ring_bounds();

        if self.column == last_column && self.row != k {
            self.row -= 1;
        } else if self.column == k && self.row == k {
            // First cell of an inner ring, back out to the left edge of the outer one.
            self.layer -= 1;
            self.column -= 1;
        } else if self.column == k && self.row != last_row {
            self.row += 1;
        } else if self.column != k && self.row == k {
            self.column -= 1;
        } else if self.row == last_row && self.column != last_column {
            self.column += 1;
        } else {
            unreachable!("no spiral transition backward from {:?}", self);
        }
    }
}
