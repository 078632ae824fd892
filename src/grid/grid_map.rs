use crate::error::{GridError, Result};
use crate::grid::dimensions::{Dimensions, GridId};
use crate::grid::grid_access::{GridAccessor2D, GridIterator2D, Index2D, RowMajorIterator};
use crate::spiral::cursor::SpiralCursor;
use crate::spiral::random_access::CursorStore;
use crate::spiral::sort::{sort, sort_by};
use crate::spiral::spiral_iter::{SpiralIter, SpiralPositions};
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

/// A rectangular grid of `rows * columns` elements, stored row-major in a single buffer.
///
/// Elements are addressed by [Index2D] in row-major layout, and by [SpiralCursor] in
/// spiral order. The shape is fixed for the lifetime of the grid.
pub struct Grid<T> {
    id: GridId,
    dimensions: Dimensions,
    cells: Vec<T>,
}

impl<T: Default> Grid<T> {
    /// Creates a grid of default values.
    ///
    /// Returns [GridError::InvalidDimension] if either side is not positive, and
    /// [GridError::AllocationFailure] if the buffer cannot be reserved.
    pub fn new(rows: i64, columns: i64) -> Result<Self> {
        let dimensions = Dimensions::new(rows, columns)?;
        let len = dimensions.checked_len()?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::AllocationFailure {
                rows: dimensions.rows(),
                columns: dimensions.columns(),
            })?;
        cells.resize_with(len, T::default);

        Ok(Self::from_parts(dimensions, cells))
    }
}

impl<T> Grid<T> {
    fn from_parts(dimensions: Dimensions, cells: Vec<T>) -> Self {
        Self {
            id: GridId::next(),
            dimensions,
            cells,
        }
    }

    /// Creates a grid from row-major data. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_columns = rows.first().map_or(0, Vec::len);
        let invalid = || GridError::InvalidDimension {
            rows: i64::try_from(num_rows).unwrap_or(i64::MAX),
            columns: i64::try_from(num_columns).unwrap_or(i64::MAX),
        };

        if rows.iter().any(|row| row.len() != num_columns) {
            return Err(invalid());
        }

        let dimensions = Dimensions::new(
            i64::try_from(num_rows).map_err(|_| invalid())?,
            i64::try_from(num_columns).map_err(|_| invalid())?,
        )?;

        let cells = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(dimensions, cells))
    }

    pub fn id(&self) -> GridId {
        self.id
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, a grid holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn offset(&self, coords: Index2D) -> Result<usize> {
        if coords.row < self.rows() && coords.column < self.columns() {
            Ok(coords.row * self.columns() + coords.column)
        } else {
            Err(GridError::OutOfRange {
                index: coords,
                rows: self.rows(),
                columns: self.columns(),
            })
        }
    }

    fn cursor_offset(&self, cursor: &SpiralCursor) -> Result<usize> {
        if cursor.grid_id() != self.id {
            return Err(GridError::ForeignCursor);
        }

        if cursor.is_end() {
            return Err(GridError::CursorOutOfBounds {
                step: cursor.step(),
                len: self.len(),
            });
        }

        self.offset(cursor.position())
    }

    /// Checked mutable access to the element at `row`, `column`.
    pub fn element(&mut self, row: usize, column: usize) -> Result<&mut T> {
        self.get_mut(Index2D::new(row, column))
    }

    /// Checked shared access to the element at `row`, `column`.
    pub fn element_ref(&self, row: usize, column: usize) -> Result<&T> {
        self.get(Index2D::new(row, column))
    }

    /// A cursor on the first element of the spiral, the top-left corner.
    pub fn begin_cursor(&self) -> SpiralCursor {
        SpiralCursor::begin(self.id, self.dimensions)
    }

    /// The one-past-the-end cursor of the spiral.
    pub fn end_cursor(&self) -> SpiralCursor {
        SpiralCursor::end(self.id, self.dimensions)
    }

    /// Dereferences `cursor`. Fails for the end sentinel or a cursor of another grid.
    pub fn at(&self, cursor: &SpiralCursor) -> Result<&T> {
        let offset = self.cursor_offset(cursor)?;
        Ok(&self.cells[offset])
    }

    pub fn at_mut(&mut self, cursor: &SpiralCursor) -> Result<&mut T> {
        let offset = self.cursor_offset(cursor)?;
        Ok(&mut self.cells[offset])
    }

    /// Swaps the values under two cursors. The cursors themselves do not move.
    pub fn swap_at(&mut self, a: &SpiralCursor, b: &SpiralCursor) -> Result<()> {
        let a = self.cursor_offset(a)?;
        let b = self.cursor_offset(b)?;
        self.cells.swap(a, b);
        Ok(())
    }

    /// The elements in spiral order.
    pub fn spiral(&self) -> SpiralIter<'_, T> {
        SpiralIter::new(self)
    }

    /// The positions of the elements in spiral order.
    pub fn spiral_positions(&self) -> SpiralPositions {
        SpiralPositions::new(self.begin_cursor(), self.end_cursor())
    }

    /// The rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.columns())
    }

    /// Sorts the values so that they ascend along the spiral.
    pub fn sort_spiral(&mut self) -> Result<()>
    where
        T: Ord,
    {
        let (first, last) = (self.begin_cursor(), self.end_cursor());
        sort(self, first, last)
    }

    pub fn sort_spiral_by<F>(&mut self, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (first, last) = (self.begin_cursor(), self.end_cursor());
        sort_by(self, first, last, compare)
    }
}

impl<T: Clone> Clone for Grid<T> {
    /// The clone is a distinct grid, so cursors of `self` are foreign to it.
    fn clone(&self) -> Self {
        Self::from_parts(self.dimensions, self.cells.clone())
    }
}

impl<T> RowMajorIterator for Grid<T> {
    fn iter_grid(&self) -> GridIterator2D {
        GridIterator2D::new(self.dimensions)
    }
}

impl<T> GridAccessor2D<T> for Grid<T> {
    fn get(&self, coords: Index2D) -> Result<&T> {
        let offset = self.offset(coords)?;
        Ok(&self.cells[offset])
    }

    fn get_mut(&mut self, coords: Index2D) -> Result<&mut T> {
        let offset = self.offset(coords)?;
        Ok(&mut self.cells[offset])
    }
}

impl<T> CursorStore<SpiralCursor> for Grid<T> {
    type Item = T;

    fn read(&self, cursor: &SpiralCursor) -> Result<&T> {
        self.at(cursor)
    }

    fn swap_at(&mut self, a: &SpiralCursor, b: &SpiralCursor) -> Result<()> {
        Grid::swap_at(self, a, b)
    }
}

/// Panics if `coords` is out of range. Use [GridAccessor2D::get] for checked access.
impl<T> Index<Index2D> for Grid<T> {
    type Output = T;

    fn index(&self, coords: Index2D) -> &T {
        match self.get(coords) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<Index2D> for Grid<T> {
    fn index_mut(&mut self, coords: Index2D) -> &mut T {
        match self.offset(coords) {
            Ok(offset) => &mut self.cells[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_three() -> Grid<i32> {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn new_fills_with_default() {
        let grid: Grid<i32> = Grid::new(2, 3).unwrap();
        assert_eq!(grid.len(), 6);
        assert!(grid.iter_rows().flatten().all(|value| *value == 0));
    }

    #[test]
    fn new_rejects_invalid_dimensions() {
        assert_eq!(
            Grid::<i32>::new(0, 4).err(),
            Some(GridError::InvalidDimension {
                rows: 0,
                columns: 4
            })
        );
        assert!(Grid::<i32>::new(3, -2).is_err());
    }

    #[test]
    fn new_reports_allocation_failure() {
        let result = Grid::<u64>::new(i64::from(u32::MAX), i64::from(u32::MAX));
        assert!(matches!(result, Err(GridError::AllocationFailure { .. })));
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty_input() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_err());
        assert!(Grid::<i32>::from_rows(vec![]).is_err());
        assert!(Grid::<i32>::from_rows(vec![vec![], vec![]]).is_err());
    }

    #[test]
    fn element_is_checked() {
        let mut grid = three_by_three();
        *grid.element(1, 2).unwrap() = 60;
        assert_eq!(grid.element_ref(1, 2), Ok(&60));
        assert_eq!(grid[Index2D::new(1, 2)], 60);
        assert_eq!(
            grid.element(3, 0).err(),
            Some(GridError::OutOfRange {
                index: Index2D::new(3, 0),
                rows: 3,
                columns: 3
            })
        );
        assert!(grid.element_ref(0, 3).is_err());
    }

    #[test]
    #[should_panic(expected = "outside of a 3x3 grid")]
    fn index_panics_out_of_range() {
        let grid = three_by_three();
        let _value = grid[Index2D::new(0, 5)];
    }

    #[test]
    fn end_cursor_is_not_dereferenceable() {
        let mut grid = three_by_three();
        let end = grid.end_cursor();
        assert_eq!(
            grid.at(&end),
            Err(GridError::CursorOutOfBounds { step: 9, len: 9 })
        );
        assert!(grid.at_mut(&end).is_err());
    }

    #[test]
    fn cursors_of_other_grids_are_rejected() {
        let grid = three_by_three();
        let copy = grid.clone();
        assert_ne!(grid.id(), copy.id());
        assert_eq!(copy.at(&grid.begin_cursor()), Err(GridError::ForeignCursor));
    }

    #[test]
    fn swap_at_moves_values_not_cursors() {
        let mut grid = three_by_three();
        let first = grid.begin_cursor();
        let last = grid.end_cursor() - 1usize;
        grid.swap_at(&first, &last).unwrap();
        assert_eq!(grid.at(&first), Ok(&5));
        assert_eq!(grid.at(&last), Ok(&1));
        assert_eq!(first.step(), 0);
        assert_eq!(last.step(), 8);
    }

    #[test]
    fn iter_rows_is_row_major() {
        let grid = three_by_three();
        let rows: Vec<&[i32]> = grid.iter_rows().collect();
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7, 8, 9][..]]);
    }

    #[test]
    fn sort_spiral_by_descending() {
        let mut grid = three_by_three();
        grid.sort_spiral_by(|a, b| b.cmp(a)).unwrap();
        let values: Vec<i32> = grid.spiral().copied().collect();
        assert_eq!(values, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }
}
