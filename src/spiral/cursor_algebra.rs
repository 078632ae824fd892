//! Jumps, distances, equality and ordering for [SpiralCursor].
//!
//! Everything here is arithmetic over `step` plus repeated application of
//! [SpiralCursor::step_forward] and [SpiralCursor::step_backward].

use crate::error::{GridError, Result};
use crate::spiral::cursor::SpiralCursor;
use crate::spiral::random_access::RandomAccessCursor;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

impl SpiralCursor {
    /// A copy of this cursor moved by `offset` steps. The target must lie within
    /// `[begin, end]`, otherwise [GridError::CursorOutOfBounds] is returned before any
    /// stepping happens. Runs in `O(|offset|)`.
    pub fn jump(&self, offset: isize) -> Result<Self> {
        let len = self.dimensions().checked_len()?;
        let target = (self.step() as isize).checked_add(offset);
        match target {
            Some(target) if target >= 0 && target as usize <= len => {}
            _ => return Err(self.out_of_bounds()),
        }

        let mut cursor = *self;
        if offset >= 0 {
            for _ in 0..offset {
                cursor.step_forward()?;
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                cursor.step_backward()?;
            }
        }
        Ok(cursor)
    }

    pub fn checked_add(self, n: usize) -> Result<Self> {
        let offset = isize::try_from(n).map_err(|_| self.out_of_bounds())?;
        self.jump(offset)
    }

    pub fn checked_sub(self, n: usize) -> Result<Self> {
        let offset = isize::try_from(n).map_err(|_| self.out_of_bounds())?;
        self.jump(-offset)
    }

    /// `self.step - origin.step`. Both cursors must belong to the same grid.
    pub fn distance(&self, origin: &Self) -> Result<isize> {
        if self.grid_id() != origin.grid_id() {
            return Err(GridError::ForeignCursor);
        }
        Ok(self.step() as isize - origin.step() as isize)
    }
}

impl RandomAccessCursor for SpiralCursor {
    fn step_forward(&mut self) -> Result<()> {
        SpiralCursor::step_forward(self)
    }

    fn step_backward(&mut self) -> Result<()> {
        SpiralCursor::step_backward(self)
    }

    fn distance(&self, origin: &Self) -> Result<isize> {
        SpiralCursor::distance(self, origin)
    }

    fn jump(&self, offset: isize) -> Result<Self> {
        SpiralCursor::jump(self, offset)
    }
}

/// Equal cursors share a grid, a position and a step. The step comparison keeps the end
/// sentinel distinct from the last cell it parks on.
impl PartialEq for SpiralCursor {
    fn eq(&self, other: &Self) -> bool {
        self.grid_id() == other.grid_id()
            && self.position() == other.position()
            && self.step() == other.step()
    }
}

impl Eq for SpiralCursor {}

/// Traversal order, not geometric order. Cursors of different grids are unordered.
impl PartialOrd for SpiralCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.grid_id() == other.grid_id()).then(|| self.step().cmp(&other.step()))
    }
}

/// Panics if the result would leave `[begin, end]`. See [SpiralCursor::checked_add].
impl Add<usize> for SpiralCursor {
    type Output = SpiralCursor;

    fn add(self, n: usize) -> SpiralCursor {
        self.checked_add(n).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl AddAssign<usize> for SpiralCursor {
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

/// Panics if the result would leave `[begin, end]`. See [SpiralCursor::checked_sub].
impl Sub<usize> for SpiralCursor {
    type Output = SpiralCursor;

    fn sub(self, n: usize) -> SpiralCursor {
        self.checked_sub(n).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl SubAssign<usize> for SpiralCursor {
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

/// Panics for cursors of different grids. See [SpiralCursor::distance].
impl Sub for SpiralCursor {
    type Output = isize;

    fn sub(self, origin: SpiralCursor) -> isize {
        self.distance(&origin).unwrap_or_else(|e| panic!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GridError;
    use crate::grid::grid_access::Index2D;
    use crate::grid::grid_map::Grid;

    fn grid(rows: i64, columns: i64) -> Grid<u8> {
        Grid::new(rows, columns).unwrap()
    }

    #[test]
    fn distance_between_begin_and_end_is_len() {
        for (rows, columns) in [(1, 1), (1, 4), (4, 1), (3, 3), (5, 2)] {
            let grid = grid(rows, columns);
            assert_eq!(
                grid.end_cursor() - grid.begin_cursor(),
                (rows * columns) as isize
            );
            assert_eq!(
                grid.begin_cursor() - grid.end_cursor(),
                -(rows * columns) as isize
            );
        }
    }

    #[test]
    fn jump_matches_repeated_steps() {
        let grid = grid(4, 5);
        let mut stepped = grid.begin_cursor();
        for n in 0..=20usize {
            assert_eq!(grid.begin_cursor() + n, stepped);
            if n < 20 {
                stepped.step_forward().unwrap();
            }
        }
        assert_eq!(grid.end_cursor() - 20usize, grid.begin_cursor());
    }

    #[test]
    fn jump_out_of_range_leaves_cursor_usable() {
        let grid = grid(2, 2);
        let begin = grid.begin_cursor();
        assert_eq!(
            begin.checked_add(5),
            Err(GridError::CursorOutOfBounds { step: 0, len: 4 })
        );
        assert!(begin.checked_sub(1).is_err());
        assert!(begin.jump(isize::MAX).is_err());
        assert!(begin.jump(isize::MIN).is_err());
        assert_eq!(begin.jump(4), Ok(grid.end_cursor()));
    }

    #[test]
    #[should_panic(expected = "cannot move or be read")]
    fn add_past_end_panics() {
        let grid = grid(2, 2);
        let _ = grid.end_cursor() + 1usize;
    }

    #[test]
    fn compound_assignment() {
        let grid = grid(3, 3);
        let mut cursor = grid.begin_cursor();
        cursor += 4;
        assert_eq!(cursor.position(), Index2D::new(2, 2));
        cursor -= 3;
        assert_eq!(cursor.position(), Index2D::new(0, 1));
    }

    #[test]
    fn ordering_follows_steps_not_geometry() {
        let grid = grid(3, 3);
        let top_right = grid.begin_cursor() + 2usize;
        let middle_left = grid.begin_cursor() + 7usize;
        let center = grid.begin_cursor() + 8usize;
        assert!(top_right < middle_left);
        assert!(center > middle_left);
        assert!(center >= grid.begin_cursor() + 8usize);
        assert!(grid.end_cursor() > center);
    }

    #[test]
    fn end_differs_from_the_cell_it_parks_on() {
        for (rows, columns) in [(1, 4), (4, 1), (3, 3), (1, 1)] {
            let grid = grid(rows, columns);
            let end = grid.end_cursor();
            let last = end - 1usize;
            assert_eq!(end.position(), last.position());
            assert_ne!(end, last);
            assert!(last < end);
        }
    }

    #[test]
    fn cursors_of_different_grids() {
        let a = grid(2, 2);
        let b = grid(2, 2);
        assert_ne!(a.begin_cursor(), b.begin_cursor());
        assert_eq!(a.begin_cursor().partial_cmp(&b.begin_cursor()), None);
        assert_eq!(
            a.end_cursor().distance(&b.begin_cursor()),
            Err(GridError::ForeignCursor)
        );
    }
}
