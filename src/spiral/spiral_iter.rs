use crate::grid::grid_access::Index2D;
use crate::grid::grid_map::Grid;
use crate::spiral::cursor::SpiralCursor;

/// Iterates the elements of a [Grid] in spiral order, from both ends.
pub struct SpiralIter<'a, T> {
    grid: &'a Grid<T>,
    front: SpiralCursor,
    back: SpiralCursor,
}

impl<'a, T> SpiralIter<'a, T> {
    pub(crate) fn new(grid: &'a Grid<T>) -> Self {
        Self {
            grid,
            front: grid.begin_cursor(),
            back: grid.end_cursor(),
        }
    }
}

impl<'a, T> Iterator for SpiralIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.grid.at(&self.front).ok()?;
        self.front.step_forward().ok()?;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.step() - self.front.step();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for SpiralIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back.step_backward().ok()?;
        self.grid.at(&self.back).ok()
    }
}

impl<'a, T> ExactSizeIterator for SpiralIter<'a, T> {}

/// Iterates the positions of a grid in spiral order.
pub struct SpiralPositions {
    front: SpiralCursor,
    back: SpiralCursor,
}

impl SpiralPositions {
    pub(crate) fn new(front: SpiralCursor, back: SpiralCursor) -> Self {
        Self { front, back }
    }
}

impl Iterator for SpiralPositions {
    type Item = Index2D;

    fn next(&mut self) -> Option<Index2D> {
        if self.front == self.back {
            return None;
        }
        let position = self.front.position();
        self.front.step_forward().ok()?;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.step() - self.front.step();
        (len, Some(len))
    }
}

impl ExactSizeIterator for SpiralPositions {}
