use crate::error::Result;
use crate::grid::dimensions::Dimensions;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Index2D {
    pub row: usize,
    pub column: usize,
}

impl Index2D {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Index2D {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// Yields each [Index2D] of a grid in row-major order.
pub struct GridIterator2D {
    coords: Index2D,
    rows: usize,
    columns: usize,
}

impl GridIterator2D {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            coords: Index2D::default(),
            rows: dimensions.rows(),
            columns: dimensions.columns(),
        }
    }
}

impl Iterator for GridIterator2D {
    type Item = Index2D;

    fn next(&mut self) -> Option<Index2D> {
        if self.coords.row == self.rows {
            None
        } else {
            let result = Some(self.coords);

            self.coords.column += 1;
            if self.coords.column == self.columns && self.coords.row < self.rows {
                self.coords.column = 0;
                self.coords.row += 1;
            }

            result
        }
    }
}

pub trait RowMajorIterator {
    fn iter_grid(&self) -> GridIterator2D;
}

/// Checked access to the elements of a 2D grid.
pub trait GridAccessor2D<U> {
    fn get(&self, coords: Index2D) -> Result<&U>;

    fn get_mut(&mut self, coords: Index2D) -> Result<&mut U>;
}
