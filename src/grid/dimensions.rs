use crate::error::{GridError, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The validated shape of a [crate::grid::grid_map::Grid].
/// Both `rows` and `columns` are always at least `1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Dimensions {
    rows: usize,
    columns: usize,
}

impl Dimensions {
    /// Validates `rows` and `columns`, rejecting anything that is not positive.
    pub fn new(rows: i64, columns: i64) -> Result<Self> {
        let invalid = || GridError::InvalidDimension { rows, columns };

        if rows <= 0 || columns <= 0 {
            return Err(invalid());
        }

        Ok(Self {
            rows: usize::try_from(rows).map_err(|_| invalid())?,
            columns: usize::try_from(columns).map_err(|_| invalid())?,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The number of elements, or [GridError::AllocationFailure] if `rows * columns` overflows.
    pub fn checked_len(&self) -> Result<usize> {
        self.rows
            .checked_mul(self.columns)
            .ok_or(GridError::AllocationFailure {
                rows: self.rows,
                columns: self.columns,
            })
    }

    /// The number of elements. Only called once [Dimensions::checked_len] has succeeded for
    /// a live grid, so the product is known to fit.
    pub(crate) fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// The deepest ring a spiral traversal can reach.
    pub fn max_layer(&self) -> usize {
        self.rows.min(self.columns) / 2
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

static GRID_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a [crate::grid::grid_map::Grid].
///
/// Cursors remember the [GridId] of the grid that created them, so two grids with identical
/// shape and contents never compare their cursors as equal. Cloning a grid allocates a new id.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GridId(u64);

impl GridId {
    pub(crate) fn next() -> Self {
        Self(GRID_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}
