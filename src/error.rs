use crate::grid::grid_access::Index2D;
use thiserror::Error;

/// Errors raised by a [crate::grid::grid_map::Grid] or a [crate::spiral::cursor::SpiralCursor].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{columns}: rows and columns must be positive")]
    InvalidDimension { rows: i64, columns: i64 },

    #[error("unable to allocate a {rows}x{columns} grid")]
    AllocationFailure { rows: usize, columns: usize },

    #[error("index ({}, {}) is outside of a {rows}x{columns} grid", .index.row, .index.column)]
    OutOfRange {
        index: Index2D,
        rows: usize,
        columns: usize,
    },

    #[error("cursor at step {step} cannot move or be read in a grid of {len} elements")]
    CursorOutOfBounds { step: usize, len: usize },

    #[error("cursor belongs to a different grid")]
    ForeignCursor,

    #[error("range ends {0} steps before it begins")]
    ReversedRange(isize),
}

pub type Result<T> = std::result::Result<T, GridError>;
