//! A 2D grid whose elements can be traversed, and sorted, in spiral ("snail") order.
//!
//! [Grid] stores the elements row-major. [SpiralCursor] walks them clockwise from the
//! top-left corner, ring by ring, and offers the random-access cursor operations that
//! [spiral::sort::sort_by] relies on.

pub mod error;
pub mod grid;
pub mod io;
pub mod spiral;

pub use error::{GridError, Result};
pub use grid::dimensions::{Dimensions, GridId};
pub use grid::grid_access::{GridAccessor2D, Index2D, RowMajorIterator};
pub use grid::grid_map::Grid;
pub use spiral::cursor::SpiralCursor;
pub use spiral::random_access::{CursorStore, RandomAccessCursor};
