use crate::grid::grid_map::Grid;
use itertools::Itertools;
use std::fmt::Display;
use std::io::{self, Write};

/// Writes `grid` in row-major layout, right-aligning each value to `cell_width`,
/// followed by a blank line.
pub fn print_grid<T: Display>(out: &mut impl Write, grid: &Grid<T>, cell_width: usize) -> io::Result<()> {
    for row in grid.iter_rows() {
        let line = row
            .iter()
            .map(|value| format!("{:>width$}", value, width = cell_width))
            .join("");
        writeln!(out, "{}", line)?;
    }
    writeln!(out)
}

/// Writes the values of `grid` in spiral order on a single line.
pub fn print_spiral<T: Display>(out: &mut impl Write, grid: &Grid<T>) -> io::Result<()> {
    writeln!(out, "{}", grid.spiral().join("  "))
}
