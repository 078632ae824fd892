use crate::grid::grid_access::{GridAccessor2D, RowMajorIterator};
use crate::grid::grid_map::Grid;
use crate::io::config_schema::FillSettings;
use anyhow::{bail, Result};
use log::trace;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Fills `grid` row by row with values drawn uniformly from `[settings.min, settings.max)`.
pub fn fill_random(grid: &mut Grid<i32>, settings: &FillSettings) -> Result<()> {
    if settings.min >= settings.max {
        bail!(
            "Cannot fill grid from the empty range [{}, {})",
            settings.min,
            settings.max
        );
    }

    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    trace!(
        "Filling {} grid from [{}, {})",
        grid.dimensions(),
        settings.min,
        settings.max
    );

    for coords in grid.iter_grid() {
        *grid.get_mut(coords)? = rng.gen_range(settings.min..settings.max);
    }

    Ok(())
}
