//! Everything around the grid that touches the outside world: configuration, filling,
//! printing and reading dimensions from the user.

pub mod config_schema;
pub mod fill;
pub mod print;
pub mod read_dimensions;
