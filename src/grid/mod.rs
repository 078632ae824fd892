pub mod dimensions;
pub mod grid_access;
pub mod grid_map;
