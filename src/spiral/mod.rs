pub mod cursor;
pub mod cursor_algebra;
pub mod random_access;
pub mod sort;
pub mod spiral_iter;
