use crate::error::Result;

/// A positional cursor with the capabilities a generic sort needs: stepping in both
/// directions, jumping by an offset, signed distance, equality and ordering.
pub trait RandomAccessCursor: Copy + PartialEq + PartialOrd {
    fn step_forward(&mut self) -> Result<()>;

    fn step_backward(&mut self) -> Result<()>;

    /// The signed number of steps from `origin` to `self`.
    fn distance(&self, origin: &Self) -> Result<isize>;

    /// A copy of this cursor moved by `offset` steps, one step at a time.
    fn jump(&self, offset: isize) -> Result<Self> {
        let mut cursor = *self;
        if offset >= 0 {
            for _ in 0..offset {
                cursor.step_forward()?;
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                cursor.step_backward()?;
            }
        }
        Ok(cursor)
    }
}

/// Value access through a cursor. Algorithms move values with [CursorStore::swap_at] and
/// never move the cursors themselves.
pub trait CursorStore<C: RandomAccessCursor> {
    type Item;

    fn read(&self, cursor: &C) -> Result<&Self::Item>;

    fn swap_at(&mut self, a: &C, b: &C) -> Result<()>;
}
