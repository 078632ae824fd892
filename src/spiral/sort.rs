//! A comparison sort over any cursor range `[first, last)`.
//!
//! The sort only reads values and swaps them through a [CursorStore]; the cursors keep
//! their own positions. Quicksort with a median-of-three pivot handles large ranges and
//! insertion sort finishes the small ones.

use crate::error::{GridError, Result};
use crate::spiral::random_access::{CursorStore, RandomAccessCursor};
use log::trace;
use std::cmp::Ordering;

const INSERTION_SORT_THRESHOLD: isize = 16;

/// Sorts the values in `[first, last)` in ascending order.
pub fn sort<S, C>(store: &mut S, first: C, last: C) -> Result<()>
where
    C: RandomAccessCursor,
    S: CursorStore<C>,
    S::Item: Ord,
{
    sort_by(store, first, last, |a, b| a.cmp(b))
}

/// Sorts the values in `[first, last)` so that `compare` never returns [Ordering::Less]
/// for a later value against an earlier one. Not stable.
pub fn sort_by<S, C, F>(store: &mut S, first: C, last: C, mut compare: F) -> Result<()>
where
    C: RandomAccessCursor,
    S: CursorStore<C>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = last.distance(&first)?;
    if len < 0 {
        return Err(GridError::ReversedRange(len));
    }

    trace!("Sorting {} values", len);
    quick_sort(store, first, last, &mut compare)?;
    trace!("Sorted {} values", len);

    Ok(())
}

fn is_less<S, C, F>(store: &S, a: &C, b: &C, compare: &mut F) -> Result<bool>
where
    C: RandomAccessCursor,
    S: CursorStore<C>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    Ok(compare(store.read(a)?, store.read(b)?) == Ordering::Less)
}

fn quick_sort<S, C, F>(store: &mut S, mut first: C, mut last: C, compare: &mut F) -> Result<()>
where
    C: RandomAccessCursor,
    S: CursorStore<C>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    loop {
        let len = last.distance(&first)?;
        if len <= INSERTION_SORT_THRESHOLD {
            return insertion_sort(store, first, last, compare);
        }

        let pivot = partition(store, first, last, len, compare)?;
        let mut after_pivot = pivot;
        after_pivot.step_forward()?;

        // Recurse into the smaller half so the stack stays logarithmic.
        if pivot.distance(&first)? < last.distance(&after_pivot)? {
            quick_sort(store, first, pivot, compare)?;
            first = after_pivot;
        } else {
            quick_sort(store, after_pivot, last, compare)?;
            last = pivot;
        }
    }
}

/// Partitions `[first, last)` around a median-of-three pivot and returns the pivot's
/// final cursor. Requires `len >= 3`.
fn partition<S, C, F>(store: &mut S, first: C, last: C, len: isize, compare: &mut F) -> Result<C>
where
    C: RandomAccessCursor,
    S: CursorStore<C>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let middle = first.jump(len / 2)?;
    let mut back = last;
    back.step_backward()?;

    if is_less(&*store, &middle, &first, compare)? {
        store.swap_at(&first, &middle)?;
    }
    if is_less(&*store, &back, &first, compare)? {
        store.swap_at(&first, &back)?;
    }
    if is_less(&*store, &back, &middle, compare)? {
        store.swap_at(&middle, &back)?;
    }
    store.swap_at(&middle, &back)?;

    let mut boundary = first;
    let mut scan = first;
    while scan < back {
        if is_less(&*store, &scan, &back, compare)? {
            store.swap_at(&scan, &boundary)?;
            boundary.step_forward()?;
        }
        scan.step_forward()?;
    }
    store.swap_at(&boundary, &back)?;

    Ok(boundary)
}

fn insertion_sort<S, C, F>(store: &mut S, first: C, last: C, compare: &mut F) -> Result<()>
where
    C: RandomAccessCursor,
    S: CursorStore<C>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if first == last {
        return Ok(());
    }

    let mut next = first;
    next.step_forward()?;
    while next < last {
        let mut current = next;
        while current > first {
            let mut previous = current;
            previous.step_backward()?;
            if !is_less(&*store, &current, &previous, compare)? {
                break;
            }
            store.swap_at(&current, &previous)?;
            current = previous;
        }
        next.step_forward()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_map::Grid;
    use itertools::Itertools;

    fn spiral_values(grid: &Grid<i32>) -> Vec<i32> {
        grid.spiral().copied().collect_vec()
    }

    #[test]
    fn sorts_small_ranges_with_insertion_sort() {
        let mut grid = Grid::from_rows(vec![vec![3, 1, 2], vec![9, 7, 8]]).unwrap();
        let (first, last) = (grid.begin_cursor(), grid.end_cursor());
        sort(&mut grid, first, last).unwrap();
        assert_eq!(spiral_values(&grid), vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(grid.iter_rows().flatten().copied().collect_vec(), vec![1, 2, 3, 9, 8, 7]);
    }

    #[test]
    fn sorts_large_ranges_with_duplicates() {
        let rows = (0..9)
            .map(|r| (0..11).map(|c| (r * 37 + c * 91) % 23).collect_vec())
            .collect_vec();
        let mut grid = Grid::from_rows(rows).unwrap();
        let mut expected = grid.iter_rows().flatten().copied().collect_vec();
        expected.sort_unstable();

        grid.sort_spiral().unwrap();
        assert_eq!(spiral_values(&grid), expected);
    }

    #[test]
    fn sorts_a_sub_range_only() {
        let mut grid = Grid::from_rows(vec![vec![9, 8, 7, 6, 5, 4, 3, 2, 1]]).unwrap();
        let first = grid.begin_cursor() + 2usize;
        let last = grid.end_cursor() - 2usize;
        sort(&mut grid, first, last).unwrap();
        assert_eq!(spiral_values(&grid), vec![9, 8, 3, 4, 5, 6, 7, 2, 1]);
    }

    #[test]
    fn empty_range_is_a_no_op() {
        let mut grid = Grid::from_rows(vec![vec![2, 1]]).unwrap();
        let end = grid.end_cursor();
        sort(&mut grid, end, end).unwrap();
        assert_eq!(spiral_values(&grid), vec![2, 1]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let mut grid = Grid::from_rows(vec![vec![2, 1]]).unwrap();
        let (first, last) = (grid.begin_cursor(), grid.end_cursor());
        assert_eq!(
            sort(&mut grid, last, first),
            Err(GridError::ReversedRange(-2))
        );
    }

    #[test]
    fn sort_by_custom_order() {
        let mut grid = Grid::from_rows(vec![vec![-3, 1], vec![2, -4]]).unwrap();
        grid.sort_spiral_by(|a: &i32, b: &i32| a.abs().cmp(&b.abs()))
            .unwrap();
        assert_eq!(spiral_values(&grid), vec![1, 2, -3, -4]);
    }
}
