//! Stable merge sort parameterized by a caller-supplied comparator.
//!
//! Catalog listings are always presented through this routine on a copied
//! buffer; the canonical catalog order is never touched. The comparators in
//! [`crate::catalog::ordering`] resolve every tie down to the game ID, so
//! stability only matters for genuinely identical keys.

use std::cmp::Ordering;

/// Sort a slice in place with a genuine top-down merge sort.
///
/// Divide into halves, recursively sort, merge - O(n log n) worst case and
/// stable: when two elements compare equal the left one is taken first.
pub fn merge_sort<T, F>(items: &mut [T], cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], cmp);
    merge_sort(&mut items[mid..], cmp);
    merge(items, mid, cmp);
}

/// Merge the two sorted halves of `items`, split at `mid`.
fn merge<T, F>(items: &mut [T], mid: usize, cmp: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let left: Vec<T> = items[..mid].to_vec();
    let right: Vec<T> = items[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        // Equal elements take the left side first - the stability rule.
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        items[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        items[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}
