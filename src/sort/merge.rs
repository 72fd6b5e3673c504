//! Two logically equivalent merge-sort variants.
//!
//! Both split at the midpoint, sort each half recursively, and merge the
//! sorted halves; they differ only in how the merge walks its inputs. The
//! index-cursor form is the conventional systems-language rendition; the
//! iterator form keeps a pair of lazy cursors over the halves. For any input
//! the two produce identical output. On equal elements both prefer the left
//! half, which makes them stable (unobservable for the distinct-valued
//! benchmark inputs, but cheap to pin down for the tests).

/// Merge sort, merging with two explicit index cursors.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    // Length <= 1 is already sorted.
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);
    merge_indexed(&left, &right)
}

fn merge_indexed<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut l = 0;
    let mut r = 0;

    while l < left.len() && r < right.len() {
        if right[r] < left[l] {
            out.push(right[r].clone());
            r += 1;
        } else {
            out.push(left[l].clone());
            l += 1;
        }
    }

    // One side is exhausted; the other's remainder is already sorted.
    out.extend_from_slice(&left[l..]);
    out.extend_from_slice(&right[r..]);
    out
}

/// Merge sort, merging with a pair of lazy cursors over the halves.
pub fn merge_sort_iter<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let left = merge_sort_iter(&input[..mid]);
    let right = merge_sort_iter(&input[mid..]);
    merge_cursors(left, right)
}

fn merge_cursors<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if r < l {
            if let Some(value) = right.next() {
                out.push(value);
            }
        } else if let Some(value) = left.next() {
            out.push(value);
        }
    }

    out.extend(left);
    out.extend(right);
    out
}
