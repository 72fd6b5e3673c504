/// Bubble sort with early termination.
///
/// Repeatedly scans adjacent pairs left to right, swapping any out-of-order
/// pair, until a full pass performs no swap. The swap-free pass check makes
/// already-sorted input a single O(n) scan, which materially affects the
/// pre-sorted benchmark distribution. O(n^2) worst case.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..out.len() {
            if out[i] < out[i - 1] {
                out.swap(i, i - 1);
                swapped = true;
            }
        }
    }
    out
}
