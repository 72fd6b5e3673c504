/// Selection sort.
///
/// For each position from left to right, scan the unsorted suffix for its
/// minimum element and swap it into place. O(n^2) comparisons but only O(n)
/// swaps. The caller's slice is left untouched; sorting happens in a copy.
pub fn selection_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    for i in 0..out.len() {
        let mut min = i;
        for j in (i + 1)..out.len() {
            if out[j] < out[min] {
                min = j;
            }
        }
        out.swap(i, min);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(selection_sort::<u64>(&[]), Vec::<u64>::new());
        assert_eq!(selection_sort(&[9]), vec![9]);
    }

    #[test]
    fn test_sorts_with_duplicates() {
        assert_eq!(selection_sort(&[5, 3, 5, 1, 3]), vec![1, 3, 3, 5, 5]);
    }

    #[test]
    fn test_reverse_input() {
        assert_eq!(selection_sort(&[4, 3, 2, 1, 0]), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_input_unchanged() {
        let input = vec![2, 0, 1];
        let _ = selection_sort(&input);
        assert_eq!(input, vec![2, 0, 1]);
    }
}
