//! Inversion counting via merge sort.
//!
//! An inversion is a pair of positions `i < j` with `input[i] > input[j]`.
//! The count is accumulated during the merge step of a standard top-down
//! merge sort, O(n log n).

/// Count the inversions of `input` and return its sorted copy alongside the
/// count. Equal elements are not inversions; the sort is stable.
#[must_use]
pub fn count_inversions<T: Ord + Clone>(input: &[T]) -> (Vec<T>, u64) {
    if input.len() < 2 {
        return (input.to_vec(), 0);
    }

    let pivot = input.len() / 2;
    let (left, left_count) = count_inversions(&input[..pivot]);
    let (right, right_count) = count_inversions(&input[pivot..]);

    let mut merged = Vec::with_capacity(input.len());
    let mut count = left_count + right_count;
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            // Every remaining left element forms an inversion with right[j].
            count += (left.len() - i) as u64;
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    (merged, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_has_no_inversions() {
        let (sorted, count) = count_inversions(&[1, 2, 3, 4, 5]);
        assert_eq!(count, 0);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reverse_sorted_is_maximal() {
        let n = 6u64;
        let input: Vec<u64> = (0..n).rev().collect();
        let (sorted, count) = count_inversions(&input);
        assert_eq!(count, n * (n - 1) / 2);
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_known_small_case() {
        // (2,1), (4,1), (4,3) are the inversions.
        let (sorted, count) = count_inversions(&[2, 4, 1, 3]);
        assert_eq!(count, 3);
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_equal_elements_are_not_inversions() {
        let (sorted, count) = count_inversions(&[3, 3, 3]);
        assert_eq!(count, 0);
        assert_eq!(sorted, vec![3, 3, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        let (sorted, count) = count_inversions::<i32>(&[]);
        assert_eq!((sorted.len(), count), (0, 0));
        let (sorted, count) = count_inversions(&[9]);
        assert_eq!((sorted, count), (vec![9], 0));
    }

    #[test]
    fn test_non_numeric_elements() {
        let (sorted, count) = count_inversions(&["pear", "apple", "cherry"]);
        assert_eq!(count, 2);
        assert_eq!(sorted, vec!["apple", "cherry", "pear"]);
    }
}
