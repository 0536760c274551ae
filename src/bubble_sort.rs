//! Bubble Sort with operation counting.
//!
//! Repeated adjacent-pair scans from index 0 up to the unsorted boundary,
//! which shrinks by one each full pass. A pass that performs zero swaps
//! means the array is sorted and the routine stops early, so already-sorted
//! input costs a single O(n) pass.

use crate::sort_run::SortRun;

/// Sort a copy of `a` in ascending order, counting comparisons and swaps.
///
/// The comparison counter increments once per adjacent pair examined,
/// regardless of outcome; the swap counter only on actual exchanges.
///
/// # Arguments
/// * `a` - The input slice; sorted into a private copy, never modified
pub fn sort(a: &[u32]) -> SortRun {
    let mut arr = a.to_vec();
    let n = arr.len();
    let mut comparisons = 0u64;
    let mut swaps = 0u64;

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            comparisons += 1;
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swaps += 1;
                swapped = true;
            }
        }
        // No exchange in a full pass means everything is already in place.
        if !swapped {
            break;
        }
    }

    SortRun {
        output: arr,
        comparisons,
        swaps_moves: swaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let run = sort(&[]);
        assert!(run.output.is_empty());
        assert_eq!(run.comparisons, 0);
        assert_eq!(run.swaps_moves, 0);
    }

    #[test]
    fn test_sort_single() {
        let run = sort(&[42]);
        assert_eq!(run.output, vec![42]);
        assert_eq!(run.comparisons, 0);
        assert_eq!(run.swaps_moves, 0);
    }

    #[test]
    fn test_sort_sorted_early_exit() {
        let data: Vec<u32> = (0..100).collect();
        let run = sort(&data);
        assert_eq!(run.output, data);
        // One full pass with no swaps, then early exit.
        assert_eq!(run.comparisons, 99);
        assert_eq!(run.swaps_moves, 0);
    }

    #[test]
    fn test_sort_reverse() {
        let data: Vec<u32> = (0..100).rev().collect();
        let run = sort(&data);
        assert_eq!(run.output, (0..100).collect::<Vec<u32>>());
        // Worst case: every pair examined, every pair exchanged.
        assert_eq!(run.comparisons, 100 * 99 / 2);
        assert_eq!(run.swaps_moves, 100 * 99 / 2);
    }

    #[test]
    fn test_sort_duplicates() {
        let run = sort(&[5, 3, 5, 1, 3, 5, 1, 1]);
        assert_eq!(run.output, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_random_matches_reference() {
        let mut rng = rand::thread_rng();
        let data: Vec<u32> = (0..1000).map(|_| rng.gen_range(0..=10_000)).collect();
        let mut expected = data.clone();
        expected.sort();

        let run = sort(&data);
        assert_eq!(run.output, expected);
        assert!(run.comparisons <= 1000 * 999 / 2);
    }

    #[test]
    fn test_input_not_modified() {
        let data = vec![3u32, 1, 2];
        let run = sort(&data);
        assert_eq!(data, vec![3, 1, 2]);
        assert_eq!(run.output, vec![1, 2, 3]);
    }
}
