//! Timed, verified execution of one sort call.
//!
//! Wraps an algorithm call against one array: monotonic high-resolution
//! timestamps around the call, elapsed time in milliseconds, and a
//! correctness check of the output against the standard library's stable
//! sort. A verification failure is a programmer-facing invariant violation
//! and aborts the run.

use std::time::Instant;

use crate::sort_run::SortRun;

/// An instrumented sort routine: private-copy in, `SortRun` out.
pub type SortFn = fn(&[u32]) -> SortRun;

/// Timing and operation counts for one verified sort call.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Wall-clock duration of the call in milliseconds.
    pub time_ms: f64,
    pub comparisons: u64,
    pub swaps_moves: u64,
}

/// Time `sort_fn` against `data` and verify its output.
///
/// # Panics
/// Panics if the algorithm's output does not equal `data` sorted ascending
/// by the reference (stable) sort.
pub fn time_run(sort_fn: SortFn, data: &[u32]) -> Measurement {
    let start = Instant::now();
    let run = sort_fn(data);
    let time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut expected = data.to_vec();
    expected.sort();
    assert!(run.output == expected, "Sorting failed!");

    Measurement {
        time_ms,
        comparisons: run.comparisons,
        swaps_moves: run.swaps_moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bubble_sort, insertion_sort, selection_sort};

    #[test]
    fn test_time_run_counts_match_direct_call() {
        let data = vec![9u32, 4, 7, 1, 8, 2];
        let direct = bubble_sort::sort(&data);
        let measured = time_run(bubble_sort::sort, &data);
        assert_eq!(measured.comparisons, direct.comparisons);
        assert_eq!(measured.swaps_moves, direct.swaps_moves);
    }

    #[test]
    fn test_time_is_non_negative() {
        let data: Vec<u32> = (0..500).rev().collect();
        let measured = time_run(insertion_sort::sort, &data);
        assert!(measured.time_ms >= 0.0);
    }

    #[test]
    fn test_all_algorithms_pass_verification() {
        let data = vec![3u32, 3, 0, 10_000, 5, 5, 1];
        time_run(bubble_sort::sort, &data);
        time_run(insertion_sort::sort, &data);
        time_run(selection_sort::sort, &data);
    }

    #[test]
    #[should_panic(expected = "Sorting failed!")]
    fn test_broken_sort_is_rejected() {
        fn identity(a: &[u32]) -> SortRun {
            SortRun {
                output: a.to_vec(),
                comparisons: 0,
                swaps_moves: 0,
            }
        }
        time_run(identity, &[2, 1]);
    }
}
