//! Selection Sort with operation counting.
//!
//! For each position the unsorted suffix is scanned for its minimum, then
//! the minimum is exchanged into place. Comparison cost is fixed at
//! n(n-1)/2 regardless of input order; only the swap count varies.

use crate::sort_run::SortRun;

/// Sort a copy of `a` in ascending order, counting comparisons and swaps.
///
/// One comparison per suffix element examined. A swap is counted only when
/// the minimum is not already resident at the target position.
pub fn sort(a: &[u32]) -> SortRun {
    let mut arr = a.to_vec();
    let n = arr.len();
    let mut comparisons = 0u64;
    let mut swaps = 0u64;

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            comparisons += 1;
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
            swaps += 1;
        }
    }

    SortRun {
        output: arr,
        comparisons,
        swaps_moves: swaps,
    }
}
