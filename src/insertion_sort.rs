//! Insertion Sort with operation counting.
//!
//! Each element is held as a key while greater elements shift one position
//! rightward; the key then drops into the gap. The secondary count is the
//! number of those single-element shifts ("moves"), not swaps.
//!
//! Counting convention: the comparison that terminates the inner scan is
//! counted too, since the order test happens before the break decision.
//! Already-sorted input therefore costs exactly n-1 comparisons and 0 moves.

use crate::sort_run::SortRun;

/// Sort a copy of `a` in ascending order, counting comparisons and moves.
pub fn sort(a: &[u32]) -> SortRun {
    let mut arr = a.to_vec();
    let n = arr.len();
    let mut comparisons = 0u64;
    let mut moves = 0u64;

    for i in 1..n {
        let key = arr[i];
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if arr[j - 1] > key {
                arr[j] = arr[j - 1];
                moves += 1;
                j -= 1;
            } else {
                break;
            }
        }
        arr[j] = key;
    }

    SortRun {
        output: arr,
        comparisons,
        swaps_moves: moves,
    }
}
