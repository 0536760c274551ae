//! Shared result type for instrumented sort calls.
//!
//! All three algorithms have the same conceptual signature (sequence in,
//! sorted sequence plus two operation counts out), but the secondary count
//! means different things per algorithm. A single plain struct with a
//! clearly named field keeps that explicit without any dispatch machinery.

/// Outcome of one instrumented sort call.
///
/// The caller's input is never modified; every algorithm sorts a private
/// copy, so repeated measurements against the same array stay independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRun {
    /// The sorted copy of the input.
    pub output: Vec<u32>,
    /// Number of element-pair order tests performed.
    pub comparisons: u64,
    /// Secondary operation count: swaps for bubble and selection sort,
    /// single-element moves for insertion sort. Not comparable across
    /// algorithms.
    pub swaps_moves: u64,
}
