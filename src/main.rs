//! Elementary Sorting Benchmark
//!
//! This application times three deliberately naive O(n²) sorting algorithms
//! against user-specified input sizes and input distributions:
//! - **Bubble Sort**: adjacent-pair passes with early exit
//! - **Insertion Sort**: leftward scan with element shifts
//! - **Selection Sort**: minimum-of-suffix selection
//!
//! Every run reports wall-clock time plus comparison and swap/move counts,
//! prints a fixed-width table, and writes the same rows to `sort_results.csv`.
//! Case generation is driven by one explicitly seeded RNG so a whole run is
//! reproducible end to end.

mod bubble_sort;
mod case_gen;
mod insertion_sort;
mod report;
mod selection_sort;
mod sort_run;
mod timed_run;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use case_gen::CaseSet;
use report::ResultRow;
use timed_run::{time_run, SortFn};

/// Seed for all case generation; fixed so runs are reproducible.
const SEED: u64 = 42;

/// Output file, overwritten on every run.
const OUTPUT_PATH: &str = "sort_results.csv";

/// The benchmarked algorithms, in report order.
const ALGORITHMS: [(&str, SortFn); 3] = [
    ("Bubble Sort", bubble_sort::sort),
    ("Insertion Sort", insertion_sort::sort),
    ("Selection Sort", selection_sort::sort),
];

fn main() {
    let sizes = read_sizes();

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let results = run_suite(&sizes, &mut rng);

    report::print_table(&results);

    if let Err(e) = report::write_csv(Path::new(OUTPUT_PATH), &results) {
        eprintln!("Error writing results: {:#}", e);
        process::exit(1);
    }

    println!("\nResults written to {}", OUTPUT_PATH);
}

/// Run the whole measurement suite and collect rows in generation order.
///
/// First a per-size sweep over the "random" case, then the three-case
/// distribution comparison (random / sorted / reverse) for the designated
/// size: the second entered size, or the first if only one was given.
fn run_suite<R: Rng>(sizes: &[usize], rng: &mut R) -> Vec<ResultRow> {
    let mut results = Vec::new();

    for &n in sizes {
        let cases = CaseSet::generate(n, rng);
        for (name, sort_fn) in ALGORITHMS {
            let m = time_run(sort_fn, &cases.random);
            results.push(ResultRow::new(name, n, "random", m));
        }
    }

    let compare_size = match sizes {
        [] => return results,
        [only] => *only,
        [_, second, ..] => *second,
    };

    let cases = CaseSet::generate(compare_size, rng);
    for (label, data) in cases.labeled() {
        for (name, sort_fn) in ALGORITHMS {
            let m = time_run(sort_fn, data);
            results.push(ResultRow::new(name, compare_size, label, m));
        }
    }

    results
}

/// Prompt for the number of size sets, then one size per set.
fn read_sizes() -> Vec<usize> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let n_sets = prompt_usize(&mut lines, "Enter the number of size sets: ");
    let mut sizes = Vec::with_capacity(n_sets);
    for i in 0..n_sets {
        let prompt = format!("Enter size for set {}: ", i + 1);
        sizes.push(prompt_usize(&mut lines, &prompt));
    }
    sizes
}

/// Print a prompt and read one non-negative integer; any parse or read
/// failure is fatal.
fn prompt_usize<I>(lines: &mut I, prompt: &str) -> usize
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{}", prompt);
    if let Err(e) = io::stdout().flush() {
        eprintln!("Error writing prompt: {}", e);
        process::exit(1);
    }

    let line = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(e)) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
        None => {
            eprintln!("Error reading input: unexpected end of input");
            process::exit(1);
        }
    };

    match parse_size(&line) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: invalid integer {:?}: {}", line.trim(), e);
            process::exit(1);
        }
    }
}

fn parse_size(line: &str) -> Result<usize, std::num::ParseIntError> {
    line.trim().parse()
}
