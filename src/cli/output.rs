//! CLI output formatting.
//!
//! Formatting is split into `format_*` functions returning strings so it
//! can be tested; the `print_*` wrappers write them to stdout.

use crate::playback::Advance;
use crate::sorting::Algorithm;
use crate::trace::OpCounts;

/// Version line, with the git revision when the build captured one.
#[must_use]
pub fn format_version() -> String {
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            format!("sortstep {} ({hash})", env!("CARGO_PKG_VERSION"))
        }
        _ => format!("sortstep {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print version information.
pub fn print_version() {
    println!("{}", format_version());
}

/// Print help message.
pub fn print_help() {
    println!(
        r"sortstep - step through bubble, insertion and selection sort

USAGE:
    sortstep <COMMAND> [ALGORITHM] [OPTIONS]

COMMANDS:
    run [ALGORITHM]             Play a run step by step
        --delay <MS>            Pause between steps (default: config file, else 0)
        -v, --verbose           Print the sequence after every step

    trace [ALGORITHM]           Print every step as a document
        --format <json|yaml>    Output format (default: json)

    stats                       Compare operation counts of all algorithms

    help                        Show this help message
    version                     Show version information

ALGORITHMS:
    bubble, insertion, selection

DATA OPTIONS (all commands):
    -c, --config <FILE>         Load settings from a YAML file
    --values <LIST>             Sort this sequence, e.g. 5,1,4,2
    --sample                    Use the sample data of the algorithm
    --size <N>                  Number of random values (default: 8)
    --seed <N>                  Seed for random values

EXAMPLES:
    sortstep run bubble --sample
    sortstep run insertion --values 9,5,1,4 --delay 500
    sortstep trace selection --seed 42 --format yaml
    sortstep stats --values 64,25,12,22,11
"
    );
}

/// Header printed before a run.
#[must_use]
pub fn format_run_header(algorithm: Algorithm, values: &[i64], seed: Option<u64>) -> String {
    let mut header = format!("{} of {values:?}", algorithm.label());
    if let Some(seed) = seed {
        header.push_str(&format!(" (seed {seed})"));
    }
    header
}

/// One line per playback outcome.
#[must_use]
pub fn format_advance(outcome: &Advance) -> String {
    match outcome {
        Advance::Stepped { number, step } => format!("Step {number:>3}: {}", step.narration),
        Advance::Finished { steps } => format!("{} ({steps} steps)", outcome.narration()),
    }
}

/// Table of operation counts per algorithm.
#[must_use]
pub fn format_stats(input: &[i64], rows: &[(Algorithm, OpCounts)]) -> String {
    let mut out = format!("Input: {input:?}\n\n");
    out.push_str("Algorithm        Steps  Compares  Exchanges  Shifts\n");
    out.push_str("───────────────  ─────  ────────  ─────────  ──────\n");
    for (algorithm, counts) in rows {
        out.push_str(&format!(
            "{:<15}  {:>5}  {:>8}  {:>9}  {:>6}\n",
            algorithm.label(),
            counts.steps,
            counts.comparisons,
            counts.exchanges,
            counts.shifts
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::Step;

    #[test]
    fn test_format_version() {
        assert!(format_version().starts_with("sortstep "));
    }

    #[test]
    fn test_format_run_header() {
        let header = format_run_header(Algorithm::Bubble, &[3, 1], Some(9));
        assert_eq!(header, "Bubble Sort of [3, 1] (seed 9)");
        let header = format_run_header(Algorithm::Selection, &[], None);
        assert_eq!(header, "Selection Sort of []");
    }

    #[test]
    fn test_format_advance() {
        let stepped = Advance::Stepped {
            number: 2,
            step: Step::exchange(0, 1),
        };
        assert_eq!(
            format_advance(&stepped),
            "Step   2: Swapped elements at positions 0 and 1"
        );
        let finished = Advance::Finished { steps: 12 };
        assert_eq!(format_advance(&finished), "Sorting complete! (12 steps)");
    }

    #[test]
    fn test_format_stats() {
        let counts = OpCounts {
            comparisons: 3,
            exchanges: 1,
            shifts: 0,
            steps: 6,
        };
        let table = format_stats(&[2, 1], &[(Algorithm::Bubble, counts)]);
        assert!(table.contains("Input: [2, 1]"));
        assert!(table.lines().any(|l| l.starts_with("Bubble Sort") && l.ends_with('0')));
    }
}
