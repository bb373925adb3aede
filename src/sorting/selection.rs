//! Selection sort as a resumable step machine.

use std::iter::FusedIterator;

use super::step::{Step, StepKind};
use super::{Algorithm, StepSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Compare the current minimum against `j`, or leave the scan.
    Compare,
    /// The comparison was shown; adopt `j` as minimum if smaller.
    Update,
    /// Swap the minimum into position `i` when needed.
    Exchange,
    /// Report position `i` as final and move on.
    Finalize,
    Done,
}

/// Steps of selection sort over an owned working copy.
#[derive(Debug, Clone)]
pub struct SelectionSteps {
    values: Vec<i64>,
    i: usize,
    j: usize,
    min_idx: usize,
    phase: Phase,
}

impl SelectionSteps {
    /// Start selection sort over `values`.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            i: 0,
            j: 1,
            min_idx: 0,
            phase: Phase::Compare,
        }
    }
}

impl Iterator for SelectionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.values.len();
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Compare => {
                    if self.i + 1 >= n {
                        self.phase = Phase::Done;
                        continue;
                    }
                    if self.j < n {
                        self.phase = Phase::Update;
                        return Some(Step::compare(self.min_idx, self.j));
                    }
                    self.phase = Phase::Exchange;
                }
                Phase::Update => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if self.values[j] < self.values[self.min_idx] {
                        self.min_idx = j;
                        return Some(Step::new(
                            StepKind::NewMinimum,
                            vec![j],
                            format!("New minimum found at position {j}"),
                        ));
                    }
                }
                Phase::Exchange => {
                    self.phase = Phase::Finalize;
                    if self.min_idx != self.i {
                        self.values.swap(self.i, self.min_idx);
                        return Some(Step::exchange(self.i, self.min_idx));
                    }
                }
                Phase::Finalize => {
                    let i = self.i;
                    self.i += 1;
                    self.j = self.i + 1;
                    self.min_idx = self.i;
                    self.phase = Phase::Compare;
                    return Some(Step::new(
                        StepKind::Finalized,
                        Vec::new(),
                        format!("Element at position {i} is now in its final position"),
                    ));
                }
            }
        }
    }
}

impl FusedIterator for SelectionSteps {}

impl StepSource for SelectionSteps {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn sequence(&self) -> &[i64] {
        &self.values
    }

    fn into_sequence(self) -> Vec<i64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pass_on_sample() {
        let mut steps = SelectionSteps::new(vec![64, 25, 12, 22, 11, 45, 33, 18]);

        let mut first_pass = Vec::new();
        for step in steps.by_ref() {
            let done = step.kind == StepKind::Finalized;
            first_pass.push(step);
            if done {
                break;
            }
        }

        let exchange = first_pass
            .iter()
            .find(|s| s.is_exchange())
            .expect("pass 0 swaps");
        assert_eq!(exchange.highlight_indices, vec![0, 4]);
        assert_eq!(exchange.narration, "Swapped elements at positions 0 and 4");
        assert_eq!(steps.sequence()[0], 11);

        let minima: Vec<usize> = first_pass
            .iter()
            .filter(|s| s.kind == StepKind::NewMinimum)
            .map(|s| s.highlight_indices[0])
            .collect();
        assert_eq!(minima, vec![1, 2, 4]);
    }

    #[test]
    fn test_compare_tracks_current_minimum() {
        let steps: Vec<Step> = SelectionSteps::new(vec![3, 1, 2]).take(4).collect();
        assert_eq!(steps[0].highlight_indices, vec![0, 1]);
        assert_eq!(steps[1].kind, StepKind::NewMinimum);
        assert_eq!(steps[2].highlight_indices, vec![1, 2]);
        assert_eq!(steps[3].kind, StepKind::Exchange);
    }

    #[test]
    fn test_no_exchange_when_already_minimal() {
        let steps: Vec<Step> = SelectionSteps::new(vec![1, 2, 3]).collect();
        assert!(steps.iter().all(|s| !s.is_exchange()));
        let finals = steps.iter().filter(|s| s.kind == StepKind::Finalized).count();
        assert_eq!(finals, 2);
    }

    #[test]
    fn test_trivial_inputs_yield_nothing() {
        assert_eq!(SelectionSteps::new(Vec::new()).next(), None);
        assert_eq!(SelectionSteps::new(vec![7]).next(), None);
    }
}
