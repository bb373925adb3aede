//! Insertion sort as a resumable step machine.
//!
//! Every single-position shift is its own pair of steps (comparison, then
//! shift confirmation); a run of shifts is never collapsed. Shifts are value
//! copies, so this machine never emits an [`Exchange`](super::Exchange).

use std::iter::FusedIterator;

use super::step::{Step, StepKind};
use super::{Algorithm, StepSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pick up the key at position `i`.
    Consider,
    /// Test whether the predecessor of the hole is greater than the key.
    Test,
    /// Copy the predecessor into the hole.
    Shift,
    /// Write the key into the hole.
    Insert,
    Done,
}

/// Steps of insertion sort over an owned working copy.
#[derive(Debug, Clone)]
pub struct InsertionSteps {
    values: Vec<i64>,
    i: usize,
    /// Slot the key would occupy; the textbook inner index is `hole - 1`.
    hole: usize,
    key: i64,
    phase: Phase,
}

impl InsertionSteps {
    /// Start insertion sort over `values`.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            i: 1,
            hole: 1,
            key: 0,
            phase: Phase::Consider,
        }
    }
}

impl Iterator for InsertionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Consider => {
                    if self.i >= self.values.len() {
                        self.phase = Phase::Done;
                        continue;
                    }
                    self.key = self.values[self.i];
                    self.hole = self.i;
                    self.phase = Phase::Test;
                    return Some(Step::new(
                        StepKind::Consider,
                        vec![self.i],
                        format!(
                            "Considering element at position {} (value: {})",
                            self.i, self.key
                        ),
                    ));
                }
                Phase::Test => {
                    if self.hole > 0 && self.values[self.hole - 1] > self.key {
                        let j = self.hole - 1;
                        self.phase = Phase::Shift;
                        return Some(Step::new(
                            StepKind::Compare,
                            vec![j, self.hole],
                            format!("Element at position {j} > {}, shifting right", self.key),
                        ));
                    }
                    self.phase = Phase::Insert;
                }
                Phase::Shift => {
                    self.values[self.hole] = self.values[self.hole - 1];
                    self.hole -= 1;
                    self.phase = Phase::Test;
                    return Some(Step::new(
                        StepKind::Shift,
                        vec![self.hole],
                        format!("Shifted element to position {}", self.hole),
                    ));
                }
                Phase::Insert => {
                    self.values[self.hole] = self.key;
                    self.i += 1;
                    self.phase = Phase::Consider;
                    return Some(Step::new(
                        StepKind::Insert,
                        vec![self.hole],
                        format!("Inserted element {} at position {}", self.key, self.hole),
                    ));
                }
            }
        }
    }
}

impl FusedIterator for InsertionSteps {}

impl StepSource for InsertionSteps {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn sequence(&self) -> &[i64] {
        &self.values
    }

    fn into_sequence(self) -> Vec<i64> {
        self.values
    }
}
