//! Bubble sort as a resumable step machine.

use std::iter::FusedIterator;

use super::step::{Step, StepKind};
use super::{Algorithm, StepSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Emit the comparison for `(j, j + 1)` or close the pass.
    Compare,
    /// The comparison was shown; swap if out of order.
    Swap,
    Done,
}

/// Steps of bubble sort over an owned working copy.
///
/// Pass `i` compares `(j, j + 1)` for `j` in `0..n - i - 1`, swapping out of
/// order pairs, then reports position `n - i - 1` as final.
#[derive(Debug, Clone)]
pub struct BubbleSteps {
    values: Vec<i64>,
    pass: usize,
    j: usize,
    phase: Phase,
}

impl BubbleSteps {
    /// Start bubble sort over `values`.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            pass: 0,
            j: 0,
            phase: Phase::Compare,
        }
    }
}

impl Iterator for BubbleSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.values.len();
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Compare => {
                    if self.pass + 1 >= n {
                        self.phase = Phase::Done;
                        continue;
                    }
                    let end = n - self.pass - 1;
                    if self.j < end {
                        self.phase = Phase::Swap;
                        return Some(Step::compare(self.j, self.j + 1));
                    }
                    let pass = self.pass;
                    self.pass += 1;
                    self.j = 0;
                    return Some(Step::new(
                        StepKind::PassComplete,
                        Vec::new(),
                        format!(
                            "Pass {} complete. Element at position {end} is now in its final position.",
                            pass + 1
                        ),
                    ));
                }
                Phase::Swap => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if self.values[j] > self.values[j + 1] {
                        self.values.swap(j, j + 1);
                        return Some(Step::exchange(j, j + 1));
                    }
                }
            }
        }
    }
}

impl FusedIterator for BubbleSteps {}

impl StepSource for BubbleSteps {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
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
    fn test_first_steps_on_sample() {
        let mut steps = BubbleSteps::new(vec![5, 1, 4, 2, 8, 3, 7, 6]);

        let first = steps.next().expect("compare");
        assert_eq!(first.kind, StepKind::Compare);
        assert_eq!(first.highlight_indices, vec![0, 1]);

        let second = steps.next().expect("exchange");
        assert_eq!(second.kind, StepKind::Exchange);
        assert_eq!(second.highlight_indices, vec![0, 1]);
        assert_eq!(second.narration, "Swapped elements at positions 0 and 1");
        assert_eq!(&steps.sequence()[..2], &[1, 5]);
    }

    #[test]
    fn test_sorted_pair_has_no_exchange() {
        let kinds: Vec<StepKind> = BubbleSteps::new(vec![1, 2]).map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StepKind::Compare, StepKind::PassComplete]);
    }

    #[test]
    fn test_pass_complete_narration() {
        let steps: Vec<Step> = BubbleSteps::new(vec![3, 2, 1]).collect();
        let passes: Vec<&str> = steps
            .iter()
            .filter(|s| s.kind == StepKind::PassComplete)
            .map(|s| s.narration.as_str())
            .collect();
        assert_eq!(
            passes,
            vec![
                "Pass 1 complete. Element at position 2 is now in its final position.",
                "Pass 2 complete. Element at position 1 is now in its final position.",
            ]
        );
        assert!(steps
            .iter()
            .filter(|s| s.kind == StepKind::PassComplete)
            .all(|s| s.highlight_indices.is_empty()));
    }

    #[test]
    fn test_step_count_for_reversed_triple() {
        // 3 compares + 3 swaps + 2 pass markers
        let mut steps = BubbleSteps::new(vec![3, 2, 1]);
        assert_eq!(steps.by_ref().count(), 8);
        assert_eq!(steps.sequence(), &[1, 2, 3]);
    }

    #[test]
    fn test_trivial_inputs_yield_nothing() {
        assert_eq!(BubbleSteps::new(Vec::new()).next(), None);
        assert_eq!(BubbleSteps::new(vec![7]).next(), None);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut steps = BubbleSteps::new(vec![2, 1]);
        while steps.next().is_some() {}
        assert_eq!(steps.next(), None);
        assert_eq!(steps.into_sequence(), vec![1, 2]);
    }
}
