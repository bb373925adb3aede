//! Step records emitted by the sorting state machines.

use serde::{Deserialize, Serialize};

/// What kind of work a [`Step`] narrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Two positions are being compared.
    Compare,
    /// Two positions were physically swapped.
    Exchange,
    /// A bubble sort pass finished; its last position is final.
    PassComplete,
    /// Insertion sort picked up the key at a position.
    Consider,
    /// A value was copied one position to the right.
    Shift,
    /// Insertion sort wrote the key into its slot.
    Insert,
    /// Selection sort found a smaller value.
    NewMinimum,
    /// Selection sort fixed a position.
    Finalized,
}

/// A physical swap of two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exchange {
    /// Position the first element leaves.
    pub from: usize,
    /// Position the first element moves to.
    pub to: usize,
}

impl Exchange {
    /// Create an exchange between two positions.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// One atomic, narrated unit of algorithmic work.
///
/// Indices always refer to valid positions of the sequence at the time the
/// step was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Kind of work performed.
    pub kind: StepKind,
    /// Positions under comparison, in emission order. May be empty.
    pub highlight_indices: Vec<usize>,
    /// Swap that happened as part of this step, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<Exchange>,
    /// Human-readable description.
    pub narration: String,
}

impl Step {
    /// Create a step without an exchange.
    #[must_use]
    pub fn new(kind: StepKind, highlight_indices: Vec<usize>, narration: impl Into<String>) -> Self {
        Self {
            kind,
            highlight_indices,
            exchange: None,
            narration: narration.into(),
        }
    }

    /// Standard comparison of two positions.
    #[must_use]
    pub fn compare(a: usize, b: usize) -> Self {
        Self::new(
            StepKind::Compare,
            vec![a, b],
            format!("Comparing elements at positions {a} and {b}"),
        )
    }

    /// Swap of two positions; both stay highlighted.
    #[must_use]
    pub fn exchange(from: usize, to: usize) -> Self {
        Self {
            kind: StepKind::Exchange,
            highlight_indices: vec![from, to],
            exchange: Some(Exchange::new(from, to)),
            narration: format!("Swapped elements at positions {from} and {to}"),
        }
    }

    /// Whether this step carries a physical swap.
    #[must_use]
    pub const fn is_exchange(&self) -> bool {
        self.exchange.is_some()
    }

    /// Largest index referenced by this step.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        let exchanged = self.exchange.map(|e| e.from.max(e.to));
        self.highlight_indices
            .iter()
            .copied()
            .chain(exchanged)
            .max()
    }
}
