//! Step producers for the three elementary sorting algorithms.
//!
//! Each algorithm is an explicit state machine implementing
//! `Iterator<Item = Step>`. A call to `next()` resumes exactly where the
//! previous one stopped, loop indices included, and mutates only the
//! producer's own working copy of the sequence.
//!
//! # Example
//!
//! ```rust
//! use sortstep::sorting::{Algorithm, StepSource};
//!
//! let mut steps = Algorithm::Bubble.steps(vec![3, 1, 2]);
//! let first = steps.next().expect("at least one step");
//! assert_eq!(first.highlight_indices, vec![0, 1]);
//!
//! steps.by_ref().for_each(drop);
//! assert_eq!(steps.sequence(), &[1, 2, 3]);
//! ```

pub mod bubble;
pub mod insertion;
pub mod selection;
pub mod step;

pub use bubble::BubbleSteps;
pub use insertion::InsertionSteps;
pub use selection::SelectionSteps;
pub use step::{Exchange, Step, StepKind};

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VizError;

/// A finite, lazily evaluated source of [`Step`] records.
pub trait StepSource: Iterator<Item = Step> + FusedIterator {
    /// Algorithm this source enumerates.
    fn algorithm(&self) -> Algorithm;

    /// Working copy in its current, possibly partially sorted, state.
    fn sequence(&self) -> &[i64];

    /// Consume the source and return the working copy.
    fn into_sequence(self) -> Vec<i64>
    where
        Self: Sized;
}

/// Which step-generation procedure is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent compare-and-swap passes.
    #[default]
    Bubble,
    /// Shift larger predecessors right, then insert.
    Insertion,
    /// Select the minimum of the unsorted suffix.
    Selection,
}

impl Algorithm {
    /// All algorithms in display order.
    pub const ALL: [Self; 3] = [Self::Bubble, Self::Insertion, Self::Selection];

    /// Short lowercase name (`bubble`, `insertion`, `selection`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
        }
    }

    /// Title used in headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
        }
    }

    /// The following algorithm, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Bubble => Self::Insertion,
            Self::Insertion => Self::Selection,
            Self::Selection => Self::Bubble,
        }
    }

    /// Build a fresh step producer over `values`.
    #[must_use]
    pub fn steps(self, values: Vec<i64>) -> StepProducer {
        match self {
            Self::Bubble => StepProducer::Bubble(BubbleSteps::new(values)),
            Self::Insertion => StepProducer::Insertion(InsertionSteps::new(values)),
            Self::Selection => StepProducer::Selection(SelectionSteps::new(values)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "insertion" => Ok(Self::Insertion),
            "selection" => Ok(Self::Selection),
            other => Err(VizError::config(format!(
                "unknown algorithm '{other}' (expected bubble, insertion or selection)"
            ))),
        }
    }
}

/// Step producer for whichever algorithm was selected.
#[derive(Debug, Clone)]
pub enum StepProducer {
    /// Bubble sort steps.
    Bubble(BubbleSteps),
    /// Insertion sort steps.
    Insertion(InsertionSteps),
    /// Selection sort steps.
    Selection(SelectionSteps),
}

impl Iterator for StepProducer {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self {
            Self::Bubble(s) => s.next(),
            Self::Insertion(s) => s.next(),
            Self::Selection(s) => s.next(),
        }
    }
}

impl FusedIterator for StepProducer {}

impl StepSource for StepProducer {
    fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bubble(s) => s.algorithm(),
            Self::Insertion(s) => s.algorithm(),
            Self::Selection(s) => s.algorithm(),
        }
    }

    fn sequence(&self) -> &[i64] {
        match self {
            Self::Bubble(s) => s.sequence(),
            Self::Insertion(s) => s.sequence(),
            Self::Selection(s) => s.sequence(),
        }
    }

    fn into_sequence(self) -> Vec<i64> {
        match self {
            Self::Bubble(s) => s.into_sequence(),
            Self::Insertion(s) => s.into_sequence(),
            Self::Selection(s) => s.into_sequence(),
        }
    }
}
