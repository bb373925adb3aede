//! Complete step traces of a run.
//!
//! A trace drains a producer up front and keeps every step together with
//! the input and the sorted output. Traces are what the `trace` and `stats`
//! commands print, and their checksum lets two runs be compared without
//! diffing the whole document.

use serde::{Deserialize, Serialize};

use crate::error::VizResult;
use crate::sorting::{Algorithm, Step, StepKind, StepSource};

/// Operation counts derived from a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCounts {
    /// Comparison steps.
    pub comparisons: usize,
    /// Physical swaps.
    pub exchanges: usize,
    /// Single-position shifts.
    pub shifts: usize,
    /// All steps.
    pub steps: usize,
}

impl OpCounts {
    /// Tally the steps of a run.
    #[must_use]
    pub fn tally<'a>(steps: impl IntoIterator<Item = &'a Step>) -> Self {
        steps.into_iter().fold(Self::default(), |mut counts, step| {
            counts.steps += 1;
            match step.kind {
                StepKind::Compare => counts.comparisons += 1,
                StepKind::Shift => counts.shifts += 1,
                _ => {}
            }
            if step.is_exchange() {
                counts.exchanges += 1;
            }
            counts
        })
    }
}

/// Every step of one algorithm over one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    /// Algorithm that produced the steps.
    pub algorithm: Algorithm,
    /// Sequence as loaded.
    pub input: Vec<i64>,
    /// Steps in emission order.
    pub steps: Vec<Step>,
    /// Sequence after the last step.
    pub output: Vec<i64>,
}

impl StepTrace {
    /// Run `algorithm` over `values` to completion.
    #[must_use]
    pub fn record(algorithm: Algorithm, values: &[i64]) -> Self {
        let mut producer = algorithm.steps(values.to_vec());
        let steps: Vec<Step> = producer.by_ref().collect();
        Self {
            algorithm,
            input: values.to_vec(),
            steps,
            output: producer.into_sequence(),
        }
    }

    /// Operation counts for this trace.
    #[must_use]
    pub fn counts(&self) -> OpCounts {
        OpCounts::tally(&self.steps)
    }

    /// Encode as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> VizResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> VizResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Decode a JSON trace.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid trace.
    pub fn from_json(json: &str) -> VizResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Blake3 digest of the compact JSON encoding, hex encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn checksum(&self) -> VizResult<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bubble_sample() {
        let trace = StepTrace::record(Algorithm::Bubble, &[5, 1, 4, 2, 8, 3, 7, 6]);
        assert_eq!(trace.output, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(trace.input, vec![5, 1, 4, 2, 8, 3, 7, 6]);

        let counts = trace.counts();
        // 7 passes, 28 comparisons in total
        assert_eq!(counts.comparisons, 28);
        assert_eq!(counts.steps, 28 + counts.exchanges + 7);
        assert_eq!(counts.shifts, 0);
    }

    #[test]
    fn test_insertion_counts_shifts_not_exchanges() {
        let counts = StepTrace::record(Algorithm::Insertion, &[3, 2, 1]).counts();
        assert_eq!(counts.exchanges, 0);
        assert_eq!(counts.shifts, 3);
        assert_eq!(counts.comparisons, 3);
    }

    #[test]
    fn test_selection_sample_swaps() {
        let counts = StepTrace::record(Algorithm::Selection, &[64, 25, 12, 22, 11, 45, 33, 18]).counts();
        assert!(counts.exchanges <= 7);
        assert_eq!(counts.comparisons, 28);
    }

    #[test]
    fn test_empty_trace() {
        let trace = StepTrace::record(Algorithm::Insertion, &[]);
        assert!(trace.steps.is_empty());
        assert_eq!(trace.counts(), OpCounts::default());
    }

    #[test]
    fn test_json_roundtrip_preserves_trace() {
        let trace = StepTrace::record(Algorithm::Selection, &[3, 1, 2]);
        let json = trace.to_json().expect("json");
        assert!(json.contains("\"algorithm\": \"selection\""));
        let restored = StepTrace::from_json(&json).expect("parse");
        assert_eq!(restored, trace);
    }

    #[test]
    fn test_yaml_export() {
        let yaml = StepTrace::record(Algorithm::Bubble, &[2, 1]).to_yaml().expect("yaml");
        assert!(yaml.contains("algorithm: bubble"));
        assert!(yaml.contains("kind: exchange"));
    }

    #[test]
    fn test_checksum_is_deterministic() {
        let a = StepTrace::record(Algorithm::Bubble, &[4, 2, 3, 1]).checksum().expect("hash");
        let b = StepTrace::record(Algorithm::Bubble, &[4, 2, 3, 1]).checksum().expect("hash");
        let c = StepTrace::record(Algorithm::Selection, &[4, 2, 3, 1]).checksum().expect("hash");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
