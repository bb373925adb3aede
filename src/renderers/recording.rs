//! Headless surface that keeps the visible state and a call log.

use serde::Serialize;

use super::Surface;
use crate::error::VizResult;

/// What a viewer would currently see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibleFrame {
    /// Element values, left to right.
    pub values: Vec<i64>,
    /// Highlighted positions.
    pub highlights: Vec<usize>,
}

/// One call made against the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SurfaceCall {
    /// Full redraw.
    Render {
        /// Values passed in.
        values: Vec<i64>,
        /// Highlights passed in.
        highlights: Vec<usize>,
    },
    /// Exchange animation.
    Exchange {
        /// First position.
        from: usize,
        /// Second position.
        to: usize,
    },
}

/// In-memory [`Surface`] for tests and headless runs.
///
/// Exchanges move the visible values immediately, so the frame after an
/// exchange animation already shows the swapped elements. Exchanges that
/// reference positions outside the drawn sequence are logged but not
/// applied.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frame: VisibleFrame,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visible state.
    #[must_use]
    pub fn frame(&self) -> &VisibleFrame {
        &self.frame
    }

    /// Every call received, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Number of exchange animations played.
    #[must_use]
    pub fn exchange_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Exchange { .. }))
            .count()
    }

    /// Forget the call log, keeping the visible frame.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn render(&mut self, sequence: &[i64], highlights: &[usize]) -> VizResult<()> {
        self.frame.values.clear();
        self.frame.values.extend_from_slice(sequence);
        self.frame.highlights.clear();
        self.frame.highlights.extend_from_slice(highlights);
        self.calls.push(SurfaceCall::Render {
            values: sequence.to_vec(),
            highlights: highlights.to_vec(),
        });
        Ok(())
    }

    fn animate_exchange(&mut self, from: usize, to: usize) -> VizResult<()> {
        self.calls.push(SurfaceCall::Exchange { from, to });
        if from.max(to) < self.frame.values.len() {
            self.frame.values.swap(from, to);
        }
        Ok(())
    }
}
