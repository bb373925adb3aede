//! Drawable model of the sequence panel.
//!
//! `ArrayView` holds what the terminal shows: values, highlighted
//! positions and at most one exchange in flight. The binary interpolates
//! `progress` from 0 to 1 while it animates an exchange, then calls
//! [`ArrayView::finish_swap`] so the values land in their new positions.

use crate::error::VizResult;
use crate::renderers::Surface;

/// An exchange being animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swap {
    /// Left position of the pair.
    pub from: usize,
    /// Right position of the pair.
    pub to: usize,
    /// Completion in `0.0..=1.0`.
    pub progress: f64,
}

/// Values, highlights and in-flight exchange of the sequence panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayView {
    values: Vec<i64>,
    highlights: Vec<usize>,
    swap: Option<Swap>,
}

impl ArrayView {
    /// Empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shown state; cancels any exchange in flight.
    pub fn set_frame(&mut self, values: &[i64], highlights: &[usize]) {
        values.clone_into(&mut self.values);
        highlights.clone_into(&mut self.highlights);
        self.swap = None;
    }

    /// Begin animating an exchange. Out-of-range pairs are ignored and
    /// return `false`.
    pub fn begin_swap(&mut self, from: usize, to: usize) -> bool {
        if from.max(to) >= self.values.len() {
            return false;
        }
        self.swap = Some(Swap {
            from,
            to,
            progress: 0.0,
        });
        true
    }

    /// Move the exchange in flight to `progress`, clamped to `0..=1`.
    pub fn set_progress(&mut self, progress: f64) {
        if let Some(swap) = self.swap.as_mut() {
            swap.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Complete the exchange in flight: the values trade places.
    pub fn finish_swap(&mut self) {
        if let Some(swap) = self.swap.take() {
            self.values.swap(swap.from, swap.to);
        }
    }

    /// Shown values.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Highlighted positions.
    #[must_use]
    pub fn highlights(&self) -> &[usize] {
        &self.highlights
    }

    /// Exchange in flight, if any.
    #[must_use]
    pub const fn swap(&self) -> Option<Swap> {
        self.swap
    }

    /// Whether position `index` is highlighted or part of the exchange.
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.contains(&index)
            || self
                .swap
                .is_some_and(|s| s.from == index || s.to == index)
    }

    /// Largest value shown, at least 1, for scaling bars.
    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(1).max(1)
    }

    /// Horizontal position of the cell holding `index`, in cell widths.
    ///
    /// Cells taking part in the exchange travel toward each other's slot
    /// as progress grows; every other cell stays at its index.
    #[must_use]
    pub fn slot(&self, index: usize) -> f64 {
        let at = index as f64;
        match self.swap {
            Some(s) if index == s.from => at + (s.to as f64 - at) * s.progress,
            Some(s) if index == s.to => at + (s.from as f64 - at) * s.progress,
            _ => at,
        }
    }
}

/// Instant surface: exchanges complete immediately. Used headless and by
/// tests of the terminal front end.
impl Surface for ArrayView {
    fn render(&mut self, sequence: &[i64], highlights: &[usize]) -> VizResult<()> {
        self.set_frame(sequence, highlights);
        Ok(())
    }

    fn animate_exchange(&mut self, from: usize, to: usize) -> VizResult<()> {
        if self.begin_swap(from, to) {
            self.set_progress(1.0);
            self.finish_swap();
        }
        Ok(())
    }
}
