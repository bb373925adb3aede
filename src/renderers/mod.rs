//! Rendering surfaces driven by the playback controller.
//!
//! The controller only ever talks to a [`Surface`]: one call to redraw the
//! sequence with a highlight set, one call to animate a swap. Everything
//! else about presentation lives behind this trait.
//!
//! # Architecture
//!
//! ```text
//! PlaybackController
//!       ↓
//! ┌─────────────────────┐
//! │       Surface       │
//! │  render / exchange  │
//! └─────────────────────┘
//!    ↓        ↓        ↓
//! Recording  Text   Terminal (bin/sort_tui)
//! ```

pub mod recording;
pub mod text;

pub use recording::{RecordingSurface, SurfaceCall, VisibleFrame};
pub use text::TextSurface;

use crate::error::VizResult;

/// The rendering/animation collaborator.
pub trait Surface {
    /// Redraw every element and highlight `highlights`.
    ///
    /// Must be idempotent and accept an empty highlight set.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot draw.
    fn render(&mut self, sequence: &[i64], highlights: &[usize]) -> VizResult<()>;

    /// Visually swap the elements at `from` and `to`.
    ///
    /// Returns only once the transition is visually complete; the controller
    /// renders the post-exchange state right after.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot draw.
    fn animate_exchange(&mut self, from: usize, to: usize) -> VizResult<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn render(&mut self, sequence: &[i64], highlights: &[usize]) -> VizResult<()> {
        (**self).render(sequence, highlights)
    }

    fn animate_exchange(&mut self, from: usize, to: usize) -> VizResult<()> {
        (**self).animate_exchange(from, to)
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn render(&mut self, sequence: &[i64], highlights: &[usize]) -> VizResult<()> {
        (**self).render(sequence, highlights)
    }

    fn animate_exchange(&mut self, from: usize, to: usize) -> VizResult<()> {
        (**self).animate_exchange(from, to)
    }
}
