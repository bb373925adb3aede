//! # sortstep
//!
//! Step-through visualizer for bubble, insertion and selection sort.
//!
//! Each algorithm is an explicit state machine that yields one [`Step`]
//! per visible operation: a comparison, an exchange, a shift, a position
//! becoming final. A [`PlaybackController`] pulls steps on request and
//! mediates a [`Surface`] that draws the sequence and animates exchanges.
//!
//! ## Example
//!
//! ```rust
//! use sortstep::prelude::*;
//!
//! let mut player = PlaybackController::new(RecordingSurface::new(), Algorithm::Bubble);
//! player.load(vec![5, 1, 4]).expect("load");
//! player.start().expect("start");
//! let first = player.advance().expect("step");
//! assert_eq!(first.narration(), "Comparing elements at positions 0 and 1");
//! ```
//!
//! [`Step`]: sorting::Step
//! [`PlaybackController`]: playback::PlaybackController
//! [`Surface`]: renderers::Surface

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod playback;
pub mod renderers;
pub mod sorting;
pub mod trace;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{VizConfig, VizConfigBuilder};
    pub use crate::data::SeqRng;
    pub use crate::error::{VizError, VizResult};
    pub use crate::playback::{Advance, PlaybackController, RunState};
    pub use crate::renderers::{RecordingSurface, Surface, TextSurface};
    pub use crate::sorting::{Algorithm, Step, StepKind, StepProducer, StepSource};
    pub use crate::trace::{OpCounts, StepTrace};
}

/// Re-export for public API
pub use error::{VizError, VizResult};
