//! Playback controller: run state, step sequencing and surface mediation.
//!
//! ```text
//! Idle --start()--> Running --advance() [exhausted]--> Finished
//!                   Running --advance() [more steps]--> Running
//! Idle | Running | Finished --reset()--> Idle
//! ```
//!
//! `&mut self` on every command enforces one request in flight; the
//! optional step delay additionally rejects `advance()` until the previous
//! step has been on screen long enough.

mod pacing;

pub use pacing::Pacing;

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{VizError, VizResult};
use crate::renderers::Surface;
use crate::sorting::{Algorithm, Step, StepProducer, StepSource};

/// Playback lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Sequence loaded, nothing started.
    #[default]
    Idle,
    /// A producer is live and steps can be pulled.
    Running,
    /// The producer is exhausted; the sequence is sorted.
    Finished,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Finished => "finished",
        })
    }
}

/// Outcome of a successful [`PlaybackController::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A step was shown.
    Stepped {
        /// One-based number of the step in this run.
        number: u64,
        /// The step itself.
        step: Step,
    },
    /// The producer was exhausted; the run is finished.
    Finished {
        /// Total steps shown in the run.
        steps: u64,
    },
}

impl Advance {
    /// Narration to display for this outcome.
    #[must_use]
    pub fn narration(&self) -> &str {
        match self {
            Self::Stepped { step, .. } => &step.narration,
            Self::Finished { .. } => COMPLETE_STATUS,
        }
    }
}

const COMPLETE_STATUS: &str = "Sorting complete!";
const RESET_STATUS: &str =
    "Reset. Select an algorithm and generate a new array or start sorting.";

/// Drives a step producer on command and forwards steps to a [`Surface`].
#[derive(Debug)]
pub struct PlaybackController<S: Surface> {
    surface: S,
    algorithm: Algorithm,
    pristine: Vec<i64>,
    producer: Option<StepProducer>,
    /// Sorted result of the last finished run.
    finished: Option<Vec<i64>>,
    state: RunState,
    step_count: u64,
    status: String,
    pacing: Pacing,
}

impl<S: Surface> PlaybackController<S> {
    /// Create an idle controller with an empty sequence.
    pub fn new(surface: S, algorithm: Algorithm) -> Self {
        Self {
            surface,
            algorithm,
            pristine: Vec::new(),
            producer: None,
            finished: None,
            state: RunState::Idle,
            step_count: 0,
            status: String::new(),
            pacing: Pacing::default(),
        }
    }

    /// Set the minimum time a step stays on screen before the next one.
    #[must_use]
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.pacing.set_delay(delay);
        self
    }

    // === Commands ===

    /// Install a new pristine sequence and return to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    pub fn load(&mut self, values: Vec<i64>) -> VizResult<()> {
        self.load_with_status(values, "Array loaded. Press start to begin.")
    }

    /// Like [`load`](Self::load), with a custom status line.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    pub fn load_with_status(&mut self, values: Vec<i64>, status: impl Into<String>) -> VizResult<()> {
        info!(len = values.len(), algorithm = %self.algorithm, "loading sequence");
        self.pristine = values;
        self.discard_run();
        self.status = status.into();
        self.surface.render(&self.pristine, &[])
    }

    /// Begin a run with a fresh producer over the pristine sequence.
    ///
    /// Calling `start` while already running is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidTransition`] when the run is finished.
    pub fn start(&mut self) -> VizResult<()> {
        match self.state {
            RunState::Running => {
                debug!("start ignored: already running");
                Ok(())
            }
            RunState::Finished => Err(self.reject("start")),
            RunState::Idle => {
                info!(algorithm = %self.algorithm, len = self.pristine.len(), "starting run");
                self.producer = Some(self.algorithm.steps(self.pristine.clone()));
                self.step_count = 0;
                self.state = RunState::Running;
                self.status = format!(
                    "Starting {} sort. Click \"Step\" to advance.",
                    self.algorithm
                );
                Ok(())
            }
        }
    }

    /// Pull one step and show it.
    ///
    /// Exchange steps play the exchange animation before the step's
    /// highlights are rendered. When the producer is exhausted the run
    /// finishes and the sorted sequence is rendered without highlights.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::InvalidTransition`] unless running,
    /// [`VizError::Busy`] while the previous step is still displaying, or
    /// a render error from the surface.
    pub fn advance(&mut self) -> VizResult<Advance> {
        self.advance_at(Instant::now())
    }

    /// [`advance`](Self::advance) against an explicit clock reading.
    ///
    /// The step counts as shown at `now`, or at the end of drawing if the
    /// surface took longer than that.
    ///
    /// # Errors
    ///
    /// Same as [`advance`](Self::advance).
    pub fn advance_at(&mut self, now: Instant) -> VizResult<Advance> {
        if self.state != RunState::Running {
            return Err(self.reject("advance"));
        }
        if let Some(remaining) = self.pacing.remaining(now) {
            debug!(remaining_ms = remaining.as_millis() as u64, "advance rejected: busy");
            return Err(VizError::Busy { remaining });
        }
        let Some(producer) = self.producer.as_mut() else {
            return Err(self.reject("advance"));
        };

        let Some(step) = producer.next() else {
            return self.finish();
        };

        self.step_count += 1;
        self.status.clone_from(&step.narration);
        debug!(number = self.step_count, kind = ?step.kind, "step");

        if let Some(exchange) = step.exchange {
            self.surface.animate_exchange(exchange.from, exchange.to)?;
        }
        let sequence = producer.sequence();
        self.surface.render(sequence, &step.highlight_indices)?;
        self.pacing.mark(now.max(Instant::now()));

        Ok(Advance::Stepped {
            number: self.step_count,
            step,
        })
    }

    /// Discard the run, restore the pristine sequence and redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    pub fn reset(&mut self) -> VizResult<()> {
        info!(from = %self.state, "reset");
        self.discard_run();
        self.status = RESET_STATUS.to_string();
        self.surface.render(&self.pristine, &[])
    }

    /// Change algorithm; implies [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> VizResult<()> {
        self.algorithm = algorithm;
        self.reset()
    }

    /// Change the post-step display delay.
    pub fn set_step_delay(&mut self, delay: Duration) {
        self.pacing.set_delay(delay);
    }

    // === Queries ===

    /// Current run state.
    #[must_use]
    pub const fn run_state(&self) -> RunState {
        self.state
    }

    /// Selected algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sequence as currently shown.
    #[must_use]
    pub fn sequence(&self) -> &[i64] {
        match (&self.producer, &self.finished) {
            (Some(producer), _) => producer.sequence(),
            (None, Some(sorted)) => sorted,
            (None, None) => &self.pristine,
        }
    }

    /// The originally loaded sequence.
    #[must_use]
    pub fn pristine(&self) -> &[i64] {
        &self.pristine
    }

    /// Steps shown in the current run.
    #[must_use]
    pub const fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Latest status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Post-step display delay.
    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        self.pacing.delay()
    }

    /// Whether `advance` would be accepted at `now`.
    #[must_use]
    pub fn ready_at(&self, now: Instant) -> bool {
        self.state == RunState::Running && self.pacing.remaining(now).is_none()
    }

    /// Whether `advance` would be accepted right now.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.ready_at(Instant::now())
    }

    /// The rendering surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the rendering surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the controller and return its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    // === Internals ===

    fn finish(&mut self) -> VizResult<Advance> {
        let sorted = self
            .producer
            .take()
            .map(StepProducer::into_sequence)
            .unwrap_or_default();
        info!(steps = self.step_count, "run finished");
        self.state = RunState::Finished;
        self.status = COMPLETE_STATUS.to_string();
        self.pacing.clear();
        self.surface.render(&sorted, &[])?;
        self.finished = Some(sorted);
        Ok(Advance::Finished {
            steps: self.step_count,
        })
    }

    fn discard_run(&mut self) {
        self.producer = None;
        self.finished = None;
        self.state = RunState::Idle;
        self.step_count = 0;
        self.pacing.clear();
    }

    fn reject(&self, operation: &'static str) -> VizError {
        debug!(operation, state = %self.state, "command rejected");
        VizError::transition(operation, self.state)
    }
}
