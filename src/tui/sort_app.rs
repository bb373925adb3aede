//! Sorting visualizer TUI application state and logic.
//!
//! Terminal I/O is handled by the `sort_tui` binary; key handling,
//! autoplay and data loading live here so they can be tested with any
//! [`Surface`].

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::debug;

use crate::config::{DataConfig, DataSource, VizConfig};
use crate::data::{self, SeqRng};
use crate::error::VizResult;
use crate::playback::{Advance, PlaybackController, RunState};
use crate::renderers::Surface;
use crate::sorting::Algorithm;

/// Shortest step delay reachable with `-`.
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(50);
/// Longest step delay reachable with `+`.
pub const MAX_STEP_DELAY: Duration = Duration::from_millis(3000);

/// Everything the status panels show besides the sequence itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    /// Selected algorithm.
    pub algorithm: Algorithm,
    /// Playback phase.
    pub state: RunState,
    /// Steps shown so far.
    pub step: u64,
    /// Status line.
    pub status: String,
    /// Post-step delay.
    pub delay: Duration,
    /// Whether autoplay is on.
    pub autoplay: bool,
}

/// Application state for the sorting TUI.
pub struct SortApp<S: Surface> {
    controller: PlaybackController<S>,
    rng: SeqRng,
    data: DataConfig,
    autoplay: bool,
    should_quit: bool,
}

impl<S: Surface> SortApp<S> {
    /// Create the app and load the configured initial sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    pub fn new(surface: S, config: &VizConfig) -> VizResult<Self> {
        let delay = config.step_delay().clamp(MIN_STEP_DELAY, MAX_STEP_DELAY);
        let controller = PlaybackController::new(surface, config.algorithm).with_step_delay(delay);
        let mut app = Self {
            controller,
            rng: config.rng(),
            data: config.data.clone(),
            autoplay: false,
            should_quit: false,
        };

        match config.data.source {
            DataSource::Random => app.generate()?,
            DataSource::Sample => app.load_sample()?,
            DataSource::Values => app.controller.load(config.data.values.clone())?,
        }
        if config.playback.autoplay {
            app.toggle_autoplay()?;
        }
        Ok(app)
    }

    /// Handle a key press.
    ///
    /// Commands the controller refuses in its current state (stepping
    /// while idle, stepping before the delay elapsed) are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    pub fn handle_key(&mut self, key: KeyCode) -> VizResult<()> {
        let result = match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Char('g') => self.generate(),
            KeyCode::Char('s') => self.load_sample(),
            KeyCode::Enter => self.controller.start(),
            KeyCode::Char('n') | KeyCode::Right => {
                self.autoplay = false;
                self.step()
            }
            KeyCode::Char(' ') => self.toggle_autoplay(),
            KeyCode::Char('r') => {
                self.autoplay = false;
                self.controller.reset()
            }
            KeyCode::Char('a') => self.select(self.controller.algorithm().next()),
            KeyCode::Char('1') => self.select(Algorithm::Bubble),
            KeyCode::Char('2') => self.select(Algorithm::Insertion),
            KeyCode::Char('3') => self.select(Algorithm::Selection),
            KeyCode::Char('+' | '=') => {
                self.set_delay(self.controller.step_delay().saturating_mul(2));
                Ok(())
            }
            KeyCode::Char('-') => {
                self.set_delay(self.controller.step_delay() / 2);
                Ok(())
            }
            _ => Ok(()),
        };

        match result {
            Err(e) if e.is_recoverable() => {
                debug!(?key, error = %e, "key ignored");
                Ok(())
            }
            other => other,
        }
    }

    /// Drive autoplay: take the next step once the delay has elapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to draw.
    pub fn tick(&mut self, now: Instant) -> VizResult<()> {
        if !self.autoplay || !self.controller.ready_at(now) {
            return Ok(());
        }
        if let Advance::Finished { .. } = self.controller.advance_at(now)? {
            self.autoplay = false;
        }
        Ok(())
    }

    fn generate(&mut self) -> VizResult<()> {
        self.autoplay = false;
        let values = data::random_sequence(&mut self.rng, self.data.size, self.data.min, self.data.max);
        self.controller
            .load_with_status(values, "Array generated. Press Enter to begin.")
    }

    fn load_sample(&mut self) -> VizResult<()> {
        self.autoplay = false;
        let algorithm = self.controller.algorithm();
        self.controller.load_with_status(
            data::sample_for(algorithm),
            format!("Sample data loaded for {algorithm} sort. Press Enter to begin."),
        )
    }

    fn step(&mut self) -> VizResult<()> {
        self.controller.advance().map(|_| ())
    }

    fn toggle_autoplay(&mut self) -> VizResult<()> {
        if self.autoplay {
            self.autoplay = false;
            return Ok(());
        }
        match self.controller.run_state() {
            RunState::Finished => Ok(()),
            RunState::Idle => {
                self.controller.start()?;
                self.autoplay = true;
                Ok(())
            }
            RunState::Running => {
                self.autoplay = true;
                Ok(())
            }
        }
    }

    fn select(&mut self, algorithm: Algorithm) -> VizResult<()> {
        self.autoplay = false;
        self.controller.set_algorithm(algorithm)
    }

    fn set_delay(&mut self, delay: Duration) {
        let delay = delay.clamp(MIN_STEP_DELAY, MAX_STEP_DELAY);
        debug!(delay_ms = delay.as_millis() as u64, "step delay changed");
        self.controller.set_step_delay(delay);
    }

    // === Queries ===

    /// Snapshot for the status panels.
    #[must_use]
    pub fn hud(&self) -> Hud {
        Hud {
            algorithm: self.controller.algorithm(),
            state: self.controller.run_state(),
            step: self.controller.step_count(),
            status: self.controller.status().to_string(),
            delay: self.controller.step_delay(),
            autoplay: self.autoplay,
        }
    }

    /// The playback controller.
    #[must_use]
    pub const fn controller(&self) -> &PlaybackController<S> {
        &self.controller
    }

    /// Mutable access to the playback controller.
    pub fn controller_mut(&mut self) -> &mut PlaybackController<S> {
        &mut self.controller
    }

    /// Whether autoplay is on.
    #[must_use]
    pub const fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Check if the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::view::ArrayView;

    fn app(values: &[i64], algorithm: Algorithm) -> SortApp<ArrayView> {
        let config = VizConfig::builder()
            .algorithm(algorithm)
            .values(values.to_vec())
            .seed(42)
            .build();
        SortApp::new(ArrayView::new(), &config).expect("app")
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(10)
    }

    #[test]
    fn test_new_app_loads_values() {
        let app = app(&[3, 1, 2], Algorithm::Bubble);
        assert_eq!(app.controller().run_state(), RunState::Idle);
        assert_eq!(app.controller().surface().values(), &[3, 1, 2]);
        assert!(!app.autoplay());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_step_delay_clamped_on_startup() {
        let config = VizConfig::builder().values(vec![2, 1]).step_delay_ms(0).build();
        let app = SortApp::new(ArrayView::new(), &config).expect("app");
        assert_eq!(app.hud().delay, MIN_STEP_DELAY);
    }

    #[test]
    fn test_blank_hud_has_no_delay() {
        let hud = Hud::default();
        assert_eq!(hud.delay, Duration::ZERO);
        assert_eq!(hud.state, RunState::Idle);
        assert!(hud.status.is_empty());
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = app(&[2, 1], Algorithm::Bubble);
        app.handle_key(KeyCode::Char('q')).expect("key");
        assert!(app.should_quit());

        let mut app = self::app(&[2, 1], Algorithm::Bubble);
        app.handle_key(KeyCode::Esc).expect("key");
        assert!(app.should_quit());
    }

    #[test]
    fn test_step_before_start_is_ignored() {
        let mut app = app(&[2, 1], Algorithm::Bubble);
        app.handle_key(KeyCode::Char('n')).expect("key");
        assert_eq!(app.controller().run_state(), RunState::Idle);
        assert_eq!(app.controller().step_count(), 0);
    }

    #[test]
    fn test_enter_then_step() {
        let mut app = app(&[2, 1], Algorithm::Bubble);
        app.handle_key(KeyCode::Enter).expect("start");
        app.handle_key(KeyCode::Right).expect("step");
        assert_eq!(app.controller().step_count(), 1);
        assert_eq!(app.controller().surface().highlights(), &[0, 1]);

        // The previous step is still on screen.
        app.handle_key(KeyCode::Char('n')).expect("busy step");
        assert_eq!(app.controller().step_count(), 1);
    }

    #[test]
    fn test_autoplay_runs_to_completion() {
        let mut app = app(&[4, 3, 2, 1], Algorithm::Selection);
        app.handle_key(KeyCode::Char(' ')).expect("autoplay");
        assert!(app.autoplay());
        assert_eq!(app.controller().run_state(), RunState::Running);

        let mut clock = Instant::now();
        for _ in 0..100 {
            clock += Duration::from_secs(10);
            app.tick(clock).expect("tick");
            if !app.autoplay() {
                break;
            }
        }
        assert!(!app.autoplay());
        assert_eq!(app.controller().run_state(), RunState::Finished);
        assert_eq!(app.controller().surface().values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_tick_waits_for_delay() {
        let mut app = app(&[2, 1], Algorithm::Bubble);
        app.handle_key(KeyCode::Char(' ')).expect("autoplay");
        app.tick(later()).expect("tick");
        app.tick(Instant::now()).expect("tick");
        assert_eq!(app.controller().step_count(), 1);
    }

    #[test]
    fn test_space_toggles_autoplay_off() {
        let mut app = app(&[2, 1], Algorithm::Bubble);
        app.handle_key(KeyCode::Char(' ')).expect("on");
        app.handle_key(KeyCode::Char(' ')).expect("off");
        assert!(!app.autoplay());
        app.tick(later()).expect("tick");
        assert_eq!(app.controller().step_count(), 0);
    }

    #[test]
    fn test_reset_restores_pristine() {
        let mut app = app(&[3, 1, 2], Algorithm::Bubble);
        app.handle_key(KeyCode::Enter).expect("start");
        app.handle_key(KeyCode::Char('n')).expect("step");
        app.tick(later()).expect("tick");
        app.handle_key(KeyCode::Char('r')).expect("reset");
        assert_eq!(app.controller().run_state(), RunState::Idle);
        assert_eq!(app.controller().surface().values(), &[3, 1, 2]);
        assert!(app.controller().surface().highlights().is_empty());
    }

    #[test]
    fn test_algorithm_keys() {
        let mut app = app(&[3, 1, 2], Algorithm::Bubble);
        app.handle_key(KeyCode::Char('a')).expect("cycle");
        assert_eq!(app.hud().algorithm, Algorithm::Insertion);
        app.handle_key(KeyCode::Char('3')).expect("select");
        assert_eq!(app.hud().algorithm, Algorithm::Selection);
        app.handle_key(KeyCode::Char('1')).expect("select");
        assert_eq!(app.hud().algorithm, Algorithm::Bubble);
    }

    #[test]
    fn test_sample_key_uses_algorithm_sample() {
        let mut app = app(&[3, 1, 2], Algorithm::Insertion);
        app.handle_key(KeyCode::Char('s')).expect("sample");
        assert_eq!(app.controller().pristine(), data::sample_for(Algorithm::Insertion).as_slice());
        assert_eq!(
            app.controller().status(),
            "Sample data loaded for insertion sort. Press Enter to begin."
        );
    }

    #[test]
    fn test_generate_key_loads_random_values() {
        let mut app = app(&[3, 1, 2], Algorithm::Bubble);
        app.handle_key(KeyCode::Char('g')).expect("generate");
        let values = app.controller().pristine();
        assert_eq!(values.len(), data::SAMPLE_SIZE);
        assert!(values.iter().all(|v| (data::DEFAULT_MIN..=data::DEFAULT_MAX).contains(v)));
    }

    #[test]
    fn test_delay_keys_stay_in_bounds() {
        let mut app = app(&[2, 1], Algorithm::Bubble);
        for _ in 0..10 {
            app.handle_key(KeyCode::Char('+')).expect("slower");
        }
        assert_eq!(app.hud().delay, MAX_STEP_DELAY);
        for _ in 0..10 {
            app.handle_key(KeyCode::Char('-')).expect("faster");
        }
        assert_eq!(app.hud().delay, MIN_STEP_DELAY);
    }

    #[test]
    fn test_autoplay_ignored_when_finished() {
        let mut app = app(&[1], Algorithm::Bubble);
        app.handle_key(KeyCode::Enter).expect("start");
        app.handle_key(KeyCode::Char('n')).expect("finish");
        assert_eq!(app.controller().run_state(), RunState::Finished);
        app.handle_key(KeyCode::Char(' ')).expect("autoplay");
        assert!(!app.autoplay());
    }
}
