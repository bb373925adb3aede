//! TUI module for sortstep.
//!
//! Application state and the drawable array model live here so they can
//! be tested; terminal I/O stays in `src/bin/sort_tui.rs`.

#[cfg(feature = "tui")]
pub mod sort_app;
#[cfg(feature = "tui")]
pub mod view;

#[cfg(feature = "tui")]
pub use sort_app::{Hud, SortApp, MAX_STEP_DELAY, MIN_STEP_DELAY};
#[cfg(feature = "tui")]
pub use view::{ArrayView, Swap};
