//! # Sia Core
//!
//! Animation engine for the Sia chat widget.
//!
//! This crate provides the state machines behind the widget's staged
//! disclosure of assistant output: the markup-aware typewriter that reveals
//! text one unit at a time, the pacing table that makes the reveal read like
//! human typing, the cue schedule for the "thinking" timeline shown before a
//! final answer, and the small transition primitives (fade, typing dots) the
//! surface layer uses for entrances and exits.
//!
//! Everything here is pure: no timers, no tasks, no I/O. A state machine is
//! advanced by explicit calls (`Typewriter::advance`, `Fade::advance`) and
//! reports *how long* the caller should wait, never waits itself. The async
//! drivers that put these machines on a timer wheel live in `sia-chat`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sia_core::{Pacing, Tick, Typewriter};
//!
//! let mut tw = Typewriter::new("Hi <strong>there</strong>!".to_string(), Pacing::default());
//! loop {
//!     match tw.advance() {
//!         Tick::Revealed { delay, .. } => {
//!             // overwrite the sink with tw.visible_text(), then wait `delay`
//!         }
//!         Tick::Complete => break,
//!     }
//! }
//! assert_eq!(tw.visible_text(), "Hi <strong>there</strong>!");
//! ```

pub mod animation;
pub mod timeline;

// Re-export commonly used types for convenience
pub use animation::{Fade, FadeDirection, PaceClass, Pacing, Spinner, Tick, Typewriter};
pub use timeline::{Cue, TimelinePhase, TimelineSchedule, TimelineTiming};
