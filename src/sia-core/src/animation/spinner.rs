//! Typing-indicator animation.

use std::time::Duration;

/// Frame-based typing indicator.
///
/// Cycles the familiar three-dot pattern while the widget pretends to type a
/// direct (non-staged) reply. Like [`Fade`](super::Fade), it is advanced by
/// explicit elapsed time rather than a wall clock.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    current_frame: usize,
    interval: Duration,
    accumulated: Duration,
}

impl Spinner {
    /// Dot cycle shown while "typing".
    pub const TYPING_FRAMES: &'static [&'static str] = &["\u{00B7}", "\u{00B7}\u{00B7}", "\u{00B7}\u{00B7}\u{00B7}"];

    const TYPING_INTERVAL_MS: u64 = 300;

    /// Creates the typing indicator spinner.
    pub fn typing() -> Self {
        Self {
            frames: Self::TYPING_FRAMES,
            current_frame: 0,
            interval: Duration::from_millis(Self::TYPING_INTERVAL_MS),
            accumulated: Duration::ZERO,
        }
    }

    /// Advances the animation by `dt`, stepping frames as intervals elapse.
    pub fn advance(&mut self, dt: Duration) {
        self.accumulated += dt;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            self.current_frame = (self.current_frame + 1) % self.frames.len();
        }
    }

    /// Returns the current frame.
    #[inline]
    pub fn current(&self) -> &'static str {
        self.frames[self.current_frame]
    }

    /// Returns the current frame index.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_frame
    }

    /// Returns the number of frames in the cycle.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns the frame interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
