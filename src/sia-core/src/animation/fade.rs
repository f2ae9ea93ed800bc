//! Fade transition for element entrances and exits.

use std::time::Duration;

/// Direction of a fade animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Fade in: opacity goes from 0 to 1
    In,
    /// Fade out: opacity goes from 1 to 0
    Out,
}

/// One-shot fade advanced by explicit elapsed time.
///
/// Used for message and thinking-step entrances and for the thinking panel's
/// exit. The fade holds no clock of its own - callers feed it elapsed time
/// via [`advance`](Fade::advance), which keeps it deterministic under a
/// paused test clock.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use sia_core::animation::Fade;
///
/// let mut fade = Fade::fade_in(300);
/// fade.advance(Duration::from_millis(150));
/// assert!(!fade.is_complete());
/// fade.advance(Duration::from_millis(150));
/// assert!(fade.is_complete());
/// assert_eq!(fade.progress(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    direction: FadeDirection,
}

impl Fade {
    /// Creates a fade-in animation (0 -> 1).
    ///
    /// # Arguments
    /// * `duration_ms` - Duration of the fade in milliseconds
    pub fn fade_in(duration_ms: u64) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: Duration::from_millis(duration_ms),
            direction: FadeDirection::In,
        }
    }

    /// Creates a fade-out animation (1 -> 0).
    ///
    /// # Arguments
    /// * `duration_ms` - Duration of the fade in milliseconds
    pub fn fade_out(duration_ms: u64) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: Duration::from_millis(duration_ms),
            direction: FadeDirection::Out,
        }
    }

    /// Advances the fade by `dt` of elapsed time.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Returns the current opacity from 0.0 to 1.0.
    ///
    /// For `FadeDirection::In`: starts at 0.0, ends at 1.0
    /// For `FadeDirection::Out`: starts at 1.0, ends at 0.0
    ///
    /// Uses ease-in-out for smooth acceleration and deceleration.
    pub fn progress(&self) -> f32 {
        let raw = if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        let eased = ease_in_out(raw);

        match self.direction {
            FadeDirection::In => eased,
            FadeDirection::Out => 1.0 - eased,
        }
    }

    /// Returns `true` once the fade has run its full duration.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Returns the fade direction.
    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    /// Returns the configured duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Resets the animation to the beginning.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// Ease-in-out curve for smooth animation.
///
/// Uses a cubic bezier approximation for natural-feeling motion.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
