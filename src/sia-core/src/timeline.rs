//! Cue schedule and phase tracking for the staged thinking timeline.
//!
//! Before a staged reply, the widget shows a sequence of intermediate
//! "reasoning" steps at a fixed cadence, then hands the final payload to the
//! typewriter. This module holds the pure half of that behavior: when each
//! cue fires and what phase a timeline instance is in. The async driver that
//! sleeps between cues, checks cancellation, and touches the surface lives
//! in `sia-chat`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs for the staged timeline.
///
/// All values are in milliseconds; defaults are the widget's canonical
/// cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineTiming {
    /// Gap between consecutive step reveals. The first step fires at t=0.
    pub step_interval_ms: u64,
    /// Grace period between the last step's fire time and finalize.
    pub finalize_grace_ms: u64,
    /// Thinking panel fade-out duration at the start of finalize.
    pub fade_out_ms: u64,
    /// Pause between removing the panel and starting the text stream.
    pub stream_start_delay_ms: u64,
    /// Pause between stream completion and attaching feedback/sources.
    pub aux_attach_delay_ms: u64,
    /// Entrance fade duration for steps and messages.
    pub entrance_ms: u64,
}

impl Default for TimelineTiming {
    fn default() -> Self {
        Self {
            step_interval_ms: 1200,
            finalize_grace_ms: 800,
            fade_out_ms: 200,
            stream_start_delay_ms: 100,
            aux_attach_delay_ms: 100,
            entrance_ms: 300,
        }
    }
}

impl TimelineTiming {
    /// Gap between consecutive step reveals.
    #[inline]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Grace period before finalize.
    #[inline]
    pub fn finalize_grace(&self) -> Duration {
        Duration::from_millis(self.finalize_grace_ms)
    }

    /// Panel fade-out duration.
    #[inline]
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    /// Pause before the final payload starts streaming.
    #[inline]
    pub fn stream_start_delay(&self) -> Duration {
        Duration::from_millis(self.stream_start_delay_ms)
    }

    /// Pause before auxiliary elements are attached.
    #[inline]
    pub fn aux_attach_delay(&self) -> Duration {
        Duration::from_millis(self.aux_attach_delay_ms)
    }

    /// Entrance fade duration.
    #[inline]
    pub fn entrance(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }
}

/// A scheduled timeline cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Reveal step `k`.
    Step(usize),
    /// Begin finalize: fade the panel out and hand off to the typewriter.
    Finalize,
}

/// Phase of one timeline instance.
///
/// `Idle -> Running -> { Cancelled | Finalizing -> Idle }`. Exactly one of
/// the two terminal transitions happens per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelinePhase {
    /// No timeline is live.
    Idle,
    /// Step cues are pending or firing.
    Running,
    /// The grace period elapsed; the handoff to the typewriter is underway.
    Finalizing,
    /// The timeline was cancelled before finalize.
    Cancelled,
}

impl TimelinePhase {
    /// Returns `true` if a terminal transition has been taken.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalizing | Self::Cancelled)
    }

    /// Returns `true` while step cues may still fire.
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Fire-time schedule for one timeline instance.
///
/// Step `k` fires at `k * step_interval`, the first at t=0. Finalize begins
/// one grace period after the last step's fire time; with no steps at all it
/// begins after the grace period alone.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use sia_core::timeline::{TimelineSchedule, TimelineTiming};
///
/// let schedule = TimelineSchedule::new(TimelineTiming::default(), 2);
/// assert_eq!(schedule.step_at(1), Duration::from_millis(1200));
/// assert_eq!(schedule.finalize_at(), Duration::from_millis(2000));
/// ```
#[derive(Debug, Clone)]
pub struct TimelineSchedule {
    timing: TimelineTiming,
    step_count: usize,
}

impl TimelineSchedule {
    /// Creates the schedule for `step_count` steps.
    pub fn new(timing: TimelineTiming, step_count: usize) -> Self {
        Self { timing, step_count }
    }

    /// Returns the number of steps.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the fire time of step `k`.
    pub fn step_at(&self, k: usize) -> Duration {
        self.timing.step_interval() * k as u32
    }

    /// Returns the time at which finalize begins.
    pub fn finalize_at(&self) -> Duration {
        let last_step = match self.step_count {
            0 => Duration::ZERO,
            n => self.step_at(n - 1),
        };
        last_step + self.timing.finalize_grace()
    }

    /// Returns every cue with its fire time, in firing order.
    pub fn cues(&self) -> Vec<(Duration, Cue)> {
        let mut cues: Vec<(Duration, Cue)> = (0..self.step_count)
            .map(|k| (self.step_at(k), Cue::Step(k)))
            .collect();
        cues.push((self.finalize_at(), Cue::Finalize));
        cues
    }

    /// Returns how many steps have fired strictly before `t`.
    ///
    /// This is the number of steps a cancellation at `t` leaves rendered.
    pub fn steps_fired_before(&self, t: Duration) -> usize {
        (0..self.step_count).take_while(|&k| self.step_at(k) < t).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_schedule_step_fire_times() {
        let schedule = TimelineSchedule::new(TimelineTiming::default(), 3);
        assert_eq!(schedule.step_at(0), ms(0));
        assert_eq!(schedule.step_at(1), ms(1200));
        assert_eq!(schedule.step_at(2), ms(2400));
    }

    #[test]
    fn test_schedule_finalize_after_last_step_plus_grace() {
        let schedule = TimelineSchedule::new(TimelineTiming::default(), 2);
        assert_eq!(schedule.finalize_at(), ms(2000));
    }

    #[test]
    fn test_schedule_finalize_with_no_steps() {
        let schedule = TimelineSchedule::new(TimelineTiming::default(), 0);
        assert_eq!(schedule.finalize_at(), ms(800));
        assert_eq!(schedule.cues(), [(ms(800), Cue::Finalize)]);
    }

    #[test]
    fn test_schedule_cues_in_firing_order() {
        let schedule = TimelineSchedule::new(TimelineTiming::default(), 2);
        assert_eq!(
            schedule.cues(),
            [
                (ms(0), Cue::Step(0)),
                (ms(1200), Cue::Step(1)),
                (ms(2000), Cue::Finalize),
            ]
        );
    }

    #[test]
    fn test_steps_fired_before_cancellation_time() {
        let schedule = TimelineSchedule::new(TimelineTiming::default(), 3);
        assert_eq!(schedule.steps_fired_before(ms(0)), 0);
        assert_eq!(schedule.steps_fired_before(ms(1)), 1);
        assert_eq!(schedule.steps_fired_before(ms(1200)), 1);
        assert_eq!(schedule.steps_fired_before(ms(1500)), 2);
        assert_eq!(schedule.steps_fired_before(ms(60_000)), 3);
    }

    #[test]
    fn test_phase_predicates() {
        assert!(TimelinePhase::Running.is_running());
        assert!(!TimelinePhase::Running.is_terminal());
        assert!(TimelinePhase::Finalizing.is_terminal());
        assert!(TimelinePhase::Cancelled.is_terminal());
        assert!(!TimelinePhase::Idle.is_terminal());
    }

    #[test]
    fn test_timing_deserializes_with_defaults() {
        let timing: TimelineTiming = serde_json::from_str("{\"step_interval_ms\": 500}").unwrap();
        assert_eq!(timing.step_interval(), ms(500));
        assert_eq!(timing.finalize_grace(), ms(800));
    }
}
