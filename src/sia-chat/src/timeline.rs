//! Staged timeline driver.
//!
//! Runs the "thinking" phase of a staged reply: step reveals at a fixed
//! cadence, a grace period, then the handoff to the stream renderer. Each
//! timeline instance owns its own cancellation token and terminal-outcome
//! flag through [`TimelineHandle`]; there is no process-wide timeline state.
//! [`ThinkingController`] is the single-slot owner that enforces "at most
//! one live timeline".

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use sia_core::animation::Pacing;
use sia_core::timeline::{TimelinePhase, TimelineSchedule, TimelineTiming};

use crate::message::format_bold;
use crate::sources::source_refs;
use crate::stream::stream_assistant_reply;
use crate::surface::{ChatSurface, NodeId, Role};

/// Fixed notice emitted in place of the final payload when a timeline is
/// cancelled.
pub const CANCEL_NOTICE: &str = "Process stopped. How else can I help you?";

/// Handle to one live timeline instance.
///
/// Owns the instance's cancellation token, its panel node, and the flag that
/// arbitrates the single terminal outcome: either the finalize handoff or
/// the cancellation notice, never both. Cancelling after finalize has begun
/// is a no-op.
pub struct TimelineHandle {
    cancel_token: CancellationToken,
    /// Set by whichever terminal transition wins, via compare-and-swap.
    terminal: Arc<AtomicBool>,
    panel: NodeId,
    surface: Arc<dyn ChatSurface>,
    task: JoinHandle<()>,
}

impl TimelineHandle {
    /// Returns the instance's current phase.
    pub fn phase(&self) -> TimelinePhase {
        if self.cancel_token.is_cancelled() {
            TimelinePhase::Cancelled
        } else if self.terminal.load(Ordering::SeqCst) {
            TimelinePhase::Finalizing
        } else {
            TimelinePhase::Running
        }
    }

    /// Cancels the timeline and emits the fixed notice.
    ///
    /// Revokes every pending cue, removes the thinking panel, and appends
    /// [`CANCEL_NOTICE`] as an assistant message - the stream renderer is
    /// never invoked for a cancelled timeline. No-op if finalize already
    /// began.
    pub fn cancel(&self) {
        self.end(true);
    }

    /// Silently tears the timeline down to make room for a successor.
    ///
    /// Same teardown as [`cancel`](Self::cancel) but without the notice: a
    /// superseded timeline just disappears.
    pub(crate) fn supersede(&self) {
        self.end(false);
    }

    fn end(&self, with_notice: bool) {
        if self.terminal.swap(true, Ordering::SeqCst) {
            debug!("timeline already terminal, cancel ignored");
            return;
        }
        self.cancel_token.cancel();
        self.surface.remove(self.panel);
        if with_notice {
            debug!("timeline cancelled");
            self.surface.append_message(Role::Assistant, CANCEL_NOTICE);
            self.surface.scroll_to_end();
        } else {
            debug!("timeline superseded");
        }
    }

    /// Returns `true` once the driver task has finished.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Single-slot owner of the live timeline.
///
/// Starting a new timeline fully tears down the previous one - panel
/// removed, pending cues revoked - before any new state is constructed.
pub struct ThinkingController {
    surface: Arc<dyn ChatSurface>,
    timing: TimelineTiming,
    pacing: Pacing,
    current: Mutex<Option<TimelineHandle>>,
}

impl ThinkingController {
    /// Creates a controller rendering onto `surface`.
    pub fn new(surface: Arc<dyn ChatSurface>, timing: TimelineTiming, pacing: Pacing) -> Self {
        Self {
            surface,
            timing,
            pacing,
            current: Mutex::new(None),
        }
    }

    /// Starts a staged timeline for `steps` and the final payload.
    ///
    /// Any previously running timeline is superseded first. Step `k` is
    /// revealed at `k * step_interval`; one grace period after the last
    /// step the panel fades out and `final_payload` (bold markup applied)
    /// is handed to the stream renderer, whose completion attaches the
    /// feedback controls and citations.
    pub fn start(&self, steps: Vec<String>, final_payload: String, sources: Vec<u32>) {
        let mut slot = self.current.lock().unwrap();
        if let Some(previous) = slot.take() {
            previous.supersede();
        }

        debug!(steps = steps.len(), "starting thinking timeline");
        let panel = self.surface.append_thinking_panel();
        self.surface.scroll_to_end();

        let cancel_token = CancellationToken::new();
        let terminal = Arc::new(AtomicBool::new(false));
        let task = tokio::spawn(run_timeline(TimelineRun {
            surface: Arc::clone(&self.surface),
            schedule: TimelineSchedule::new(self.timing.clone(), steps.len()),
            timing: self.timing.clone(),
            pacing: self.pacing.clone(),
            steps,
            final_payload,
            sources,
            cancel_token: cancel_token.clone(),
            terminal: Arc::clone(&terminal),
            panel,
        }));

        *slot = Some(TimelineHandle {
            cancel_token,
            terminal,
            panel,
            surface: Arc::clone(&self.surface),
            task,
        });
    }

    /// Cancels the live timeline, if any.
    pub fn cancel(&self) {
        let slot = self.current.lock().unwrap();
        match slot.as_ref() {
            Some(handle) => handle.cancel(),
            None => debug!("cancel with no live timeline"),
        }
    }

    /// Returns the live timeline's phase, or `Idle` when none is live.
    ///
    /// A finalized timeline whose handoff has fully completed reads as
    /// `Idle` again.
    pub fn phase(&self) -> TimelinePhase {
        let slot = self.current.lock().unwrap();
        match slot.as_ref() {
            None => TimelinePhase::Idle,
            Some(handle) => match handle.phase() {
                TimelinePhase::Finalizing if handle.is_finished() => TimelinePhase::Idle,
                phase => phase,
            },
        }
    }
}

/// Everything one timeline driver task needs.
struct TimelineRun {
    surface: Arc<dyn ChatSurface>,
    schedule: TimelineSchedule,
    timing: TimelineTiming,
    pacing: Pacing,
    steps: Vec<String>,
    final_payload: String,
    sources: Vec<u32>,
    cancel_token: CancellationToken,
    terminal: Arc<AtomicBool>,
    panel: NodeId,
}

async fn run_timeline(run: TimelineRun) {
    let TimelineRun {
        surface,
        schedule,
        timing,
        pacing,
        steps,
        final_payload,
        sources,
        cancel_token,
        terminal,
        panel,
    } = run;

    let mut elapsed = Duration::ZERO;
    for (k, step) in steps.iter().enumerate() {
        let fire_at = schedule.step_at(k);
        tokio::select! {
            _ = cancel_token.cancelled() => return,
            _ = sleep(fire_at.saturating_sub(elapsed)) => {}
        }
        elapsed = fire_at;

        // Fire-time guard: a cue arriving after cancellation must not render.
        if cancel_token.is_cancelled() {
            return;
        }
        debug!(step = k, "revealing thinking step");
        surface.push_thinking_step(panel, step);
        surface.scroll_to_end();
    }

    tokio::select! {
        _ = cancel_token.cancelled() => return,
        _ = sleep(schedule.finalize_at().saturating_sub(elapsed)) => {}
    }

    // Terminal transition: whoever swaps first owns the outcome.
    if terminal.swap(true, Ordering::SeqCst) {
        return;
    }

    debug!("finalizing timeline");
    sleep(timing.fade_out()).await;
    surface.remove(panel);

    let body = format_bold(&final_payload);
    stream_assistant_reply(
        surface.as_ref(),
        &body,
        &source_refs(&sources),
        &timing,
        pacing,
    )
    .await;
}
