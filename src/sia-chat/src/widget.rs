//! Top-level chat widget orchestration.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::debug;

use sia_core::animation::Pacing;
use sia_core::timeline::{TimelinePhase, TimelineTiming};

use crate::message::format_bold;
use crate::responses::{Reply, ResponseCatalog};
use crate::sources::source_refs;
use crate::stream::stream_assistant_reply;
use crate::surface::{ChatSurface, Role};
use crate::timeline::ThinkingController;

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Typewriter pacing table.
    pub pacing: Pacing,
    /// Staged timeline timings.
    pub timeline: TimelineTiming,
    /// Minimum time the typing indicator is shown for direct replies.
    pub typing_delay_ms: u64,
    /// Upper bound of the random extra typing time.
    pub typing_jitter_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            timeline: TimelineTiming::default(),
            typing_delay_ms: 1000,
            typing_jitter_ms: 1000,
        }
    }
}

/// The chat widget.
///
/// Owns the response catalog and the single live thinking timeline, and
/// renders everything onto the supplied [`ChatSurface`]. One widget per
/// conversation surface; all methods take `&self` and may be called from
/// any task.
///
/// # Example
/// ```rust,ignore
/// use std::sync::Arc;
/// use sia_chat::{ChatWidget, Transcript, WidgetConfig};
///
/// let transcript = Arc::new(Transcript::new());
/// let widget = ChatWidget::new(transcript.clone(), WidgetConfig::default());
/// widget.submit("How many vacation days do I have left?");
/// ```
pub struct ChatWidget {
    surface: Arc<dyn ChatSurface>,
    catalog: ResponseCatalog,
    config: WidgetConfig,
    thinking: ThinkingController,
}

impl ChatWidget {
    /// Creates a widget rendering onto `surface` with the built-in catalog.
    pub fn new(surface: Arc<dyn ChatSurface>, config: WidgetConfig) -> Self {
        Self::with_catalog(surface, config, ResponseCatalog::builtin())
    }

    /// Creates a widget with a custom response catalog.
    pub fn with_catalog(
        surface: Arc<dyn ChatSurface>,
        config: WidgetConfig,
        catalog: ResponseCatalog,
    ) -> Self {
        let thinking = ThinkingController::new(
            Arc::clone(&surface),
            config.timeline.clone(),
            config.pacing.clone(),
        );
        Self {
            surface,
            catalog,
            config,
            thinking,
        }
    }

    /// Submits a user message.
    ///
    /// Appends the message to the surface immediately and dispatches the
    /// catalog reply: staged replies start the thinking timeline, direct
    /// replies go behind the typing indicator. Whitespace-only input is
    /// ignored.
    pub fn submit(&self, input: &str) {
        let message = input.trim();
        if message.is_empty() {
            debug!("ignoring empty submission");
            return;
        }

        self.surface
            .append_message(Role::User, &format_bold(message));
        self.surface.scroll_to_end();

        match self.catalog.lookup(message) {
            Reply::Staged {
                steps,
                body,
                sources,
            } => self.thinking.start(steps, body, sources),
            Reply::Direct { body, sources } => self.spawn_direct_reply(body, sources),
        }
    }

    /// Cancels the live thinking timeline, if any.
    pub fn cancel_thinking(&self) {
        self.thinking.cancel();
    }

    /// Returns the live timeline's phase (`Idle` when none is live).
    pub fn thinking_phase(&self) -> TimelinePhase {
        self.thinking.phase()
    }

    /// Shows the typing indicator, then streams a direct reply.
    fn spawn_direct_reply(&self, body: String, sources: Vec<u32>) {
        let surface = Arc::clone(&self.surface);
        let timing = self.config.timeline.clone();
        let pacing = self.config.pacing.clone();
        let typing_for = self.typing_duration();
        debug!(?typing_for, "queueing direct reply");

        tokio::spawn(async move {
            let indicator = surface.append_typing_indicator();
            surface.scroll_to_end();
            sleep(typing_for).await;
            surface.remove(indicator);

            let body = format_bold(&body);
            stream_assistant_reply(
                surface.as_ref(),
                &body,
                &source_refs(&sources),
                &timing,
                pacing,
            )
            .await;
        });
    }

    fn typing_duration(&self) -> Duration {
        let jitter = if self.config.typing_jitter_ms > 0 {
            rand::rng().random_range(0..self.config.typing_jitter_ms)
        } else {
            0
        };
        Duration::from_millis(self.config.typing_delay_ms + jitter)
    }
}
