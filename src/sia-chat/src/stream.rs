//! Stream renderer driver.
//!
//! Puts a [`Typewriter`] on the tokio timer wheel: each tick overwrites the
//! sink with the full visible snapshot, periodically asks the surface to
//! scroll, and waits out the pacing delay the cursor reports. There is no
//! cancellation path for an in-flight render - once a payload starts
//! streaming it runs to completion, matching the widget's behavior.

use tokio::time::sleep;
use tracing::debug;

use sia_core::animation::{Pacing, Tick, Typewriter};

use crate::surface::{ChatSurface, TextTarget};

/// Streams `payload` into `sink`, then invokes `on_complete` exactly once.
///
/// The sink receives idempotent full-content overwrites, never appends. The
/// surface is only used for its scroll collaborator, which is poked every
/// tenth visible unit and not at all for tiny payloads. An empty payload
/// produces a single empty overwrite and completes immediately.
///
/// `on_complete` fires synchronously from the final tick, after the last
/// overwrite.
pub async fn render<F>(
    payload: &str,
    sink: &dyn TextTarget,
    surface: &dyn ChatSurface,
    pacing: Pacing,
    on_complete: F,
) where
    F: FnOnce(),
{
    let mut typewriter = Typewriter::new(payload.to_string(), pacing);
    debug!(len = payload.len(), "starting text stream");

    loop {
        match typewriter.advance() {
            Tick::Revealed { delay, scroll } => {
                sink.set_content(typewriter.visible_text());
                if scroll {
                    surface.scroll_to_end();
                }
                sleep(delay).await;
            }
            Tick::Complete => {
                sink.set_content(typewriter.visible_text());
                debug!(
                    units = typewriter.units_revealed(),
                    buffering = typewriter.is_buffering(),
                    "text stream complete"
                );
                on_complete();
                return;
            }
        }
    }
}

/// Streams a finished assistant reply onto the surface.
///
/// Appends an empty assistant message, pauses briefly, streams `body` into
/// it, and - once the stream completes - scrolls, waits the attach delay,
/// and attaches the feedback controls and citation list. Shared by the
/// staged-timeline handoff and the typing-indicator path.
pub(crate) async fn stream_assistant_reply(
    surface: &dyn ChatSurface,
    body: &str,
    sources: &[crate::sources::SourceRef],
    timing: &sia_core::timeline::TimelineTiming,
    pacing: Pacing,
) {
    let (id, sink) = surface.begin_assistant_message();
    surface.scroll_to_end();
    sleep(timing.stream_start_delay()).await;

    render(body, sink.as_ref(), surface, pacing, || {
        surface.scroll_to_end();
    })
    .await;

    sleep(timing.aux_attach_delay()).await;
    surface.attach_feedback(id);
    if !sources.is_empty() {
        surface.attach_sources(id, sources);
    }
}
