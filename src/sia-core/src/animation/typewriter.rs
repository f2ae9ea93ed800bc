//! Markup-aware typewriter for streaming text reveal.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use super::pacing::Pacing;

/// Opens a markup span. Everything up to the next [`SPAN_CLOSE`] is buffered
/// and revealed in one piece.
pub const SPAN_OPEN: &str = "<";
/// Closes a markup span.
pub const SPAN_CLOSE: &str = ">";

/// How many visible units between scroll requests.
pub const DEFAULT_SCROLL_EVERY: usize = 10;

/// Outcome of advancing the typewriter by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One visible unit (a grapheme or a whole markup span) was revealed.
    Revealed {
        /// How long the driver should wait before the next tick.
        delay: Duration,
        /// Whether the sink's container should be scrolled to its end.
        scroll: bool,
    },
    /// The payload is exhausted; [`Typewriter::visible_text`] is final.
    Complete,
}

/// Typewriter reveal cursor over a text payload with embedded markup.
///
/// Reveals the payload one unit per [`advance`](Self::advance) call. A unit
/// is one extended grapheme cluster, except that a markup span (`<` through
/// the next `>`) is consumed in a single tick and revealed atomically - a
/// span is never visible half-open. The caller owns pacing: each tick
/// reports the delay to wait before the next one, chosen from the [`Pacing`]
/// table by the class of the unit just revealed.
///
/// [`visible_text`](Self::visible_text) is the full accumulated snapshot.
/// Sinks are expected to *overwrite* their content with it on every tick
/// rather than append, so completed markup is re-interpreted as a whole.
///
/// A payload whose trailing span never closes leaves the cursor in
/// span-buffering mode permanently: the buffered text is never flushed to
/// the visible output, and the cursor completes with everything before the
/// opening delimiter visible. This mirrors the widget's long-standing
/// behavior and is relied on by callers; it is not an error.
///
/// # Example
/// ```
/// use sia_core::animation::{Pacing, Tick, Typewriter};
///
/// let mut tw = Typewriter::new("a<b>c".to_string(), Pacing::default());
/// let mut snapshots = Vec::new();
/// while let Tick::Revealed { .. } = tw.advance() {
///     snapshots.push(tw.visible_text().to_string());
/// }
/// assert_eq!(snapshots, ["a", "a<b>", "a<b>c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Typewriter {
    payload: String,
    /// Byte offset of the next unrevealed unit.
    cursor: usize,
    /// True while inside an unclosed markup span.
    in_span: bool,
    /// Span text accumulated so far, including the opening delimiter.
    span_buf: String,
    /// Accumulated visible output.
    visible: String,
    /// Count of revealed visible units (spans count as one).
    units_revealed: usize,
    scroll_every: usize,
    pacing: Pacing,
    complete: bool,
}

impl Typewriter {
    /// Creates a reveal cursor over `payload` with the default scroll cadence.
    pub fn new(payload: String, pacing: Pacing) -> Self {
        Self {
            payload,
            cursor: 0,
            in_span: false,
            span_buf: String::new(),
            visible: String::new(),
            units_revealed: 0,
            scroll_every: DEFAULT_SCROLL_EVERY,
            pacing,
            complete: false,
        }
    }

    /// Overrides the scroll cadence. `0` disables scroll requests.
    pub fn with_scroll_every(mut self, scroll_every: usize) -> Self {
        self.scroll_every = scroll_every;
        self
    }

    /// Advances the cursor by one tick.
    ///
    /// Reveals the next unit and reports the delay to schedule before the
    /// following tick. Once the payload is exhausted this returns
    /// [`Tick::Complete`] and keeps returning it on further calls.
    pub fn advance(&mut self) -> Tick {
        if self.complete {
            return Tick::Complete;
        }

        let Some((start, end)) = self.unit_range_at(self.cursor) else {
            self.complete = true;
            return Tick::Complete;
        };

        if &self.payload[start..end] == SPAN_OPEN {
            self.in_span = true;
            self.span_buf.clear();
        }

        if self.in_span {
            return self.consume_span(start);
        }

        self.visible.push_str(&self.payload[start..end]);
        self.cursor = end;
        let scroll = self.bump_unit();
        let delay = self.pacing.delay_after(&self.payload[start..end]);
        Tick::Revealed { delay, scroll }
    }

    /// Consumes span units starting at `pos` until the span closes or the
    /// payload runs out, then flushes the buffer atomically.
    fn consume_span(&mut self, mut pos: usize) -> Tick {
        loop {
            let Some((start, end)) = self.unit_range_at(pos) else {
                // Unterminated span: the buffer is never flushed and the
                // cursor stays in span mode. The payload is still exhausted.
                self.cursor = self.payload.len();
                self.complete = true;
                return Tick::Complete;
            };
            self.span_buf.push_str(&self.payload[start..end]);
            pos = end;
            if &self.payload[start..end] == SPAN_CLOSE {
                break;
            }
        }

        self.cursor = pos;
        self.in_span = false;
        self.visible.push_str(&self.span_buf);
        self.span_buf.clear();
        let scroll = self.bump_unit();
        Tick::Revealed {
            delay: self.pacing.span_delay(),
            scroll,
        }
    }

    fn unit_range_at(&self, pos: usize) -> Option<(usize, usize)> {
        let unit = self.payload[pos..].graphemes(true).next()?;
        Some((pos, pos + unit.len()))
    }

    /// Counts a revealed unit and reports whether this one hits the scroll
    /// cadence.
    fn bump_unit(&mut self) -> bool {
        self.units_revealed += 1;
        self.scroll_every > 0 && self.units_revealed % self.scroll_every == 0
    }

    /// Returns the currently visible snapshot.
    #[inline]
    pub fn visible_text(&self) -> &str {
        &self.visible
    }

    /// Returns `true` once the payload is exhausted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns `true` while the cursor is inside an unclosed markup span.
    ///
    /// Stays `true` after completion if the trailing span never closed.
    #[inline]
    pub fn is_buffering(&self) -> bool {
        self.in_span
    }

    /// Returns the number of visible units revealed so far.
    #[inline]
    pub fn units_revealed(&self) -> usize {
        self.units_revealed
    }

    /// Returns the full payload, including anything not yet revealed.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}
