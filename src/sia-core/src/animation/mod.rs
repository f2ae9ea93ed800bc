//! Animation primitives for the Sia chat widget.
//!
//! Everything in this module is advanced explicitly - by an [`advance`]
//! call carrying elapsed time, or by a tick that reports the next delay -
//! so the drivers own all scheduling and tests never need a real clock.
//!
//! [`advance`]: Fade::advance

mod fade;
mod pacing;
mod spinner;
mod typewriter;

// Re-export all public types for backwards compatibility
pub use fade::{Fade, FadeDirection, ease_in_out};
pub use pacing::{PaceClass, Pacing};
pub use spinner::Spinner;
pub use typewriter::{DEFAULT_SCROLL_EVERY, SPAN_CLOSE, SPAN_OPEN, Tick, Typewriter};

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Runs the typewriter to completion, returning every snapshot taken
    /// after a revealed tick.
    fn collect_snapshots(payload: &str) -> Vec<String> {
        let mut tw = Typewriter::new(payload.to_string(), Pacing::default());
        let mut snapshots = Vec::new();
        while let Tick::Revealed { .. } = tw.advance() {
            snapshots.push(tw.visible_text().to_string());
        }
        snapshots
    }

    // --------------------------------------------------------
    // Typewriter Tests
    // --------------------------------------------------------

    #[test]
    fn test_typewriter_creation() {
        let tw = Typewriter::new("Hello".to_string(), Pacing::default());
        assert_eq!(tw.visible_text(), "");
        assert!(!tw.is_complete());
        assert!(!tw.is_buffering());
        assert_eq!(tw.units_revealed(), 0);
    }

    #[test]
    fn test_typewriter_reveals_one_unit_per_tick() {
        let snapshots = collect_snapshots("abc");
        assert_eq!(snapshots, ["a", "ab", "abc"]);
    }

    #[test]
    fn test_typewriter_balanced_payload_round_trips() {
        let payload = "Hi <strong>there</strong>, friend. All good?";
        let mut tw = Typewriter::new(payload.to_string(), Pacing::default());
        let mut ticks = 0;
        while let Tick::Revealed { .. } = tw.advance() {
            ticks += 1;
        }
        assert_eq!(tw.visible_text(), payload);
        assert!(tw.is_complete());
        assert!(ticks < payload.chars().count(), "spans must collapse ticks");
        // Completion is idempotent.
        assert_eq!(tw.advance(), Tick::Complete);
        assert_eq!(tw.visible_text(), payload);
    }

    #[test]
    fn test_typewriter_span_revealed_atomically() {
        let snapshots = collect_snapshots("a<strong>b");
        // The span never appears partially open in any snapshot.
        assert_eq!(snapshots, ["a", "a<strong>", "a<strong>b"]);
    }

    #[test]
    fn test_typewriter_span_uses_fast_fixed_delay() {
        let pacing = Pacing::default();
        let mut tw = Typewriter::new("<strong>".to_string(), pacing.clone());
        match tw.advance() {
            Tick::Revealed { delay, .. } => assert_eq!(delay, pacing.span_delay()),
            other => panic!("expected revealed span, got {other:?}"),
        }
    }

    #[test]
    fn test_typewriter_pacing_by_character_class() {
        let pacing = Pacing::default();
        let mut tw = Typewriter::new("a .,".to_string(), pacing.clone());
        let mut delays = Vec::new();
        while let Tick::Revealed { delay, .. } = tw.advance() {
            delays.push(delay);
        }
        assert_eq!(
            delays,
            [
                ms(pacing.plain_ms),
                ms(pacing.whitespace_ms),
                ms(pacing.sentence_ms),
                ms(pacing.clause_ms),
            ]
        );
    }

    #[test]
    fn test_typewriter_empty_payload_completes_immediately() {
        let mut tw = Typewriter::new(String::new(), Pacing::default());
        assert_eq!(tw.advance(), Tick::Complete);
        assert_eq!(tw.visible_text(), "");
        assert!(tw.is_complete());
    }

    #[test]
    fn test_typewriter_unterminated_span_never_flushes() {
        let mut tw = Typewriter::new("before<em unfinished".to_string(), Pacing::default());
        while let Tick::Revealed { .. } = tw.advance() {}
        // Everything before the opening delimiter is visible; the span is not.
        assert_eq!(tw.visible_text(), "before");
        assert!(tw.is_complete());
        assert!(tw.is_buffering(), "cursor stays in span mode permanently");
        // Further ticks change nothing.
        assert_eq!(tw.advance(), Tick::Complete);
        assert_eq!(tw.visible_text(), "before");
    }

    #[test]
    fn test_typewriter_scroll_every_tenth_unit() {
        let mut tw = Typewriter::new("abcdefghijklmnopqrst".to_string(), Pacing::default());
        let mut scroll_at = Vec::new();
        let mut unit = 0;
        while let Tick::Revealed { scroll, .. } = tw.advance() {
            unit += 1;
            if scroll {
                scroll_at.push(unit);
            }
        }
        assert_eq!(scroll_at, [10, 20]);
    }

    #[test]
    fn test_typewriter_span_counts_as_one_unit_for_scroll() {
        // 9 plain units, then a span: the span is the 10th visible unit.
        let mut tw = Typewriter::new("abcdefghi<strong>".to_string(), Pacing::default());
        let mut last_scroll = false;
        while let Tick::Revealed { scroll, .. } = tw.advance() {
            last_scroll = scroll;
        }
        assert_eq!(tw.units_revealed(), 10);
        assert!(last_scroll);
    }

    #[test]
    fn test_typewriter_handles_grapheme_clusters() {
        let payload = "day \u{1F334}!";
        let snapshots = collect_snapshots(payload);
        assert_eq!(snapshots.last().map(String::as_str), Some(payload));
        // The emoji is revealed whole, never as a partial code point.
        assert!(snapshots.contains(&"day \u{1F334}".to_string()));
    }

    #[test]
    fn test_typewriter_bare_close_delimiter_is_plain_text() {
        let snapshots = collect_snapshots("a>b");
        assert_eq!(snapshots, ["a", "a>", "a>b"]);
    }

    // --------------------------------------------------------
    // Pacing Tests
    // --------------------------------------------------------

    #[test]
    fn test_pace_class_of() {
        assert_eq!(PaceClass::of(' '), PaceClass::Whitespace);
        assert_eq!(PaceClass::of('\n'), PaceClass::Whitespace);
        assert_eq!(PaceClass::of('\u{00A0}'), PaceClass::Whitespace);
        assert_eq!(PaceClass::of('.'), PaceClass::SentenceEnd);
        assert_eq!(PaceClass::of('!'), PaceClass::SentenceEnd);
        assert_eq!(PaceClass::of('?'), PaceClass::SentenceEnd);
        assert_eq!(PaceClass::of(','), PaceClass::Clause);
        assert_eq!(PaceClass::of('x'), PaceClass::Plain);
        assert_eq!(PaceClass::of('\u{65E5}'), PaceClass::Plain);
    }

    #[test]
    fn test_pacing_default_ordering() {
        let pacing = Pacing::default();
        let classes = [
            PaceClass::Whitespace,
            PaceClass::Clause,
            PaceClass::Plain,
            PaceClass::SentenceEnd,
        ];
        for class in classes {
            assert!(pacing.delay_for(PaceClass::Whitespace) <= pacing.delay_for(class));
            assert!(pacing.delay_for(class) <= pacing.delay_for(PaceClass::SentenceEnd));
        }
    }

    #[test]
    fn test_pacing_delay_after_uses_first_scalar() {
        let pacing = Pacing::default();
        assert_eq!(pacing.delay_after("."), ms(pacing.sentence_ms));
        assert_eq!(pacing.delay_after(" "), ms(pacing.whitespace_ms));
        assert_eq!(pacing.delay_after(""), ms(pacing.plain_ms));
    }

    // --------------------------------------------------------
    // Fade Tests
    // --------------------------------------------------------

    #[test]
    fn test_fade_in_endpoints() {
        let mut fade = Fade::fade_in(100);
        assert_eq!(fade.direction(), FadeDirection::In);
        assert_eq!(fade.progress(), 0.0);
        fade.advance(ms(100));
        assert!(fade.is_complete());
        assert!((fade.progress() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_fade_out_endpoints() {
        let mut fade = Fade::fade_out(100);
        assert_eq!(fade.direction(), FadeDirection::Out);
        assert_eq!(fade.progress(), 1.0);
        fade.advance(ms(100));
        assert!(fade.is_complete());
        assert!(fade.progress() < 0.001);
    }

    #[test]
    fn test_fade_progress_monotone() {
        let mut fade = Fade::fade_in(100);
        let mut prev = fade.progress();
        for _ in 0..10 {
            fade.advance(ms(10));
            let p = fade.progress();
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn test_fade_zero_duration_complete_immediately() {
        let fade = Fade::fade_in(0);
        assert!(fade.is_complete());
        assert_eq!(fade.progress(), 1.0);
    }

    #[test]
    fn test_fade_reset() {
        let mut fade = Fade::fade_out(50);
        fade.advance(ms(50));
        assert!(fade.is_complete());
        fade.reset();
        assert!(!fade.is_complete());
        assert_eq!(fade.progress(), 1.0);
    }

    #[test]
    fn test_ease_in_out_bounds() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(1.0) - 1.0).abs() < 0.001);
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.001);
    }

    // --------------------------------------------------------
    // Spinner Tests
    // --------------------------------------------------------

    #[test]
    fn test_spinner_typing_frames() {
        let spinner = Spinner::typing();
        assert_eq!(spinner.frame_count(), 3);
        assert_eq!(spinner.current(), "\u{00B7}");
    }

    #[test]
    fn test_spinner_advance_steps_frames() {
        let mut spinner = Spinner::typing();
        spinner.advance(spinner.interval());
        assert_eq!(spinner.current_index(), 1);
        spinner.advance(spinner.interval() * 2);
        assert_eq!(spinner.current_index(), 0, "cycle wraps around");
    }

    #[test]
    fn test_spinner_subinterval_advance_accumulates() {
        let mut spinner = Spinner::typing();
        let half = spinner.interval() / 2;
        spinner.advance(half);
        assert_eq!(spinner.current_index(), 0);
        spinner.advance(half);
        assert_eq!(spinner.current_index(), 1);
    }
}
