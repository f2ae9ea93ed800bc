//! Per-unit pacing for the typewriter reveal.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Pacing class of a revealed unit.
///
/// The delay scheduled *after* revealing a unit depends on what the unit
/// was: pauses cluster at natural reading boundaries, which is what makes
/// the reveal look typed rather than printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceClass {
    /// Any Unicode whitespace - shortest delay.
    Whitespace,
    /// Sentence-terminal punctuation (`.`, `!`, `?`) - longest delay.
    SentenceEnd,
    /// Comma - medium delay.
    Clause,
    /// Everything else.
    Plain,
}

impl PaceClass {
    /// Classifies a character.
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            Self::Whitespace
        } else {
            match c {
                '.' | '!' | '?' => Self::SentenceEnd,
                ',' => Self::Clause,
                _ => Self::Plain,
            }
        }
    }
}

/// Delay table for the typewriter, keyed on [`PaceClass`].
///
/// All values are in milliseconds. The defaults are the widget's canonical
/// cadence; deployments can override them through configuration.
///
/// Invariant expected by the reveal: whitespace carries the shortest delay
/// and sentence-terminal punctuation the longest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// Delay after whitespace.
    pub whitespace_ms: u64,
    /// Delay after sentence-terminal punctuation.
    pub sentence_ms: u64,
    /// Delay after a comma.
    pub clause_ms: u64,
    /// Delay after any other character.
    pub plain_ms: u64,
    /// Delay after flushing a complete markup span.
    pub markup_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            whitespace_ms: 1,
            sentence_ms: 5,
            clause_ms: 2,
            plain_ms: 3,
            markup_ms: 1,
        }
    }
}

impl Pacing {
    /// Returns the delay for a pacing class.
    pub fn delay_for(&self, class: PaceClass) -> Duration {
        let ms = match class {
            PaceClass::Whitespace => self.whitespace_ms,
            PaceClass::SentenceEnd => self.sentence_ms,
            PaceClass::Clause => self.clause_ms,
            PaceClass::Plain => self.plain_ms,
        };
        Duration::from_millis(ms)
    }

    /// Returns the delay to schedule after revealing `unit`.
    ///
    /// A unit is a grapheme cluster; classification looks at its first
    /// scalar value.
    pub fn delay_after(&self, unit: &str) -> Duration {
        match unit.chars().next() {
            Some(c) => self.delay_for(PaceClass::of(c)),
            None => self.delay_for(PaceClass::Plain),
        }
    }

    /// Returns the fixed delay scheduled after an atomic span reveal.
    #[inline]
    pub fn span_delay(&self) -> Duration {
        Duration::from_millis(self.markup_ms)
    }
}
