//! # Sia Chat
//!
//! Staged-disclosure chat widget built on the `sia-core` animation engine.
//!
//! The widget renders a simulated assistant conversation: user messages
//! appear immediately, assistant messages stream in character by character
//! with human-typing pacing, and staged replies are preceded by a
//! cancellable "thinking" timeline of intermediate reasoning steps.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       ChatWidget                         │
//! │   submit() ── catalog lookup ──┬── staged reply          │
//! │                                │      ThinkingController │
//! │                                │      (one live timeline)│
//! │                                └── direct reply          │
//! │                                       typing indicator   │
//! └────────────────┬─────────────────────────┬───────────────┘
//!                  │                         │
//!         stream::render            surface::ChatSurface
//!         (sia-core Typewriter       (Transcript, or a real
//!          on the timer wheel)        UI behind the traits)
//! ```
//!
//! The drivers in this crate own all scheduling; the state machines they
//! advance live in `sia-core` and are pure. Collaborator lookups that fail
//! are logged and dropped - a chat turn never hard-fails.

pub mod error;
pub mod message;
pub mod responses;
pub mod sources;
pub mod stream;
pub mod surface;
pub mod timeline;
pub mod widget;


// Re-export commonly used types for convenience
pub use error::{ChatError, Result};
pub use message::format_bold;
pub use responses::{CatalogRule, Reply, ResponseCatalog};
pub use sources::{SourceRef, source_refs};
pub use stream::render;
pub use surface::{
    ChatSurface, FeedbackChoice, Node, NodeId, NodeKind, Role, TextTarget, Transcript,
};
pub use timeline::{CANCEL_NOTICE, ThinkingController, TimelineHandle};
pub use widget::{ChatWidget, WidgetConfig};
