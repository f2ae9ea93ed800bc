//! Chat surface collaborators.
//!
//! The animation drivers never touch a concrete UI. They talk to two small
//! seams: [`TextTarget`], a handle to one message body that accepts full
//! content overwrites, and [`ChatSurface`], the container the widget appends
//! to, removes from, and scrolls. [`Transcript`] is the in-memory reference
//! implementation used by the demo binary and the tests; a real UI layer
//! implements the same traits over its own node tree.
//!
//! Surface operations are infallible from the caller's point of view: a
//! lookup that misses (say, a sink write racing a node removal) logs a
//! diagnostic and does nothing. A chat turn never hard-fails over a missing
//! collaborator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sia_core::animation::{Fade, Spinner};
use tracing::{debug, warn};

use crate::error::{ChatError, Result};
use crate::sources::SourceRef;

/// Stable handle to a surface node.
pub type NodeId = u64;

/// Entrance fade applied to appended messages and thinking steps.
const ENTRANCE_FADE_MS: u64 = 300;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A message body that supports "replace visible content" semantics.
///
/// The typewriter re-renders its full accumulated snapshot on every tick, so
/// implementations must overwrite, not append - that is what keeps completed
/// markup spans correct while the rest of the payload is still arriving.
pub trait TextTarget: Send + Sync {
    /// Replaces the target's visible content with `text`.
    fn set_content(&self, text: &str);
}

/// The container collaborator the widget renders into.
pub trait ChatSurface: Send + Sync {
    /// Appends a finished message and returns its handle.
    fn append_message(&self, role: Role, text: &str) -> NodeId;

    /// Appends an empty assistant message and returns its handle together
    /// with a sink for streaming its body.
    fn begin_assistant_message(&self) -> (NodeId, Box<dyn TextTarget>);

    /// Appends the three-dot typing indicator.
    fn append_typing_indicator(&self) -> NodeId;

    /// Appends an empty thinking panel.
    fn append_thinking_panel(&self) -> NodeId;

    /// Appends one thinking step to an existing panel.
    fn push_thinking_step(&self, panel: NodeId, text: &str);

    /// Removes a node. Removing an already-removed node is a no-op.
    fn remove(&self, id: NodeId);

    /// Requests that the surface scroll to its end.
    fn scroll_to_end(&self);

    /// Attaches feedback controls to a finished assistant message.
    fn attach_feedback(&self, id: NodeId);

    /// Attaches a citation list to a finished assistant message.
    fn attach_sources(&self, id: NodeId, sources: &[SourceRef]);
}

/// Feedback choice on an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackChoice {
    Helpful,
    NotHelpful,
}

/// Thumbs up / thumbs down controls under a finished assistant message.
#[derive(Debug, Clone)]
pub struct FeedbackControls {
    /// The choice the user made, if any. Once set it stays set.
    pub selected: Option<FeedbackChoice>,
    pub entrance: Fade,
}

impl FeedbackControls {
    fn new() -> Self {
        Self {
            selected: None,
            entrance: Fade::fade_in(ENTRANCE_FADE_MS),
        }
    }
}

/// A chat message node.
#[derive(Debug, Clone)]
pub struct MessageNode {
    pub role: Role,
    pub text: String,
    pub feedback: Option<FeedbackControls>,
    pub sources: Vec<SourceRef>,
    pub entrance: Fade,
}

/// One revealed thinking step.
#[derive(Debug, Clone)]
pub struct StepNode {
    pub text: String,
    pub entrance: Fade,
}

/// The thinking panel shown while a staged reply is "reasoning".
#[derive(Debug, Clone, Default)]
pub struct PanelNode {
    pub steps: Vec<StepNode>,
}

/// Node payload variants.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Message(MessageNode),
    TypingIndicator(Spinner),
    ThinkingPanel(PanelNode),
}

/// One node in the transcript.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

#[derive(Default)]
struct TranscriptInner {
    nodes: Vec<Node>,
    scroll_requests: u64,
}

impl TranscriptInner {
    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(ChatError::NodeNotFound { id })
    }

    fn message_mut(&mut self, id: NodeId) -> Result<&mut MessageNode> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Message(msg) => Ok(msg),
            _ => Err(ChatError::NodeKindMismatch {
                id,
                expected: "message",
            }),
        }
    }
}

/// In-memory chat surface.
///
/// Cheap to clone; clones share the same node list. The scroll collaborator
/// is modeled as a counter so tests can assert the scroll cadence.
#[derive(Clone, Default)]
pub struct Transcript {
    inner: Arc<Mutex<TranscriptInner>>,
    next_id: Arc<AtomicU64>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&self) -> NodeId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn push_node(&self, kind: NodeKind) -> NodeId {
        let id = self.alloc_id();
        let mut inner = self.inner.lock().unwrap();
        inner.nodes.push(Node { id, kind });
        id
    }

    /// Returns a copy of the current node list, in append order.
    pub fn snapshot(&self) -> Vec<Node> {
        self.inner.lock().unwrap().nodes.clone()
    }

    /// Returns a copy of one node.
    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.inner
            .lock()
            .unwrap()
            .nodes
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    /// Returns all message nodes with their handles.
    pub fn messages(&self) -> Vec<(NodeId, MessageNode)> {
        self.snapshot()
            .into_iter()
            .filter_map(|n| match n.kind {
                NodeKind::Message(msg) => Some((n.id, msg)),
                _ => None,
            })
            .collect()
    }

    /// Returns the body text of a message node.
    pub fn message_text(&self, id: NodeId) -> Option<String> {
        match self.node(id)?.kind {
            NodeKind::Message(msg) => Some(msg.text),
            _ => None,
        }
    }

    /// Returns the handles of live thinking panels.
    pub fn panels(&self) -> Vec<NodeId> {
        self.snapshot()
            .into_iter()
            .filter(|n| matches!(n.kind, NodeKind::ThinkingPanel(_)))
            .map(|n| n.id)
            .collect()
    }

    /// Returns the step texts of a thinking panel.
    pub fn panel_steps(&self, id: NodeId) -> Option<Vec<String>> {
        match self.node(id)?.kind {
            NodeKind::ThinkingPanel(panel) => {
                Some(panel.steps.into_iter().map(|s| s.text).collect())
            }
            _ => None,
        }
    }

    /// Returns how many times the surface was asked to scroll.
    pub fn scroll_requests(&self) -> u64 {
        self.inner.lock().unwrap().scroll_requests
    }

    /// Records a feedback press. The first press wins; the other button is
    /// disabled from then on.
    pub fn press_feedback(&self, id: NodeId, choice: FeedbackChoice) {
        let mut inner = self.inner.lock().unwrap();
        let controls = match inner.message_mut(id) {
            Ok(msg) => msg.feedback.as_mut(),
            Err(err) => {
                warn!(%err, "dropping feedback press");
                return;
            }
        };
        match controls {
            Some(controls) if controls.selected.is_none() => {
                controls.selected = Some(choice);
                debug!(?choice, "feedback recorded");
            }
            Some(_) => debug!("feedback already recorded, ignoring press"),
            None => warn!(id, "message has no feedback controls"),
        }
    }

    /// Advances every entrance fade and the typing indicator by `dt`.
    pub fn advance_animations(&self, dt: Duration) {
        let mut inner = self.inner.lock().unwrap();
        for node in &mut inner.nodes {
            match &mut node.kind {
                NodeKind::Message(msg) => {
                    msg.entrance.advance(dt);
                    if let Some(feedback) = &mut msg.feedback {
                        feedback.entrance.advance(dt);
                    }
                }
                NodeKind::TypingIndicator(spinner) => spinner.advance(dt),
                NodeKind::ThinkingPanel(panel) => {
                    for step in &mut panel.steps {
                        step.entrance.advance(dt);
                    }
                }
            }
        }
    }

    /// Renders a plain-text view of the transcript, one line per element.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for node in self.snapshot() {
            match node.kind {
                NodeKind::Message(msg) => {
                    let who = match msg.role {
                        Role::User => "you",
                        Role::Assistant => "sia",
                    };
                    out.push_str(&format!("[{who}] {}\n", msg.text));
                    if !msg.sources.is_empty() {
                        let titles: Vec<&str> =
                            msg.sources.iter().map(|s| s.title.as_str()).collect();
                        out.push_str(&format!("      sources: {}\n", titles.join("; ")));
                    }
                }
                NodeKind::TypingIndicator(spinner) => {
                    out.push_str(&format!("[sia] {}\n", spinner.current()));
                }
                NodeKind::ThinkingPanel(panel) => {
                    for step in panel.steps {
                        out.push_str(&format!("  ... {}\n", step.text));
                    }
                }
            }
        }
        out
    }
}

/// Sink handle for one message body.
struct MessageSink {
    inner: Arc<Mutex<TranscriptInner>>,
    id: NodeId,
}

impl TextTarget for MessageSink {
    fn set_content(&self, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        match inner.message_mut(self.id) {
            Ok(msg) => text.clone_into(&mut msg.text),
            Err(err) => warn!(%err, "dropping sink write"),
        }
    }
}

impl ChatSurface for Transcript {
    fn append_message(&self, role: Role, text: &str) -> NodeId {
        self.push_node(NodeKind::Message(MessageNode {
            role,
            text: text.to_string(),
            feedback: None,
            sources: Vec::new(),
            entrance: Fade::fade_in(ENTRANCE_FADE_MS),
        }))
    }

    fn begin_assistant_message(&self) -> (NodeId, Box<dyn TextTarget>) {
        let id = self.append_message(Role::Assistant, "");
        let sink = MessageSink {
            inner: Arc::clone(&self.inner),
            id,
        };
        (id, Box::new(sink))
    }

    fn append_typing_indicator(&self) -> NodeId {
        self.push_node(NodeKind::TypingIndicator(Spinner::typing()))
    }

    fn append_thinking_panel(&self) -> NodeId {
        self.push_node(NodeKind::ThinkingPanel(PanelNode::default()))
    }

    fn push_thinking_step(&self, panel: NodeId, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        let node = match inner.node_mut(panel) {
            Ok(node) => node,
            Err(err) => {
                warn!(%err, "dropping thinking step");
                return;
            }
        };
        match &mut node.kind {
            NodeKind::ThinkingPanel(panel_node) => {
                panel_node.steps.push(StepNode {
                    text: text.to_string(),
                    entrance: Fade::fade_in(ENTRANCE_FADE_MS),
                });
            }
            _ => warn!(panel, "node is not a thinking panel"),
        }
    }

    fn remove(&self, id: NodeId) {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.nodes.len();
        inner.nodes.retain(|n| n.id != id);
        if inner.nodes.len() == before {
            debug!(id, "remove of absent node ignored");
        }
    }

    fn scroll_to_end(&self) {
        self.inner.lock().unwrap().scroll_requests += 1;
    }

    fn attach_feedback(&self, id: NodeId) {
        let mut inner = self.inner.lock().unwrap();
        match inner.message_mut(id) {
            Ok(msg) => msg.feedback = Some(FeedbackControls::new()),
            Err(err) => warn!(%err, "dropping feedback attach"),
        }
    }

    fn attach_sources(&self, id: NodeId, sources: &[SourceRef]) {
        let mut inner = self.inner.lock().unwrap();
        match inner.message_mut(id) {
            Ok(msg) => sources.clone_into(&mut msg.sources),
            Err(err) => warn!(%err, "dropping sources attach"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_overwrites_message_body() {
        let transcript = Transcript::new();
        let (id, sink) = transcript.begin_assistant_message();
        sink.set_content("a");
        sink.set_content("ab");
        assert_eq!(transcript.message_text(id).as_deref(), Some("ab"));
    }

    #[test]
    fn test_sink_write_after_removal_is_silent() {
        let transcript = Transcript::new();
        let (id, sink) = transcript.begin_assistant_message();
        transcript.remove(id);
        sink.set_content("late");
        assert!(transcript.messages().is_empty());
    }

    #[test]
    fn test_push_step_to_missing_panel_is_silent() {
        let transcript = Transcript::new();
        transcript.push_thinking_step(99, "step");
        assert!(transcript.panels().is_empty());
    }

    #[test]
    fn test_feedback_first_press_wins() {
        let transcript = Transcript::new();
        let (id, _sink) = transcript.begin_assistant_message();
        transcript.attach_feedback(id);
        transcript.press_feedback(id, FeedbackChoice::Helpful);
        transcript.press_feedback(id, FeedbackChoice::NotHelpful);
        let (_, msg) = transcript.messages().pop().unwrap();
        assert_eq!(msg.feedback.unwrap().selected, Some(FeedbackChoice::Helpful));
    }

    #[test]
    fn test_advance_animations_completes_entrances() {
        let transcript = Transcript::new();
        let id = transcript.append_message(Role::User, "hi");
        transcript.advance_animations(Duration::from_millis(ENTRANCE_FADE_MS));
        match transcript.node(id).unwrap().kind {
            NodeKind::Message(msg) => assert!(msg.entrance.is_complete()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_scroll_requests_counted() {
        let transcript = Transcript::new();
        transcript.scroll_to_end();
        transcript.scroll_to_end();
        assert_eq!(transcript.scroll_requests(), 2);
    }
}
