//! Collaborator seams: everything the engine needs from the editor it runs in.
//!
//! The engine never renders, reads files, or listens to keys itself. A host
//! implements these traits and hands them over bundled in a [`Host`].

use std::sync::Arc;

use async_trait::async_trait;
use charjump_common::{Position, Range, ViewId};

/// Read-only access to the text currently on screen.
///
/// Offsets are character offsets from the start of the view's text.
pub trait TextSource: Send + Sync {
    /// Open views, in presentation order.
    fn views(&self) -> Vec<ViewId>;

    /// Ranges of `view` that are currently rendered, top to bottom.
    fn visible_ranges(&self, view: ViewId) -> Vec<Range>;

    /// Text covered by `range`, or `None` if the view is gone.
    fn text(&self, view: ViewId, range: Range) -> Option<String>;

    fn offset_at(&self, view: ViewId, position: Position) -> Option<usize>;

    fn position_at(&self, view: ViewId, offset: usize) -> Option<Position>;
}

/// Text drawn over a match to identify it during label entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOverlay {
    pub range: Range,
    pub text: String,
}

/// Side-effect sink for match highlights and label overlays.
///
/// Each `set_*` call replaces whatever the engine previously showed in that
/// view for the same kind of decoration.
pub trait FeedbackSink: Send + Sync {
    fn set_highlights(&self, view: ViewId, ranges: &[Range]);
    fn clear_highlights(&self, view: ViewId);
    fn set_labels(&self, view: ViewId, labels: &[LabelOverlay]);
    fn clear_labels(&self, view: ViewId);
}

/// How the caret lands on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpMode {
    /// Collapse the selection onto the target.
    #[default]
    Move,
    /// Keep the selection anchor and move only the active end.
    Extend,
}

pub trait CursorMover: Send + Sync {
    /// Place the caret at `position` in `view` and scroll it into sight.
    fn jump_to(&self, view: ViewId, position: Position, mode: JumpMode);
}

/// One event from an interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The full current value of the prompt.
    Changed(String),
    Accepted,
    Dismissed,
}

/// Live value stream of one open prompt.
#[async_trait]
pub trait InputStream: Send {
    /// Wait for the next event. Returns [`InputEvent::Dismissed`] once the
    /// prompt is gone. Must be cancel-safe.
    async fn next_event(&mut self) -> InputEvent;

    /// Dismiss the prompt. Further events are not delivered.
    fn close(&mut self);
}

pub trait InputProvider: Send + Sync {
    fn open(&self, prompt: &str) -> Box<dyn InputStream>;
}

/// The four collaborators a navigation needs, shared between navigations.
#[derive(Clone)]
pub struct Host {
    pub text: Arc<dyn TextSource>,
    pub feedback: Arc<dyn FeedbackSink>,
    pub cursor: Arc<dyn CursorMover>,
    pub input: Arc<dyn InputProvider>,
}
