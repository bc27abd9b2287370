//! Headless host collaborators that report to stderr.

use std::sync::Arc;

use charjump_common::{Position, Range, ViewId};
use charjump_engine::{CursorMover, FeedbackSink, JumpMode, LabelOverlay, TextBuffer};
use tracing::{debug, info};

/// Echoes highlights and labels so the user can see what to type next.
pub struct Terminal {
    buffer: Arc<TextBuffer>,
}

impl Terminal {
    pub fn new(buffer: Arc<TextBuffer>) -> Self {
        Self { buffer }
    }

    pub fn name(&self, view: ViewId) -> String {
        self.buffer
            .name(view)
            .unwrap_or_else(|| view.to_string())
    }
}

/// 1-based `line:column`, the way editors and compilers print locations.
pub fn location(position: Position) -> String {
    format!("{}:{}", position.line + 1, position.column + 1)
}

fn describe(range: Range) -> String {
    format!("{}-{}", location(range.start), location(range.end))
}

impl FeedbackSink for Terminal {
    fn set_highlights(&self, view: ViewId, ranges: &[Range]) {
        let spans: Vec<_> = ranges.iter().map(|r| describe(*r)).collect();
        eprintln!("{}: {} match(es) at {}", self.name(view), ranges.len(), spans.join(" "));
    }

    fn clear_highlights(&self, view: ViewId) {
        debug!(view = %self.name(view), "highlights cleared");
    }

    fn set_labels(&self, view: ViewId, labels: &[LabelOverlay]) {
        for label in labels {
            eprintln!("{}:{} [{}]", self.name(view), location(label.range.start), label.text);
        }
    }

    fn clear_labels(&self, view: ViewId) {
        debug!(view = %self.name(view), "labels cleared");
    }
}

impl CursorMover for Terminal {
    fn jump_to(&self, view: ViewId, position: Position, mode: JumpMode) {
        info!(view = %self.name(view), at = %location(position), ?mode, "cursor moved");
    }
}
