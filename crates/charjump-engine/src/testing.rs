//! Recording collaborators shared by the engine's unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use charjump_common::{Position, Range, ViewId};

use crate::buffer::TextBuffer;
use crate::host::{CursorMover, FeedbackSink, Host, JumpMode, LabelOverlay};
use crate::prompt::PromptChannel;

/// Keeps the decorations currently on screen, per view.
#[derive(Default)]
pub struct RecordingSink {
    highlights: Mutex<HashMap<ViewId, Vec<Range>>>,
    labels: Mutex<HashMap<ViewId, Vec<LabelOverlay>>>,
}

impl RecordingSink {
    pub fn highlights(&self, view: ViewId) -> Vec<Range> {
        self.highlights
            .lock()
            .unwrap()
            .get(&view)
            .cloned()
            .unwrap_or_default()
    }

    pub fn labels(&self, view: ViewId) -> Vec<LabelOverlay> {
        self.labels
            .lock()
            .unwrap()
            .get(&view)
            .cloned()
            .unwrap_or_default()
    }

    /// Label texts of `view`, in the order they were shown.
    pub fn label_texts(&self, view: ViewId) -> Vec<String> {
        self.labels(view).into_iter().map(|l| l.text).collect()
    }

    pub fn has_highlights(&self) -> bool {
        !self.highlights.lock().unwrap().is_empty()
    }

    pub fn has_decorations(&self) -> bool {
        self.has_highlights() || !self.labels.lock().unwrap().is_empty()
    }
}

impl FeedbackSink for RecordingSink {
    fn set_highlights(&self, view: ViewId, ranges: &[Range]) {
        self.highlights.lock().unwrap().insert(view, ranges.to_vec());
    }

    fn clear_highlights(&self, view: ViewId) {
        self.highlights.lock().unwrap().remove(&view);
    }

    fn set_labels(&self, view: ViewId, labels: &[LabelOverlay]) {
        self.labels.lock().unwrap().insert(view, labels.to_vec());
    }

    fn clear_labels(&self, view: ViewId) {
        self.labels.lock().unwrap().remove(&view);
    }
}

#[derive(Default)]
pub struct RecordingCursor {
    jumps: Mutex<Vec<(ViewId, Position, JumpMode)>>,
}

impl RecordingCursor {
    pub fn jumps(&self) -> Vec<(ViewId, Position, JumpMode)> {
        self.jumps.lock().unwrap().clone()
    }
}

impl CursorMover for RecordingCursor {
    fn jump_to(&self, view: ViewId, position: Position, mode: JumpMode) {
        self.jumps.lock().unwrap().push((view, position, mode));
    }
}

/// A host over in-memory views, with handles to every collaborator.
pub struct TestHost {
    pub buffer: Arc<TextBuffer>,
    pub sink: Arc<RecordingSink>,
    pub cursor: Arc<RecordingCursor>,
    pub prompts: Arc<PromptChannel>,
    pub views: Vec<ViewId>,
}

impl TestHost {
    pub fn new(texts: &[&str]) -> Self {
        let buffer = Arc::new(TextBuffer::new());
        let views = texts
            .iter()
            .enumerate()
            .map(|(i, text)| buffer.open(format!("file{i}.txt"), *text))
            .collect();
        Self {
            buffer,
            sink: Arc::new(RecordingSink::default()),
            cursor: Arc::new(RecordingCursor::default()),
            prompts: Arc::new(PromptChannel::new()),
            views,
        }
    }

    pub fn host(&self) -> Host {
        Host {
            text: self.buffer.clone(),
            feedback: self.sink.clone(),
            cursor: self.cursor.clone(),
            input: self.prompts.clone(),
        }
    }
}
