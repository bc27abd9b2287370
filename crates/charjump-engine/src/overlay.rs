//! Ledger of the decorations one session has put on screen.

use std::sync::Arc;

use charjump_common::ViewId;

use crate::host::{FeedbackSink, LabelOverlay};
use crate::matcher::MatchSet;

/// Applies highlights and labels through a [`FeedbackSink`] and remembers
/// which views it touched. Everything still shown is cleared on drop, so a
/// session releases its decorations on every exit path, task abort included.
pub struct Overlay {
    sink: Arc<dyn FeedbackSink>,
    highlighted: Vec<ViewId>,
    labelled: Vec<ViewId>,
}

impl Overlay {
    pub fn new(sink: Arc<dyn FeedbackSink>) -> Self {
        Self {
            sink,
            highlighted: Vec::new(),
            labelled: Vec::new(),
        }
    }

    /// Show `matches`, replacing earlier highlights. Views that no longer
    /// have matches are cleared.
    pub fn highlight(&mut self, matches: &MatchSet) {
        let mut shown = Vec::new();
        for (view, ranges) in matches.iter() {
            if !ranges.is_empty() {
                self.sink.set_highlights(view, ranges);
                shown.push(view);
            }
        }
        for view in self.highlighted.drain(..) {
            if !shown.contains(&view) {
                self.sink.clear_highlights(view);
            }
        }
        self.highlighted = shown;
    }

    /// Clear the labels shown so far, then show `labels`.
    pub fn show_labels(&mut self, labels: &[(ViewId, Vec<LabelOverlay>)]) {
        self.clear_labels();
        for (view, overlays) in labels {
            if !overlays.is_empty() {
                self.sink.set_labels(*view, overlays);
                self.labelled.push(*view);
            }
        }
    }

    pub fn clear_highlights(&mut self) {
        for view in self.highlighted.drain(..) {
            self.sink.clear_highlights(view);
        }
    }

    pub fn clear_labels(&mut self) {
        for view in self.labelled.drain(..) {
            self.sink.clear_labels(view);
        }
    }

    pub fn clear(&mut self) {
        self.clear_highlights();
        self.clear_labels();
    }

    pub fn is_clear(&self) -> bool {
        self.highlighted.is_empty() && self.labelled.is_empty()
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchSet;
    use crate::testing::RecordingSink;
    use charjump_common::{Position, Range};

    fn range(col: u32) -> Range {
        Range::new(Position::new(0, col), Position::new(0, col + 1))
    }

    #[test]
    fn highlight_replaces_and_clears_emptied_views() {
        let sink = Arc::new(RecordingSink::default());
        let mut overlay = Overlay::new(sink.clone());
        let (a, b) = (ViewId(1), ViewId(2));

        overlay.highlight(&MatchSet::from_entries(vec![
            (a, vec![range(0)]),
            (b, vec![range(3)]),
        ]));
        assert_eq!(sink.highlights(a), vec![range(0)]);
        assert_eq!(sink.highlights(b), vec![range(3)]);

        overlay.highlight(&MatchSet::from_entries(vec![
            (a, vec![range(5)]),
            (b, Vec::new()),
        ]));
        assert_eq!(sink.highlights(a), vec![range(5)]);
        assert!(sink.highlights(b).is_empty());
    }

    #[test]
    fn drop_clears_everything() {
        let sink = Arc::new(RecordingSink::default());
        {
            let mut overlay = Overlay::new(sink.clone());
            overlay.highlight(&MatchSet::from_entries(vec![(ViewId(1), vec![range(0)])]));
            overlay.show_labels(&[(
                ViewId(1),
                vec![LabelOverlay {
                    range: range(0),
                    text: "a".into(),
                }],
            )]);
            assert!(sink.has_decorations());
        }
        assert!(!sink.has_decorations());
    }

    #[test]
    fn show_labels_clears_previous_labels() {
        let sink = Arc::new(RecordingSink::default());
        let mut overlay = Overlay::new(sink.clone());
        let label = |text: &str| LabelOverlay {
            range: range(0),
            text: text.into(),
        };

        overlay.show_labels(&[(ViewId(1), vec![label("a")]), (ViewId(2), vec![label("b")])]);
        overlay.show_labels(&[(ViewId(2), vec![label("c")])]);

        assert!(sink.labels(ViewId(1)).is_empty());
        assert_eq!(sink.labels(ViewId(2)), vec![label("c")]);

        overlay.clear();
        assert!(overlay.is_clear());
        assert!(!sink.has_decorations());
    }
}
