//! Frozen copy of the visible text, taken once per navigation.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use charjump_common::{Position, Range, ViewId};
use tracing::warn;

use crate::host::TextSource;

/// One visible range and the text it covered at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleSlice {
    pub range: Range,
    /// Character offset of `range.start` within the view.
    pub start_offset: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub view: ViewId,
    pub slices: Vec<VisibleSlice>,
}

/// Visible ranges of every open view, frozen for the whole navigation so
/// scrolling mid-navigation does not change the candidate universe.
#[derive(Clone)]
pub struct VisibleSnapshot {
    source: Arc<dyn TextSource>,
    views: Arc<[ViewSnapshot]>,
}

impl VisibleSnapshot {
    /// Read the visible ranges and their text from `source`.
    ///
    /// Ranges whose text or offset can no longer be read are skipped.
    pub fn capture(source: Arc<dyn TextSource>) -> Self {
        let mut seen = HashSet::new();
        let mut views = Vec::new();

        for view in source.views() {
            if !seen.insert(view) {
                continue;
            }
            let mut slices = Vec::new();
            for range in source.visible_ranges(view) {
                let text = source.text(view, range);
                let start_offset = source.offset_at(view, range.start);
                match (text, start_offset) {
                    (Some(text), Some(start_offset)) => slices.push(VisibleSlice {
                        range,
                        start_offset,
                        text,
                    }),
                    _ => warn!(%view, %range, "visible range unreadable, skipping"),
                }
            }
            views.push(ViewSnapshot { view, slices });
        }

        Self {
            source,
            views: views.into(),
        }
    }

    pub fn views(&self) -> &[ViewSnapshot] {
        &self.views
    }

    pub fn view_ids(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.views.iter().map(|v| v.view)
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Convert a character offset through the text source.
    pub fn position_at(&self, view: ViewId, offset: usize) -> Option<Position> {
        self.source.position_at(view, offset)
    }
}

impl fmt::Debug for VisibleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibleSnapshot")
            .field("views", &self.views)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;

    #[test]
    fn capture_freezes_visible_text() {
        let buffer = Arc::new(TextBuffer::new());
        let view = buffer.open("a.txt", "one\ntwo\nthree\nfour");
        buffer.set_visible_lines(view, 1, 2);

        let snapshot = VisibleSnapshot::capture(buffer.clone());
        assert_eq!(snapshot.views().len(), 1);
        let slice = &snapshot.views()[0].slices[0];
        assert_eq!(slice.text, "two\nthree");
        assert_eq!(slice.start_offset, 4);

        // Scrolling afterwards does not change the snapshot.
        buffer.set_visible_lines(view, 3, 1);
        assert_eq!(snapshot.views()[0].slices[0].text, "two\nthree");
    }

    #[test]
    fn capture_keeps_view_order() {
        let buffer = Arc::new(TextBuffer::new());
        let a = buffer.open("a", "alpha");
        let b = buffer.open("b", "beta");

        let snapshot = VisibleSnapshot::capture(buffer);
        let ids: Vec<_> = snapshot.view_ids().collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn capture_of_no_views_is_empty() {
        let snapshot = VisibleSnapshot::capture(Arc::new(TextBuffer::new()));
        assert!(snapshot.is_empty());
    }
}
