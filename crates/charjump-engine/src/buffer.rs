//! In-memory multi-view text source.
//!
//! Used by the terminal host and by the engine's own tests. Every view holds
//! its full text plus the ranges currently "on screen".

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{PoisonError, RwLock};

use charjump_common::{Position, Range, ViewId};

use crate::host::TextSource;

struct BufferView {
    id: ViewId,
    name: String,
    text: String,
    /// Char offset of the first character of every line.
    line_starts: Vec<usize>,
    char_len: usize,
    visible: Vec<Range>,
}

impl BufferView {
    fn new(id: ViewId, name: String, text: String) -> Self {
        let mut line_starts = vec![0];
        let mut char_len = 0;
        for (i, ch) in text.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
            char_len = i + 1;
        }
        let mut view = Self {
            id,
            name,
            text,
            line_starts,
            char_len,
            visible: Vec::new(),
        };
        view.visible = view.lines_range(0, view.line_count()).into_iter().collect();
        view
    }

    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Characters on `line`, excluding its newline.
    fn line_len(&self, line: usize) -> usize {
        let start = self.line_starts[line];
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.char_len,
        };
        end - start
    }

    fn lines_range(&self, first: usize, count: usize) -> Option<Range> {
        if count == 0 || first >= self.line_count() {
            return None;
        }
        let last = (first + count).min(self.line_count()) - 1;
        Some(Range::new(
            Position::new(first as u32, 0),
            Position::new(last as u32, self.line_len(last) as u32),
        ))
    }

    fn offset_at(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        if line >= self.line_count() {
            return None;
        }
        let column = position.column as usize;
        if column > self.line_len(line) {
            return None;
        }
        Some(self.line_starts[line] + column)
    }

    fn position_at(&self, offset: usize) -> Option<Position> {
        if offset > self.char_len {
            return None;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Some(Position::new(
            line as u32,
            (offset - self.line_starts[line]) as u32,
        ))
    }
}

/// Thread-safe collection of named in-memory views.
pub struct TextBuffer {
    views: RwLock<Vec<BufferView>>,
    next_id: AtomicU32,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            views: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Add a view whose whole text is visible.
    pub fn open(&self, name: impl Into<String>, text: impl Into<String>) -> ViewId {
        let id = ViewId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let view = BufferView::new(id, name.into(), text.into());
        self.views
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(view);
        id
    }

    /// Replace the visible ranges of `view`. Returns `false` for an unknown view.
    pub fn set_visible(&self, view: ViewId, ranges: Vec<Range>) -> bool {
        let mut views = self.views.write().unwrap_or_else(PoisonError::into_inner);
        match views.iter_mut().find(|v| v.id == view) {
            Some(v) => {
                v.visible = ranges;
                true
            }
            None => false,
        }
    }

    /// Show `count` whole lines starting at the 0-based line `first`.
    ///
    /// A window past the end of the text leaves nothing visible.
    pub fn set_visible_lines(&self, view: ViewId, first: usize, count: usize) -> bool {
        let mut views = self.views.write().unwrap_or_else(PoisonError::into_inner);
        match views.iter_mut().find(|v| v.id == view) {
            Some(v) => {
                v.visible = v.lines_range(first, count).into_iter().collect();
                true
            }
            None => false,
        }
    }

    pub fn name(&self, view: ViewId) -> Option<String> {
        self.with_view(view, |v| v.name.clone())
    }

    fn with_view<T>(&self, view: ViewId, f: impl FnOnce(&BufferView) -> T) -> Option<T> {
        let views = self.views.read().unwrap_or_else(PoisonError::into_inner);
        views.iter().find(|v| v.id == view).map(f)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for TextBuffer {
    fn views(&self) -> Vec<ViewId> {
        let views = self.views.read().unwrap_or_else(PoisonError::into_inner);
        views.iter().map(|v| v.id).collect()
    }

    fn visible_ranges(&self, view: ViewId) -> Vec<Range> {
        self.with_view(view, |v| v.visible.clone())
            .unwrap_or_default()
    }

    fn text(&self, view: ViewId, range: Range) -> Option<String> {
        self.with_view(view, |v| {
            let start = v.offset_at(range.start)?;
            let end = v.offset_at(range.end)?;
            Some(v.text.chars().skip(start).take(end.checked_sub(start)?).collect())
        })
        .flatten()
    }

    fn offset_at(&self, view: ViewId, position: Position) -> Option<usize> {
        self.with_view(view, |v| v.offset_at(position)).flatten()
    }

    fn position_at(&self, view: ViewId, offset: usize) -> Option<Position> {
        self.with_view(view, |v| v.position_at(offset)).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_range_has_no_text() {
        let buffer = TextBuffer::new();
        let view = buffer.open("a", "abcdef");
        let reversed = Range {
            start: Position::new(0, 4),
            end: Position::new(0, 1),
        };
        assert_eq!(buffer.text(view, reversed), None);
    }

    #[test]
    fn whole_text_is_visible_after_open() {
        let buffer = TextBuffer::new();
        let view = buffer.open("a", "ab\ncde");
        assert_eq!(
            buffer.visible_ranges(view),
            vec![Range::new(Position::new(0, 0), Position::new(1, 3))]
        );
    }

    #[test]
    fn offsets_and_positions_agree() {
        let buffer = TextBuffer::new();
        let view = buffer.open("a", "ab\ncde\n\nf");
        for offset in 0..=9 {
            let pos = buffer.position_at(view, offset).unwrap();
            assert_eq!(buffer.offset_at(view, pos), Some(offset));
        }
        assert_eq!(buffer.position_at(view, 4), Some(Position::new(1, 1)));
        assert_eq!(buffer.position_at(view, 7), Some(Position::new(2, 0)));
        assert_eq!(buffer.position_at(view, 10), None);
    }

    #[test]
    fn columns_count_characters() {
        let buffer = TextBuffer::new();
        let view = buffer.open("a", "héllo wörld");
        let range = Range::new(Position::new(0, 6), Position::new(0, 11));
        assert_eq!(buffer.text(view, range).as_deref(), Some("wörld"));
    }

    #[test]
    fn column_past_line_end_is_rejected() {
        let buffer = TextBuffer::new();
        let view = buffer.open("a", "ab\ncd");
        assert_eq!(buffer.offset_at(view, Position::new(0, 3)), None);
        assert_eq!(buffer.offset_at(view, Position::new(5, 0)), None);
    }

    #[test]
    fn visible_window_is_clamped() {
        let buffer = TextBuffer::new();
        let view = buffer.open("a", "l0\nl1\nl2");
        assert!(buffer.set_visible_lines(view, 1, 10));
        assert_eq!(
            buffer.visible_ranges(view),
            vec![Range::new(Position::new(1, 0), Position::new(2, 2))]
        );

        buffer.set_visible_lines(view, 5, 10);
        assert!(buffer.visible_ranges(view).is_empty());
    }

    #[test]
    fn unknown_view_is_empty() {
        let buffer = TextBuffer::new();
        assert!(buffer.visible_ranges(ViewId(42)).is_empty());
        assert!(!buffer.set_visible_lines(ViewId(42), 0, 1));
        assert_eq!(buffer.name(ViewId(42)), None);
    }

    #[test]
    fn view_ids_are_unique() {
        let buffer = TextBuffer::new();
        let a = buffer.open("a", "");
        let b = buffer.open("b", "");
        assert_ne!(a, b);
        assert_eq!(buffer.views(), vec![a, b]);
        assert_eq!(buffer.name(b).as_deref(), Some("b"));
    }
}
