use charjump_common::{EngineError, Range};
use regex::{Regex, RegexBuilder};
use tokio::task::JoinSet;
use tracing::warn;

use super::types::MatchSet;
use crate::snapshot::{ViewSnapshot, VisibleSnapshot};

/// A compiled search pattern.
///
/// Patterns are regular expressions matched case-insensitively. The empty
/// pattern is valid and matches nothing.
#[derive(Debug, Clone, Default)]
pub struct MatchFinder {
    regex: Option<Regex>,
}

impl MatchFinder {
    pub fn compile(pattern: &str) -> Result<Self, EngineError> {
        if pattern.is_empty() {
            return Ok(Self::default());
        }
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| EngineError::Pattern(e.to_string()))?;
        Ok(Self { regex: Some(regex) })
    }

    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Scan every view of the snapshot on the current thread.
    pub fn find(&self, snapshot: &VisibleSnapshot) -> MatchSet {
        MatchSet::from_entries(
            snapshot
                .views()
                .iter()
                .map(|view| (view.view, self.scan_view(snapshot, view)))
                .collect(),
        )
    }

    /// Scan views on the blocking pool, one task per view.
    ///
    /// Results are merged by view in snapshot order, so completion order
    /// never shows in the returned set.
    pub async fn find_concurrent(&self, snapshot: &VisibleSnapshot) -> MatchSet {
        if self.is_empty() || snapshot.views().len() < 2 {
            return self.find(snapshot);
        }

        let mut tasks = JoinSet::new();
        for index in 0..snapshot.views().len() {
            let finder = self.clone();
            let snapshot = snapshot.clone();
            tasks.spawn_blocking(move || {
                let ranges = finder.scan_view(&snapshot, &snapshot.views()[index]);
                (index, ranges)
            });
        }

        let mut scanned: Vec<Option<Vec<Range>>> = vec![None; snapshot.views().len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, ranges)) => scanned[index] = Some(ranges),
                Err(e) => warn!("view scan failed: {e}"),
            }
        }

        MatchSet::from_entries(
            snapshot
                .views()
                .iter()
                .zip(scanned)
                .map(|(view, ranges)| (view.view, ranges.unwrap_or_default()))
                .collect(),
        )
    }

    fn scan_view(&self, snapshot: &VisibleSnapshot, view: &ViewSnapshot) -> Vec<Range> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        let mut ranges = Vec::new();
        for slice in &view.slices {
            // Regex offsets are bytes; positions are characters.
            let mut chars_before = 0;
            let mut byte_cursor = 0;
            for found in regex.find_iter(&slice.text) {
                if found.start() == found.end() {
                    continue;
                }
                chars_before += slice.text[byte_cursor..found.start()].chars().count();
                byte_cursor = found.start();

                let start = slice.start_offset + chars_before;
                let end = start + found.as_str().chars().count();
                match (
                    snapshot.position_at(view.view, start),
                    snapshot.position_at(view.view, end),
                ) {
                    (Some(start), Some(end)) => ranges.push(Range::new(start, end)),
                    _ => warn!(view = %view.view, start, end, "match outside view, dropping"),
                }
            }
        }
        ranges
    }
}

/// Compile `pattern` and scan `snapshot` with it.
pub fn find(pattern: &str, snapshot: &VisibleSnapshot) -> Result<MatchSet, EngineError> {
    Ok(MatchFinder::compile(pattern)?.find(snapshot))
}
