use charjump_common::{Range, ViewId};

use crate::snapshot::VisibleSnapshot;

/// One match, flattened out of a [`MatchSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub view: ViewId,
    pub range: Range,
}

/// Matches per view, in snapshot view order. Ranges within a view are in
/// text order and never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    entries: Vec<(ViewId, Vec<Range>)>,
}

impl MatchSet {
    pub(crate) fn from_entries(entries: Vec<(ViewId, Vec<Range>)>) -> Self {
        Self { entries }
    }

    /// A set with every snapshot view present and no matches.
    pub fn empty_for(snapshot: &VisibleSnapshot) -> Self {
        Self {
            entries: snapshot.view_ids().map(|v| (v, Vec::new())).collect(),
        }
    }

    /// Total matches across all views.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, ranges)| ranges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.entries.iter().map(|(view, _)| *view)
    }

    /// Matches in `view`; empty for views outside the set.
    pub fn ranges(&self, view: ViewId) -> &[Range] {
        self.entries
            .iter()
            .find(|(v, _)| *v == view)
            .map(|(_, ranges)| ranges.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &[Range])> + '_ {
        self.entries
            .iter()
            .map(|(view, ranges)| (*view, ranges.as_slice()))
    }

    /// Every match, view by view.
    pub fn matches(&self) -> impl Iterator<Item = Match> + '_ {
        self.entries.iter().flat_map(|(view, ranges)| {
            ranges.iter().map(move |range| Match {
                view: *view,
                range: *range,
            })
        })
    }

    /// The match, if there is exactly one across all views.
    pub fn single(&self) -> Option<Match> {
        let mut matches = self.matches();
        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}
