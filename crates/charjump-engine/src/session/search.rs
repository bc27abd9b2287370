use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::debounce::DebounceTimer;
use crate::host::{FeedbackSink, InputEvent, InputStream};
use crate::matcher::{MatchFinder, MatchSet};
use crate::overlay::Overlay;
use crate::snapshot::VisibleSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Finalizing,
    Done,
}

/// What ended the search stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEnd {
    /// Input paused for the debounce window.
    Committed,
    Accepted,
    Dismissed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Matches for the last pattern. Empty when cancelled.
    pub matches: MatchSet,
    pub pattern: String,
    pub end: SearchEnd,
}

enum Step {
    Cancelled,
    Input(InputEvent),
    Elapsed,
}

/// Stage 1: incremental search with live highlights.
pub struct SearchSession {
    snapshot: VisibleSnapshot,
    overlay: Overlay,
    timer: DebounceTimer,
    matches: MatchSet,
    pattern: String,
    phase: SearchPhase,
}

impl SearchSession {
    pub fn new(snapshot: VisibleSnapshot, feedback: Arc<dyn FeedbackSink>, window: Duration) -> Self {
        let matches = MatchSet::empty_for(&snapshot);
        Self {
            snapshot,
            overlay: Overlay::new(feedback),
            timer: DebounceTimer::new(window),
            matches,
            pattern: String::new(),
            phase: SearchPhase::Idle,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Drive the session until the debounce window passes after a keystroke
    /// with matches, the prompt ends, or `cancel` fires.
    ///
    /// Highlights are cleared and the prompt is closed before returning.
    pub async fn run(
        &mut self,
        input: &mut dyn InputStream,
        cancel: &CancellationToken,
    ) -> SearchResult {
        self.phase = SearchPhase::Searching;
        let end = self.drive(input, cancel).await;

        self.phase = SearchPhase::Finalizing;
        self.timer.stop();
        self.overlay.clear_highlights();
        input.close();
        self.phase = SearchPhase::Done;

        let matches = match end {
            SearchEnd::Cancelled => MatchSet::empty_for(&self.snapshot),
            _ => std::mem::take(&mut self.matches),
        };
        debug!(?end, matches = matches.total(), "search finished");
        SearchResult {
            matches,
            pattern: std::mem::take(&mut self.pattern),
            end,
        }
    }

    async fn drive(&mut self, input: &mut dyn InputStream, cancel: &CancellationToken) -> SearchEnd {
        if let Some(end) = self.apply(String::new(), cancel).await {
            return end;
        }

        loop {
            let step = tokio::select! {
                biased;
                _ = cancel.cancelled() => Step::Cancelled,
                event = input.next_event() => Step::Input(event),
                _ = self.timer.elapsed() => Step::Elapsed,
            };

            match step {
                Step::Cancelled => return SearchEnd::Cancelled,
                Step::Elapsed => return SearchEnd::Committed,
                Step::Input(InputEvent::Changed(pattern)) => {
                    if let Some(end) = self.apply(pattern, cancel).await {
                        return end;
                    }
                }
                Step::Input(InputEvent::Accepted) => return SearchEnd::Accepted,
                Step::Input(InputEvent::Dismissed) => return SearchEnd::Dismissed,
            }
        }
    }

    /// Re-run the search for a new input value. Returns `Some` only when
    /// cancelled mid-scan.
    async fn apply(&mut self, pattern: String, cancel: &CancellationToken) -> Option<SearchEnd> {
        self.timer.stop();

        let matches = match MatchFinder::compile(&pattern) {
            Ok(finder) => tokio::select! {
                biased;
                _ = cancel.cancelled() => return Some(SearchEnd::Cancelled),
                matches = finder.find_concurrent(&self.snapshot) => matches,
            },
            Err(e) => {
                warn!(%pattern, "{e}");
                MatchSet::empty_for(&self.snapshot)
            }
        };
        debug!(%pattern, matches = matches.total(), "search updated");

        self.overlay.highlight(&matches);
        if !matches.is_empty() {
            self.timer.start();
        }
        self.matches = matches;
        self.pattern = pattern;
        None
    }
}
