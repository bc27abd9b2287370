use std::sync::Arc;
use std::time::Duration;

use charjump_common::{EngineError, Range, ViewId};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::debounce::DebounceTimer;
use crate::host::{FeedbackSink, InputEvent, InputStream, LabelOverlay};
use crate::labels::{generate, label_length, LabelAlphabet};
use crate::matcher::MatchSet;
use crate::overlay::Overlay;

/// A match paired with the label that selects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub view: ViewId,
    pub range: Range,
}

/// Give every match its own label, in match order.
///
/// All labels share the shortest length that fits the match count, so none
/// is a prefix of another.
pub fn assign_labels(
    matches: &MatchSet,
    alphabet: &LabelAlphabet,
) -> Result<Vec<Candidate>, EngineError> {
    let length = label_length(matches.total(), alphabet)?;
    let labels = generate(length, alphabet)?;
    Ok(matches
        .matches()
        .zip(labels)
        .map(|(m, label)| Candidate {
            label,
            view: m.view,
            range: m.range,
        })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPhase {
    AwaitingLabel,
    Narrowing,
    Resolved,
    Exhausted,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    Resolved(Candidate),
    /// Input ended with no candidate matching the typed label.
    Exhausted,
    /// Input ended with several candidates left. Never auto-picked.
    Abandoned { remaining: usize },
    Cancelled,
}

impl LabelOutcome {
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            LabelOutcome::Resolved(candidate) => Some(candidate),
            _ => None,
        }
    }
}

enum Step {
    Cancelled,
    Input(InputEvent),
    Idle,
}

/// Stage 2: label entry and prefix narrowing.
pub struct DisambiguationSession {
    candidates: Vec<Candidate>,
    label_length: usize,
    overlay: Overlay,
    idle: Option<DebounceTimer>,
    typed: String,
    phase: LabelPhase,
}

impl DisambiguationSession {
    /// Label `matches`. Fails with `InvalidCount` for an empty set.
    ///
    /// With `idle_timeout`, label entry also ends after that long without a
    /// keystroke, exactly as if the prompt had been accepted.
    pub fn new(
        matches: &MatchSet,
        alphabet: &LabelAlphabet,
        feedback: Arc<dyn FeedbackSink>,
        idle_timeout: Option<Duration>,
    ) -> Result<Self, EngineError> {
        let candidates = assign_labels(matches, alphabet)?;
        let label_length = candidates
            .first()
            .map(|c| c.label.chars().count())
            .unwrap_or_default();
        Ok(Self {
            candidates,
            label_length,
            overlay: Overlay::new(feedback),
            idle: idle_timeout.map(DebounceTimer::new),
            typed: String::new(),
            phase: LabelPhase::AwaitingLabel,
        })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn label_length(&self) -> usize {
        self.label_length
    }

    pub fn phase(&self) -> LabelPhase {
        self.phase
    }

    /// Candidates whose label starts with `typed`, each with the part of its
    /// label still to be typed.
    pub fn narrow<'a>(&'a self, typed: &'a str) -> impl Iterator<Item = (&'a Candidate, &'a str)> {
        surviving(&self.candidates, typed)
    }

    /// Drive label entry until one candidate is left, the prompt ends, or
    /// `cancel` fires.
    ///
    /// Labels are cleared and the prompt is closed on every exit path.
    pub async fn run(
        &mut self,
        input: &mut dyn InputStream,
        cancel: &CancellationToken,
    ) -> LabelOutcome {
        self.phase = LabelPhase::AwaitingLabel;
        let outcome = self.drive(input, cancel).await;

        self.overlay.clear_labels();
        if let Some(idle) = &mut self.idle {
            idle.stop();
        }
        input.close();

        self.phase = match outcome {
            LabelOutcome::Resolved(_) => LabelPhase::Resolved,
            LabelOutcome::Exhausted => LabelPhase::Exhausted,
            LabelOutcome::Abandoned { .. } | LabelOutcome::Cancelled => LabelPhase::Aborted,
        };
        debug!(?outcome, "label entry finished");
        outcome
    }

    async fn drive(&mut self, input: &mut dyn InputStream, cancel: &CancellationToken) -> LabelOutcome {
        if let Some(candidate) = self.render(String::new()) {
            return LabelOutcome::Resolved(candidate);
        }

        loop {
            let step = tokio::select! {
                biased;
                _ = cancel.cancelled() => Step::Cancelled,
                event = input.next_event() => Step::Input(event),
                _ = idle_elapsed(&mut self.idle) => Step::Idle,
            };

            match step {
                Step::Cancelled => return LabelOutcome::Cancelled,
                Step::Input(InputEvent::Changed(typed)) => {
                    self.phase = LabelPhase::Narrowing;
                    if let Some(candidate) = self.render(typed) {
                        return LabelOutcome::Resolved(candidate);
                    }
                }
                Step::Input(InputEvent::Accepted | InputEvent::Dismissed) | Step::Idle => {
                    return self.unresolved();
                }
            }
        }
    }

    /// Show the labels still matching `typed`. Returns the candidate once it
    /// is the only one left.
    fn render(&mut self, typed: String) -> Option<Candidate> {
        let mut by_view: Vec<(ViewId, Vec<LabelOverlay>)> = Vec::new();
        let mut survivors = 0;
        let mut last = None;
        for (candidate, rest) in surviving(&self.candidates, &typed) {
            survivors += 1;
            last = Some(candidate);
            let overlay = LabelOverlay {
                range: candidate.range,
                text: rest.to_string(),
            };
            match by_view.last_mut() {
                Some((view, overlays)) if *view == candidate.view => overlays.push(overlay),
                _ => by_view.push((candidate.view, vec![overlay])),
            }
        }
        debug!(typed = %typed, survivors, "labels narrowed");

        let resolved = match (survivors, last) {
            (1, Some(candidate)) => Some(candidate.clone()),
            _ => None,
        };
        self.typed = typed;
        if resolved.is_some() {
            return resolved;
        }

        self.overlay.show_labels(&by_view);
        if let Some(idle) = &mut self.idle {
            idle.start();
        }
        None
    }

    fn unresolved(&self) -> LabelOutcome {
        match self.narrow(&self.typed).count() {
            0 => LabelOutcome::Exhausted,
            remaining => LabelOutcome::Abandoned { remaining },
        }
    }
}

fn surviving<'a>(
    candidates: &'a [Candidate],
    typed: &'a str,
) -> impl Iterator<Item = (&'a Candidate, &'a str)> {
    candidates
        .iter()
        .filter_map(move |c| c.label.strip_prefix(typed).map(|rest| (c, rest)))
}

async fn idle_elapsed(idle: &mut Option<DebounceTimer>) {
    match idle {
        Some(timer) => timer.elapsed().await,
        None => std::future::pending().await,
    }
}
