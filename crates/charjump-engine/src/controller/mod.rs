//! Navigation orchestration: search, then jump or label, then jump.
//!
//! At most one navigation is active. Triggering a new one cancels the
//! active navigation and waits for its task to finish (and with it all of
//! its sink cleanup) before the new one starts touching the sink.

use std::sync::Arc;

use charjump_common::{
    EventBus, NavigationEvent, NavigationId, OutcomeKind, Position, ViewId,
};
use charjump_config::CharJumpConfig;
use tokio::sync::{oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, info_span, warn, Instrument};

use crate::host::Host;
use crate::session::{DisambiguationSession, LabelOutcome, SearchEnd, SearchSession};
use crate::settings::NavigationSettings;
use crate::snapshot::VisibleSnapshot;

pub const SEARCH_PROMPT: &str = "Enter a string to search for";
pub const LABEL_PROMPT: &str = "Enter a label to jump to";

/// How a navigation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Jumped { view: ViewId, position: Position },
    NoMatches,
    /// Label entry ended without a unique candidate.
    Unresolved,
    Cancelled,
    Failed(String),
}

impl NavigationOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            NavigationOutcome::Jumped { .. } => OutcomeKind::Jumped,
            NavigationOutcome::NoMatches => OutcomeKind::NoMatches,
            NavigationOutcome::Unresolved => OutcomeKind::Unresolved,
            NavigationOutcome::Cancelled => OutcomeKind::Cancelled,
            NavigationOutcome::Failed(_) => OutcomeKind::Failed,
        }
    }
}

/// Handle to one triggered navigation.
pub struct NavigationHandle {
    id: NavigationId,
    cancel: CancellationToken,
    outcome: oneshot::Receiver<NavigationOutcome>,
}

impl NavigationHandle {
    pub fn id(&self) -> &NavigationId {
        &self.id
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the navigation to end.
    pub async fn outcome(self) -> NavigationOutcome {
        self.outcome.await.unwrap_or(NavigationOutcome::Cancelled)
    }
}

struct ActiveNavigation {
    id: NavigationId,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ActiveNavigation {
    async fn shut_down(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            warn!(id = %self.id, "navigation task ended abnormally: {e}");
        }
    }
}

pub struct NavigationController {
    host: Host,
    config: watch::Receiver<CharJumpConfig>,
    events: Option<Arc<EventBus>>,
    active: Mutex<Option<ActiveNavigation>>,
}

impl NavigationController {
    /// Controller that reads the latest value of `config` on every trigger.
    pub fn new(host: Host, config: watch::Receiver<CharJumpConfig>) -> Self {
        Self {
            host,
            config,
            events: None,
            active: Mutex::new(None),
        }
    }

    /// Controller with a config that never changes.
    pub fn with_config(host: Host, config: CharJumpConfig) -> Self {
        let (_, config) = watch::channel(config);
        Self::new(host, config)
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Start a navigation, superseding the active one.
    ///
    /// Returns once the previous navigation has finished its cleanup and the
    /// new one is running.
    pub async fn trigger(&self) -> NavigationHandle {
        let mut active = self.active.lock().await;
        if let Some(previous) = active.take() {
            if !previous.task.is_finished() {
                info!(id = %previous.id, "superseding active navigation");
            }
            previous.shut_down().await;
        }

        let settings = NavigationSettings::from_config(&self.config.borrow());
        let id = NavigationId::new();
        let cancel = CancellationToken::new();
        let (outcome_tx, outcome_rx) = oneshot::channel();

        let navigation = Navigation {
            id: id.clone(),
            host: self.host.clone(),
            settings,
            events: self.events.clone(),
            cancel: cancel.clone(),
        };
        let span = info_span!("navigation", id = %id);
        let task = tokio::spawn(
            async move {
                let outcome = navigation.run().await;
                let _ = outcome_tx.send(outcome);
            }
            .instrument(span),
        );

        *active = Some(ActiveNavigation {
            id: id.clone(),
            cancel: cancel.clone(),
            task,
        });
        NavigationHandle {
            id,
            cancel,
            outcome: outcome_rx,
        }
    }

    /// Trigger a navigation and wait for it to end.
    pub async fn run(&self) -> NavigationOutcome {
        self.trigger().await.outcome().await
    }

    /// Cancel the active navigation and wait for its cleanup. Returns `false`
    /// if nothing was running.
    pub async fn cancel(&self) -> bool {
        let previous = self.active.lock().await.take();
        match previous {
            Some(previous) => {
                let was_running = !previous.task.is_finished();
                previous.shut_down().await;
                was_running
            }
            None => false,
        }
    }

    pub async fn is_active(&self) -> bool {
        self.active
            .lock()
            .await
            .as_ref()
            .is_some_and(|a| !a.task.is_finished())
    }
}

/// Everything one navigation task owns.
struct Navigation {
    id: NavigationId,
    host: Host,
    settings: NavigationSettings,
    events: Option<Arc<EventBus>>,
    cancel: CancellationToken,
}

impl Navigation {
    async fn run(self) -> NavigationOutcome {
        self.publish(NavigationEvent::Started {
            id: self.id.clone(),
        });

        let outcome = self.navigate().await;
        match &outcome {
            NavigationOutcome::Jumped { view, position } => {
                info!(%view, %position, "navigation jumped")
            }
            other => info!(outcome = ?other.kind(), "navigation ended without a jump"),
        }

        self.publish(NavigationEvent::Finished {
            id: self.id.clone(),
            outcome: outcome.kind(),
        });
        outcome
    }

    async fn navigate(&self) -> NavigationOutcome {
        let snapshot = VisibleSnapshot::capture(self.host.text.clone());

        let mut input = self.host.input.open(SEARCH_PROMPT);
        let mut search = SearchSession::new(
            snapshot,
            self.host.feedback.clone(),
            self.settings.search_timeout,
        );
        let result = search.run(input.as_mut(), &self.cancel).await;
        if result.end == SearchEnd::Cancelled {
            return NavigationOutcome::Cancelled;
        }

        let total = result.matches.total();
        self.publish(NavigationEvent::SearchFinished {
            id: self.id.clone(),
            matches: total,
        });
        if let Some(target) = result.matches.single() {
            return self.jump(target.view, target.range.start);
        }
        if total == 0 {
            return NavigationOutcome::NoMatches;
        }

        let mut labels = match DisambiguationSession::new(
            &result.matches,
            &self.settings.alphabet,
            self.host.feedback.clone(),
            self.settings.label_timeout,
        ) {
            Ok(session) => session,
            Err(e) => {
                error!(matches = total, "cannot label matches: {e}");
                return NavigationOutcome::Failed(e.to_string());
            }
        };
        self.publish(NavigationEvent::LabelsAssigned {
            id: self.id.clone(),
            count: labels.candidates().len(),
            label_length: labels.label_length() as u32,
        });

        let mut input = self.host.input.open(LABEL_PROMPT);
        match labels.run(input.as_mut(), &self.cancel).await {
            LabelOutcome::Resolved(candidate) => self.jump(candidate.view, candidate.range.start),
            LabelOutcome::Cancelled => NavigationOutcome::Cancelled,
            LabelOutcome::Exhausted | LabelOutcome::Abandoned { .. } => {
                NavigationOutcome::Unresolved
            }
        }
    }

    fn jump(&self, view: ViewId, position: Position) -> NavigationOutcome {
        self.host
            .cursor
            .jump_to(view, position, self.settings.jump_mode);
        self.publish(NavigationEvent::Jumped {
            id: self.id.clone(),
            view,
            position,
        });
        NavigationOutcome::Jumped { view, position }
    }

    fn publish(&self, event: NavigationEvent) {
        if let Some(events) = &self.events {
            events.publish(event);
        }
    }
}
