//! Restartable one-shot countdown.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Fires once per [`start`](Self::start) unless stopped or restarted first.
///
/// The timer only holds a deadline; waiting happens in [`elapsed`](Self::elapsed),
/// which is meant to sit in a `tokio::select!` loop next to an input stream.
#[derive(Debug)]
pub struct DebounceTimer {
    window: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Start counting from now. A running countdown is discarded.
    pub fn start(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolve when the window has passed since the last `start()`.
    ///
    /// Pending forever while stopped. Cancel-safe: dropping the future
    /// leaves the deadline untouched, and a fired timer is stopped.
    pub async fn elapsed(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => std::future::pending().await,
        }
    }
}
