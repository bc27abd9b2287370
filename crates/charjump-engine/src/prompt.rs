//! Channel-backed [`InputProvider`].
//!
//! Whoever owns the [`PromptChannel`] feeds events into the prompt that is
//! currently open: the terminal host forwards stdin lines, tests script
//! keystrokes.
//!
//! Events that reach a prompt but are still unread when it closes are held
//! and replayed into the next prompt, so input typed ahead of a prompt is
//! not lost.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::host::{InputEvent, InputProvider, InputStream};

#[derive(Default)]
struct OpenPrompt {
    title: Option<String>,
    sender: Option<mpsc::UnboundedSender<InputEvent>>,
}

type Pending = Arc<Mutex<VecDeque<InputEvent>>>;

pub struct PromptChannel {
    current: Mutex<OpenPrompt>,
    pending: Pending,
    opened: watch::Sender<u32>,
}

impl PromptChannel {
    pub fn new() -> Self {
        let (opened, _) = watch::channel(0);
        Self {
            current: Mutex::new(OpenPrompt::default()),
            pending: Pending::default(),
            opened,
        }
    }

    /// Deliver `event` to the open prompt. Returns `false` when no prompt is
    /// open or the last one has been closed.
    pub fn send(&self, event: InputEvent) -> bool {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match &current.sender {
            Some(sender) => sender.send(event).is_ok(),
            None => false,
        }
    }

    pub fn type_text(&self, value: impl Into<String>) -> bool {
        self.send(InputEvent::Changed(value.into()))
    }

    pub fn accept(&self) -> bool {
        self.send(InputEvent::Accepted)
    }

    pub fn dismiss(&self) -> bool {
        self.send(InputEvent::Dismissed)
    }

    /// Title of the most recently opened prompt while it is still open.
    pub fn current_prompt(&self) -> Option<String> {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match &current.sender {
            Some(sender) if !sender.is_closed() => current.title.clone(),
            _ => None,
        }
    }

    /// Events carried over from closed prompts, waiting for the next one.
    pub fn pending(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of prompts opened so far.
    pub fn opened(&self) -> u32 {
        *self.opened.borrow()
    }

    /// Wait until at least `count` prompts have been opened.
    pub async fn wait_for_prompt(&self, count: u32) {
        let mut opened = self.opened.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = opened.wait_for(|n| *n >= count).await;
    }
}

impl Default for PromptChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProvider for PromptChannel {
    fn open(&self, prompt: &str) -> Box<dyn InputStream> {
        let (sender, receiver) = mpsc::unbounded_channel();
        {
            // Replay under the lock so carried-over events stay ahead of
            // anything sent to the new prompt.
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            let replayed = pending.len();
            for event in pending.drain(..) {
                let _ = sender.send(event);
            }
            current.title = Some(prompt.to_string());
            current.sender = Some(sender);
            debug!(prompt, replayed, "prompt opened");
        }
        self.opened.send_modify(|n| *n += 1);
        Box::new(PromptStream {
            receiver,
            pending: self.pending.clone(),
        })
    }
}

struct PromptStream {
    receiver: mpsc::UnboundedReceiver<InputEvent>,
    pending: Pending,
}

#[async_trait]
impl InputStream for PromptStream {
    async fn next_event(&mut self) -> InputEvent {
        self.receiver.recv().await.unwrap_or(InputEvent::Dismissed)
    }

    fn close(&mut self) {
        self.receiver.close();
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        while let Ok(event) = self.receiver.try_recv() {
            pending.push_back(event);
        }
    }
}
