//! Feeds stdin lines into the open prompt.

use std::io::BufRead;
use std::sync::Arc;

use charjump_engine::{InputEvent, PromptChannel, SEARCH_PROMPT};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Map one stdin line (`None` at end of input) to a prompt event.
pub fn event_for(line: Option<String>, escape: bool) -> InputEvent {
    match line {
        None => InputEvent::Dismissed,
        Some(line) if line.is_empty() => InputEvent::Accepted,
        Some(line) if escape => InputEvent::Changed(regex::escape(&line)),
        Some(line) => InputEvent::Changed(line),
    }
}

/// Read stdin on a plain thread and forward each line to whichever prompt
/// is open when it arrives.
///
/// With `literal`, search text is escaped before the engine sees it. Label
/// input is never escaped.
pub fn spawn_stdin_feeder(prompts: Arc<PromptChannel>, literal: bool) {
    let (line_tx, mut line_rx) = mpsc::channel::<Option<String>>(64);

    // A blocking read must not hold up runtime shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.blocking_send(Some(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    warn!("failed to read stdin: {e}");
                    break;
                }
            }
        }
        let _ = line_tx.blocking_send(None);
    });

    tokio::spawn(async move {
        prompts.wait_for_prompt(1).await;
        while let Some(line) = line_rx.recv().await {
            loop {
                let seen = prompts.opened();
                let escape =
                    literal && prompts.current_prompt().as_deref() == Some(SEARCH_PROMPT);
                if prompts.send(event_for(line.clone(), escape)) {
                    break;
                }
                // The prompt closed under us; wait for the next one.
                debug!("prompt closed, holding input for the next prompt");
                prompts.wait_for_prompt(seen + 1).await;
            }
        }
    });
}
