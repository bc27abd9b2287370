//! Jump-to-location engine.
//!
//! A navigation has two stages. Stage 1 searches the visible text as the
//! user types and highlights every match; once input pauses the match set
//! is frozen. A single match is jumped to directly. Several matches move on
//! to stage 2, where each gets a short label and typing narrows them down
//! until one is left.
//!
//! The engine talks to its editor only through the traits in [`host`].
//! [`buffer::TextBuffer`] and [`prompt::PromptChannel`] are ready-made
//! in-memory implementations.

pub mod buffer;
pub mod controller;
pub mod debounce;
pub mod host;
pub mod labels;
pub mod matcher;
pub mod overlay;
pub mod prompt;
pub mod session;
pub mod settings;
pub mod snapshot;

#[cfg(test)]
mod testing;

pub use buffer::TextBuffer;
pub use controller::{
    NavigationController, NavigationHandle, NavigationOutcome, LABEL_PROMPT, SEARCH_PROMPT,
};
pub use debounce::DebounceTimer;
pub use host::{
    CursorMover, FeedbackSink, Host, InputEvent, InputProvider, InputStream, JumpMode,
    LabelOverlay, TextSource,
};
pub use labels::{generate, label_length, LabelAlphabet};
pub use matcher::{find, Match, MatchFinder, MatchSet};
pub use prompt::PromptChannel;
pub use settings::NavigationSettings;
pub use snapshot::VisibleSnapshot;
