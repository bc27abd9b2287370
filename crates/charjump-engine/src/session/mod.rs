//! The two interactive stages of a navigation.
//!
//! Both sessions are explicit state machines driven by one `select!` loop
//! over cancellation, the prompt's input stream and a [`DebounceTimer`].
//!
//! [`DebounceTimer`]: crate::debounce::DebounceTimer

mod disambiguate;
mod search;

pub use disambiguate::{assign_labels, Candidate, DisambiguationSession, LabelOutcome, LabelPhase};
pub use search::{SearchEnd, SearchPhase, SearchResult, SearchSession};
