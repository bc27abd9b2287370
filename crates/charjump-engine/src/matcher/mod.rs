//! Case-insensitive regex matching over a [`VisibleSnapshot`].
//!
//! [`VisibleSnapshot`]: crate::snapshot::VisibleSnapshot

mod finder;
mod types;

pub use finder::{find, MatchFinder};
pub use types::{Match, MatchSet};

#[cfg(test)]
mod tests;
