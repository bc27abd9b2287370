//! Jump label alphabet, sizing and enumeration.

mod alphabet;
mod generator;

pub use alphabet::LabelAlphabet;
pub use generator::{generate, label_length, Labels};
