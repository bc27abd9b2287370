//! Live config reload.
//!
//! A saved config file reaches the next navigation without a restart. A
//! navigation already in flight keeps the settings it started with.

mod manager;

pub use manager::ReloadManager;
