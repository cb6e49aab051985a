//! Command implementations for the clientctl CLI

pub mod completions;
pub mod install;
pub mod version;
