//! Domain model: stages, log entries, sessions and commands.

pub mod commands;
pub mod entries;
pub mod session;
pub mod stage;
