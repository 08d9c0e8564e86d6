//! HTTP boundary for the conversation orchestrator.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod sweeper;
