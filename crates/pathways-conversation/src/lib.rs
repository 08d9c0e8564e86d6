//! Stage-driven conversation orchestrator.
//!
//! Tracks which stage a conversation is in, asks the text collaborator for
//! that stage's structured content, illustrates the generated items through
//! the image collaborator, and folds each completed turn into an
//! append-only log.

pub mod application;
pub mod domain;
