//! Shared abstractions.
//!
//! This crate defines the error type, time source, command contract and the
//! ports through which the conversation core reaches its two generative
//! collaborators. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod generation;
