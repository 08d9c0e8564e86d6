//! Application services that drive a conversation turn.

pub mod assembler;
pub mod command_handlers;
pub mod dispatcher;
pub mod enrichment;
pub mod generation;
pub mod prompts;
pub mod query_handlers;
pub mod registry;
