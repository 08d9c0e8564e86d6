//! Route modules.

pub mod conversation;
pub mod health;
