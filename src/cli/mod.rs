//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `seed` - Demo customer loading
//! - `customer` - Account lookup and status changes
//! - `conversation` - Transcript history
//! - `ticket` - Support ticket intake

pub mod args;

pub use args::{Cli, Commands};
