//! Call center store - PostgreSQL schema, seed data and data access
//! for a voice-agent call center.
//!
//! This crate owns the customer database behind the phone agent:
//! customer accounts, conversation transcripts and support tickets.
//! Schema changes ship as migrations and a small demo dataset can be
//! loaded idempotently for local work.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Apply the schema
//! cargo run -- migrate up
//!
//! # Load the demo customers
//! cargo run -- seed
//!
//! # Look up an account
//! cargo run -- customer get +1234567890
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{AccountStatus, ConversationTurn, Customer, Ticket};
pub use errors::{AppError, AppResult};
pub use infra::Database;
