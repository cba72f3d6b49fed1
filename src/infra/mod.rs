//! Infrastructure layer - External systems integration
//!
//! This module handles the database connection, SeaORM entities and
//! the repositories built on top of them.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    ConversationRepository, ConversationStore, CustomerRepository, CustomerStore, TicketRepository,
    TicketStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockConversationRepository, MockCustomerRepository, MockTicketRepository};
