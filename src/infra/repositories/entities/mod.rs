//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod conversation;
pub mod customer;
pub mod ticket;
