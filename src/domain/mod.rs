//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod conversation;
pub mod customer;
pub mod ticket;

pub use conversation::{ConversationTurn, SpeakerRole};
pub use customer::{AccountStatus, Customer};
pub use ticket::{Ticket, TicketPriority, TicketStatus};
