//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod conversation_service;
mod customer_service;
mod ticket_service;

// Service traits and implementations
pub use conversation_service::{ConversationManager, ConversationService};
pub use customer_service::{CustomerManager, CustomerService};
pub use ticket_service::{TicketManager, TicketService};
