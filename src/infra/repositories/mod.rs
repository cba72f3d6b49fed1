//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod conversation_repository;
mod customer_repository;
pub(crate) mod entities;
mod ticket_repository;

pub use conversation_repository::{ConversationRepository, ConversationStore};
pub use customer_repository::{CustomerRepository, CustomerStore};
pub use ticket_repository::{TicketRepository, TicketStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use conversation_repository::MockConversationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use ticket_repository::MockTicketRepository;
