//! Application-wide constants
//!
//! Centralized location for the categorical string domains the schema
//! documents but deliberately leaves unconstrained.

// =============================================================================
// Conversation Roles
// =============================================================================

/// Role recorded for the caller's side of an exchange
pub const ROLE_USER: &str = "user";

/// Role recorded for the agent's side of an exchange
pub const ROLE_ASSISTANT: &str = "assistant";

// =============================================================================
// Account Status
// =============================================================================

/// Account in good standing
pub const STATUS_ACTIVE: &str = "active";

/// Account temporarily blocked (e.g. unpaid balance)
pub const STATUS_SUSPENDED: &str = "suspended";

/// Account closed at the customer's request
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid account status values
pub const VALID_ACCOUNT_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_SUSPENDED, STATUS_CANCELLED];

/// Check if an account status value is valid
pub fn is_valid_account_status(status: &str) -> bool {
    VALID_ACCOUNT_STATUSES.contains(&status)
}

// =============================================================================
// Account Type
// =============================================================================

/// Account type applied when none is recorded
pub const DEFAULT_ACCOUNT_TYPE: &str = "standard";

// =============================================================================
// Ticket Priority
// =============================================================================

/// General queries, no urgency
pub const PRIORITY_LOW: &str = "low";

/// Default priority for new tickets
pub const PRIORITY_MEDIUM: &str = "medium";

/// Urgent issues and service outages
pub const PRIORITY_HIGH: &str = "high";

/// All valid ticket priority values
pub const VALID_TICKET_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Check if a ticket priority value is valid
pub fn is_valid_ticket_priority(priority: &str) -> bool {
    VALID_TICKET_PRIORITIES.contains(&priority)
}

// =============================================================================
// Ticket Status
// =============================================================================

/// Ticket awaiting triage
pub const TICKET_STATUS_OPEN: &str = "open";

/// Ticket being worked by an agent
pub const TICKET_STATUS_IN_PROGRESS: &str = "in-progress";

/// Ticket resolved
pub const TICKET_STATUS_CLOSED: &str = "closed";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/callcenter";
