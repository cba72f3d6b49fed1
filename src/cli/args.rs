//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Administrative CLI for the call center customer database
#[derive(Parser, Debug)]
#[command(name = "callcenter-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "CONFIG_PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Load the demo customers
    Seed,

    /// Look up and manage customer accounts
    Customer(CustomerArgs),

    /// Inspect and record conversation history
    Conversation(ConversationArgs),

    /// Open and list support tickets
    Ticket(TicketArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the customer command
#[derive(Parser, Debug)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub action: CustomerAction,
}

/// Customer account actions
#[derive(Subcommand, Debug)]
pub enum CustomerAction {
    /// Show the account on file for a phone number
    Get {
        /// Phone number (e.g., "+1234567890")
        phone: String,
    },
    /// Change the account status for a phone number
    SetStatus {
        /// Phone number (e.g., "+1234567890")
        phone: String,
        /// New status: active, suspended or cancelled
        status: String,
    },
}

/// Arguments for the conversation command
#[derive(Parser, Debug)]
pub struct ConversationArgs {
    #[command(subcommand)]
    pub action: ConversationAction,
}

/// Conversation history actions
#[derive(Subcommand, Debug)]
pub enum ConversationAction {
    /// Print the most recent turns for a phone number
    History {
        /// Phone number the conversation belongs to
        phone: String,
        /// Maximum number of turns to fetch
        #[arg(short, long, default_value_t = 10)]
        limit: u64,
    },
    /// Record one caller/agent exchange
    Record {
        /// Phone number the conversation belongs to
        phone: String,
        /// What the caller said
        #[arg(long)]
        user_message: String,
        /// What the agent answered
        #[arg(long)]
        assistant_message: String,
    },
}

/// Arguments for the ticket command
#[derive(Parser, Debug)]
pub struct TicketArgs {
    #[command(subcommand)]
    pub action: TicketAction,
}

/// Support ticket actions
#[derive(Subcommand, Debug)]
pub enum TicketAction {
    /// Open a new support ticket
    Open {
        /// Phone number the ticket is for
        phone: String,
        /// Description of the problem
        #[arg(long)]
        issue: String,
        /// Priority: low, medium or high
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// List all tickets for a phone number, newest first
    List {
        /// Phone number the tickets are for
        phone: String,
    },
}
