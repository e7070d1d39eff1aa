// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for ticket purchase operations

use thiserror::Error;

use crate::domain::TicketType;

/// Reasons a purchase is rejected
///
/// Every variant is a validation failure raised before any payment or seat
/// reservation takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Account identifier is absent, zero or negative
    #[error("Invalid account id: {}", display_account(.0))]
    InvalidAccount(Option<i64>),

    /// Child tickets requested with no adult ticket anywhere in the purchase
    #[error("Child ticket cannot be purchased without an Adult ticket")]
    ChildRequiresAdult,

    /// Infant ticket encountered before any adult ticket
    #[error("Infant ticket cannot be purchased without an Adult ticket")]
    InfantRequiresAdult,

    /// Running ticket total went over the per-purchase maximum
    #[error("Cannot purchase more than {maximum} tickets at a time (requested {requested})")]
    TicketLimitExceeded { requested: u32, maximum: u32 },

    /// A ticket line requested zero tickets
    #[error("Invalid ticket count {count} for {ticket_type} tickets")]
    InvalidTicketCount { ticket_type: TicketType, count: u32 },

    /// The purchase contained no ticket lines
    #[error("At least one ticket must be requested")]
    NoTicketsRequested,

    /// Total price does not fit the payment amount type
    #[error("Total price overflows the maximum payable amount")]
    PriceOverflow,

    /// Ticket type name did not match ADULT, CHILD or INFANT
    #[error("Unknown ticket type: {0}")]
    UnknownTicketType(String),

    /// Ticket request text was not of the form TYPE=COUNT
    #[error("Malformed ticket request {0:?}, expected TYPE=COUNT")]
    MalformedTicketRequest(String),
}

fn display_account(account: &Option<i64>) -> String {
    match account {
        Some(id) => id.to_string(),
        None => "<absent>".to_string(),
    }
}

/// Result type for purchase operations
pub type PurchaseResult<T> = Result<T, PurchaseError>;
