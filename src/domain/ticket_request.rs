// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ticket Request Value Object
//!
//! One line item of a purchase: a ticket type and how many tickets of that
//! type are wanted. Several lines may share a type; they are never merged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::invariants::validate_ticket_count;
use crate::domain::TicketType;
use crate::errors::PurchaseError;

/// Immutable (ticket type, count) pair
///
/// # Invariants
/// - `count` is at least 1
///
/// # Examples
///
/// ```rust
/// use ticket_service::domain::{TicketType, TicketTypeRequest};
///
/// let line = TicketTypeRequest::new(TicketType::Adult, 2).unwrap();
/// assert_eq!(line.count(), 2);
/// assert!(TicketTypeRequest::new(TicketType::Child, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTicketTypeRequest")]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TicketTypeRequest {
    /// Create a request line, rejecting a zero count
    pub fn new(ticket_type: TicketType, count: u32) -> Result<Self, PurchaseError> {
        validate_ticket_count(ticket_type, count)?;
        Ok(Self { ticket_type, count })
    }

    /// Shorthand for an adult line
    pub fn adult(count: u32) -> Result<Self, PurchaseError> {
        Self::new(TicketType::Adult, count)
    }

    /// Shorthand for a child line
    pub fn child(count: u32) -> Result<Self, PurchaseError> {
        Self::new(TicketType::Child, count)
    }

    /// Shorthand for an infant line
    pub fn infant(count: u32) -> Result<Self, PurchaseError> {
        Self::new(TicketType::Infant, count)
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.ticket_type, self.count)
    }
}

/// Parses the command-line form `TYPE=COUNT`, e.g. `ADULT=2` or `child=1`
impl FromStr for TicketTypeRequest {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PurchaseError::MalformedTicketRequest(s.to_string());

        let (ticket_type, count) = s.split_once('=').ok_or_else(malformed)?;
        let ticket_type = ticket_type.parse::<TicketType>()?;
        let count = count.trim().parse::<u32>().map_err(|_| malformed())?;

        Self::new(ticket_type, count)
    }
}

/// Unvalidated wire shape
#[derive(Deserialize)]
struct RawTicketTypeRequest {
    ticket_type: TicketType,
    count: u32,
}

impl TryFrom<RawTicketTypeRequest> for TicketTypeRequest {
    type Error = PurchaseError;

    fn try_from(raw: RawTicketTypeRequest) -> Result<Self, Self::Error> {
        Self::new(raw.ticket_type, raw.count)
    }
}
