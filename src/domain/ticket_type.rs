// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ticket Type Domain Model
//!
//! The closed set of ticket categories a purchase can contain. The category
//! decides both the unit price and which eligibility rules apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PurchaseError;

/// Ticket category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Adult ticket, required for any child or infant ticket
    Adult,
    /// Child ticket
    Child,
    /// Infant ticket (sits on an adult's lap)
    Infant,
}

impl TicketType {
    /// All ticket types, in price order
    pub const ALL: [TicketType; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this type occupies a seat
    pub fn reserves_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            _ => Err(PurchaseError::UnknownTicketType(s.to_string())),
        }
    }
}
