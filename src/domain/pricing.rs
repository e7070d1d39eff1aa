// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pricing Policy
//!
//! Unit prices per ticket type and the per-purchase ticket ceiling. The
//! standard policy is a compile-time constant and never changes at runtime.

use serde::{Deserialize, Serialize};

use crate::domain::TicketType;

/// Frozen price table plus ticket ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub adult_price: u32,
    pub child_price: u32,
    pub infant_price: u32,
    /// Maximum tickets (all types summed) in one purchase
    pub max_tickets: u32,
}

impl PricingPolicy {
    /// ADULT=20, CHILD=10, INFANT=0, at most 20 tickets per purchase
    pub const STANDARD: PricingPolicy = PricingPolicy {
        adult_price: 20,
        child_price: 10,
        infant_price: 0,
        max_tickets: 20,
    };

    /// Unit price for a ticket type
    pub const fn unit_price(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }

    /// Price of `count` tickets of one type
    ///
    /// Returns `None` if the price does not fit in a `u32`.
    pub fn price_for(&self, ticket_type: TicketType, count: u32) -> Option<u32> {
        count.checked_mul(self.unit_price(ticket_type))
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}
