// Copyright (c) 2025 - Cowboy AI, Inc.
//! Purchase Order
//!
//! Aggregate totals derived from one validated purchase. Built fresh for each
//! call and never stored.

use serde::{Deserialize, Serialize};

use crate::domain::{PricingPolicy, TicketTypeRequest};
use crate::errors::{PurchaseError, PurchaseResult};

/// Totals for a validated purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Tickets of every type, the value checked against the ticket ceiling
    pub total_tickets: u32,
    /// Seats to reserve: adult and child tickets (infants sit on a lap)
    pub total_seats: u32,
    /// Amount to charge the account
    pub total_price: u32,
}

impl PurchaseOrder {
    /// Fold one request line into the totals
    ///
    /// Ticket and seat counts saturate. A price that does not fit fails with
    /// [`PurchaseError::PriceOverflow`] and leaves the order unchanged.
    pub fn add_line(
        &mut self,
        policy: &PricingPolicy,
        request: &TicketTypeRequest,
    ) -> PurchaseResult<()> {
        let count = request.count();
        let ticket_type = request.ticket_type();

        self.total_price = policy
            .price_for(ticket_type, count)
            .and_then(|price| self.total_price.checked_add(price))
            .ok_or(PurchaseError::PriceOverflow)?;

        self.total_tickets = self.total_tickets.saturating_add(count);
        if ticket_type.reserves_seat() {
            self.total_seats = self.total_seats.saturating_add(count);
        }
        Ok(())
    }
}
