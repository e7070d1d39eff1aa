// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ticket Purchase Service
//!
//! Coordinates one purchase:
//! 1. Validate the account id
//! 2. Run the pure validation pass over the request lines
//! 3. Charge the account once for the whole order
//! 4. Reserve seats once for the whole order
//!
//! # Transaction Semantics
//!
//! ```text
//! purchase_tickets → validate_account → evaluate_purchase → make_payment → reserve_seat
//! ```
//!
//! Any validation failure returns before step 3, so a rejected purchase never
//! reaches either collaborator.

use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::domain::invariants::{evaluate_purchase, validate_account};
use crate::domain::{PricingPolicy, PurchaseOrder, TicketTypeRequest};
use crate::errors::PurchaseResult;
use crate::thirdparty::{SeatReservationService, TicketPaymentService};

/// Ticket purchase service trait
pub trait TicketService {
    /// Purchase tickets for an account
    ///
    /// # Parameters
    /// - `account_id`: raw account identifier, must be present and positive.
    ///   Accepts an `i64` or an `Option<i64>`.
    /// - `requests`: request lines, evaluated in the given order
    ///
    /// # Returns
    /// - The totals that were charged and reserved
    fn purchase_tickets<A>(
        &self,
        account_id: A,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseOrder>
    where
        A: Into<Option<i64>>;
}

/// Ticket service backed by a payment collaborator and a seat reservation
/// collaborator
#[derive(Debug, Clone)]
pub struct TicketServiceImpl<P, S> {
    payment_service: P,
    reservation_service: S,
    policy: PricingPolicy,
}

impl<P, S> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    /// Create a service using [`PricingPolicy::STANDARD`]
    pub fn new(payment_service: P, reservation_service: S) -> Self {
        Self::with_policy(payment_service, reservation_service, PricingPolicy::STANDARD)
    }

    /// Create a service with a different frozen pricing policy
    pub fn with_policy(payment_service: P, reservation_service: S, policy: PricingPolicy) -> Self {
        Self {
            payment_service,
            reservation_service,
            policy,
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }
}

impl<P, S> TicketService for TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    fn purchase_tickets<A>(
        &self,
        account_id: A,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchaseOrder>
    where
        A: Into<Option<i64>>,
    {
        let account_id = account_id.into();
        let span = info_span!("purchase", purchase_id = %Uuid::now_v7(), account_id = ?account_id);
        let _guard = span.enter();

        debug!(lines = requests.len(), "Evaluating purchase");

        let account = validate_account(account_id).inspect_err(|e| {
            warn!(error = %e, "Purchase rejected");
        })?;

        let order = evaluate_purchase(&self.policy, requests).inspect_err(|e| {
            warn!(error = %e, "Purchase rejected");
        })?;

        self.payment_service.make_payment(account, order.total_price);
        self.reservation_service
            .reserve_seat(account, order.total_seats);

        info!(
            tickets = order.total_tickets,
            seats = order.total_seats,
            price = order.total_price,
            "Purchase completed"
        );

        Ok(order)
    }
}
