// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logging collaborators
//!
//! Stand-ins for the third-party payment gateway and seat booking system.
//! They accept every call and record it to the tracing log, which is all the
//! command-line entry point needs.

use tracing::info;

use crate::domain::AccountId;
use crate::thirdparty::{SeatReservationService, TicketPaymentService};

/// Payment service that logs and always succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl LoggingPaymentService {
    pub const fn new() -> Self {
        Self
    }
}

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u32) {
        info!(%account_id, amount = total_amount_to_pay, "Payment taken");
    }
}

/// Seat reservation service that logs and always succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl LoggingSeatReservationService {
    pub const fn new() -> Self {
        Self
    }
}

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) {
        info!(%account_id, seats = total_seats_to_allocate, "Seats reserved");
    }
}
