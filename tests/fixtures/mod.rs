// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for ticket-service
//!
//! Recording collaborators share one call log so tests can assert the order
//! of payment and reservation calls as well as their arguments.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ticket_service::{
    AccountId, PricingPolicy, SeatReservationService, TicketPaymentService, TicketServiceImpl,
    TicketTypeRequest,
};

/// A call made to one of the external collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorCall {
    Payment { account_id: i64, amount: u32 },
    Reservation { account_id: i64, seats: u32 },
}

/// Shared, ordered record of collaborator calls
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<CollaboratorCall>>>);

impl CallLog {
    pub fn record(&self, call: CollaboratorCall) {
        self.0.lock().expect("call log poisoned").push(call);
    }

    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.0.lock().expect("call log poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.calls().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RecordingPaymentService {
    log: CallLog,
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u32) {
        self.log.record(CollaboratorCall::Payment {
            account_id: account_id.get(),
            amount: total_amount_to_pay,
        });
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSeatReservationService {
    log: CallLog,
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) {
        self.log.record(CollaboratorCall::Reservation {
            account_id: account_id.get(),
            seats: total_seats_to_allocate,
        });
    }
}

pub type RecordingTicketService =
    TicketServiceImpl<RecordingPaymentService, RecordingSeatReservationService>;

/// Build a service wired to recording collaborators plus the log they share
pub fn recording_service() -> (RecordingTicketService, CallLog) {
    recording_service_with_policy(PricingPolicy::STANDARD)
}

/// Same as [`recording_service`] with a non-standard pricing policy
pub fn recording_service_with_policy(policy: PricingPolicy) -> (RecordingTicketService, CallLog) {
    let log = CallLog::default();
    let service = TicketServiceImpl::with_policy(
        RecordingPaymentService { log: log.clone() },
        RecordingSeatReservationService { log: log.clone() },
        policy,
    );
    (service, log)
}

pub fn adult(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::adult(count).expect("Invalid adult fixture")
}

pub fn child(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::child(count).expect("Invalid child fixture")
}

pub fn infant(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::infant(count).expect("Invalid infant fixture")
}
