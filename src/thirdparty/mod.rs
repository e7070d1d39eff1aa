// Copyright (c) 2025 - Cowboy AI, Inc.
//! External Collaborator Interfaces
//!
//! The payment gateway and seat booking system are owned by third parties.
//! The purchase service only ever calls them through these traits and treats
//! both calls as always succeeding.

use crate::domain::AccountId;

/// Charges an account for a purchase
pub trait TicketPaymentService: Send + Sync {
    /// Take `total_amount_to_pay` from the account
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u32);
}

/// Allocates physical seats for a purchase
pub trait SeatReservationService: Send + Sync {
    /// Reserve `total_seats_to_allocate` seats for the account
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u32) {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for std::sync::Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u32) {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for std::sync::Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u32) {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}
