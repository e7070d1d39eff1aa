// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Purchase Rules
//!
//! Random request sequences are run through a service wired to recording
//! collaborators, and the resulting totals and collaborator calls are checked
//! against closed-form expectations.

use proptest::prelude::*;
use ticket_service::{PurchaseError, TicketService, TicketType, TicketTypeRequest};

use crate::fixtures::{recording_service, CollaboratorCall};

// ============================================================================
// Strategies
// ============================================================================

fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop_oneof![
        Just(TicketType::Adult),
        Just(TicketType::Child),
        Just(TicketType::Infant),
    ]
}

fn line(ticket_type: TicketType, max_count: u32) -> impl Strategy<Value = TicketTypeRequest> {
    (1..=max_count).prop_map(move |count| {
        TicketTypeRequest::new(ticket_type, count).expect("strategy yields positive counts")
    })
}

/// Adult lines whose counts sum to at most 20
fn adult_lines() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    prop::collection::vec(line(TicketType::Adult, 4), 1..=5)
}

/// Lines of child and infant tickets only
fn non_adult_lines() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    prop::collection::vec(
        prop_oneof![line(TicketType::Child, 20), line(TicketType::Infant, 20)],
        1..=6,
    )
}

/// Any lines whose counts may exceed the limit when summed
fn any_lines() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    prop::collection::vec(
        ticket_type().prop_flat_map(|ticket_type| line(ticket_type, 12)),
        1..=8,
    )
}

fn total_count(requests: &[TicketTypeRequest]) -> u32 {
    requests.iter().map(TicketTypeRequest::count).sum()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// All-adult purchases charge 20 per ticket and reserve one seat each
    #[test]
    fn prop_adult_only_totals(account_id in 1i64..=i64::MAX, requests in adult_lines()) {
        let (service, log) = recording_service();
        let tickets = total_count(&requests);

        service.purchase_tickets(account_id, &requests).unwrap();

        prop_assert_eq!(
            log.calls(),
            vec![
                CollaboratorCall::Payment { account_id, amount: tickets * 20 },
                CollaboratorCall::Reservation { account_id, seats: tickets },
            ]
        );
    }

    /// Non-positive accounts are always rejected with no side effects
    #[test]
    fn prop_invalid_account_rejected(account_id in i64::MIN..=0, requests in any_lines()) {
        let (service, log) = recording_service();

        prop_assert_eq!(
            service.purchase_tickets(account_id, &requests),
            Err(PurchaseError::InvalidAccount(Some(account_id)))
        );
        prop_assert!(log.is_empty());
    }

    /// Without an adult, a purchase always fails with an adult-required error
    #[test]
    fn prop_no_adult_always_fails(requests in non_adult_lines()) {
        let (service, log) = recording_service();

        let result = service.purchase_tickets(1, &requests);

        prop_assert!(matches!(
            result,
            Err(PurchaseError::ChildRequiresAdult) | Err(PurchaseError::InfantRequiresAdult)
        ));
        prop_assert!(log.is_empty());
    }

    /// More than 20 tickets never reach the collaborators
    #[test]
    fn prop_over_limit_never_charged(requests in any_lines()) {
        prop_assume!(total_count(&requests) > 20);
        let (service, log) = recording_service();

        prop_assert!(service.purchase_tickets(1, &requests).is_err());
        prop_assert!(log.is_empty());
    }

    /// Adult/child order does not change the totals of a successful purchase
    #[test]
    fn prop_adult_child_order_independent(
        adults in prop::collection::vec(line(TicketType::Adult, 3), 1..=4),
        children in prop::collection::vec(line(TicketType::Child, 2), 0..=4),
    ) {
        let adults_first: Vec<_> = adults.iter().chain(children.iter()).copied().collect();
        let children_first: Vec<_> = children.iter().chain(adults.iter()).copied().collect();
        let (service, _log) = recording_service();

        let a = service.purchase_tickets(1, &adults_first);
        let b = service.purchase_tickets(1, &children_first);

        prop_assert_eq!(a, b);
    }

    /// Successful purchases make exactly one payment followed by one reservation
    #[test]
    fn prop_success_calls_each_collaborator_once(requests in any_lines()) {
        let (service, log) = recording_service();

        if let Ok(order) = service.purchase_tickets(5, &requests) {
            prop_assert!(order.total_tickets <= 20);
            prop_assert!(order.total_seats <= order.total_tickets);
            prop_assert_eq!(
                log.calls(),
                vec![
                    CollaboratorCall::Payment { account_id: 5, amount: order.total_price },
                    CollaboratorCall::Reservation { account_id: 5, seats: order.total_seats },
                ]
            );
        } else {
            prop_assert!(log.is_empty());
        }
    }
}
