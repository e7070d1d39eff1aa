// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Purchase Invariants
//!
//! Business rules for a ticket purchase. All functions are pure: no I/O, no
//! logging, deterministic. The service layer calls them before touching any
//! external collaborator.
//!
//! # Rules
//!
//! 1. The account id must be positive
//! 2. Every request line asks for at least one ticket
//! 3. Infants need an adult line *earlier* in the sequence
//! 4. Children need an adult line *anywhere* in the sequence
//! 5. No more than [`PricingPolicy::max_tickets`] tickets in total, checked
//!    after every counted line
//! 6. The total price fits the payable amount; it is never capped
//!
//! Request order is significant for rule 3 and is never rearranged.

use crate::domain::{AccountId, PricingPolicy, PurchaseOrder, TicketType, TicketTypeRequest};
use crate::errors::{PurchaseError, PurchaseResult};

/// Validate a raw, possibly absent, account id
pub fn validate_account(account_id: Option<i64>) -> PurchaseResult<AccountId> {
    AccountId::try_from(account_id)
}

/// Validate a single line's ticket count
///
/// # Rules
/// - Zero tickets is not a meaningful line item
pub fn validate_ticket_count(ticket_type: TicketType, count: u32) -> PurchaseResult<()> {
    if count == 0 {
        return Err(PurchaseError::InvalidTicketCount { ticket_type, count });
    }
    Ok(())
}

/// Validate the running ticket total against the policy ceiling
pub fn validate_ticket_limit(policy: &PricingPolicy, total_tickets: u32) -> PurchaseResult<()> {
    if total_tickets > policy.max_tickets {
        return Err(PurchaseError::TicketLimitExceeded {
            requested: total_tickets,
            maximum: policy.max_tickets,
        });
    }
    Ok(())
}

/// Validate that children seen before any adult can be admitted
///
/// # Rules
/// - No deferred children: nothing to check
/// - Deferred children are admitted only if an adult appeared later on
pub fn validate_deferred_children(
    adult_seen: bool,
    deferred_children: &[&TicketTypeRequest],
) -> PurchaseResult<()> {
    if !deferred_children.is_empty() && !adult_seen {
        return Err(PurchaseError::ChildRequiresAdult);
    }
    Ok(())
}

/// Run the full validation pass over a purchase and compute its totals
///
/// Lines are scanned in input order. Adult lines are counted immediately.
/// Child lines before the first adult are held back and folded in at the end
/// once an adult is known to be present. Infant lines before the first adult
/// fail on the spot.
pub fn evaluate_purchase(
    policy: &PricingPolicy,
    requests: &[TicketTypeRequest],
) -> PurchaseResult<PurchaseOrder> {
    if requests.is_empty() {
        return Err(PurchaseError::NoTicketsRequested);
    }

    let mut order = PurchaseOrder::default();
    let mut adult_seen = false;
    let mut deferred_children = Vec::new();

    for request in requests {
        match request.ticket_type() {
            TicketType::Adult => adult_seen = true,
            TicketType::Child if !adult_seen => {
                deferred_children.push(request);
                continue;
            }
            TicketType::Infant if !adult_seen => {
                return Err(PurchaseError::InfantRequiresAdult);
            }
            TicketType::Child | TicketType::Infant => {}
        }

        count_line(policy, &mut order, request)?;
    }

    validate_deferred_children(adult_seen, &deferred_children)?;

    for child in deferred_children {
        count_line(policy, &mut order, child)?;
    }

    Ok(order)
}

/// Check the ticket ceiling for one more line, then fold it into the order
///
/// The ceiling is checked first so an oversized count is reported as
/// [`PurchaseError::TicketLimitExceeded`] rather than a price overflow.
fn count_line(
    policy: &PricingPolicy,
    order: &mut PurchaseOrder,
    request: &TicketTypeRequest,
) -> PurchaseResult<()> {
    validate_ticket_limit(policy, order.total_tickets.saturating_add(request.count()))?;
    order.add_line(policy, request)
}
