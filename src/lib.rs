// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ticket purchase validation
//!
//! Validates a single account's ticket purchase, computes the total price and
//! seat count, and hands both to external payment and seat reservation
//! services.

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod service;
pub mod thirdparty;

// Re-export commonly used types
pub use domain::{AccountId, PricingPolicy, PurchaseOrder, TicketType, TicketTypeRequest};
pub use errors::{PurchaseError, PurchaseResult};
pub use service::{TicketService, TicketServiceImpl};
pub use thirdparty::{SeatReservationService, TicketPaymentService};
