// Copyright (c) 2025 - Cowboy AI, Inc.
//! Ticket Purchase Domain Models
//!
//! Value objects with validation invariants and the pure rules that turn a
//! sequence of ticket requests into purchase totals.
//!
//! # Value Objects with Invariants
//!
//! - [`AccountId`] - Positive account identifier
//! - [`TicketType`] - ADULT, CHILD or INFANT
//! - [`TicketTypeRequest`] - One (type, count) line with count >= 1
//! - [`PricingPolicy`] - Frozen unit prices and per-purchase ticket ceiling
//!
//! # Derived Aggregates
//!
//! - [`PurchaseOrder`] - Totals for one validated purchase

pub mod account;
pub mod invariants;
pub mod pricing;
pub mod purchase_order;
pub mod ticket_request;
pub mod ticket_type;

pub use account::AccountId;
pub use invariants::evaluate_purchase;
pub use pricing::PricingPolicy;
pub use purchase_order::PurchaseOrder;
pub use ticket_request::TicketTypeRequest;
pub use ticket_type::TicketType;
