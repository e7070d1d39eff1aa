// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Ticket Purchases
//!
//! Application service that runs the pure purchase rules and then drives the
//! external collaborators.
//!
//! # Architecture
//!
//! ```text
//! Caller
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Pure invariants → PurchaseOrder
//!     ↓
//! TicketPaymentService, then SeatReservationService
//! ```
//!
//! # Example
//!
//! ```rust
//! use ticket_service::adapters::{LoggingPaymentService, LoggingSeatReservationService};
//! use ticket_service::domain::TicketTypeRequest;
//! use ticket_service::service::{TicketService, TicketServiceImpl};
//!
//! # fn main() -> Result<(), ticket_service::PurchaseError> {
//! let service = TicketServiceImpl::new(
//!     LoggingPaymentService::new(),
//!     LoggingSeatReservationService::new(),
//! );
//!
//! let order = service.purchase_tickets(
//!     1,
//!     &[TicketTypeRequest::adult(1)?, TicketTypeRequest::child(2)?],
//! )?;
//! assert_eq!(order.total_price, 40);
//! assert_eq!(order.total_seats, 3);
//! # Ok(())
//! # }
//! ```

pub mod ticket_service;

pub use ticket_service::{TicketService, TicketServiceImpl};
