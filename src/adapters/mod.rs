// Copyright (c) 2025 - Cowboy AI, Inc.
//! Collaborator Adapters
//!
//! Concrete implementations of the [`crate::thirdparty`] traits.

pub mod logging;

pub use logging::{LoggingPaymentService, LoggingSeatReservationService};
