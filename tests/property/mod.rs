// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Pricing totals, rejection rules and ordering behaviour of ticket purchases.

mod purchase_rules;
