// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account Identifier Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::PurchaseError;

/// Identifier of the purchasing account
///
/// Invariant: always strictly positive. Construction from a raw integer
/// rejects zero, negative and absent ids with [`PurchaseError::InvalidAccount`].
///
/// # Examples
///
/// ```rust
/// use ticket_service::domain::AccountId;
///
/// assert_eq!(AccountId::new(42).unwrap().get(), 42);
/// assert!(AccountId::new(0).is_err());
/// assert!(AccountId::try_from(None::<i64>).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Create an account id, rejecting non-positive values
    pub fn new(id: i64) -> Result<Self, PurchaseError> {
        if id <= 0 {
            return Err(PurchaseError::InvalidAccount(Some(id)));
        }
        Ok(Self(id))
    }

    /// Get the raw identifier
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Option<i64>> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: Option<i64>) -> Result<Self, Self::Error> {
        value
            .ok_or(PurchaseError::InvalidAccount(None))
            .and_then(Self::new)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}
