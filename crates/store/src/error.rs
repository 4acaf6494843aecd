//! The module contains the error the store can throw.
//!
//! Absence of a record is never an error: lookups return `Option` and
//! deletes return `bool`. `StoreError` covers what is left, which is the
//! durable backend failing underneath us or handing back rows we can no
//! longer decode.

use sea_orm::DbErr;
use thiserror::Error;

/// Store custom errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("corrupt stored record: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Corrupt(a), Self::Corrupt(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
