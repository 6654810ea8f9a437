// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ItemType;
use thiserror::Error;

/// Failures surfaced by the ledger itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No {kind} item with id {id}")]
    ItemNotFound { kind: ItemType, id: u64 },
}
