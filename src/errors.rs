// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by ledger operations.
///
/// A missing or unparsable snapshot at load time is deliberately NOT an
/// error; loading fails open to an empty ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The input violates a transaction invariant. Nothing was mutated.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An update targeted an id that is not in the ledger.
    #[error("transaction '{0}' not found")]
    NotFound(Uuid),

    /// Writing the snapshot failed. The in-memory mutation is retained, so
    /// in-session state is consistent but may not survive the process.
    #[error("failed to persist ledger snapshot: {0}")]
    Persistence(#[from] std::io::Error),
}
