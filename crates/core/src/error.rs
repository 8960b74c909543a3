// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use watchbill_domain::{DomainError, RosterShape};

/// Errors that stop a roster run before any record is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The configuration violates a domain rule.
    DomainViolation(DomainError),
    /// The chosen strategy needs a different roster shape.
    RosterShapeMismatch {
        /// The strategy name.
        strategy: &'static str,
        /// The shape the strategy consumes.
        expected: RosterShape,
        /// The shape the configuration supplies.
        actual: RosterShape,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Configuration error: {err}"),
            Self::RosterShapeMismatch {
                strategy,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Configuration error: strategy '{strategy}' needs a {expected} roster, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
