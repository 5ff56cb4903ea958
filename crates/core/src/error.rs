// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ports::LookupError;

/// Errors that can occur while resolving event participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// One or more identifier inputs matched no record.
    ///
    /// Each list holds the normalized inputs of one category that could not
    /// be resolved.
    UnresolvedReferences {
        /// Unresolved user inputs.
        missing_users: Vec<String>,
        /// Unresolved department inputs.
        missing_departments: Vec<String>,
        /// Unresolved unit inputs.
        missing_units: Vec<String>,
    },
    /// A directory lookup failed.
    Lookup(LookupError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedReferences {
                missing_users,
                missing_departments,
                missing_units,
            } => write!(
                f,
                "Unable to resolve related records: {} users, {} departments, {} units",
                missing_users.len(),
                missing_departments.len(),
                missing_units.len()
            ),
            Self::Lookup(err) => write!(f, "Lookup failed: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<LookupError> for CoreError {
    fn from(err: LookupError) -> Self {
        Self::Lookup(err)
    }
}
