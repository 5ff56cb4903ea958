// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory seed files.
//!
//! A seed is a JSON document listing departments (with their units) and
//! users:
//!
//! ```json
//! {
//!   "departments": [{ "code": "ENG", "name": "Engineering", "units": ["Backend"] }],
//!   "users": [{ "email": "alice@co.com", "name": "Alice" }]
//! }
//! ```
//!
//! Applying a seed is idempotent: existing rows are left untouched.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PersistenceError;

/// A department and the names of its units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSeed {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub units: Vec<String>,
}

/// A user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeed {
    pub email: String,
    pub name: String,
}

/// The contents of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub departments: Vec<DepartmentSeed>,
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

impl DirectorySeed {
    /// Parses a seed from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid seed document.
    pub fn from_json_str(json: &str) -> Result<Self, PersistenceError> {
        serde_json::from_str(json).map_err(|e| PersistenceError::SeedFailed(e.to_string()))
    }

    /// Reads and parses a seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: &Path = path.as_ref();
        let contents: String = std::fs::read_to_string(path).map_err(|e| {
            PersistenceError::SeedFailed(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }
}
