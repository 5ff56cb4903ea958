// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classification of free-form identifier inputs.
//!
//! Clients reference users, departments and units with loosely typed
//! strings. Every heuristic used to decide what such a string *is* lives
//! here, so resolvers work with tagged references instead of sniffing
//! strings themselves.
//!
//! ## Conventions
//!
//! - Inputs are trimmed; empty inputs are discarded before classification
//! - An internal ID is a positive decimal integer (database row ID)
//! - A user input containing `@` is an email; anything else is an ID
//! - A unit input containing `:` is a `departmentCode:unitName` combo

/// Separator between department code and unit name in a combo reference.
pub const COMBO_SEPARATOR: char = ':';

/// Trims every input and drops the ones that end up empty.
///
/// Order and duplicates are preserved.
#[must_use]
pub fn normalize_inputs(inputs: &[String]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| input.trim())
        .filter(|input| !input.is_empty())
        .map(String::from)
        .collect()
}

/// Parses an input following the internal-ID convention.
///
/// Returns `None` unless the whole (trimmed) input is ASCII digits that
/// parse to a positive `i64`.
#[must_use]
pub fn parse_internal_id(input: &str) -> Option<i64> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Returns whether an input follows the internal-ID convention.
#[must_use]
pub fn looks_like_internal_id(input: &str) -> bool {
    parse_internal_id(input).is_some()
}

/// A classified user reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserReference {
    /// The input is an email address (compared case-insensitively).
    Email(String),
    /// The input is a raw internal ID.
    ///
    /// `id` is `None` when the input does not parse; such a reference can
    /// never match and is always reported missing.
    Id {
        /// The original input.
        raw: String,
        /// The parsed identifier.
        id: Option<i64>,
    },
}

impl UserReference {
    /// Returns the original input string.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Email(raw) | Self::Id { raw, .. } => raw,
        }
    }
}

/// Classifies a normalized user input.
#[must_use]
pub fn classify_user_input(input: &str) -> UserReference {
    if input.contains('@') {
        UserReference::Email(input.to_string())
    } else {
        UserReference::Id {
            raw: input.to_string(),
            id: parse_internal_id(input),
        }
    }
}

/// A classified department reference.
///
/// A department input is matched against code and name, and against the
/// internal ID only when it follows the ID convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentReference {
    /// The original input, used as code and as name.
    pub raw: String,
    /// The parsed identifier, if the input follows the ID convention.
    pub id: Option<i64>,
}

/// Classifies a normalized department input.
#[must_use]
pub fn classify_department_input(input: &str) -> DepartmentReference {
    DepartmentReference {
        raw: input.to_string(),
        id: parse_internal_id(input),
    }
}

/// A classified unit reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitReference {
    /// A raw ID or unit name.
    Direct {
        /// The original input, also used as the unit name.
        raw: String,
        /// The parsed identifier, if the input follows the ID convention.
        id: Option<i64>,
    },
    /// A `departmentCode:unitName` combo.
    Combo {
        /// The original input.
        raw: String,
        /// The department code segment.
        department_code: String,
        /// The unit name segment.
        unit_name: String,
    },
    /// A combo with an empty department code or unit name.
    Malformed(String),
}

impl UnitReference {
    /// Returns the original input string.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Direct { raw, .. } | Self::Combo { raw, .. } | Self::Malformed(raw) => raw,
        }
    }
}

/// Classifies a normalized unit input.
///
/// The input is split on the first separator; both segments are trimmed.
/// A combo missing either segment is `Malformed`.
#[must_use]
pub fn classify_unit_input(input: &str) -> UnitReference {
    match input.split_once(COMBO_SEPARATOR) {
        None => UnitReference::Direct {
            raw: input.to_string(),
            id: parse_internal_id(input),
        },
        Some((code, name)) => {
            let department_code: &str = code.trim();
            let unit_name: &str = name.trim();
            if department_code.is_empty() || unit_name.is_empty() {
                UnitReference::Malformed(input.to_string())
            } else {
                UnitReference::Combo {
                    raw: input.to_string(),
                    department_code: department_code.to_string(),
                    unit_name: unit_name.to_string(),
                }
            }
        }
    }
}
