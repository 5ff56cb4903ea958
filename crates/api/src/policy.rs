// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduling configuration and actor attribution.

use atrium_audit::{Actor, USER_ACTOR_TYPE};
use atrium_domain::{DomainError, Tz, parse_timezone};

/// The request header naming the acting user.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Scheduling rules applied to every event request.
///
/// The zone decides calendar days, `HH:mm` overlays, offset-less date-times
/// and display end times. Instants themselves are always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPolicy {
    zone: Tz,
}

impl EventPolicy {
    #[must_use]
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Builds a policy from an IANA zone name (e.g., `Europe/Berlin`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimezone` if the name is not a known zone.
    pub fn from_timezone_name(name: &str) -> Result<Self, DomainError> {
        parse_timezone(name).map(Self::new)
    }

    /// The scheduling zone.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }
}

impl Default for EventPolicy {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

/// Determines the actor for a request from the actor header.
///
/// A missing or blank header attributes the request to the system actor.
/// This is attribution only; the value is not authenticated.
#[must_use]
pub fn actor_from_header(value: Option<&str>) -> Actor {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(id) => Actor::new(id.to_string(), String::from(USER_ACTOR_TYPE)),
        None => Actor::system(),
    }
}
