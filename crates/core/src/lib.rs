// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod departments;
mod error;
mod orchestrator;
mod ports;
mod resolve;
mod units;
mod users;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use departments::{DepartmentResolution, resolve_departments};
pub use error::CoreError;
pub use orchestrator::{ParticipantRequest, ResolvedParticipants, resolve_participants};
pub use ports::{DirectoryLookup, EventStore, LookupError, StoreError};
pub use resolve::{LookupFuture, Resolution, resolve_by_keys};
pub use units::resolve_units;
pub use users::resolve_users;
