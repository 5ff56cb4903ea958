// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::{debug, warn};

use crate::departments::{DepartmentResolution, resolve_departments};
use crate::error::CoreError;
use crate::ports::DirectoryLookup;
use crate::resolve::Resolution;
use crate::units::resolve_units;
use crate::users::resolve_users;

/// The raw participant inputs of an event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticipantRequest<'a> {
    /// Raw user inputs.
    pub users: &'a [String],
    /// Raw department inputs.
    pub departments: &'a [String],
    /// Raw unit inputs.
    pub units: &'a [String],
}

/// Fully resolved participants, ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParticipants {
    /// Resolved user IDs.
    pub user_ids: Vec<i64>,
    /// Resolved department IDs.
    pub department_ids: Vec<i64>,
    /// Resolved unit IDs.
    pub unit_ids: Vec<i64>,
}

/// Resolves every participant input of an event.
///
/// Users and departments are resolved concurrently; units are resolved
/// once departments are known.
///
/// # Arguments
///
/// * `lookup` - The directory to search
/// * `request` - The raw participant inputs
///
/// # Errors
///
/// Returns an error if:
/// - Any lookup fails
/// - Any input in any category matched no record
pub async fn resolve_participants(
    lookup: &dyn DirectoryLookup,
    request: &ParticipantRequest<'_>,
) -> Result<ResolvedParticipants, CoreError> {
    let (users, departments): (Resolution, DepartmentResolution) = futures::try_join!(
        resolve_users(lookup, request.users),
        resolve_departments(lookup, request.departments)
    )?;
    let units: Resolution = resolve_units(lookup, request.units, &departments.by_code).await?;

    let departments: Resolution = departments.resolution;
    if !(users.is_complete() && departments.is_complete() && units.is_complete()) {
        warn!(
            missing_users = ?users.missing_inputs,
            missing_departments = ?departments.missing_inputs,
            missing_units = ?units.missing_inputs,
            "Aborting write: unresolved references"
        );
        return Err(CoreError::UnresolvedReferences {
            missing_users: users.missing_inputs,
            missing_departments: departments.missing_inputs,
            missing_units: units.missing_inputs,
        });
    }

    debug!(
        users = users.resolved_ids.len(),
        departments = departments.resolved_ids.len(),
        units = units.resolved_ids.len(),
        "Resolved participants"
    );

    Ok(ResolvedParticipants {
        user_ids: users.resolved_ids,
        department_ids: departments.resolved_ids,
        unit_ids: units.resolved_ids,
    })
}
