// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_domain::{
    DepartmentRecord, DepartmentRef, DepartmentReference, classify_department_input,
    normalize_inputs,
};
use std::collections::HashMap;
use tracing::debug;

use crate::ports::{DirectoryLookup, LookupError};
use crate::resolve::{LookupFuture, Resolution, ResolutionBuilder, distinct, resolve_by_keys};

/// The outcome of department resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentResolution {
    /// Resolved department IDs and unresolved inputs.
    pub resolution: Resolution,
    /// Every department found, keyed by code.
    ///
    /// Unit resolution uses this to resolve `code:unit` combos without a
    /// second lookup.
    pub by_code: HashMap<String, DepartmentRef>,
}

/// Resolves department inputs to department IDs.
///
/// Each input is matched against department code, then name, then ID. The
/// code and name batches are always looked up; the ID batch only when at
/// least one input follows the internal-ID convention. All batches run
/// concurrently.
///
/// # Arguments
///
/// * `lookup` - The directory to search
/// * `inputs` - Raw department inputs
///
/// # Errors
///
/// Returns an error if any lookup fails.
pub async fn resolve_departments(
    lookup: &dyn DirectoryLookup,
    inputs: &[String],
) -> Result<DepartmentResolution, LookupError> {
    let references: Vec<DepartmentReference> = normalize_inputs(inputs)
        .iter()
        .map(|input| classify_department_input(input))
        .collect();
    if references.is_empty() {
        return Ok(DepartmentResolution::default());
    }

    let keys: Vec<String> = distinct(references.iter().map(|reference| reference.raw.clone()));
    let ids: Vec<i64> = distinct(references.iter().filter_map(|reference| reference.id));

    debug!(keys = keys.len(), ids = ids.len(), "Resolving departments");

    let mut lookups: Vec<LookupFuture<'_, DepartmentRecord>> = vec![
        lookup.find_departments_by_codes(&keys),
        lookup.find_departments_by_names(&keys),
    ];
    if !ids.is_empty() {
        lookups.push(lookup.find_departments_by_ids(&ids));
    }
    let departments: Vec<DepartmentRecord> =
        resolve_by_keys(lookups, |department| department.department_id).await?;

    let mut builder: ResolutionBuilder = ResolutionBuilder::default();
    for reference in &references {
        builder.record(&reference.raw, match_department(&departments, reference));
    }

    let by_code: HashMap<String, DepartmentRef> = departments
        .iter()
        .map(|department| (department.code.clone(), department.to_ref()))
        .collect();

    Ok(DepartmentResolution {
        resolution: builder.finish(),
        by_code,
    })
}

fn match_department(departments: &[DepartmentRecord], reference: &DepartmentReference) -> Option<i64> {
    departments
        .iter()
        .find(|department| department.code == reference.raw)
        .or_else(|| {
            departments
                .iter()
                .find(|department| department.name == reference.raw)
        })
        .or_else(|| {
            reference.id.and_then(|id| {
                departments
                    .iter()
                    .find(|department| department.department_id == id)
            })
        })
        .map(|department| department.department_id)
}
