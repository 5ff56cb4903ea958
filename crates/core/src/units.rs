// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_domain::{
    DepartmentRecord, DepartmentRef, UnitRecord, UnitReference, classify_unit_input,
    normalize_inputs,
};
use std::collections::HashMap;
use tracing::debug;

use crate::ports::{DirectoryLookup, LookupError};
use crate::resolve::{LookupFuture, Resolution, ResolutionBuilder, distinct, resolve_by_keys};

/// Resolves unit inputs to unit IDs.
///
/// Inputs without a separator are matched by ID, then by name; a name shared
/// by units in several departments resolves to all of them. Inputs of the
/// form `code:unit` are matched by exact `(department, name)` pair.
///
/// Department codes are resolved through `known_departments` first; codes
/// missing from it are fetched with one extra batch lookup, which runs
/// concurrently with the direct lookups. The pair lookup runs last.
///
/// # Arguments
///
/// * `lookup` - The directory to search
/// * `inputs` - Raw unit inputs
/// * `known_departments` - Departments already resolved, keyed by code
///
/// # Errors
///
/// Returns an error if any lookup fails.
pub async fn resolve_units(
    lookup: &dyn DirectoryLookup,
    inputs: &[String],
    known_departments: &HashMap<String, DepartmentRef>,
) -> Result<Resolution, LookupError> {
    let references: Vec<UnitReference> = normalize_inputs(inputs)
        .iter()
        .map(|input| classify_unit_input(input))
        .collect();
    if references.is_empty() {
        return Ok(Resolution::default());
    }

    let names: Vec<String> = distinct(references.iter().filter_map(|reference| match reference {
        UnitReference::Direct { raw, .. } => Some(raw.clone()),
        _ => None,
    }));
    let ids: Vec<i64> = distinct(references.iter().filter_map(|reference| match reference {
        UnitReference::Direct { id, .. } => *id,
        _ => None,
    }));
    let unknown_codes: Vec<String> =
        distinct(references.iter().filter_map(|reference| match reference {
            UnitReference::Combo {
                department_code, ..
            } if !known_departments.contains_key(department_code) => Some(department_code.clone()),
            _ => None,
        }));

    debug!(
        names = names.len(),
        ids = ids.len(),
        unknown_codes = unknown_codes.len(),
        "Resolving units"
    );

    let mut direct_lookups: Vec<LookupFuture<'_, UnitRecord>> = Vec::new();
    if !ids.is_empty() {
        direct_lookups.push(lookup.find_units_by_ids(&ids));
    }
    if !names.is_empty() {
        direct_lookups.push(lookup.find_units_by_names(&names));
    }
    let fallback_departments = async {
        if unknown_codes.is_empty() {
            Ok(Vec::new())
        } else {
            lookup.find_departments_by_codes(&unknown_codes).await
        }
    };
    let (direct_units, fetched_departments): (Vec<UnitRecord>, Vec<DepartmentRecord>) = futures::try_join!(
        resolve_by_keys(direct_lookups, |unit| unit.unit_id),
        fallback_departments
    )?;

    let mut department_ids: HashMap<&str, i64> = known_departments
        .iter()
        .map(|(code, department)| (code.as_str(), department.department_id))
        .collect();
    for department in &fetched_departments {
        department_ids.insert(department.code.as_str(), department.department_id);
    }

    let pairs: Vec<(i64, String)> =
        distinct(references.iter().filter_map(|reference| match reference {
            UnitReference::Combo {
                department_code,
                unit_name,
                ..
            } => department_ids
                .get(department_code.as_str())
                .map(|department_id| (*department_id, unit_name.clone())),
            _ => None,
        }));
    let combo_units: Vec<UnitRecord> = if pairs.is_empty() {
        Vec::new()
    } else {
        lookup.find_units_by_department_and_name(&pairs).await?
    };

    let mut builder: ResolutionBuilder = ResolutionBuilder::default();
    for reference in &references {
        let matches: Vec<i64> = match reference {
            UnitReference::Direct { raw, id } => match_direct(&direct_units, raw, *id),
            UnitReference::Combo {
                department_code,
                unit_name,
                ..
            } => department_ids
                .get(department_code.as_str())
                .and_then(|department_id| {
                    combo_units.iter().find(|unit| {
                        unit.department_id == *department_id && unit.name == *unit_name
                    })
                })
                .map(|unit| vec![unit.unit_id])
                .unwrap_or_default(),
            UnitReference::Malformed(_) => Vec::new(),
        };
        builder.record(reference.raw(), matches);
    }

    Ok(builder.finish())
}

fn match_direct(units: &[UnitRecord], raw: &str, id: Option<i64>) -> Vec<i64> {
    if let Some(unit) = id.and_then(|id| units.iter().find(|unit| unit.unit_id == id)) {
        return vec![unit.unit_id];
    }
    units
        .iter()
        .filter(|unit| unit.name == raw)
        .map(|unit| unit.unit_id)
        .collect()
}
