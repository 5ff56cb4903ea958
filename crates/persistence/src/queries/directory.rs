// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory queries.
//!
//! Every lookup is a single batch query over a key set. Results are ordered
//! by primary key so callers see a stable order.

use atrium_domain::{DepartmentRecord, UnitRecord, UserRecord, normalize_email};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::{departments, units, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub struct UserRow {
    user_id: i64,
    email: String,
    name: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            email: row.email,
            name: row.name,
        }
    }
}

/// Diesel Queryable struct for department rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = departments)]
pub struct DepartmentRow {
    department_id: i64,
    code: String,
    name: String,
}

impl From<DepartmentRow> for DepartmentRecord {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department_id: row.department_id,
            code: row.code,
            name: row.name,
        }
    }
}

/// Diesel Queryable struct for unit rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = units)]
pub struct UnitRow {
    unit_id: i64,
    department_id: i64,
    name: String,
}

impl From<UnitRow> for UnitRecord {
    fn from(row: UnitRow) -> Self {
        Self {
            unit_id: row.unit_id,
            department_id: row.department_id,
            name: row.name,
        }
    }
}

/// Finds users by email.
///
/// Emails are normalized before matching, so the lookup is
/// case-insensitive.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_users_by_emails(
    conn: &mut SqliteConnection,
    emails: &[String],
) -> Result<Vec<UserRecord>, PersistenceError> {
    let normalized: Vec<String> = emails.iter().map(|email| normalize_email(email)).collect();
    debug!(count = normalized.len(), "Looking up users by email");

    let rows: Vec<UserRow> = users::table
        .filter(users::email.eq_any(&normalized))
        .select(UserRow::as_select())
        .order(users::user_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(UserRecord::from).collect())
}

/// Finds users by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_users_by_ids(
    conn: &mut SqliteConnection,
    ids: &[i64],
) -> Result<Vec<UserRecord>, PersistenceError> {
    debug!(count = ids.len(), "Looking up users by ID");

    let rows: Vec<UserRow> = users::table
        .filter(users::user_id.eq_any(ids))
        .select(UserRow::as_select())
        .order(users::user_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(UserRecord::from).collect())
}

/// Finds departments by code.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_departments_by_codes(
    conn: &mut SqliteConnection,
    codes: &[String],
) -> Result<Vec<DepartmentRecord>, PersistenceError> {
    debug!(count = codes.len(), "Looking up departments by code");

    let rows: Vec<DepartmentRow> = departments::table
        .filter(departments::code.eq_any(codes))
        .select(DepartmentRow::as_select())
        .order(departments::department_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DepartmentRecord::from).collect())
}

/// Finds departments by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_departments_by_names(
    conn: &mut SqliteConnection,
    names: &[String],
) -> Result<Vec<DepartmentRecord>, PersistenceError> {
    debug!(count = names.len(), "Looking up departments by name");

    let rows: Vec<DepartmentRow> = departments::table
        .filter(departments::name.eq_any(names))
        .select(DepartmentRow::as_select())
        .order(departments::department_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DepartmentRecord::from).collect())
}

/// Finds departments by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_departments_by_ids(
    conn: &mut SqliteConnection,
    ids: &[i64],
) -> Result<Vec<DepartmentRecord>, PersistenceError> {
    debug!(count = ids.len(), "Looking up departments by ID");

    let rows: Vec<DepartmentRow> = departments::table
        .filter(departments::department_id.eq_any(ids))
        .select(DepartmentRow::as_select())
        .order(departments::department_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DepartmentRecord::from).collect())
}

/// Finds units by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_units_by_ids(
    conn: &mut SqliteConnection,
    ids: &[i64],
) -> Result<Vec<UnitRecord>, PersistenceError> {
    debug!(count = ids.len(), "Looking up units by ID");

    let rows: Vec<UnitRow> = units::table
        .filter(units::unit_id.eq_any(ids))
        .select(UnitRow::as_select())
        .order(units::unit_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(UnitRecord::from).collect())
}

/// Finds units by name, across all departments.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_units_by_names(
    conn: &mut SqliteConnection,
    names: &[String],
) -> Result<Vec<UnitRecord>, PersistenceError> {
    debug!(count = names.len(), "Looking up units by name");

    let rows: Vec<UnitRow> = units::table
        .filter(units::name.eq_any(names))
        .select(UnitRow::as_select())
        .order(units::unit_id.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(UnitRecord::from).collect())
}

/// Finds units matching any of the exact `(department_id, name)` pairs.
///
/// The pairs become one query whose filter is an OR of exact matches.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_units_by_department_and_name(
    conn: &mut SqliteConnection,
    pairs: &[(i64, String)],
) -> Result<Vec<UnitRecord>, PersistenceError> {
    if pairs.is_empty() {
        return Ok(Vec::new());
    }
    debug!(count = pairs.len(), "Looking up units by department and name");

    let mut query = units::table
        .select(UnitRow::as_select())
        .order(units::unit_id.asc())
        .into_boxed::<Sqlite>();
    for (department_id, name) in pairs {
        query = query.or_filter(
            units::department_id
                .eq(*department_id)
                .and(units::name.eq(name.clone())),
        );
    }

    let rows: Vec<UnitRow> = query.load(conn)?;
    Ok(rows.into_iter().map(UnitRecord::from).collect())
}

/// Lists every department, ordered by code.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_departments(
    conn: &mut SqliteConnection,
) -> Result<Vec<DepartmentRecord>, PersistenceError> {
    let rows: Vec<DepartmentRow> = departments::table
        .select(DepartmentRow::as_select())
        .order(departments::code.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DepartmentRecord::from).collect())
}

/// Lists the units of one department, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_units(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Vec<UnitRecord>, PersistenceError> {
    let rows: Vec<UnitRow> = units::table
        .filter(units::department_id.eq(department_id))
        .select(UnitRow::as_select())
        .order(units::name.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(UnitRecord::from).collect())
}

/// Lists every user, ordered by email.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<UserRecord>, PersistenceError> {
    let rows: Vec<UserRow> = users::table
        .select(UserRow::as_select())
        .order(users::email.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(UserRecord::from).collect())
}
