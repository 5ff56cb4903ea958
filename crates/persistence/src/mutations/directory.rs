// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory mutations.

use atrium_domain::{DepartmentRecord, UnitRecord, UserRecord, normalize_email};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::SeedSummary;
use crate::diesel_schema::{departments, units, users};
use crate::error::PersistenceError;
use crate::seed::DirectorySeed;

/// Creates a user.
///
/// The email is normalized to lowercase before it is stored.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The user's email address
/// * `name` - The user's display name
///
/// # Errors
///
/// Returns `UniqueViolation` if a user with the same email exists, or an
/// error if the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    email: &str,
    name: &str,
) -> Result<UserRecord, PersistenceError> {
    let email: String = normalize_email(email);

    diesel::insert_into(users::table)
        .values((users::email.eq(&email), users::name.eq(name)))
        .execute(conn)?;
    let user_id: i64 = get_last_insert_rowid(conn)?;

    debug!(user_id, email = %email, "Created user");
    Ok(UserRecord::new(user_id, &email, name))
}

/// Creates a department.
///
/// # Errors
///
/// Returns `UniqueViolation` if the code is taken, or an error if the
/// insert fails.
pub fn create_department(
    conn: &mut SqliteConnection,
    code: &str,
    name: &str,
) -> Result<DepartmentRecord, PersistenceError> {
    diesel::insert_into(departments::table)
        .values((departments::code.eq(code), departments::name.eq(name)))
        .execute(conn)?;
    let department_id: i64 = get_last_insert_rowid(conn)?;

    debug!(department_id, code, "Created department");
    Ok(DepartmentRecord::new(department_id, code, name))
}

/// Creates a unit inside a department.
///
/// # Errors
///
/// Returns `ForeignKeyViolation` if the department does not exist,
/// `UniqueViolation` if the department already has a unit with this name,
/// or an error if the insert fails.
pub fn create_unit(
    conn: &mut SqliteConnection,
    department_id: i64,
    name: &str,
) -> Result<UnitRecord, PersistenceError> {
    diesel::insert_into(units::table)
        .values((units::department_id.eq(department_id), units::name.eq(name)))
        .execute(conn)?;
    let unit_id: i64 = get_last_insert_rowid(conn)?;

    debug!(unit_id, department_id, name, "Created unit");
    Ok(UnitRecord::new(unit_id, department_id, name))
}

/// Applies a directory seed inside a single transaction.
///
/// Rows that already exist (same department code, same unit name within a
/// department, same normalized email) are skipped, so applying the same seed
/// twice inserts nothing the second time.
///
/// # Errors
///
/// Returns `SeedFailed` if any statement fails; nothing is written in that
/// case.
pub fn apply_seed(
    conn: &mut SqliteConnection,
    seed: &DirectorySeed,
) -> Result<SeedSummary, PersistenceError> {
    let summary: SeedSummary = conn
        .transaction::<SeedSummary, diesel::result::Error, _>(|conn| {
            let mut summary: SeedSummary = SeedSummary::default();

            for department in &seed.departments {
                summary.departments += diesel::insert_or_ignore_into(departments::table)
                    .values((
                        departments::code.eq(&department.code),
                        departments::name.eq(&department.name),
                    ))
                    .execute(conn)?;

                let department_id: i64 = departments::table
                    .filter(departments::code.eq(&department.code))
                    .select(departments::department_id)
                    .first(conn)?;

                for unit in &department.units {
                    summary.units += diesel::insert_or_ignore_into(units::table)
                        .values((units::department_id.eq(department_id), units::name.eq(unit)))
                        .execute(conn)?;
                }
            }

            for user in &seed.users {
                summary.users += diesel::insert_or_ignore_into(users::table)
                    .values((
                        users::email.eq(normalize_email(&user.email)),
                        users::name.eq(&user.name),
                    ))
                    .execute(conn)?;
            }

            Ok(summary)
        })
        .map_err(|e| PersistenceError::SeedFailed(e.to_string()))?;

    info!(
        departments = summary.departments,
        units = summary.units,
        users = summary.users,
        "Applied directory seed"
    );
    Ok(summary)
}
