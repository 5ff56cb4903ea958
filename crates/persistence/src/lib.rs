// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Atrium.
//!
//! This crate stores the directory (users, departments, units), events with
//! their participant relations, and audit events. It is built on Diesel
//! with the `SQLite` backend.
//!
//! ## Databases
//!
//! - **File**: WAL mode, used by the server when `--database` is given
//! - **In-memory**: a uniquely named shared-cache database per instance,
//!   used by tests and by the server when no path is given
//!
//! Migrations are embedded and run on every open. Foreign key enforcement
//! is switched on and verified before the adapter is handed out.
//!
//! ## Async access
//!
//! `Persistence` owns a synchronous connection. `SharedPersistence` wraps it
//! in an async mutex and implements the directory, event store and audit
//! sink ports, taking the lock once per query.

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
#![allow(clippy::multiple_crate_versions)]

use atrium_audit::AuditEvent;
use atrium_domain::{DepartmentRecord, Event, EventRange, NewEvent, UnitRecord, UserRecord};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod seed;
mod shared;

#[cfg(test)]
mod tests;

pub use data_models::SeedSummary;
pub use error::PersistenceError;
pub use seed::{DepartmentSeed, DirectorySeed, UserSeed};
pub use shared::SharedPersistence;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// instances never share data.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the directory, events and audit events.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:atrium_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Lists the application tables, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn table_names(&mut self) -> Result<Vec<String>, PersistenceError> {
        backend::sqlite::list_tables(&mut self.conn)
    }

    // ========================================================================
    // Directory
    // ========================================================================

    /// Creates a user. The email is stored lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is taken or the insert fails.
    pub fn create_user(&mut self, email: &str, name: &str) -> Result<UserRecord, PersistenceError> {
        mutations::directory::create_user(&mut self.conn, email, name)
    }

    /// Creates a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is taken or the insert fails.
    pub fn create_department(
        &mut self,
        code: &str,
        name: &str,
    ) -> Result<DepartmentRecord, PersistenceError> {
        mutations::directory::create_department(&mut self.conn, code, name)
    }

    /// Creates a unit inside a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the department does not exist, the name is taken
    /// within the department, or the insert fails.
    pub fn create_unit(
        &mut self,
        department_id: i64,
        name: &str,
    ) -> Result<UnitRecord, PersistenceError> {
        mutations::directory::create_unit(&mut self.conn, department_id, name)
    }

    /// Applies a directory seed. Existing rows are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed cannot be applied; nothing is written in
    /// that case.
    pub fn apply_seed(&mut self, seed: &DirectorySeed) -> Result<SeedSummary, PersistenceError> {
        mutations::directory::apply_seed(&mut self.conn, seed)
    }

    /// Finds users by email, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_users_by_emails(
        &mut self,
        emails: &[String],
    ) -> Result<Vec<UserRecord>, PersistenceError> {
        queries::directory::find_users_by_emails(&mut self.conn, emails)
    }

    /// Finds users by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_users_by_ids(&mut self, ids: &[i64]) -> Result<Vec<UserRecord>, PersistenceError> {
        queries::directory::find_users_by_ids(&mut self.conn, ids)
    }

    /// Finds departments by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_departments_by_codes(
        &mut self,
        codes: &[String],
    ) -> Result<Vec<DepartmentRecord>, PersistenceError> {
        queries::directory::find_departments_by_codes(&mut self.conn, codes)
    }

    /// Finds departments by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_departments_by_names(
        &mut self,
        names: &[String],
    ) -> Result<Vec<DepartmentRecord>, PersistenceError> {
        queries::directory::find_departments_by_names(&mut self.conn, names)
    }

    /// Finds departments by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_departments_by_ids(
        &mut self,
        ids: &[i64],
    ) -> Result<Vec<DepartmentRecord>, PersistenceError> {
        queries::directory::find_departments_by_ids(&mut self.conn, ids)
    }

    /// Finds units by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_units_by_ids(&mut self, ids: &[i64]) -> Result<Vec<UnitRecord>, PersistenceError> {
        queries::directory::find_units_by_ids(&mut self.conn, ids)
    }

    /// Finds units by name across all departments.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_units_by_names(
        &mut self,
        names: &[String],
    ) -> Result<Vec<UnitRecord>, PersistenceError> {
        queries::directory::find_units_by_names(&mut self.conn, names)
    }

    /// Finds units matching any `(department_id, name)` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_units_by_department_and_name(
        &mut self,
        pairs: &[(i64, String)],
    ) -> Result<Vec<UnitRecord>, PersistenceError> {
        queries::directory::find_units_by_department_and_name(&mut self.conn, pairs)
    }

    /// Lists all departments ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_departments(&mut self) -> Result<Vec<DepartmentRecord>, PersistenceError> {
        queries::directory::list_departments(&mut self.conn)
    }

    /// Lists the units of one department ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_units(&mut self, department_id: i64) -> Result<Vec<UnitRecord>, PersistenceError> {
        queries::directory::list_units(&mut self.conn, department_id)
    }

    /// Lists all users ordered by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(&mut self) -> Result<Vec<UserRecord>, PersistenceError> {
        queries::directory::list_users(&mut self.conn)
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Creates an event with its relations and returns it expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (nothing is written) or the new
    /// event cannot be read back.
    pub fn create_event(&mut self, event: &NewEvent) -> Result<Event, PersistenceError> {
        let event_id: i64 = mutations::events::create_event(&mut self.conn, event)?;
        queries::events::get_event(&mut self.conn, event_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Event {event_id}")))
    }

    /// Retrieves one event with its relations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if the event
    /// does not exist.
    pub fn get_event(&mut self, event_id: i64) -> Result<Option<Event>, PersistenceError> {
        queries::events::get_event(&mut self.conn, event_id)
    }

    /// Lists events overlapping a range, ordered by start.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_events(&mut self, range: &EventRange) -> Result<Vec<Event>, PersistenceError> {
        queries::events::list_events(&mut self.conn, range)
    }

    // ========================================================================
    // Audit
    // ========================================================================

    /// Persists an audit event.
    ///
    /// # Returns
    ///
    /// The ID assigned to the audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn persist_audit_event(&mut self, event: &AuditEvent) -> Result<i64, PersistenceError> {
        mutations::audit::persist_audit_event(&mut self.conn, event)
    }

    /// Lists the audit events recorded for one subject, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_events_for_subject(
        &mut self,
        subject_kind: &str,
        subject_id: &str,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit::list_audit_events_for_subject(&mut self.conn, subject_kind, subject_id)
    }

    /// Counts all recorded audit events.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_audit_events(&mut self) -> Result<i64, PersistenceError> {
        queries::audit::count_audit_events(&mut self.conn)
    }
}
