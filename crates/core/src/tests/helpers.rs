// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DirectoryLookup, LookupError};
use async_trait::async_trait;
use atrium_domain::{DepartmentRecord, UnitRecord, UserRecord};
use std::sync::Mutex;

/// An in-memory directory that records which lookups were issued.
pub struct FixtureDirectory {
    users: Vec<UserRecord>,
    departments: Vec<DepartmentRecord>,
    units: Vec<UnitRecord>,
    calls: Mutex<Vec<&'static str>>,
    fail_on: Option<&'static str>,
}

impl FixtureDirectory {
    /// Two users, three departments and four units; the unit name
    /// "Backend" exists in both ENG and OPS.
    pub fn standard() -> Self {
        Self {
            users: vec![
                UserRecord::new(1, "alice@co.com", "Alice"),
                UserRecord::new(2, "bob@co.com", "Bob"),
            ],
            departments: vec![
                DepartmentRecord::new(10, "ENG", "Engineering"),
                DepartmentRecord::new(11, "OPS", "Operations"),
                DepartmentRecord::new(12, "HR", "People"),
            ],
            units: vec![
                UnitRecord::new(100, 10, "Backend"),
                UnitRecord::new(101, 10, "Frontend"),
                UnitRecord::new(102, 11, "Backend"),
                UnitRecord::new(103, 11, "Night Shift"),
            ],
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    /// A standard directory whose `method` lookup always fails.
    pub fn failing_on(method: &'static str) -> Self {
        Self {
            fail_on: Some(method),
            ..Self::standard()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls().iter().filter(|call| **call == method).count()
    }

    fn enter(&self, method: &'static str) -> Result<(), LookupError> {
        self.calls.lock().unwrap().push(method);
        if self.fail_on == Some(method) {
            return Err(LookupError::Backend(format!("{method} unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryLookup for FixtureDirectory {
    async fn find_users_by_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<UserRecord>, LookupError> {
        self.enter("find_users_by_emails")?;
        Ok(self
            .users
            .iter()
            .filter(|user| emails.contains(&user.email))
            .cloned()
            .collect())
    }

    async fn find_users_by_ids(&self, ids: &[i64]) -> Result<Vec<UserRecord>, LookupError> {
        self.enter("find_users_by_ids")?;
        Ok(self
            .users
            .iter()
            .filter(|user| ids.contains(&user.user_id))
            .cloned()
            .collect())
    }

    async fn find_departments_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        self.enter("find_departments_by_codes")?;
        Ok(self
            .departments
            .iter()
            .filter(|department| codes.contains(&department.code))
            .cloned()
            .collect())
    }

    async fn find_departments_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        self.enter("find_departments_by_names")?;
        Ok(self
            .departments
            .iter()
            .filter(|department| names.contains(&department.name))
            .cloned()
            .collect())
    }

    async fn find_departments_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<DepartmentRecord>, LookupError> {
        self.enter("find_departments_by_ids")?;
        Ok(self
            .departments
            .iter()
            .filter(|department| ids.contains(&department.department_id))
            .cloned()
            .collect())
    }

    async fn find_units_by_ids(&self, ids: &[i64]) -> Result<Vec<UnitRecord>, LookupError> {
        self.enter("find_units_by_ids")?;
        Ok(self
            .units
            .iter()
            .filter(|unit| ids.contains(&unit.unit_id))
            .cloned()
            .collect())
    }

    async fn find_units_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<UnitRecord>, LookupError> {
        self.enter("find_units_by_names")?;
        Ok(self
            .units
            .iter()
            .filter(|unit| names.contains(&unit.name))
            .cloned()
            .collect())
    }

    async fn find_units_by_department_and_name(
        &self,
        pairs: &[(i64, String)],
    ) -> Result<Vec<UnitRecord>, LookupError> {
        self.enter("find_units_by_department_and_name")?;
        Ok(self
            .units
            .iter()
            .filter(|unit| {
                pairs
                    .iter()
                    .any(|(department_id, name)| unit.department_id == *department_id && unit.name == *name)
            })
            .cloned()
            .collect())
    }
}

pub fn inputs(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
