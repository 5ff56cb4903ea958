// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! - `audit`: Audit event persistence
//! - `directory`: Users, departments and units, including seeding
//! - `events`: Event creation with relation rows

pub mod audit;
pub mod directory;
pub mod events;
